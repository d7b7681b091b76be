//! Periodic tick handler and main-loop pass
//!
//! `tick` is the body of the periodic timer handler. It runs to completion
//! before the next tick is accepted, and it is the only code that moves
//! layers, so committing pending positions needs no lock. `idle_pass` is one
//! iteration of the main loop and only ever reads physics state.

use std::slice;

use super::collision::{BallEvents, advance_ball, confine};
use super::state::{GameState, Player};
use crate::consts::{GLYPH_ADVANCE, WINNER_TEXT_POS};
use crate::platform::{Board, ButtonSet, Color};
use crate::renderer;

/// Button bit, paddle, and direction of travel (-1 up, +1 down)
const PADDLE_CONTROLS: [(u8, Player, i32); 4] = [
    (ButtonSet::P1_UP, Player::One, -1),
    (ButtonSet::P1_DOWN, Player::One, 1),
    (ButtonSet::P2_DOWN, Player::Two, 1),
    (ButtonSet::P2_UP, Player::Two, -1),
];

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// A physics step ran on this tick
    pub stepped: bool,
    pub ball: BallEvents,
    /// Paddle moves performed (one per pressed button)
    pub paddle_moves: u8,
}

/// Advance the game by one hardware tick
pub fn tick<B: Board + ?Sized>(state: &mut GameState, board: &mut B) -> TickReport {
    let mut report = TickReport::default();

    board.set_indicator(true);
    state.tick_count += 1;
    let buttons = board.read_buttons();

    if state.tick_count >= state.physics_divider {
        state.tick_count = 0;
        report.stepped = true;
        state.refresh_fences();

        report.ball = advance_ball(
            &mut state.ball,
            &mut state.scene,
            &state.fences,
            &mut state.score,
            state.center,
            board,
        );
        // the HUD must show the new score even with no button held
        if report.ball.goal.is_some() {
            state.redraw_pending = true;
        }
        renderer::advance(
            slice::from_ref(&state.ball),
            &mut state.scene,
            board,
            state.background,
        );

        for (bit, player, direction) in PADDLE_CONTROLS {
            if !buttons.pressed(bit) {
                continue;
            }
            let paddle = &mut state.paddles[player.index()];
            paddle.velocity.y = direction * state.paddle_speed;
            confine(
                slice::from_mut(paddle),
                &mut state.scene,
                &state.fences.field,
                board,
            );
            renderer::advance(
                slice::from_ref(paddle),
                &mut state.scene,
                board,
                state.background,
            );
            state.redraw_pending = true;
            report.paddle_moves += 1;
        }

        log::trace!(
            "step: ball {} vel {} buttons {:04b}",
            state.ball_pos(),
            state.ball.velocity,
            buttons.0
        );
    }

    // keep the main loop awake while a button is held
    if buttons.any() {
        state.redraw_pending = true;
    }

    report
}

/// One pass of the main loop after waking with a repaint pending
pub fn idle_pass<B: Board + ?Sized>(state: &mut GameState, board: &mut B) {
    board.set_indicator(true);
    state.redraw_pending = false;

    for player in [Player::One, Player::Two] {
        let (x, y) = state.score_position(player);
        for (col, digit) in (0..).zip(state.score.label(player).chars()) {
            board.draw_glyph(x + col * GLYPH_ADVANCE, y, digit, Color::VIOLET, Color::WHITE);
        }
    }

    if let Some(winner) = state.score.winner() {
        let (x, y) = WINNER_TEXT_POS;
        let message = format!("winner player {}", winner.number());
        board.draw_text(x, y, &message, Color::VIOLET, Color::WHITE);
        if !state.winner_logged {
            log::info!("Player {} wins", winner.number());
            state.winner_logged = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{Buzzer, Tone, ToneLog};
    use crate::platform::{Buttons, Display, Framebuffer, Power};
    use crate::settings::Settings;
    use crate::sim::geometry::{Region, Vec2};

    /// Board with scripted buttons that records everything
    struct TestBoard {
        fb: Framebuffer,
        tones: ToneLog,
        buttons: ButtonSet,
        indicator: bool,
    }

    impl TestBoard {
        fn new() -> Self {
            Self {
                fb: Framebuffer::new(270, 240),
                tones: ToneLog::new(),
                buttons: ButtonSet::NONE,
                indicator: false,
            }
        }
    }

    impl Display for TestBoard {
        fn set_window(&mut self, region: Region) {
            self.fb.set_window(region);
        }
        fn write_pixel(&mut self, color: Color) {
            self.fb.write_pixel(color);
        }
        fn draw_glyph(&mut self, x: i32, y: i32, glyph: char, fg: Color, bg: Color) {
            self.fb.draw_glyph(x, y, glyph, fg, bg);
        }
        fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color) {
            self.fb.draw_text(x, y, text, fg, bg);
        }
    }

    impl Buttons for TestBoard {
        fn read_buttons(&mut self) -> ButtonSet {
            self.buttons
        }
    }

    impl Buzzer for TestBoard {
        fn set_tone_period(&mut self, period: u16) {
            self.tones.set_tone_period(period);
        }
    }

    impl Power for TestBoard {
        fn set_indicator(&mut self, on: bool) {
            self.indicator = on;
        }
        fn enter_low_power(&mut self) {}
    }

    fn run_ticks(state: &mut GameState, board: &mut TestBoard, n: u32) -> Vec<TickReport> {
        (0..n).map(|_| tick(state, board)).collect()
    }

    #[test]
    fn test_physics_runs_every_tenth_tick() {
        let mut state = GameState::new(&Settings::default());
        let mut board = TestBoard::new();

        let reports = run_ticks(&mut state, &mut board, 9);
        assert!(reports.iter().all(|r| !r.stepped));
        assert_eq!(state.tick_count, 9);
        assert_eq!(state.ball_pos(), Vec2::new(135, 120));
        assert!(board.indicator);

        let report = tick(&mut state, &mut board);
        assert!(report.stepped);
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.ball_pos(), Vec2::new(137, 124));
        // ball box repainted with the ball color at its center
        assert_eq!(board.fb.pixel(Vec2::new(137, 124)), Some(Color::ORANGE));
    }

    #[test]
    fn test_ball_commit_keeps_last_position() {
        let mut state = GameState::new(&Settings::default());
        let mut board = TestBoard::new();
        run_ticks(&mut state, &mut board, 20);
        let ball = state.scene.get(state.ball.layer);
        assert_eq!(ball.pos_last, Vec2::new(137, 124));
        assert_eq!(ball.pos, Vec2::new(139, 128));
        assert!(ball.is_settled());
    }

    #[test]
    fn test_held_up_button_moves_paddle() {
        let mut state = GameState::new(&Settings::default());
        let left = state.paddle(Player::One).layer;
        state.place(left, Vec2::new(10, 74));
        let mut board = TestBoard::new();
        board.buttons = ButtonSet::NONE.with(ButtonSet::P1_UP);

        let reports = run_ticks(&mut state, &mut board, 10);

        assert_eq!(reports[9].paddle_moves, 1);
        assert_eq!(state.paddle_pos(Player::One), Vec2::new(10, 67));
        assert_eq!(state.paddle(Player::One).velocity, Vec2::new(0, -7));
        assert!(!board.tones.played(Tone::FenceBounce));
        assert_eq!(board.fb.pixel(Vec2::new(10, 67)), Some(Color::RED));
    }

    #[test]
    fn test_each_button_drives_its_paddle() {
        let mut state = GameState::new(&Settings::default());
        let mut board = TestBoard::new();
        board.buttons = ButtonSet::NONE
            .with(ButtonSet::P1_DOWN)
            .with(ButtonSet::P2_UP);

        run_ticks(&mut state, &mut board, 10);

        assert_eq!(state.paddle_pos(Player::One), Vec2::new(10, 127));
        assert_eq!(state.paddle_pos(Player::Two), Vec2::new(260, 113));
        assert_eq!(state.paddle(Player::Two).velocity, Vec2::new(0, -7));
    }

    #[test]
    fn test_paddle_bounces_off_field() {
        let mut state = GameState::new(&Settings::default());
        let right = state.paddle(Player::Two).layer;
        // bottom edge at 228, one step down would cross 229
        state.place(right, Vec2::new(260, 214));
        let mut board = TestBoard::new();
        board.buttons = ButtonSet::NONE.with(ButtonSet::P2_DOWN);

        run_ticks(&mut state, &mut board, 10);

        assert_eq!(state.paddle(Player::Two).velocity, Vec2::new(0, -7));
        assert_eq!(state.paddle_pos(Player::Two), Vec2::new(260, 214));
        assert!(board.tones.played(Tone::FenceBounce));
    }

    #[test]
    fn test_buttons_keep_redraw_pending_between_steps() {
        let mut state = GameState::new(&Settings::default());
        let mut board = TestBoard::new();
        state.redraw_pending = false;

        tick(&mut state, &mut board);
        assert!(!state.redraw_pending);

        board.buttons = ButtonSet::NONE.with(ButtonSet::P2_UP);
        let report = tick(&mut state, &mut board);
        assert!(!report.stepped);
        assert!(state.redraw_pending);
    }

    #[test]
    fn test_idle_pass_draws_scores() {
        let mut state = GameState::new(&Settings::default());
        let mut board = TestBoard::new();
        state.score.award(Player::Two);

        idle_pass(&mut state, &mut board);

        assert!(!state.redraw_pending);
        assert!(board.indicator);
        let (x1, y1) = state.score_position(Player::One);
        let (x2, y2) = state.score_position(Player::Two);
        assert_eq!(board.fb.text_at(x1, y1), Some("0"));
        assert_eq!(board.fb.text_at(x2, y2), Some("1"));
        assert!(!board.fb.has_text("winner"));
    }

    #[test]
    fn test_two_digit_score_draws_one_glyph_per_digit() {
        let mut state = GameState::new(&Settings::default());
        let mut board = TestBoard::new();
        for _ in 0..10 {
            state.score.award(Player::Two);
        }

        idle_pass(&mut state, &mut board);

        let (x, y) = state.score_position(Player::Two);
        assert_eq!(board.fb.text_at(x, y), Some("1"));
        assert_eq!(board.fb.text_at(x + GLYPH_ADVANCE, y), Some("0"));
    }

    #[test]
    fn test_winner_stays_first_to_reach_win_score() {
        let settings = Settings {
            win_score: 3,
            ..Settings::default()
        };
        let mut state = GameState::new(&settings);
        let mut board = TestBoard::new();
        for _ in 0..3 {
            state.score.award(Player::Two);
        }
        idle_pass(&mut state, &mut board);
        assert_eq!(board.fb.text_at(30, 2), Some("winner player 2"));

        for _ in 0..3 {
            state.score.award(Player::One);
        }
        idle_pass(&mut state, &mut board);
        assert_eq!(board.fb.text_at(30, 2), Some("winner player 2"));
        assert!(!board.fb.has_text("winner player 1"));
    }

    #[test]
    fn test_goal_scores_and_recenters() {
        let mut state = GameState::new(&Settings::default());
        let ball = state.ball.layer;
        // left edge of the next step lands at x = 4, past the field at 5
        state.place(ball, Vec2::new(10, 50));
        state.ball.velocity = Vec2::new(-2, 4);
        state.redraw_pending = false;
        let mut board = TestBoard::new();

        let reports = run_ticks(&mut state, &mut board, 10);

        assert!(state.redraw_pending);
        assert_eq!(reports[9].ball.goal, Some(Player::Two));
        assert_eq!(state.score.get(Player::Two), 1);
        assert_eq!(state.score.get(Player::One), 0);
        assert_eq!(state.ball_pos(), Vec2::new(135, 120));
        assert_eq!(state.ball.velocity, Vec2::new(-2, 4));
        assert!(board.tones.played(Tone::Goal));
    }

    #[test]
    fn test_winner_is_display_only() {
        let mut state = GameState::new(&Settings::default());
        let mut board = TestBoard::new();
        for _ in 0..10 {
            state.score.award(Player::One);
        }

        idle_pass(&mut state, &mut board);
        assert!(board.fb.has_text("winner player 1"));
        assert_eq!(board.fb.text_at(30, 2), Some("winner player 1"));

        // ticks keep running after the game is decided
        let before = state.ball_pos();
        run_ticks(&mut state, &mut board, 10);
        assert_ne!(state.ball_pos(), before);

        // scoring past the win score saturates
        assert!(!state.score.award(Player::One));
        assert_eq!(state.score.get(Player::One), 10);
    }
}
