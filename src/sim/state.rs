//! Game state and scoring
//!
//! Everything the tick handler and the main loop share lives in `GameState`.
//! It is built once at startup and only mutated through `sim::tick`,
//! `sim::collision` and the renderer.

use serde::{Deserialize, Serialize};

use super::geometry::{Region, Vec2};
use super::layer::{Layer, LayerId, MovingLayer, Scene};
use super::shape::Shape;
use crate::consts::*;
use crate::platform::Color;
use crate::settings::Settings;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Left paddle
    One,
    /// Right paddle
    Two,
}

impl Player {
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Per-player points, saturating at the win score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    points: [u8; 2],
    win_score: u8,
    /// Player who reached the win score first; never changes once set
    winner: Option<Player>,
}

impl Score {
    pub fn new(win_score: u8) -> Self {
        Self {
            points: [0; 2],
            win_score: win_score.max(1),
            winner: None,
        }
    }

    pub fn get(&self, player: Player) -> u8 {
        self.points[player.index()]
    }

    /// Add one point; returns false once the counter is already at the win score
    pub fn award(&mut self, player: Player) -> bool {
        let points = &mut self.points[player.index()];
        if *points >= self.win_score {
            return false;
        }
        *points += 1;
        if *points == self.win_score && self.winner.is_none() {
            self.winner = Some(player);
        }
        true
    }

    /// First player to reach the win score
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Text shown on the HUD for `player`
    pub fn label(&self, player: Player) -> String {
        self.get(player).to_string()
    }
}

/// Containment regions refreshed at the start of every physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fences {
    pub paddle1: Region,
    pub paddle2: Region,
    pub field: Region,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// All layers, front to back
    pub scene: Scene,
    /// Ball physics handle
    pub ball: MovingLayer,
    /// Paddle physics handles, left then right
    pub paddles: [MovingLayer; 2],
    /// Playing-field outline layer
    pub field: LayerId,
    /// Cached containment regions
    pub fences: Fences,
    pub score: Score,
    /// A repaint is pending; the main loop must not sleep
    pub redraw_pending: bool,
    /// Ticks since the last physics step
    pub tick_count: u32,
    /// Ticks per physics step
    pub physics_divider: u32,
    /// Vertical paddle speed while a button is held
    pub paddle_speed: i32,
    /// Where the ball respawns after a goal
    pub center: Vec2,
    /// Whole display
    pub screen: Region,
    pub background: Color,
    /// Winner already announced in the log
    #[serde(skip)]
    pub winner_logged: bool,
}

impl GameState {
    /// Build the default scene: ball, left paddle, right paddle, field
    pub fn new(settings: &Settings) -> Self {
        let (w, h) = (settings.screen_width, settings.screen_height);
        let center = Vec2::new(w / 2, h / 2);
        let paddle = Shape::rect(PADDLE_HALF_WIDTH, PADDLE_HALF_HEIGHT);
        let field_shape = Shape::outline(w / 2 - FIELD_INSET_X, h / 2 - FIELD_INSET_Y);

        let mut scene = Scene::new();
        let ball = scene.push(Layer::new(Shape::circle(BALL_RADIUS), center, Color::ORANGE));
        let left = scene.push(Layer::new(paddle, Vec2::new(PADDLE_INSET, center.y), Color::RED));
        let right = scene.push(Layer::new(
            paddle,
            Vec2::new(w - PADDLE_INSET, center.y),
            Color::VIOLET,
        ));
        let field = scene.push(Layer::new(field_shape, center, Color::WHITE));

        let [vx, vy] = settings.ball_velocity;
        let mut state = Self {
            scene,
            ball: MovingLayer::new(ball, Vec2::new(vx, vy)),
            paddles: [
                MovingLayer::new(left, Vec2::ZERO),
                MovingLayer::new(right, Vec2::ZERO),
            ],
            field,
            fences: Fences::default(),
            score: Score::new(settings.win_score),
            redraw_pending: true,
            tick_count: 0,
            physics_divider: settings.physics_divider.max(1),
            paddle_speed: settings.paddle_speed,
            center,
            screen: Region::new(Vec2::ZERO, Vec2::new(w - 1, h - 1)),
            background: Color::GREEN,
            winner_logged: false,
        };
        state.refresh_fences();
        state
    }

    /// Recompute fences from the current layer positions
    pub fn refresh_fences(&mut self) {
        self.fences = Fences {
            paddle1: self.scene.get(self.paddles[0].layer).bounds(),
            paddle2: self.scene.get(self.paddles[1].layer).bounds(),
            field: self.scene.get(self.field).bounds(),
        };
    }

    /// Handle of a player's paddle
    pub fn paddle(&self, player: Player) -> &MovingLayer {
        &self.paddles[player.index()]
    }

    /// Current ball position
    pub fn ball_pos(&self) -> Vec2 {
        self.scene.get(self.ball.layer).pos
    }

    /// Current paddle position
    pub fn paddle_pos(&self, player: Player) -> Vec2 {
        self.scene.get(self.paddle(player).layer).pos
    }

    /// Place a layer at `pos` with no move pending
    pub fn place(&mut self, id: LayerId, pos: Vec2) {
        let layer = self.scene.get_mut(id);
        layer.pos = pos;
        layer.pos_last = pos;
        layer.pos_next = pos;
    }

    /// Top-left of a player's score on the HUD
    pub fn score_position(&self, player: Player) -> (i32, i32) {
        let w = self.screen.width();
        let y = self.screen.bot_right.y + 1 - SCORE_ROW_FROM_BOTTOM;
        match player {
            Player::One => (w / 4, y),
            Player::Two => (3 * w / 4, y),
        }
    }
}
