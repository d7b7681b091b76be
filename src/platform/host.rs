//! Host board and main loop
//!
//! `HostBoard` wires the driver traits to the framebuffer, the autopilot (or a
//! fixed button state) and a tone register. `run` is the firmware's `main`:
//! paint the scene once, then alternate between sleeping until a tick and
//! redrawing the HUD.

use super::clock::TickSource;
use super::{AutoPilot, ButtonSet, Buttons, Color, Display, Framebuffer, Power};
use crate::audio::Buzzer;
use crate::renderer;
use crate::sim::geometry::Region;
use crate::sim::{GameState, idle_pass, tick};

/// Where button state comes from
#[derive(Debug, Clone)]
pub enum Input {
    /// Buttons held constant (none, for an unattended board)
    Fixed(ButtonSet),
    /// Demo autopilot
    Auto(AutoPilot),
}

/// Host stand-in for the real board
#[derive(Debug, Clone)]
pub struct HostBoard {
    pub display: Framebuffer,
    pub input: Input,
    /// Buttons chosen for the next tick
    pending_buttons: ButtonSet,
    /// CPU-active indicator
    pub indicator: bool,
    /// Times the board went to sleep
    pub sleeps: u64,
    /// Last period written to the buzzer
    pub tone_period: u16,
    pub tones_played: u64,
}

impl HostBoard {
    pub fn new(display: Framebuffer, input: Input) -> Self {
        Self {
            display,
            input,
            pending_buttons: ButtonSet::NONE,
            indicator: true,
            sleeps: 0,
            tone_period: 0,
            tones_played: 0,
        }
    }

    /// Sample the input source against the current state
    pub fn poll_input(&mut self, state: &GameState) {
        self.pending_buttons = match &mut self.input {
            Input::Fixed(buttons) => *buttons,
            Input::Auto(pilot) => pilot.decide(state),
        };
    }
}

impl Display for HostBoard {
    fn set_window(&mut self, region: Region) {
        self.display.set_window(region);
    }

    fn write_pixel(&mut self, color: Color) {
        self.display.write_pixel(color);
    }

    fn draw_glyph(&mut self, x: i32, y: i32, glyph: char, fg: Color, bg: Color) {
        self.display.draw_glyph(x, y, glyph, fg, bg);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color) {
        self.display.draw_text(x, y, text, fg, bg);
    }
}

impl Buttons for HostBoard {
    fn read_buttons(&mut self) -> ButtonSet {
        self.pending_buttons
    }
}

impl Buzzer for HostBoard {
    fn set_tone_period(&mut self, period: u16) {
        self.tone_period = period;
        self.tones_played += 1;
    }
}

impl Power for HostBoard {
    fn set_indicator(&mut self, on: bool) {
        self.indicator = on;
    }

    fn enter_low_power(&mut self) {
        self.sleeps += 1;
    }
}

/// Statistics from a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub idle_passes: u64,
}

/// Run the game until `ticks` is exhausted
pub fn run(state: &mut GameState, board: &mut HostBoard, ticks: &TickSource) -> RunSummary {
    let mut summary = RunSummary::default();
    renderer::draw_scene(&state.scene, state.screen, board, state.background);

    loop {
        while !state.redraw_pending {
            board.set_indicator(false);
            board.enter_low_power();
            if ticks.wait().is_err() {
                log::info!(
                    "Tick source exhausted after {} ticks ({} idle passes)",
                    summary.ticks,
                    summary.idle_passes
                );
                return summary;
            }
            board.poll_input(state);
            tick(state, board);
            summary.ticks += 1;
        }
        idle_pass(state, board);
        summary.idle_passes += 1;
    }
}
