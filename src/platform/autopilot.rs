//! Demo autopilot
//!
//! Presses the direction buttons for both players so the host build plays
//! itself. Each paddle chases the ball while it is heading its way and drifts
//! back to the middle otherwise. A seeded RNG makes it hesitate now and then
//! so rallies eventually end in a goal.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ButtonSet;
use crate::sim::{GameState, Player};

/// Chance a paddle ignores the ball for one tick
const HESITATION: f64 = 0.35;
/// No button pressed when within this many pixels of the target
const DEAD_ZONE: i32 = 4;

/// Seeded demo input
#[derive(Debug, Clone)]
pub struct AutoPilot {
    rng: Pcg32,
    hesitation: f64,
}

impl AutoPilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            hesitation: HESITATION,
        }
    }

    /// Never hesitate
    pub fn perfect(mut self) -> Self {
        self.hesitation = 0.0;
        self
    }

    /// Buttons to hold for the next tick
    pub fn decide(&mut self, state: &GameState) -> ButtonSet {
        let ball = state.ball_pos();
        let mut buttons = ButtonSet::NONE;

        for player in [Player::One, Player::Two] {
            if self.hesitation > 0.0 && self.rng.random_bool(self.hesitation) {
                continue;
            }
            let incoming = match player {
                Player::One => state.ball.velocity.x < 0,
                Player::Two => state.ball.velocity.x > 0,
            };
            let target = if incoming { ball.y } else { state.center.y };
            let y = state.paddle_pos(player).y;
            let (up, down) = match player {
                Player::One => (ButtonSet::P1_UP, ButtonSet::P1_DOWN),
                Player::Two => (ButtonSet::P2_UP, ButtonSet::P2_DOWN),
            };
            if target < y - DEAD_ZONE {
                buttons = buttons.with(up);
            } else if target > y + DEAD_ZONE {
                buttons = buttons.with(down);
            }
        }

        buttons
    }
}
