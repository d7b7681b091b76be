//! Collision rules
//!
//! Both rules work on a tentative position (pending position plus one
//! velocity step) and its bounding region, computed once on entry. A violated
//! boundary reflects the velocity on that axis and nudges the tentative
//! position by the reflected velocity once. This is a one-step correction,
//! not a clamp: a fast shape can stay partly outside for a step.

use super::geometry::{Region, Vec2};
use super::layer::{MovingLayer, Scene};
use super::state::{Fences, Player, Score};
use crate::audio::{Buzzer, Tone};

/// What happened to the ball during one advance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallEvents {
    pub paddle1: bool,
    pub paddle2: bool,
    /// Player awarded a point this step
    pub goal: Option<Player>,
    pub wall: bool,
}

/// Reflect velocity on `axis` and step the position back by the new velocity
#[inline]
fn reflect(velocity: &mut Vec2, pos: &mut Vec2, axis: usize) {
    velocity[axis] = -velocity[axis];
    pos[axis] += velocity[axis];
}

/// Keep every layer in `moving` inside `fence`
///
/// Each axis is checked on its own. Writes the corrected position into the
/// layer's `pos_next`; reflected velocities persist. Returns the number of
/// reflections.
pub fn confine<B: Buzzer + ?Sized>(
    moving: &mut [MovingLayer],
    scene: &mut Scene,
    fence: &Region,
    buzzer: &mut B,
) -> usize {
    let mut reflections = 0;
    for ml in moving.iter_mut() {
        let mut pos = ml.tentative(scene);
        let bounds = scene.get(ml.layer).shape.bounds_at(pos);
        for axis in 0..2 {
            if bounds.overflows_axis(fence, axis) {
                reflect(&mut ml.velocity, &mut pos, axis);
                buzzer.play(Tone::FenceBounce);
                reflections += 1;
                log::debug!("layer {:?} bounced on axis {}", ml.layer, axis);
            }
        }
        scene.get_mut(ml.layer).pos_next = pos;
    }
    reflections
}

/// Advance the ball against both paddles, the goal lines and the walls
///
/// Checks run in a fixed order against the same entry region, and more than
/// one may fire in a single step. At most one goal is awarded per call.
pub fn advance_ball<B: Buzzer + ?Sized>(
    ball: &mut MovingLayer,
    scene: &mut Scene,
    fences: &Fences,
    score: &mut Score,
    center: Vec2,
    buzzer: &mut B,
) -> BallEvents {
    let mut events = BallEvents::default();
    let mut pos = ball.tentative(scene);
    let bounds = scene.get(ball.layer).shape.bounds_at(pos);
    let Fences {
        paddle1,
        paddle2,
        field,
    } = fences;

    if bounds.top_left.x <= paddle1.bot_right.x
        && bounds.top_left.y > paddle1.top_left.y
        && bounds.top_left.y < paddle1.bot_right.y
    {
        reflect(&mut ball.velocity, &mut pos, 0);
        buzzer.play(Tone::Paddle1Hit);
        events.paddle1 = true;
    }

    if bounds.bot_right.x >= paddle2.top_left.x
        && bounds.bot_right.y > paddle2.top_left.y
        && bounds.bot_right.y < paddle2.bot_right.y
    {
        reflect(&mut ball.velocity, &mut pos, 0);
        buzzer.play(Tone::Paddle2Hit);
        events.paddle2 = true;
    }

    let scorer = if bounds.top_left.x < field.top_left.x {
        Some(Player::Two)
    } else if bounds.bot_right.x > field.bot_right.x {
        Some(Player::One)
    } else {
        None
    };
    if let Some(player) = scorer {
        pos = center;
        score.award(player);
        buzzer.play(Tone::Goal);
        events.goal = Some(player);
        log::info!(
            "Goal for player {} ({} - {})",
            player.number(),
            score.get(Player::One),
            score.get(Player::Two)
        );
    }

    if bounds.top_left.y <= field.top_left.y || bounds.bot_right.y >= field.bot_right.y {
        reflect(&mut ball.velocity, &mut pos, 1);
        buzzer.play(Tone::WallBounce);
        events.wall = true;
    }

    if events.paddle1 || events.paddle2 || events.wall {
        log::debug!("ball bounce {:?}, velocity now {}", events, ball.velocity);
    }

    scene.get_mut(ball.layer).pos_next = pos;
    events
}
