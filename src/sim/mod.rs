//! Game simulation module
//!
//! Scene model, collision rules, scoring and the tick scheduler. Nothing here
//! talks to hardware directly; drivers come in through `platform` traits.

pub mod collision;
pub mod geometry;
pub mod layer;
pub mod shape;
pub mod state;
pub mod tick;

pub use collision::{BallEvents, advance_ball, confine};
pub use geometry::{Region, Vec2};
pub use layer::{Layer, LayerId, MovingLayer, Scene};
pub use shape::Shape;
pub use state::{Fences, GameState, Player, Score};
pub use tick::{TickReport, idle_pass, tick};
