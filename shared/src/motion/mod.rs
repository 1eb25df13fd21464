mod easing;
mod particle;
mod reveal;
mod scroll;
mod spring;
mod tween;

pub use easing::*;
pub use particle::*;
pub use reveal::*;
pub use scroll::*;
pub use spring::*;
pub use tween::*;
