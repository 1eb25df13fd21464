mod app;
mod background;
mod nav;
mod particle;
mod pointer;
mod section;
pub mod theme;
mod ui;

pub use app::*;
pub use background::*;
pub use nav::*;
pub use particle::*;
pub use pointer::*;
pub use theme::*;
pub use ui::*;
