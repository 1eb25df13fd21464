mod content;
mod layout;
mod motion;
mod net;
mod point;

pub use content::*;
pub use layout::*;
pub use motion::*;
pub use net::*;
pub use point::*;
