mod about;
mod blog;
mod contact;
mod footer;
mod hero;
mod projects;
mod section;
mod skills;

pub use about::*;
pub use blog::*;
pub use contact::*;
pub use footer::*;
pub use hero::*;
pub use projects::*;
pub use section::*;
pub use skills::*;
