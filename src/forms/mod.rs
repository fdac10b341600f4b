pub mod ai;
mod application;
mod event;

pub use ai::*;
pub use application::*;
pub use event::*;
