mod application;
mod chat;
mod event;
mod idea;
mod image;
mod roadmap;

pub use application::*;
pub use chat::*;
pub use event::*;
pub use idea::*;
pub use image::*;
pub use roadmap::*;
