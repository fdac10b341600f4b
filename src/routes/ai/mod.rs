mod chat;
mod ideas;
mod image;
mod roadmap;

pub use chat::*;
pub use ideas::*;
pub use image::*;
pub use roadmap::*;
