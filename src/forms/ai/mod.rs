mod chat;
mod idea;
mod image;
mod roadmap;

pub use chat::{ChatMessage, ChatRequest, ChatRole, MAX_CONTENT_CHARS};
pub use idea::IdeaRequest;
pub use image::ImageRequest;
pub use roadmap::RoadmapRequest;
