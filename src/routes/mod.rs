pub(crate) mod ai;
pub(crate) mod application;
pub(crate) mod event;
pub mod health_checks;

pub use health_checks::*;
