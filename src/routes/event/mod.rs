pub mod add;
pub mod banner;
pub mod get;
