pub mod cost;
pub mod timeline;
