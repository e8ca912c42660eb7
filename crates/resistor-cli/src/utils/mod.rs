pub mod color;
pub mod format;
