pub mod actions;
pub mod archive;
pub mod describe;
pub mod format;
pub mod log;
pub mod render;
pub mod session;
