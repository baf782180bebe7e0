pub mod config;
pub mod consts;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod io;
pub mod render;
pub mod session;
pub mod storage;
