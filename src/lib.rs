pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod store;
// cmd and reports belong to the binary (main.rs).

pub use crate::error::{FfResult, FrameForgeError};
