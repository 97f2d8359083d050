// Application layer: command dispatch and presentation.

#[cfg(feature = "cli")]
pub mod commands;
pub mod render;
