//! Draws the lightning-bolt icon set and writes it out as PNG files.

pub mod batch;
pub mod models;
pub mod render;
pub mod utils;
