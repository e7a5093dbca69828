pub mod config;
pub mod display;
pub mod input;
pub mod render;
pub mod surface;
pub mod types;
pub mod ui;
