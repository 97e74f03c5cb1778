#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod sample;
pub mod widgets;

pub use app::ZeTableApp;
pub use config::DemoConfig;
