pub mod config;
pub mod gui;
