//! Career Quest game library crate.

pub mod app;
pub mod asset;
pub mod autopilot;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod field;
pub mod formatter;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
