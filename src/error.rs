//! Centralized error types for the game.
//!
//! Only a handful of things can actually fail: building a session on a play field that is too small,
//! reading sprite files, and loading configuration. Everything else in the simulation is infallible.

use std::path::PathBuf;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors describing a play field that cannot host a session.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Play field {width}x{height} is too small, must be larger than {min_width}x{min_height}")]
    FieldTooSmall {
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
    },

    #[error("Play field dimensions must be finite, got {width}x{height}")]
    NonFinite { width: f32, height: f32 },
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Asset not found: {0}")]
    NotFound(String),
}

impl From<figment::Error> for GameError {
    fn from(error: figment::Error) -> Self {
        GameError::Config(error.to_string())
    }
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
