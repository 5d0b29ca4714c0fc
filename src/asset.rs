//! Sprite lookup for entity sizing.
//!
//! The simulation never draws anything, but entity dimensions are derived from sprite dimensions when a
//! real image exists. Lookups never fail: anything that cannot be loaded becomes a fixed-size placeholder.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glam::Vec2;
use strum::IntoEnumIterator;
use tracing::{debug, trace, warn};

use crate::constants::PLACEHOLDER_SPRITE_SIZE;
use crate::entity::EntityKind;
use crate::error::AssetError;

/// Dimensions of a sprite, or of the placeholder standing in for one.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub placeholder: bool,
    /// Where the image was found, if it was.
    pub source: Option<PathBuf>,
}

impl Sprite {
    pub fn placeholder() -> Self {
        Self {
            width: PLACEHOLDER_SPRITE_SIZE.x as u32,
            height: PLACEHOLDER_SPRITE_SIZE.y as u32,
            placeholder: true,
            source: None,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Entity size for this sprite.
    ///
    /// Placeholders use `default`. Real sprites keep their native size unless either edge exceeds
    /// `max_edge`, in which case they are scaled down uniformly to fit.
    pub fn fit(&self, default: Vec2, max_edge: f32) -> Vec2 {
        if self.placeholder || self.width == 0 || self.height == 0 {
            return default;
        }

        let size = self.size();
        if size.x > max_edge || size.y > max_edge {
            let scale = (max_edge / size.x).min(max_edge / size.y);
            size * scale
        } else {
            size
        }
    }
}

/// Anything that can resolve a sprite by name.
pub trait SpriteProvider {
    /// Looks up a sprite. Unknown or unloadable names yield [`Sprite::placeholder`].
    fn sprite(&self, name: &str) -> Sprite;
}

/// A provider with no images at all. Every entity uses its default size.
#[derive(Debug, Default, Clone, Copy)]
pub struct Placeholders;

impl SpriteProvider for Placeholders {
    fn sprite(&self, _name: &str) -> Sprite {
        Sprite::placeholder()
    }
}

/// Sprites resolved from image files on disk.
#[derive(Debug, Default, Clone)]
pub struct SpriteLibrary {
    sprites: HashMap<String, Sprite>,
}

impl SpriteLibrary {
    /// Candidate paths for a sprite, in the order they are tried.
    pub fn candidates(root: &Path, name: &str) -> [PathBuf; 4] {
        [
            root.join("sprites").join(format!("{name}.png")),
            root.join(format!("{name}.png")),
            root.join(format!("@{name}.png")),
            PathBuf::from(format!("{name}.png")),
        ]
    }

    /// Loads every entity sprite under `root`.
    ///
    /// Each sprite walks its fallback chain; when every candidate fails the sprite becomes a placeholder.
    pub fn load(root: &Path) -> Self {
        let mut sprites = HashMap::new();

        for kind in EntityKind::iter() {
            let name: &'static str = kind.into();
            let sprite = Self::load_one(root, name).unwrap_or_else(|error| {
                warn!(sprite = name, %error, "Using placeholder sprite");
                Sprite::placeholder()
            });
            sprites.insert(name.to_string(), sprite);
        }

        let loaded = sprites.values().filter(|s| !s.placeholder).count();
        debug!(loaded, total = sprites.len(), "Sprite loading finished");

        Self { sprites }
    }

    fn load_one(root: &Path, name: &str) -> Result<Sprite, AssetError> {
        for path in Self::candidates(root, name) {
            if !path.is_file() {
                trace!(sprite = name, path = %path.display(), "Sprite candidate missing");
                continue;
            }

            let (width, height) = match image::image_dimensions(&path) {
                Ok(dimensions) => dimensions,
                Err(source) => {
                    let error = AssetError::Decode { path, source };
                    warn!(sprite = name, %error, "Sprite candidate unreadable, trying next");
                    continue;
                }
            };

            debug!(sprite = name, path = %path.display(), width, height, "Sprite loaded");
            return Ok(Sprite {
                width,
                height,
                placeholder: false,
                source: Some(path),
            });
        }

        Err(AssetError::NotFound(name.to_string()))
    }

    /// Number of sprites backed by a real image.
    pub fn loaded_count(&self) -> usize {
        self.sprites.values().filter(|s| !s.placeholder).count()
    }
}

impl SpriteProvider for SpriteLibrary {
    fn sprite(&self, name: &str) -> Sprite {
        self.sprites.get(name).cloned().unwrap_or_else(Sprite::placeholder)
    }
}
