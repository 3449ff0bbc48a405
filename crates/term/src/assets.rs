//! Sprite images, decoded once at startup.
//!
//! Every `.png` under the asset root is loaded into an [`AssetTable`] keyed by
//! file name. Paint calls only look sprites up; nothing is read from disk
//! after startup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, ensure, Context, Result};
use image::ImageReader;
use tracing::debug;

use crate::types::{Rgb, REQUIRED_IMAGES};

/// Pixels with less alpha than this are not drawn.
const ALPHA_CUTOFF: u8 = 128;

/// Decoded RGBA image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Sprite {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        ensure!(
            rgba.len() == expected,
            "sprite {width}x{height} needs {expected} bytes, got {}",
            rgba.len()
        );
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Opaque single-color sprite.
    pub fn solid(width: u32, height: u32, color: Rgb) -> Self {
        let len = (width as usize) * (height as usize);
        let mut rgba = Vec::with_capacity(len * 4);
        for _ in 0..len {
            rgba.extend_from_slice(&[color.r, color.g, color.b, 255]);
        }
        Self {
            width,
            height,
            rgba,
        }
    }

    pub fn open(path: &Path) -> Result<Self> {
        let image = ImageReader::open(path)
            .with_context(|| format!("opening image {}", path.display()))?
            .decode()
            .with_context(|| format!("decoding image {}", path.display()))?
            .to_rgba8();
        Ok(Self {
            width: image.width(),
            height: image.height(),
            rgba: image.into_raw(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at (`x`, `y`), or `None` when out of range or transparent.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.rgba[i..i + 4];
        if px[3] < ALPHA_CUTOFF {
            return None;
        }
        Some(Rgb::new(px[0], px[1], px[2]))
    }
}

/// Sprites keyed by asset name (file name under the asset root).
#[derive(Debug, Clone, Default)]
pub struct AssetTable {
    sprites: HashMap<String, Sprite>,
}

impl AssetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every PNG in `root` and check the fixed sprite set is present.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut table = Self::new();

        let entries = fs::read_dir(root)
            .with_context(|| format!("reading asset directory {}", root.display()))?;
        for entry in entries {
            let path = entry?.path();
            let is_png = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("png"))
                .unwrap_or(false);
            if !is_png || !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let sprite = Sprite::open(&path)?;
            table.sprites.insert(name.to_string(), sprite);
        }

        table.require(&REQUIRED_IMAGES).with_context(|| {
            format!("incomplete asset directory {}", root.display())
        })?;
        debug!(root = %root.display(), count = table.len(), "loaded image assets");
        Ok(table)
    }

    pub fn insert(&mut self, name: impl Into<String>, sprite: Sprite) {
        self.sprites.insert(name.into(), sprite);
    }

    pub fn get(&self, name: &str) -> Result<&Sprite> {
        self.sprites
            .get(name)
            .ok_or_else(|| anyhow!("image asset `{name}` is not loaded"))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sprites.contains_key(name)
    }

    /// Fail with the first name in `names` that is not loaded.
    pub fn require(&self, names: &[&str]) -> Result<()> {
        for name in names {
            if !self.contains(name) {
                bail!("missing image asset `{name}`");
            }
        }
        Ok(())
    }

    /// Loaded asset names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sprites.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
