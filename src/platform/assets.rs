//! Sprite assets
//!
//! The simulation only needs each sprite's pixel size; the canvas resolves
//! the actual image from the `Sprite` id. A JSON manifest maps every sprite
//! to an image file, and the size is read from the image itself:
//!
//! ```json
//! { "bird-up": "bird-up.png", "pipe-upper": "pipe-upper.png", ... }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AssetError;
use crate::sim::bird::Wing;
use crate::sim::geom::Size;

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Background,
    Base,
    BirdUp,
    BirdMid,
    BirdDown,
    PipeUpper,
    PipeLower,
}

impl Sprite {
    pub const ALL: [Sprite; 7] = [
        Sprite::Background,
        Sprite::Base,
        Sprite::BirdUp,
        Sprite::BirdMid,
        Sprite::BirdDown,
        Sprite::PipeUpper,
        Sprite::PipeLower,
    ];

    /// Manifest key
    pub fn key(&self) -> &'static str {
        match self {
            Sprite::Background => "bg",
            Sprite::Base => "base",
            Sprite::BirdUp => "bird-up",
            Sprite::BirdMid => "bird-mid",
            Sprite::BirdDown => "bird-down",
            Sprite::PipeUpper => "pipe-upper",
            Sprite::PipeLower => "pipe-lower",
        }
    }

    pub fn for_wing(wing: Wing) -> Self {
        match wing {
            Wing::Up => Sprite::BirdUp,
            Wing::Mid => Sprite::BirdMid,
            Wing::Down => Sprite::BirdDown,
        }
    }
}

/// A loaded image: where it came from and how big it is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteInfo {
    pub path: PathBuf,
    pub size: Size,
}

/// Loads one sprite. Any failure is fatal to the session.
pub trait AssetLoader {
    fn load(&mut self, sprite: Sprite) -> Result<SpriteInfo, AssetError>;
}

impl<L: AssetLoader + ?Sized> AssetLoader for Box<L> {
    fn load(&mut self, sprite: Sprite) -> Result<SpriteInfo, AssetError> {
        (**self).load(sprite)
    }
}

/// All sprites, guaranteed complete
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    /// Indexed by `Sprite as usize`
    sprites: Vec<SpriteInfo>,
}

impl SpriteSheet {
    /// Load every sprite, stopping at the first failure
    pub fn load(loader: &mut impl AssetLoader) -> Result<Self, AssetError> {
        let sprites = Sprite::ALL
            .iter()
            .map(|&sprite| {
                let info = loader.load(sprite)?;
                if !info.size.is_positive() {
                    return Err(AssetError::EmptySprite(sprite));
                }
                log::debug!(
                    "Loaded {} ({}x{})",
                    sprite.key(),
                    info.size.width,
                    info.size.height
                );
                Ok(info)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { sprites })
    }

    /// Original art sizes, no files involved
    pub fn stock() -> Self {
        let sprites = Sprite::ALL
            .iter()
            .map(|&sprite| StockAssets::info(sprite))
            .collect();
        Self { sprites }
    }

    pub fn get(&self, sprite: Sprite) -> &SpriteInfo {
        &self.sprites[sprite as usize]
    }

    pub fn size(&self, sprite: Sprite) -> Size {
        self.get(sprite).size
    }

    /// Up, Mid and Down frame sizes
    pub fn bird_frames(&self) -> [Size; 3] {
        Wing::ALL.map(|wing| self.size(Sprite::for_wing(wing)))
    }
}

/// Serves the original art sizes without touching the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct StockAssets;

impl StockAssets {
    fn info(sprite: Sprite) -> SpriteInfo {
        let size = match sprite {
            Sprite::Background => Size::new(288.0, 512.0),
            Sprite::Base => Size::new(336.0, 112.0),
            Sprite::BirdUp | Sprite::BirdMid | Sprite::BirdDown => Size::new(34.0, 24.0),
            Sprite::PipeUpper | Sprite::PipeLower => Size::new(52.0, 320.0),
        };
        SpriteInfo {
            path: PathBuf::from(format!("assets/{}.png", sprite.key())),
            size,
        }
    }
}

impl AssetLoader for StockAssets {
    fn load(&mut self, sprite: Sprite) -> Result<SpriteInfo, AssetError> {
        Ok(Self::info(sprite))
    }
}

/// Maps sprites to image files through a JSON manifest and reads each
/// image's real size
#[derive(Debug, Clone)]
pub struct ManifestLoader {
    root: PathBuf,
    entries: HashMap<String, PathBuf>,
}

impl ManifestLoader {
    /// Parse the manifest at `path`. Image paths resolve relative to its directory.
    pub fn open(path: &Path) -> Result<Self, AssetError> {
        let json = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, path)
    }

    fn from_json(json: &str, path: &Path) -> Result<Self, AssetError> {
        let entries = serde_json::from_str(json).map_err(|source| AssetError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self { root, entries })
    }
}

impl AssetLoader for ManifestLoader {
    fn load(&mut self, sprite: Sprite) -> Result<SpriteInfo, AssetError> {
        let file = self
            .entries
            .get(sprite.key())
            .ok_or(AssetError::MissingSprite(sprite))?;
        let path = self.root.join(file);
        let size = image_size(&path)?;
        Ok(SpriteInfo { path, size })
    }
}

/// Pixel size from the image header; unreadable or undecodable files are errors
fn image_size(path: &Path) -> Result<Size, AssetError> {
    match image::image_dimensions(path) {
        Ok((width, height)) => Ok(Size::new(width as f32, height as f32)),
        Err(image::ImageError::IoError(source)) => Err(AssetError::Io {
            path: path.to_path_buf(),
            source,
        }),
        Err(source) => Err(AssetError::Malformed {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh scratch directory per test
    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("floppy-bird-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Manifest pointing every sprite at `<key>.png` inside `dir`
    fn write_manifest(dir: &Path) -> PathBuf {
        let entries: HashMap<&str, String> = Sprite::ALL
            .iter()
            .map(|s| (s.key(), format!("{}.png", s.key())))
            .collect();
        let path = dir.join("assets.json");
        std::fs::write(&path, serde_json::to_string(&entries).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_stock_sheet() {
        let sheet = SpriteSheet::stock();
        assert_eq!(sheet.size(Sprite::PipeLower), Size::new(52.0, 320.0));
        assert_eq!(sheet.bird_frames(), [Size::new(34.0, 24.0); 3]);
        assert_eq!(sheet, SpriteSheet::load(&mut StockAssets).unwrap());
    }

    #[test]
    fn test_manifest_reads_real_sizes() {
        let dir = scratch("real-sizes");
        let manifest = write_manifest(&dir);
        for sprite in Sprite::ALL {
            let size = StockAssets::info(sprite).size;
            image::RgbaImage::new(size.width as u32, size.height as u32)
                .save(dir.join(format!("{}.png", sprite.key())))
                .unwrap();
        }

        let mut loader = ManifestLoader::open(&manifest).unwrap();
        let sheet = SpriteSheet::load(&mut loader).unwrap();
        assert_eq!(sheet.size(Sprite::PipeUpper), Size::new(52.0, 320.0));
        assert_eq!(sheet.size(Sprite::Base), Size::new(336.0, 112.0));
        assert_eq!(sheet.get(Sprite::BirdMid).path, dir.join("bird-mid.png"));
    }

    #[test]
    fn test_garbage_png_is_malformed() {
        let dir = scratch("garbage");
        let manifest = write_manifest(&dir);
        for sprite in Sprite::ALL {
            std::fs::write(dir.join(format!("{}.png", sprite.key())), "this is not a png")
                .unwrap();
        }

        let mut loader = ManifestLoader::open(&manifest).unwrap();
        let err = SpriteSheet::load(&mut loader).unwrap_err();
        assert!(matches!(err, AssetError::Malformed { .. }), "got {err}");
    }

    #[test]
    fn test_manifest_missing_file() {
        let err = ManifestLoader::open(Path::new("/nonexistent/assets.json")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn test_manifest_not_json() {
        let err = ManifestLoader::from_json("{ not json", Path::new("assets.json")).unwrap_err();
        assert!(matches!(err, AssetError::Manifest { .. }));
    }

    #[test]
    fn test_manifest_missing_sprite() {
        let mut loader = ManifestLoader::from_json("{}", Path::new("assets.json")).unwrap();
        let err = SpriteSheet::load(&mut loader).unwrap_err();
        assert!(matches!(err, AssetError::MissingSprite(Sprite::Background)));
    }

    #[test]
    fn test_manifest_missing_image() {
        let json = r#"{ "bg": "no-such-bg.png" }"#;
        let mut loader =
            ManifestLoader::from_json(json, Path::new("/nonexistent/assets.json")).unwrap();
        let err = loader.load(Sprite::Background).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn test_zero_size_rejected() {
        struct Flat;
        impl AssetLoader for Flat {
            fn load(&mut self, _sprite: Sprite) -> Result<SpriteInfo, AssetError> {
                Ok(SpriteInfo {
                    path: PathBuf::from("flat.png"),
                    size: Size::new(0.0, 10.0),
                })
            }
        }
        let err = SpriteSheet::load(&mut Flat).unwrap_err();
        assert!(matches!(err, AssetError::EmptySprite(Sprite::Background)));
    }
}
