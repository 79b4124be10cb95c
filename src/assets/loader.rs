//! Asset loading with placeholder fallbacks.
//!
//! A missing or unreadable asset never stops the game: it is logged and
//! replaced by a solid block of the requested size. The background is the
//! exception and is simply left out.

use super::font::ScoreFont;
use super::sprite::Sprite;
use crate::core::GameConfig;
use ratatui::style::Color;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const BIRD_FILE: &str = "bird.txt";
pub const PIPE_FILE: &str = "pipe.txt";
pub const GROUND_FILE: &str = "ground.txt";
pub const BACKGROUND_FILE: &str = "background.txt";
pub const FONT_FILE: &str = "font.txt";

pub const BIRD_COLOR: Color = Color::Rgb(255, 215, 0);
pub const PIPE_COLOR: Color = Color::Rgb(0, 200, 0);
pub const GROUND_COLOR: Color = Color::Rgb(139, 69, 19);
pub const BACKGROUND_COLOR: Color = Color::Rgb(255, 255, 255);
pub const BIRD_FALLBACK_COLOR: Color = Color::Rgb(50, 150, 255);
/// Flat fill used when there is no background art.
pub const SKY_COLOR: Color = Color::Rgb(135, 206, 235);

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0} contains no visible cells")]
    Empty(PathBuf),
}

/// Read a sprite file and scale it to `width × height` world units.
pub fn read_sprite(
    path: &Path,
    color: Color,
    width: f64,
    height: f64,
) -> Result<Sprite, AssetError> {
    let art = fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Sprite::parse(&art, color, width, height).ok_or_else(|| AssetError::Empty(path.to_path_buf()))
}

/// Load a sprite, substituting a solid `fallback` block on failure.
///
/// With `fallback == None` a failure yields `None`.
pub fn load_sprite(
    path: &Path,
    color: Color,
    width: f64,
    height: f64,
    fallback: Option<Color>,
) -> Option<Sprite> {
    match read_sprite(path, color, width, height) {
        Ok(sprite) => {
            log::debug!("loaded sprite {}", path.display());
            Some(sprite)
        }
        Err(e) => {
            log::warn!("Cannot load image: {e}");
            fallback.map(|fallback_color| {
                log::info!("Using fallback block for {}", path.display());
                Sprite::solid(fallback_color, width, height)
            })
        }
    }
}

/// Load the score font, falling back to plain terminal text.
pub fn load_font(path: &Path) -> ScoreFont {
    let parsed = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|src| ScoreFont::parse(&src).ok_or_else(|| "no glyphs defined".to_string()));
    match parsed {
        Ok(font) => font,
        Err(e) => {
            log::warn!("Cannot load font {}: {e}; using terminal font", path.display());
            ScoreFont::Plain
        }
    }
}

/// Every visual resource the renderer needs.
#[derive(Debug, Clone)]
pub struct Assets {
    pub bird: Sprite,
    /// One pipe tile; the renderer flips it for top segments.
    pub pipe: Sprite,
    pub ground: Sprite,
    pub background: Option<Sprite>,
    pub font: ScoreFont,
}

impl Assets {
    /// Load all assets from `dir`, using placeholders where needed.
    pub fn load(dir: &Path, config: &GameConfig) -> Self {
        let bird = load_sprite(
            &dir.join(BIRD_FILE),
            BIRD_COLOR,
            config.bird_width,
            config.bird_height,
            Some(BIRD_FALLBACK_COLOR),
        );
        let pipe = load_sprite(
            &dir.join(PIPE_FILE),
            PIPE_COLOR,
            config.pipe_width,
            config.pipe_segment_height,
            Some(PIPE_COLOR),
        );
        let ground = load_sprite(
            &dir.join(GROUND_FILE),
            GROUND_COLOR,
            config.screen_width,
            config.ground_height,
            Some(GROUND_COLOR),
        );
        let background = load_sprite(
            &dir.join(BACKGROUND_FILE),
            BACKGROUND_COLOR,
            config.screen_width,
            config.screen_height,
            None,
        );

        let placeholders = Self::placeholders(config);
        Self {
            bird: bird.unwrap_or(placeholders.bird),
            pipe: pipe.unwrap_or(placeholders.pipe),
            ground: ground.unwrap_or(placeholders.ground),
            background,
            font: load_font(&dir.join(FONT_FILE)),
        }
    }

    /// All-placeholder assets, as if the asset directory were empty.
    pub fn placeholders(config: &GameConfig) -> Self {
        Self {
            bird: Sprite::solid(BIRD_FALLBACK_COLOR, config.bird_width, config.bird_height),
            pipe: Sprite::solid(PIPE_COLOR, config.pipe_width, config.pipe_segment_height),
            ground: Sprite::solid(GROUND_COLOR, config.screen_width, config.ground_height),
            background: None,
            font: ScoreFont::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("flappy-assets-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_sprite_uses_fallback_block() {
        let dir = temp_dir("missing");
        let path = dir.join("nope.txt");
        let sprite = load_sprite(&path, BIRD_COLOR, 34.0, 24.0, Some(Color::Blue)).unwrap();
        assert!(sprite.is_solid());
        assert_eq!(sprite.color, Color::Blue);
        assert_eq!((sprite.width, sprite.height), (34.0, 24.0));
    }

    #[test]
    fn test_missing_sprite_without_fallback_is_none() {
        let dir = temp_dir("nofallback");
        assert!(load_sprite(&dir.join("nope.txt"), BACKGROUND_COLOR, 450.0, 712.0, None).is_none());
    }

    #[test]
    fn test_read_sprite_errors() {
        let dir = temp_dir("errors");
        let blank = dir.join("blank.txt");
        fs::write(&blank, "   \n").unwrap();
        assert!(matches!(read_sprite(&blank, PIPE_COLOR, 1.0, 1.0), Err(AssetError::Empty(_))));
        assert!(matches!(
            read_sprite(&dir.join("absent.txt"), PIPE_COLOR, 1.0, 1.0),
            Err(AssetError::Io { .. })
        ));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_reads_present_files() {
        let dir = temp_dir("present");
        fs::write(dir.join(BIRD_FILE), " ▄▄\n███\n").unwrap();
        fs::write(dir.join(FONT_FILE), "[0]\n█▀█\n█▄█\n").unwrap();
        let assets = Assets::load(&dir, &GameConfig::default());
        fs::remove_dir_all(&dir).ok();

        assert!(!assets.bird.is_solid());
        assert_eq!(assets.bird.color, BIRD_COLOR);
        assert!(assets.pipe.is_solid());
        assert!(assets.ground.is_solid());
        assert!(assets.background.is_none());
        assert_eq!(assets.font.height(), 2);
    }

    #[test]
    fn test_missing_font_falls_back_to_plain() {
        let dir = temp_dir("font");
        assert_eq!(load_font(&dir.join(FONT_FILE)), ScoreFont::Plain);
    }
}
