//! Visual resources: character-art sprites and the score font.

pub mod font;
pub mod loader;
pub mod sprite;

pub use font::ScoreFont;
pub use loader::{load_font, load_sprite, read_sprite, AssetError, Assets, SKY_COLOR};
pub use sprite::Sprite;
