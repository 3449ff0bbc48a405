//! Core types module - shared data structures and constants
//!
//! This module defines the plain data used by every layer of the display:
//! colors, rectangles, layout constants, asset names and the coarse game
//! phase. All types are pure data structures with no external dependencies,
//! so they can be used by the engine model, the renderer and the viewer
//! binary alike.
//!
//! # Palette
//!
//! | Constant | RGB | Used for |
//! |----------|-----|----------|
//! | `PLAYER_COLOR` | (0, 255, 0) | local player |
//! | `OPPONENT_COLOR` | (255, 0, 0) | opponent |
//! | `MISSILE_COLOR` | (0, 255, 255) | missiles |
//! | `NPC_COLOR` | (100, 100, 100) | npcs |
//! | `WALL_COLOR` | (150, 75, 0) | walls |
//! | `TEXT_COLOR` | (255, 255, 255) | messages and status lines |
//! | `BACKGROUND_COLOR` | (40, 199, 15) | initial background |
//!
//! # Layout
//!
//! Surfaces are measured in terminal cells. The fixed-width font is one cell
//! per glyph and `FONT_SIZE` rows per line. The status overlay occupies the
//! bottom `STATUS_BAR_HEIGHT` rows.
//!
//! # Examples
//!
//! ```
//! use arena_display_types::{Facing, Rect, Rgb, BACKGROUND_COLOR};
//!
//! assert_eq!(BACKGROUND_COLOR, Rgb::new(40, 199, 15));
//!
//! let r = Rect::new(2, 3, 4, 5);
//! assert_eq!(r.right(), 6);
//! assert_eq!(r.bottom(), 8);
//!
//! // Horizontal motion wins over vertical motion.
//! assert_eq!(Facing::from_velocity(1.0, 1.0), Facing::East);
//! assert_eq!(Facing::from_velocity(0.0, 0.0), Facing::North);
//! ```

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned rectangle in surface cells.
///
/// Coordinates may be negative or exceed the surface; surfaces clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

/// Local player color.
pub const PLAYER_COLOR: Rgb = Rgb::new(0, 255, 0);

/// Opponent color.
pub const OPPONENT_COLOR: Rgb = Rgb::new(255, 0, 0);

/// Missile color.
pub const MISSILE_COLOR: Rgb = Rgb::new(0, 255, 255);

/// NPC color.
pub const NPC_COLOR: Rgb = Rgb::new(100, 100, 100);

/// Wall fill color.
pub const WALL_COLOR: Rgb = Rgb::new(150, 75, 0);

/// Color for messages and the status overlay.
pub const TEXT_COLOR: Rgb = Rgb::new(255, 255, 255);

/// Background color a renderer starts with.
pub const BACKGROUND_COLOR: Rgb = Rgb::new(40, 199, 15);

/// Color of the health bar / "LEVEL UP!" text above creatures.
pub const HEALTH_TEXT_COLOR: Rgb = Rgb::new(200, 0, 0);

/// Font line height in rows.
pub const FONT_SIZE: u16 = 1;

/// Height of the bottom status strip in rows.
pub const STATUS_BAR_HEIGHT: i32 = 6;

/// Left margin of status lines in columns.
pub const STATUS_TEXT_X: i32 = 20;

/// Number of gauge slots inside the health bar brackets.
pub const HEALTH_BAR_SLOTS: usize = 10;

/// Glyph used for a filled health slot.
pub const HEALTH_BAR_FILL: char = '█';

/// Text shown instead of a health bar once a creature is dead.
pub const LEVEL_UP_TEXT: &str = "LEVEL UP!";

/// Offset (world units) from an object's origin to its health text center.
pub const HEALTH_TEXT_OFFSET_X: f64 = 2.0;
pub const HEALTH_TEXT_OFFSET_Y: f64 = 3.5;

/// Display-only edge length (world units) of a missile sprite.
pub const MISSILE_DISPLAY_SIZE: f64 = 1.8;

/// Default asset root, relative to the working directory.
pub const ASSET_ROOT: &str = "display/images";

/// Player sprite a fresh control selects.
pub const DEFAULT_PLAYER_IMAGE: &str = "player.png";

pub const TITLE_PAGE_IMAGE: &str = "TitlePage.png";
pub const MISSILE_IMAGE: &str = "Energy-Ball.png";

/// NPC sprites indexed by [`Facing`]: east, west, south, north.
pub const NPC_IMAGES: [&str; 4] = ["npc3.png", "npc4.png", "npc1.png", "npc2.png"];

/// Enemy player sprites indexed by [`Facing`]: east, west, south, north.
pub const ENEMY_IMAGES: [&str; 4] = ["enemy1.png", "enemy2.png", "enemy3.png", "enemy4.png"];

/// Assets that must be present for a renderer to start.
pub const REQUIRED_IMAGES: [&str; 10] = [
    TITLE_PAGE_IMAGE,
    MISSILE_IMAGE,
    "npc1.png",
    "npc2.png",
    "npc3.png",
    "npc4.png",
    "enemy1.png",
    "enemy2.png",
    "enemy3.png",
    "enemy4.png",
];

/// Coarse game phase an outer loop uses to pick a paint entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Pregame,
    WaitingForGame,
    Playing,
    GameOver,
}

/// Direction a moving sprite faces, derived from its velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    East,
    West,
    South,
    North,
}

impl Facing {
    /// Pick a facing from velocity signs.
    ///
    /// Priority is dx>0, dx<0, dy>0, otherwise north. Diagonal motion always
    /// resolves to the horizontal direction.
    pub fn from_velocity(dx: f64, dy: f64) -> Self {
        if dx > 0.0 {
            Facing::East
        } else if dx < 0.0 {
            Facing::West
        } else if dy > 0.0 {
            Facing::South
        } else {
            Facing::North
        }
    }

    /// Index into a four-sprite table such as [`NPC_IMAGES`].
    pub fn index(self) -> usize {
        match self {
            Facing::East => 0,
            Facing::West => 1,
            Facing::South => 2,
            Facing::North => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_prefers_horizontal_motion() {
        assert_eq!(Facing::from_velocity(0.5, -3.0), Facing::East);
        assert_eq!(Facing::from_velocity(-0.5, 3.0), Facing::West);
        assert_eq!(Facing::from_velocity(0.0, 3.0), Facing::South);
        assert_eq!(Facing::from_velocity(0.0, -3.0), Facing::North);
        assert_eq!(Facing::from_velocity(0.0, 0.0), Facing::North);
    }

    #[test]
    fn sprite_tables_follow_facing_order() {
        assert_eq!(NPC_IMAGES[Facing::East.index()], "npc3.png");
        assert_eq!(NPC_IMAGES[Facing::West.index()], "npc4.png");
        assert_eq!(NPC_IMAGES[Facing::South.index()], "npc1.png");
        assert_eq!(NPC_IMAGES[Facing::North.index()], "npc2.png");

        assert_eq!(ENEMY_IMAGES[Facing::East.index()], "enemy1.png");
        assert_eq!(ENEMY_IMAGES[Facing::North.index()], "enemy4.png");
    }

    #[test]
    fn required_images_cover_directional_tables() {
        for name in NPC_IMAGES.iter().chain(ENEMY_IMAGES.iter()) {
            assert!(REQUIRED_IMAGES.contains(name), "{name} missing");
        }
        assert!(REQUIRED_IMAGES.contains(&TITLE_PAGE_IMAGE));
        assert!(REQUIRED_IMAGES.contains(&MISSILE_IMAGE));
    }

    #[test]
    fn empty_rects() {
        assert!(Rect::new(0, 0, 0, 4).is_empty());
        assert!(Rect::new(0, 0, 3, -1).is_empty());
        assert!(!Rect::new(-5, -5, 1, 1).is_empty());
    }
}
