//! Terminal display for the arena game.
//!
//! The display draws into a [`Surface`]; the shipped implementation is a
//! framebuffer of styled cells that [`Terminal`] flushes with crossterm.
//!
//! - [`surface`]: the `Surface` drawing seam, font metrics, text helpers
//! - [`fb`]: `FrameBuffer`, the cell-grid `Surface`
//! - [`assets`]: sprites decoded once at startup
//! - [`display`]: `Renderer`, one paint entry point per game phase
//! - [`terminal`]: raw-mode terminal and diff encoding

pub mod assets;
pub mod display;
pub mod fb;
pub mod surface;
pub mod terminal;

pub use arena_display_core as core;
pub use arena_display_types as types;

pub use assets::{AssetTable, Sprite};
pub use display::{filled_slots, health_bar, HealthBar, Palette, Projection, Renderer};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use surface::{Font, Surface};
pub use terminal::{encode_diff_into, encode_full_into, Terminal};
