//! Client-side display preferences.

use crate::rng::SimpleRng;
use crate::types::{Rgb, DEFAULT_PLAYER_IMAGE};

/// User intent that influences what the display draws.
///
/// The renderer only reads this; the owning client loop mutates it between
/// frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Draw the status overlay at the bottom of the game screen.
    pub show_info: bool,
    /// Asset name of the local player's sprite.
    pub player_image: String,
    /// Background color requested for the game screen, if any.
    pub background_color: Option<Rgb>,
}

impl Default for Control {
    fn default() -> Self {
        Self {
            show_info: true,
            player_image: DEFAULT_PLAYER_IMAGE.to_string(),
            background_color: None,
        }
    }
}

impl Control {
    pub fn new(player_image: impl Into<String>) -> Self {
        Self {
            player_image: player_image.into(),
            ..Self::default()
        }
    }

    pub fn toggle_info(&mut self) {
        self.show_info = !self.show_info;
    }

    /// Request a random background color and return it.
    pub fn randomize_background(&mut self, rng: &mut SimpleRng) -> Rgb {
        let color = rng.next_rgb();
        self.background_color = Some(color);
        color
    }
}
