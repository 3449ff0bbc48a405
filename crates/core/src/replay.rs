//! Recorded matches.
//!
//! A replay is a JSON document holding the roster and a list of frames. The
//! viewer binary plays it back through the same [`Engine`](crate::Engine)
//! interface a live client would use.
//!
//! ```json
//! {
//!   "roster": {"player_oid": 1, "player_name": "ann", "opponent_oid": 2,
//!              "opponent_name": "bo", "winner": "ann"},
//!   "frames": [
//!     {"objects": [{"type": "wall", "oid": 10, "body": {"x": 0, "y": 0, "w": 40, "h": 1}}],
//!      "events": [{"type": "died", "oid": 7}]}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::engine::{Roster, Snapshot};
use crate::event::GameEvent;
use crate::object::GameObject;

/// One recorded tick.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub objects: Vec<GameObject>,
    #[serde(default)]
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Replay {
    #[serde(default)]
    pub roster: Roster,
    pub frames: Vec<Frame>,
}

impl Replay {
    /// Decode a replay document.
    ///
    /// Fails on malformed JSON and on any object whose `"type"` is not one of
    /// `wall`, `npc`, `missile` or `player`.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Engine view of frame `index`.
    pub fn snapshot(&self, index: usize) -> Option<Snapshot> {
        let frame = self.frames.get(index)?;
        Some(Snapshot::from_objects(
            self.roster.clone(),
            frame.objects.iter().cloned(),
        ))
    }

    pub fn events(&self, index: usize) -> &[GameEvent] {
        self.frames
            .get(index)
            .map(|f| f.events.as_slice())
            .unwrap_or(&[])
    }
}
