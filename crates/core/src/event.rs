//! Occurrences that are not part of the object model.

use serde::{Deserialize, Serialize};

use crate::object::ObjectId;

/// Something interesting happened between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Two objects touched.
    Collision { first: ObjectId, second: ObjectId },
    /// An object's health reached zero.
    Died { oid: ObjectId },
}
