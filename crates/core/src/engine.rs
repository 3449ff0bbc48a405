//! The read-only view a renderer has of a running game.

use std::collections::BTreeMap;

use crate::object::{GameObject, ObjectId};

/// Read-only snapshot provider.
///
/// Implementors own the objects; callers re-fetch the mapping every frame and
/// never hold on to references between frames.
pub trait Engine {
    /// All objects keyed by id.
    fn objects(&self) -> &BTreeMap<ObjectId, GameObject>;

    fn object(&self, oid: ObjectId) -> Option<&GameObject> {
        self.objects().get(&oid)
    }

    /// Id of the local player's avatar, `<= 0` when there is none yet.
    fn player_oid(&self) -> ObjectId;

    /// Local player's display name.
    fn name(&self) -> &str;

    fn opponent_oid(&self) -> ObjectId;

    fn opponent_name(&self) -> &str;

    /// Winner's name, once the match is decided.
    fn winner_name(&self) -> Option<&str>;
}

/// Player identities for one match.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub player_oid: ObjectId,
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub opponent_oid: ObjectId,
    #[serde(default)]
    pub opponent_name: String,
    #[serde(default)]
    pub winner: Option<String>,
}

/// An owned, immutable game state that implements [`Engine`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    roster: Roster,
    objects: BTreeMap<ObjectId, GameObject>,
}

impl Snapshot {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            objects: BTreeMap::new(),
        }
    }

    /// Build a snapshot from a list of objects.
    ///
    /// Ids are unique keys; a later object with a repeated id replaces the
    /// earlier one.
    pub fn from_objects(roster: Roster, objects: impl IntoIterator<Item = GameObject>) -> Self {
        let mut snap = Self::new(roster);
        for obj in objects {
            snap.insert(obj);
        }
        snap
    }

    pub fn insert(&mut self, obj: impl Into<GameObject>) {
        let obj = obj.into();
        self.objects.insert(obj.oid(), obj);
    }

    pub fn with(mut self, obj: impl Into<GameObject>) -> Self {
        self.insert(obj);
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Engine for Snapshot {
    fn objects(&self) -> &BTreeMap<ObjectId, GameObject> {
        &self.objects
    }

    fn player_oid(&self) -> ObjectId {
        self.roster.player_oid
    }

    fn name(&self) -> &str {
        &self.roster.player_name
    }

    fn opponent_oid(&self) -> ObjectId {
        self.roster.opponent_oid
    }

    fn opponent_name(&self) -> &str {
        &self.roster.opponent_name
    }

    fn winner_name(&self) -> Option<&str> {
        self.roster.winner.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Body, Wall};

    fn wall(oid: ObjectId, x: f64) -> Wall {
        Wall {
            oid,
            body: Body::new(x, 0.0, 1.0, 1.0),
        }
    }

    #[test]
    fn repeated_ids_keep_last_object() {
        let snap = Snapshot::from_objects(
            Roster::default(),
            [wall(1, 0.0).into(), wall(2, 5.0).into(), wall(1, 9.0).into()],
        );
        assert_eq!(snap.len(), 2);
        assert_eq!(snap.object(1).unwrap().body().x, 9.0);
    }

    #[test]
    fn roster_accessors() {
        let snap = Snapshot::new(Roster {
            player_oid: 3,
            player_name: "ann".into(),
            opponent_oid: 4,
            opponent_name: "bo".into(),
            winner: None,
        });
        assert_eq!(snap.player_oid(), 3);
        assert_eq!(snap.name(), "ann");
        assert_eq!(snap.opponent_oid(), 4);
        assert_eq!(snap.opponent_name(), "bo");
        assert_eq!(snap.winner_name(), None);
        assert!(snap.object(3).is_none());
        assert!(snap.is_empty());
    }
}
