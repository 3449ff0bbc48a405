//! Game objects as delivered by the engine.
//!
//! Objects are a tagged variant: the `"type"` field selects the payload and an
//! unrecognized tag is a decode error, so every object a renderer sees is one
//! of the four kinds below.

use serde::{Deserialize, Serialize};

/// Engine-assigned object identifier. Ids `<= 0` never name a live object.
pub type ObjectId = i64;

/// Position, size and velocity in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default)]
    pub dx: f64,
    #[serde(default)]
    pub dy: f64,
}

impl Body {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            w,
            h,
            dx: 0.0,
            dy: 0.0,
        }
    }

    pub fn with_velocity(mut self, dx: f64, dy: f64) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }
}

fn alive_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub oid: ObjectId,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub oid: ObjectId,
    pub body: Body,
    pub health: f64,
    pub max_health: f64,
    #[serde(default = "alive_by_default")]
    pub alive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    pub oid: ObjectId,
    pub body: Body,
    #[serde(default = "alive_by_default")]
    pub alive: bool,
}

/// A human-controlled avatar, local or remote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub oid: ObjectId,
    pub body: Body,
    pub health: f64,
    pub max_health: f64,
    #[serde(default = "alive_by_default")]
    pub alive: bool,
    #[serde(default)]
    pub experience: f64,
    #[serde(default)]
    pub move_mana: f64,
    #[serde(default)]
    pub missile_mana: f64,
}

/// Any drawable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameObject {
    Wall(Wall),
    Npc(Npc),
    Missile(Missile),
    Player(Player),
}

impl GameObject {
    pub fn oid(&self) -> ObjectId {
        match self {
            GameObject::Wall(w) => w.oid,
            GameObject::Npc(n) => n.oid,
            GameObject::Missile(m) => m.oid,
            GameObject::Player(p) => p.oid,
        }
    }

    pub fn body(&self) -> &Body {
        match self {
            GameObject::Wall(w) => &w.body,
            GameObject::Npc(n) => &n.body,
            GameObject::Missile(m) => &m.body,
            GameObject::Player(p) => &p.body,
        }
    }

    /// Walls have no liveness and always report alive.
    pub fn is_alive(&self) -> bool {
        match self {
            GameObject::Wall(_) => true,
            GameObject::Npc(n) => n.alive,
            GameObject::Missile(m) => m.alive,
            GameObject::Player(p) => p.alive,
        }
    }

    /// Serialized type tag, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GameObject::Wall(_) => "wall",
            GameObject::Npc(_) => "npc",
            GameObject::Missile(_) => "missile",
            GameObject::Player(_) => "player",
        }
    }
}

impl From<Wall> for GameObject {
    fn from(value: Wall) -> Self {
        GameObject::Wall(value)
    }
}

impl From<Npc> for GameObject {
    fn from(value: Npc) -> Self {
        GameObject::Npc(value)
    }
}

impl From<Missile> for GameObject {
    fn from(value: Missile) -> Self {
        GameObject::Missile(value)
    }
}

impl From<Player> for GameObject {
    fn from(value: Player) -> Self {
        GameObject::Player(value)
    }
}
