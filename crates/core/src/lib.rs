//! Engine-facing model - what the display reads every frame
//!
//! This crate describes the state a renderer consumes but never owns. It has
//! no dependencies on terminals or images, so it can be shared with headless
//! tools and tests.
//!
//! # Module Structure
//!
//! - [`object`]: `GameObject` tagged variant (wall, npc, missile, player)
//! - [`engine`]: `Engine` trait plus the owned `Snapshot` implementation
//! - [`control`]: display preferences chosen by the user
//! - [`event`]: occurrences outside the object model (collisions, deaths)
//! - [`replay`]: JSON replays decoded into per-frame snapshots
//! - [`rng`]: deterministic LCG used for random background colors
//!
//! # Example
//!
//! ```
//! use arena_display_core::{Body, Engine, Npc, Roster, Snapshot};
//!
//! let snap = Snapshot::new(Roster::default()).with(Npc {
//!     oid: 7,
//!     body: Body::new(1.0, 1.0, 4.0, 4.0),
//!     health: 5.0,
//!     max_health: 10.0,
//!     alive: true,
//! });
//!
//! assert_eq!(snap.objects().len(), 1);
//! assert!(snap.object(7).unwrap().is_alive());
//! ```

pub mod control;
pub mod engine;
pub mod event;
pub mod object;
pub mod replay;
pub mod rng;

pub use arena_display_types as types;

// Re-export commonly used types for convenience
pub use control::Control;
pub use engine::{Engine, Roster, Snapshot};
pub use event::GameEvent;
pub use object::{Body, GameObject, Missile, Npc, ObjectId, Player, Wall};
pub use replay::{Frame, Replay};
pub use rng::SimpleRng;
