//! Swamp-specific behavior tree nodes.
//!
//! Nodes read the [`World`](game_core::World) through its sensors and act
//! through its commands. They are divided into:
//!
//! - `conditions`: check world state (Success/Failure), never mutate it
//! - `actions`: issue movement, bubble and bite commands
//! - `linger`: a custom node that idles for a number of ticks

pub mod actions;
pub mod conditions;
pub mod linger;

pub use actions::*;
pub use conditions::*;
pub use linger::Linger;
