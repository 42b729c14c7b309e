//! Reusable behavior tree subtrees and the full swamp brains.
//!
//! Subtrees are organized in two layers:
//!
//! - **Patterns** (`patterns`): one condition guarding one action, or a small
//!   composite around a single goal
//! - **Brains** (`frog`, `snake`): complete trees assembled from patterns
//!
//! ```text
//! frog_tree
//!     ├─ inverter(frog dead)
//!     └─ selector
//!         ├─ escape_when_threatened()   ← pattern
//!         └─ activity (utility: hunt / shoot / wander)
//! ```

pub mod frog;
pub mod patterns;
pub mod snake;

use behavior_tree::Behavior;
use game_core::World;

pub use frog::{frog_activity, frog_tree};
pub use snake::{SnakeBrainConfig, snake_tree};

/// Boxed node driven by the swamp world.
pub type Subtree = Box<dyn Behavior<World>>;
