use std::fmt;

use crate::entities::EntityId;
use crate::math::Vec2;

/// Something notable that happened during a world step or command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    FlyEaten { fly: EntityId, total: u32 },
    FrogBitten { snake: EntityId, health: u32 },
    FrogDied,
    BubbleFired { position: Vec2 },
    SnakeStunned { snake: EntityId },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::FlyEaten { fly, total } => {
                write!(f, "frog ate fly {} ({} total)", fly, total)
            }
            GameEvent::FrogBitten { snake, health } => {
                write!(f, "snake {} bit the frog ({} health left)", snake, health)
            }
            GameEvent::FrogDied => write!(f, "frog died"),
            GameEvent::BubbleFired { position } => {
                write!(f, "frog fired a bubble at ({:.1}, {:.1})", position.x, position.y)
            }
            GameEvent::SnakeStunned { snake } => write!(f, "snake {} stunned", snake),
        }
    }
}
