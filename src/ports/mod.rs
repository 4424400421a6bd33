//! Trait boundaries between the game core and its participants.
//!
//! The driver only knows these traits. The learning agent and the console
//! adapters implement them.

pub mod observer;
pub mod player;

pub use observer::{Observer, SilentObserver};
pub use player::MoveProvider;
