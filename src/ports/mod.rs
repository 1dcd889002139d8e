//! Ports (trait boundaries) between the game loop and its collaborators.
//!
//! The game loop only talks to move sources through [`Agent`] and to
//! presentation through [`GameObserver`]; concrete players live in
//! [`crate::players`] and the console observer in [`crate::cli::output`].

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::{GameObserver, SilentObserver};
