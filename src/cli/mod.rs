//! CLI infrastructure for the noughts binary
//!
//! This module provides the interactive menu, the one-shot move query and
//! the computer-versus-computer match runner.

pub mod commands;
pub mod output;
