//! Matchbox: a noughts-and-crosses engine that teaches itself.
//!
//! This crate provides:
//! - A minimal Tic-Tac-Toe board with win and draw detection
//! - A MENACE-style learner that keeps a box of beads per board state
//! - A game driver for any two move providers, and a self-play training loop
//! - A console front end for playing the trained agents

pub mod cli;
pub mod error;
pub mod menace;
pub mod ports;
pub mod tictactoe;

pub use error::{Error, Result};
pub use menace::{Difficulty, MenaceAgent};
pub use tictactoe::{GameState, Move};
