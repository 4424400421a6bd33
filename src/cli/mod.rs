//! Console front end: rendering, human input and the `matchbox` commands.

pub mod commands;
pub mod config;
pub mod console;
pub mod human;
pub mod output;
pub mod render;
