//! Subcommands of the `matchbox` binary

pub mod play;
pub mod train;
