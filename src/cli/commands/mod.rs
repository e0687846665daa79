//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! dispatched via [`CommandDispatcher`].

pub mod check;
pub mod dispatcher;
pub mod display;
pub mod parse;
pub mod verify;

pub use dispatcher::{
    Command, CommandContext, CommandDispatcher, CommandResult, EXIT_ERROR, EXIT_NEEDS_INSTALL,
};
