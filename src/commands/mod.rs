//! Commands Module
//!
//! The REPL's command table, its handlers and the session state they share.
//!
//! # Commands
//! - `help` - List commands
//! - `exit` - Leave the REPL
//! - `map` / `mapb` - Page forward/backward through location areas
//! - `explore <area>` - List creatures found in an area
//! - `catch <pokemon>` - Try to catch a creature
//! - `inspect <pokemon>` - Show a caught creature
//! - `pokedex` - List caught creatures

pub mod handlers;
pub mod registry;
pub mod session;

pub use handlers::catch_succeeds;
pub use registry::{Command, CommandContext, CommandRegistry, Control, Handler, Reply};
pub use session::{CaughtPokemon, Session};
