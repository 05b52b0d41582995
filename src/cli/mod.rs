//! Command line front end: prompts for barren land and prints the result.
//!
//! - [`parse_line`]: Turns one typed line into a [`Command`]
//! - [`Session`]: Drives the prompt loop over any reader and writer
//! - [`Console`]: Plain or coloured line output

mod console;
mod input;
mod session;

pub use console::Console;
pub use input::{parse_line, Command};
pub use session::Session;
