//! Console input
//!
//! Each line the user types is either new text for the text area or a
//! `:` command standing in for a control on the page.

pub mod command;
pub mod keymap;

pub use command::{parse_line, Command, CommandError};
pub use keymap::{create_default_commands, CommandAction};
