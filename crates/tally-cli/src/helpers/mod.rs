//! Input and parsing helper functions for the CLI.
//!
//! - Menu prompting on a terminal or over any reader/writer pair (`input`)
//! - Date defaults and blank handling (`parsing`)

mod input;
mod parsing;

pub use input::{LinePrompt, Prompter, TermPrompt};
pub use parsing::{date_or_today, non_blank};
