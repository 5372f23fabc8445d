use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use tally_core::VERSION;

/// Tally - a personal expense ledger for the terminal
///
/// Run without a subcommand to open the interactive menu.
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the expenses file
    #[arg(short, long, global = true, env = "TALLY_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Amount spent (e.g. 12.50)
    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,

    /// Category label (e.g. Food, Transport, Rent)
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Optional note
    #[arg(short, long, default_value = "")]
    pub note: String,

    /// Date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Expense number as shown by `tally list`
    #[arg(value_name = "INDEX", allow_hyphen_values = true)]
    pub index: String,

    /// New amount
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,

    /// New note
    #[arg(short, long)]
    pub note: Option<String>,

    /// New date
    #[arg(long)]
    pub date: Option<String>,
}

/// Shared output flags for read-only commands
#[derive(Args, Clone, Default)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// Record a new expense
    Add(AddArgs),

    /// List all expenses
    List {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show total spent
    Total {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show total spent per category
    Categories {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List expenses in a category (case-insensitive)
    Filter {
        /// Category to match
        #[arg(value_name = "CATEGORY")]
        category: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Delete an expense by number
    Delete {
        /// Expense number as shown by `tally list`
        #[arg(value_name = "INDEX", allow_hyphen_values = true)]
        index: String,
    },

    /// Edit fields of an expense by number
    Edit(EditArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_add_accepts_negative_amount() {
        let cli = Cli::try_parse_from(["tally", "add", "--amount", "-4.5", "-c", "Refund"]).unwrap();
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.amount, "-4.5");
                assert_eq!(args.category, "Refund");
                assert_eq!(args.note, "");
                assert!(args.date.is_none());
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["tally", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
