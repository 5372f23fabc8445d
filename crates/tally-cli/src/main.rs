//! Tally CLI - a personal expense ledger for the terminal
//!
//! With no subcommand this opens the interactive menu. The subcommands run
//! the same ledger operations once, for scripts and shell use.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod session;
mod ui;

use clap::Parser;
use env_logger::Env;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, OutputArgs};
use crate::commands::{entries, menu, misc, totals};
use crate::errors::{exit_code_for, hint_for};
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(&OutputArgs::default());
        print_error(&ui_ctx, &format!("{:#}", e), hint_for(&e));
        std::process::exit(exit_code_for(&e));
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        None | Some(Commands::Menu) => menu::handle_menu(ctx),
        Some(Commands::Add(args)) => entries::handle_add(ctx, args),
        Some(Commands::List { output }) => entries::handle_list(ctx, output),
        Some(Commands::Filter { category, output }) => {
            entries::handle_filter(ctx, category, output)
        }
        Some(Commands::Delete { index }) => entries::handle_delete(ctx, index),
        Some(Commands::Edit(args)) => entries::handle_edit(ctx, args),
        Some(Commands::Total { output }) => totals::handle_total(ctx, output),
        Some(Commands::Categories { output }) => totals::handle_categories(ctx, output),
        Some(Commands::Completions { shell }) => misc::handle_completions(*shell),
    }
}
