use std::io::{self, IsTerminal};

use tally_core::JsonFileStorage;

use crate::app::AppContext;
use crate::cli::OutputArgs;
use crate::helpers::{LinePrompt, Prompter, TermPrompt};
use crate::session::{Session, SessionEnd};
use crate::ui::UiContext;

/// Run the interactive menu on stdin/stdout.
///
/// The process exits 0 however the session ends; a failed save has
/// already been reported inside the session.
pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    let storage = ctx.storage()?;
    let ui = ctx.ui_context(&OutputArgs::default());

    let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
    if interactive {
        run_session(&storage, TermPrompt::default(), ui)
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_session(&storage, LinePrompt::new(stdin.lock(), stdout.lock()), ui)
    }
}

fn run_session<P: Prompter>(
    storage: &JsonFileStorage,
    prompt: P,
    ui: UiContext,
) -> anyhow::Result<()> {
    let mut session = Session::start(storage, prompt, ui)?;
    match session.run()? {
        SessionEnd::Saved => log::info!("Session saved to {}", storage.path().display()),
        SessionEnd::SaveFailed => log::info!("Session ended after a failed save"),
        SessionEnd::InputClosed => log::info!(
            "Session ended at end of input with {} unsaved expenses",
            session.ledger().len()
        ),
    }
    Ok(())
}
