use tally_core::{parse_amount, parse_display_index, Expense, ExpenseUpdate, TallyError};

use crate::app::AppContext;
use crate::cli::{AddArgs, EditArgs, OutputArgs};
use crate::helpers::date_or_today;
use crate::output::{expense_line, expense_table, expenses_json};
use crate::ui::{badge, header, print, Badge, OutputMode, UiContext};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let amount = parse_amount(&args.amount)?;
    let (storage, mut ledger) = ctx.load_ledger()?;

    let expense = Expense::new(
        amount,
        args.category.trim(),
        args.note.trim(),
        date_or_today(args.date.as_deref()),
    );
    let index = ledger.add(expense);
    ctx.save_ledger(&storage, &ledger)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(&OutputArgs::default());
        let added = ledger.get(index)?;
        print(&ui, &badge(&ui, Badge::Ok, "Expense added"));
        print(&ui, &expense_line(&ui, index, added, true));
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, output: &OutputArgs) -> anyhow::Result<()> {
    OutputMode::check_format_flag(output.json, output.format.as_deref())?;
    let (_storage, ledger) = ctx.load_ledger()?;
    let ui = ctx.ui_context(output);

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&expenses_json(ledger.list()))?);
        return Ok(());
    }
    if ledger.is_empty() {
        if !ctx.quiet() {
            print(&ui, "No expenses recorded yet.");
        }
        return Ok(());
    }
    print_expenses(&ui, "list", None, &expense_table(&ui, ledger.list()));
    Ok(())
}

pub fn handle_filter(ctx: &AppContext, category: &str, output: &OutputArgs) -> anyhow::Result<()> {
    OutputMode::check_format_flag(output.json, output.format.as_deref())?;
    let (_storage, ledger) = ctx.load_ledger()?;
    let ui = ctx.ui_context(output);

    if ledger.is_empty() {
        if ui.mode.is_json() {
            println!("[]");
        } else if !ctx.quiet() {
            print(&ui, "No expenses recorded yet.");
        }
        return Ok(());
    }

    let matches: Vec<_> = ledger.filter_by_category(category).collect();
    if matches.is_empty() {
        return Err(TallyError::NotFound(format!(
            "no expenses in category \"{}\"",
            category
        ))
        .into());
    }

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&expenses_json(matches))?);
        return Ok(());
    }
    print_expenses(&ui, "filter", Some(category), &expense_table(&ui, matches));
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, index: &str) -> anyhow::Result<()> {
    let (storage, mut ledger) = ctx.load_ledger()?;
    let index = parse_display_index(index, ledger.len())?;

    let removed = ledger.delete(index)?;
    ctx.save_ledger(&storage, &ledger)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(&OutputArgs::default());
        print(&ui, &badge(&ui, Badge::Ok, "Expense deleted"));
        print(&ui, &expense_line(&ui, index, &removed, true));
    }
    Ok(())
}

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let update = ExpenseUpdate {
        amount: args.amount.clone(),
        category: trimmed(&args.category),
        note: trimmed(&args.note),
        date: trimmed(&args.date),
    };
    if update.is_empty() {
        return Err(anyhow::anyhow!(
            "Nothing to change; pass --amount, --category, --note or --date"
        ));
    }

    let (storage, mut ledger) = ctx.load_ledger()?;
    let index = parse_display_index(&args.index, ledger.len())?;
    let report = ledger.edit(index, &update)?;

    if report.applied.is_empty() {
        if let Some((field, err)) = report.rejected.into_iter().next() {
            return Err(anyhow::Error::new(err).context(format!("Could not change {}", field)));
        }
        return Err(anyhow::anyhow!("No fields were changed"));
    }

    let ui = ctx.ui_context(&OutputArgs::default());
    for (field, err) in &report.rejected {
        eprintln!(
            "{}",
            badge(&ui, Badge::Warn, &format!("Kept old {}: {}", field, err))
        );
    }
    ctx.save_ledger(&storage, &ledger)?;

    if !ctx.quiet() {
        print(&ui, &badge(&ui, Badge::Ok, "Expense updated"));
        print(&ui, &expense_line(&ui, index, ledger.get(index)?, true));
    }
    Ok(())
}

fn print_expenses(ui: &UiContext, command: &str, context: Option<&str>, body: &str) {
    if ui.mode.is_pretty() {
        print(ui, &header(ui, command, context));
    }
    print(ui, body);
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value.as_deref().map(|v| v.trim().to_string())
}
