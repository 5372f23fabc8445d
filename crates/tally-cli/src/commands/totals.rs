use crate::app::AppContext;
use crate::cli::OutputArgs;
use crate::output::{category_total_lines, category_totals_json, total_json};
use crate::ui::{format_money, header, print, table, Column, OutputMode};

pub fn handle_total(ctx: &AppContext, output: &OutputArgs) -> anyhow::Result<()> {
    OutputMode::check_format_flag(output.json, output.format.as_deref())?;
    let (_storage, ledger) = ctx.load_ledger()?;
    let ui = ctx.ui_context(output);
    let total = ledger.total();

    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&total_json(total, ledger.len()))?
        );
        return Ok(());
    }

    let amount = format_money(&ui.currency, total);
    if ctx.quiet() {
        print(&ui, &amount);
    } else if ledger.is_empty() {
        print(&ui, &format!("No expenses yet, total is {}", amount));
    } else {
        print(&ui, &format!("Total spent: {}", amount));
    }
    Ok(())
}

pub fn handle_categories(ctx: &AppContext, output: &OutputArgs) -> anyhow::Result<()> {
    OutputMode::check_format_flag(output.json, output.format.as_deref())?;
    let (_storage, ledger) = ctx.load_ledger()?;
    let ui = ctx.ui_context(output);
    let totals = ledger.total_by_category();

    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&category_totals_json(&totals))?
        );
        return Ok(());
    }
    if totals.is_empty() {
        if !ctx.quiet() {
            print(&ui, "No expenses recorded yet.");
        }
        return Ok(());
    }

    if ui.mode.is_pretty() {
        let columns = [Column::new("Category"), Column::numeric("Total")];
        let rows: Vec<Vec<String>> = totals
            .iter()
            .map(|(category, total)| vec![category.clone(), format_money(&ui.currency, *total)])
            .collect();
        print(&ui, &header(&ui, "categories", None));
        print(&ui, &table(&ui, &columns, &rows));
    } else {
        for line in category_total_lines(&ui, &totals) {
            print(&ui, &line);
        }
    }
    Ok(())
}
