//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Tally · command (context)"
/// Plain mode: "tally command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Tally", styles::bold(), ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("tally {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a hint line.
///
/// Pretty mode: "Hint: text" with dim styling
/// Plain mode: "hint=text"
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub numeric: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            numeric: false,
        }
    }

    /// A right-aligned column for amounts and indices.
    pub const fn numeric(header: &'static str) -> Self {
        Self {
            header,
            numeric: true,
        }
    }
}

/// Render a table.
///
/// Pretty mode: bordered table via comfy-table
/// Plain mode: tab-separated values, no header
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(comfy_table::presets::ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width.min(u16::MAX as usize) as u16);
    table.set_header(columns.iter().map(|c| c.header).collect::<Vec<_>>());

    for row in rows {
        table.add_row(row);
    }

    for (i, col) in columns.iter().enumerate() {
        if col.numeric {
            if let Some(column) = table.column_mut(i) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }

    table.to_string()
}

/// Print a message to stdout unless output is JSON.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext::plain()
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            mode: OutputMode::Pretty,
            unicode: true,
            ..UiContext::plain()
        }
    }

    #[test]
    fn test_header() {
        assert_eq!(header(&plain_ctx(), "list", None), "tally list");
        let h = header(&pretty_ctx(), "filter", Some("Food"));
        assert!(h.contains("Tally"));
        assert!(h.contains("filter (Food)"));
    }

    #[test]
    fn test_badge_ok() {
        let b = badge(&plain_ctx(), Badge::Ok, "Expense added");
        assert_eq!(b, "[OK] Expense added");
    }

    #[test]
    fn test_hint_plain() {
        assert_eq!(hint(&plain_ctx(), "try this"), "hint=try this");
    }

    #[test]
    fn test_table_plain() {
        let columns = [Column::numeric("#"), Column::new("Category")];
        let rows = vec![
            vec!["1".to_string(), "Food".to_string()],
            vec!["2".to_string(), "Bus".to_string()],
        ];
        assert_eq!(table(&plain_ctx(), &columns, &rows), "1\tFood\n2\tBus");
    }

    #[test]
    fn test_table_pretty() {
        let columns = [Column::numeric("#"), Column::new("Category")];
        let rows = vec![vec!["1".to_string(), "Food".to_string()]];
        let t = table(&pretty_ctx(), &columns, &rows);
        assert!(t.contains("Category"));
        assert!(t.contains("Food"));
    }

    #[test]
    fn test_error_message_plain_and_pretty() {
        assert_eq!(
            error_message(&plain_ctx(), "Invalid number.", Some("Run tally list")),
            "error=Invalid number.\nhint=Run tally list"
        );
        let pretty = error_message(&pretty_ctx(), "Invalid number.", None);
        assert!(pretty.contains("Invalid number."));
        assert!(pretty.starts_with('['));
    }
}
