//! Output mode routing logic.

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON only
    Json,
    /// Stable text for pipes and scripts
    #[default]
    Plain,
    /// Tables and color for a terminal
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// `--json` wins outright. `--format plain` or `TERM=dumb` force plain.
    /// Otherwise a TTY gets pretty output and anything else gets plain.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        if format_flag == Some("plain") || term_is_dumb || !is_tty {
            return Self::Plain;
        }
        Self::Pretty
    }

    /// Validate a `--format` value and its combination with `--json`.
    pub fn check_format_flag(json_flag: bool, format_flag: Option<&str>) -> anyhow::Result<()> {
        match format_flag {
            None => Ok(()),
            Some(_) if json_flag => Err(anyhow::anyhow!("--format cannot be used with --json")),
            Some("table") | Some("plain") => Ok(()),
            Some(other) => Err(anyhow::anyhow!(
                "Unknown format \"{}\" (use table or plain)",
                other
            )),
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_exclusive() {
        let mode = OutputMode::resolve(true, Some("plain"), true, false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_plain_forces() {
        let mode = OutputMode::resolve(false, Some("plain"), true, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_term_dumb_forces_plain() {
        let mode = OutputMode::resolve(false, None, true, true);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_tty_gets_pretty_unless_piped() {
        assert_eq!(
            OutputMode::resolve(false, Some("table"), true, false),
            OutputMode::Pretty
        );
        assert_eq!(
            OutputMode::resolve(false, None, false, false),
            OutputMode::Plain
        );
    }

    #[test]
    fn test_check_format_flag() {
        assert!(OutputMode::check_format_flag(false, None).is_ok());
        assert!(OutputMode::check_format_flag(false, Some("table")).is_ok());
        assert!(OutputMode::check_format_flag(true, Some("plain")).is_err());
        assert!(OutputMode::check_format_flag(false, Some("csv")).is_err());
    }
}
