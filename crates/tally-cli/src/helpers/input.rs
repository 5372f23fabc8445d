//! Prompting for the interactive menu.
//!
//! On a terminal the menu and field prompts go through `dialoguer`. Pipes
//! and tests use [`LinePrompt`], which reads one trimmed line per prompt
//! from any `BufRead`.

use std::io::{self, BufRead, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// Question/answer surface the menu session talks to.
///
/// `Ok(None)` from `ask` or `choose` means input is exhausted.
pub trait Prompter {
    /// Ask for one free-text answer. Blank answers are allowed.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Offer `items` under `title` and return the answer as typed, where a
    /// valid answer is the 1-based item number.
    fn choose(&mut self, title: &str, items: &[&str], prompt: &str) -> io::Result<Option<String>>;

    /// Write one line of output.
    fn say(&mut self, line: &str) -> io::Result<()>;
}

/// Prompt/answer pair over a reader and a writer.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompt<R, W> {
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn choose(&mut self, title: &str, items: &[&str], prompt: &str) -> io::Result<Option<String>> {
        self.say(title)?;
        for (i, item) in items.iter().enumerate() {
            writeln!(self.writer, "{}) {}", i + 1, item)?;
        }
        self.ask(prompt)
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }
}

/// Terminal prompts with arrow-key menu selection.
#[derive(Default)]
pub struct TermPrompt {
    theme: ColorfulTheme,
}

impl Prompter for TermPrompt {
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(dialoguer_prompt(prompt))
            .allow_empty(true)
            .interact_text()
            .map_err(into_io)?;
        Ok(Some(answer.trim().to_string()))
    }

    fn choose(&mut self, title: &str, items: &[&str], prompt: &str) -> io::Result<Option<String>> {
        self.say(title)?;
        let selection = Select::with_theme(&self.theme)
            .with_prompt(dialoguer_prompt(prompt))
            .items(items)
            .default(0)
            .interact()
            .map_err(into_io)?;
        Ok(Some((selection + 1).to_string()))
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

/// dialoguer draws its own separator after the prompt text.
fn dialoguer_prompt(prompt: &str) -> &str {
    prompt.trim_end().trim_end_matches(':')
}

fn into_io(err: dialoguer::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err)
}
