//! Interactive menu session.
//!
//! One session owns one [`Ledger`] for its lifetime. It is loaded once when
//! the session starts and written back only by the save-and-exit choice.
//! Every other failure is reported inline and the menu comes back.

use std::io;

use tally_core::{parse_display_index, Expense, ExpenseUpdate, Field, Ledger, LedgerStorage};

use crate::helpers::{date_or_today, non_blank, Prompter};
use crate::output::{category_total_lines, expense_line};
use crate::ui::{badge, format_money, Badge, UiContext};

const MENU_TITLE: &str = "============== Expense Tracker ==============";

const MENU_ITEMS: &[&str] = &[
    "Add expense",
    "List all expenses",
    "Show total spent",
    "Show total per category",
    "List expenses by category",
    "Save & Exit",
    "Delete an expense",
    "Edit an expense",
];

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Total,
    TotalByCategory,
    Filter,
    SaveAndExit,
    Delete,
    Edit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Total),
            "4" => Some(Self::TotalByCategory),
            "5" => Some(Self::Filter),
            "6" => Some(Self::SaveAndExit),
            "7" => Some(Self::Delete),
            "8" => Some(Self::Edit),
            _ => None,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Save-and-exit wrote the ledger
    Saved,
    /// Save-and-exit was chosen but the write failed
    SaveFailed,
    /// Input ran out before save-and-exit
    InputClosed,
}

enum Flow {
    Continue,
    End(SessionEnd),
}

/// Menu loop over a prompter, a ledger, and its storage.
pub struct Session<'s, S, P> {
    storage: &'s S,
    ledger: Ledger,
    prompt: P,
    ui: UiContext,
}

impl<'s, S, P> Session<'s, S, P>
where
    S: LedgerStorage,
    P: Prompter,
{
    /// Load the ledger and prepare the menu.
    ///
    /// A file that cannot be read is reported and the session starts empty.
    pub fn start(storage: &'s S, mut prompt: P, ui: UiContext) -> io::Result<Self> {
        let ledger = match storage.load() {
            Ok(ledger) => ledger,
            Err(err) => {
                log::warn!("Starting with an empty ledger: {}", err);
                prompt.say(&badge(&ui, Badge::Warn, &err.to_string()))?;
                prompt.say("Starting with an empty expense list.")?;
                Ledger::new()
            }
        };
        Ok(Self {
            storage,
            ledger,
            prompt,
            ui,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[cfg(test)]
    pub fn into_prompt(self) -> P {
        self.prompt
    }

    /// Run until save-and-exit or end of input.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        loop {
            let answer = self
                .prompt
                .choose(MENU_TITLE, MENU_ITEMS, "Choose an option (1-8): ")?;
            let Some(input) = answer else {
                return self.input_closed();
            };

            let flow = match MenuChoice::parse(&input) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    self.prompt.say("Invalid option, try again.")?;
                    Flow::Continue
                }
            };

            match flow {
                Flow::Continue => self.prompt.say("")?,
                Flow::End(SessionEnd::InputClosed) => return self.input_closed(),
                Flow::End(end) => return Ok(end),
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::List => self.list().map(|_| Flow::Continue),
            MenuChoice::Total => self.total().map(|_| Flow::Continue),
            MenuChoice::TotalByCategory => self.total_by_category().map(|_| Flow::Continue),
            MenuChoice::Filter => self.filter(),
            MenuChoice::SaveAndExit => self.save_and_exit().map(Flow::End),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Edit => self.edit(),
        }
    }

    fn input_closed(&mut self) -> io::Result<SessionEnd> {
        log::warn!("Input closed before save; {} expenses not saved", self.ledger.len());
        self.prompt.say("")?;
        self.prompt.say(&badge(
            &self.ui,
            Badge::Warn,
            "Input closed; changes since the last save were not written.",
        ))?;
        Ok(SessionEnd::InputClosed)
    }

    fn add(&mut self) -> io::Result<Flow> {
        let Some(raw_amount) = self.prompt.ask("Amount (e.g. 12.50): ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };
        let amount = match tally_core::parse_amount(&raw_amount) {
            Ok(amount) => amount,
            Err(_) => {
                self.prompt
                    .say("Invalid amount, please use numbers only (e.g. 12.50).")?;
                return Ok(Flow::Continue);
            }
        };

        let Some(category) = self.prompt.ask("Category (e.g. Food, Transport, Rent): ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };
        let Some(note) = self.prompt.ask("Note (optional, press Enter to skip): ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };
        let Some(date) = self.prompt.ask("Date (YYYY-MM-DD, press Enter for today): ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };

        let index = self
            .ledger
            .add(Expense::new(amount, category, note, date_or_today(Some(&date))));
        log::debug!("Added expense {}", index);
        self.prompt
            .say(&badge(&self.ui, Badge::Ok, "Expense added!"))?;
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> io::Result<()> {
        if self.ledger.is_empty() {
            return self.prompt.say("No expenses recorded yet.");
        }
        self.prompt.say("------------- Your Expenses -------------")?;
        for (index, expense) in self.ledger.list() {
            self.prompt
                .say(&expense_line(&self.ui, index, expense, true))?;
        }
        Ok(())
    }

    fn total(&mut self) -> io::Result<()> {
        let total = format_money(&self.ui.currency, self.ledger.total());
        if self.ledger.is_empty() {
            return self
                .prompt
                .say(&format!("No expenses yet, total is {}", total));
        }
        self.prompt.say(&format!("Total spent: {}", total))
    }

    fn total_by_category(&mut self) -> io::Result<()> {
        if self.ledger.is_empty() {
            return self.prompt.say("No expenses recorded yet.");
        }
        self.prompt.say("----- Total per Category -----")?;
        for line in category_total_lines(&self.ui, &self.ledger.total_by_category()) {
            self.prompt.say(&line)?;
        }
        Ok(())
    }

    fn filter(&mut self) -> io::Result<Flow> {
        if self.ledger.is_empty() {
            self.prompt.say("No expenses recorded yet.")?;
            return Ok(Flow::Continue);
        }
        let Some(query) = self.prompt.ask("Enter category to filter by: ")? else {
            return Ok(Flow::End(SessionEnd::InputClosed));
        };

        self.prompt
            .say(&format!("Expenses in category: {}", query))?;
        let lines: Vec<String> = self
            .ledger
            .filter_by_category(&query)
            .map(|(index, expense)| expense_line(&self.ui, index, expense, false))
            .collect();
        if lines.is_empty() {
            self.prompt.say("No expenses found in this category.")?;
        }
        for line in lines {
            self.prompt.say(&line)?;
        }
        Ok(Flow::Continue)
    }

    fn save_and_exit(&mut self) -> io::Result<SessionEnd> {
        match self.storage.save(&self.ledger) {
            Ok(()) => {
                self.prompt.say("Data saved. Goodbye!")?;
                Ok(SessionEnd::Saved)
            }
            Err(err) => {
                log::warn!("Save failed: {}", err);
                self.prompt.say(&badge(&self.ui, Badge::Err, &err.to_string()))?;
                self.prompt.say("Your changes were NOT saved.")?;
                Ok(SessionEnd::SaveFailed)
            }
        }
    }

    /// Show the list and read a display index. `Err(flow)` is what the
    /// calling handler returns instead.
    fn pick_index(&mut self, prompt: &str) -> io::Result<Result<usize, Flow>> {
        self.list()?;
        let Some(raw) = self.prompt.ask(prompt)? else {
            return Ok(Err(Flow::End(SessionEnd::InputClosed)));
        };
        match parse_display_index(&raw, self.ledger.len()) {
            Ok(index) => Ok(Ok(index)),
            Err(err) => {
                log::debug!("Rejected index {:?}: {}", raw, err);
                self.prompt.say("Invalid number.")?;
                Ok(Err(Flow::Continue))
            }
        }
    }

    fn delete(&mut self) -> io::Result<Flow> {
        if self.ledger.is_empty() {
            self.prompt.say("No expenses to delete.")?;
            return Ok(Flow::Continue);
        }
        let index = match self.pick_index("Enter the number of the expense to delete: ")? {
            Ok(index) => index,
            Err(flow) => return Ok(flow),
        };

        match self.ledger.delete(index) {
            Ok(_) => self
                .prompt
                .say(&badge(&self.ui, Badge::Ok, "Expense deleted."))?,
            Err(_) => self.prompt.say("Invalid number.")?,
        }
        Ok(Flow::Continue)
    }

    fn edit(&mut self) -> io::Result<Flow> {
        if self.ledger.is_empty() {
            self.prompt.say("No expenses to edit.")?;
            return Ok(Flow::Continue);
        }
        let index = match self.pick_index("Enter the number of the expense to edit: ")? {
            Ok(index) => index,
            Err(flow) => return Ok(flow),
        };

        let current = match self.ledger.get(index) {
            Ok(expense) => expense.clone(),
            Err(_) => {
                self.prompt.say("Invalid number.")?;
                return Ok(Flow::Continue);
            }
        };
        let line = expense_line(&self.ui, index, &current, true);
        let shown = line.split_once(") ").map(|(_, rest)| rest).unwrap_or(&line);
        self.prompt
            .say(&format!("Editing expense {}: {}", index, shown))?;

        let questions = [
            format!(
                "New amount (current: {}, Enter to keep): ",
                format_money(&self.ui.currency, current.amount)
            ),
            format!("New category (current: {}, Enter to keep): ", current.category),
            format!("New note (current: {}, Enter to keep): ", current.note),
            format!("New date (current: {}, Enter to keep): ", current.date),
        ];
        let mut answers = Vec::with_capacity(questions.len());
        for question in &questions {
            let Some(answer) = self.prompt.ask(question)? else {
                return Ok(Flow::End(SessionEnd::InputClosed));
            };
            answers.push(non_blank(&answer));
        }
        let mut answers = answers.into_iter();
        let update = ExpenseUpdate {
            amount: answers.next().flatten(),
            category: answers.next().flatten(),
            note: answers.next().flatten(),
            date: answers.next().flatten(),
        };

        match self.ledger.edit(index, &update) {
            Ok(report) => {
                if report.is_rejected(Field::Amount) {
                    self.prompt.say("Invalid amount, keeping old value.")?;
                }
                self.prompt
                    .say(&badge(&self.ui, Badge::Ok, "Expense updated."))?;
            }
            Err(_) => self.prompt.say("Invalid number.")?,
        }
        Ok(Flow::Continue)
    }
}
