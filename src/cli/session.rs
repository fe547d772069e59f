//! Interactive session loop
//!
//! Shows the menu, reads one selection, runs it, and repeats until the user
//! picks Exit or input closes. The ledger is saved exactly once, on the way
//! out.

use std::io::{BufRead, Write};

use crate::audit::{AuditEntry, AuditLogger};
use crate::display::format_expense_list;
use crate::error::TrackerResult;
use crate::models::{Amount, Expense, Ledger};
use crate::storage::ExpenseStore;

use super::menu::{render_menu, MenuChoice, MenuError};
use super::terminal::Terminal;

/// Session state after handling one selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exiting,
}

/// One interactive run over a ledger
pub struct Session<R, W> {
    ledger: Ledger,
    store: ExpenseStore,
    audit: Option<AuditLogger>,
    terminal: Terminal<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(ledger: Ledger, store: ExpenseStore, terminal: Terminal<R, W>) -> Self {
        Self {
            ledger,
            store,
            audit: None,
            terminal,
        }
    }

    /// Record every change in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Run until Exit or end of input, returning the final ledger
    ///
    /// Errors only come from the terminal itself; every ledger or file problem
    /// is reported to the user and the loop carries on. The ledger is saved
    /// even when the terminal fails part-way through.
    pub fn run(mut self) -> TrackerResult<Ledger> {
        let looped = self.run_loop();
        let finished = self.finish();

        looped.and(finished)?;
        Ok(self.ledger)
    }

    fn run_loop(&mut self) -> TrackerResult<()> {
        self.terminal.say("=== Expense Tracker ===")?;

        while self.step()? == SessionState::Running {}
        Ok(())
    }

    /// Show the menu and handle one selection
    pub fn step(&mut self) -> TrackerResult<SessionState> {
        self.terminal.write(&render_menu())?;

        let line = match self.terminal.prompt("Choose an option: ")? {
            Some(line) => line,
            None => return Ok(SessionState::Exiting),
        };

        match MenuChoice::parse(&line) {
            Ok(MenuChoice::Add) => self.add_expense(),
            Ok(MenuChoice::View) => {
                self.view_expenses()?;
                Ok(SessionState::Running)
            }
            Ok(MenuChoice::Delete) => self.delete_expense(),
            Ok(MenuChoice::Exit) => Ok(SessionState::Exiting),
            Err(MenuError::Unrecognized(_)) => {
                self.terminal.say("Invalid option. Try again.")?;
                Ok(SessionState::Running)
            }
            Err(MenuError::NotANumber(_)) => {
                self.terminal.say("Invalid input. Please enter a number.")?;
                Ok(SessionState::Running)
            }
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn add_expense(&mut self) -> TrackerResult<SessionState> {
        let description = match self.terminal.prompt("Enter expense description: ")? {
            Some(description) => description,
            None => return Ok(SessionState::Exiting),
        };
        let amount_text = match self.terminal.prompt("Enter amount: ")? {
            Some(text) => text,
            None => return Ok(SessionState::Exiting),
        };

        let amount = match Amount::parse(&amount_text) {
            Ok(amount) => amount,
            Err(_) => {
                self.terminal.say("Invalid amount. Expense not added.")?;
                return Ok(SessionState::Running);
            }
        };

        let expense = Expense::new(description, amount);
        self.record(AuditEntry::add(self.ledger.len() + 1, &expense))?;
        self.ledger.append(expense);
        self.terminal.say("Expense added successfully!")?;

        Ok(SessionState::Running)
    }

    fn view_expenses(&mut self) -> TrackerResult<()> {
        self.terminal.write(&format_expense_list(self.ledger.list()))
    }

    fn delete_expense(&mut self) -> TrackerResult<SessionState> {
        self.view_expenses()?;
        if self.ledger.is_empty() {
            return Ok(SessionState::Running);
        }

        let line = match self
            .terminal
            .prompt("Enter the number of the expense to delete: ")?
        {
            Some(line) => line,
            None => return Ok(SessionState::Exiting),
        };

        let number: i64 = match line.trim().parse() {
            Ok(number) => number,
            Err(_) => {
                self.terminal.say("Invalid input. No expense deleted.")?;
                return Ok(SessionState::Running);
            }
        };

        let removed = usize::try_from(number)
            .ok()
            .and_then(|position| self.ledger.remove_at(position).map(|e| (position, e)));

        match removed {
            Some((position, expense)) => {
                self.record(AuditEntry::delete(position, &expense))?;
                self.terminal.say("Expense deleted successfully!")?;
            }
            None => self.terminal.say("Invalid number. No expense deleted.")?,
        }

        Ok(SessionState::Running)
    }

    /// Save the ledger and say goodbye
    fn finish(&mut self) -> TrackerResult<()> {
        match self.store.save(self.ledger.list()) {
            Ok(()) => self.record(AuditEntry::save(self.ledger.len()))?,
            Err(e) => self
                .terminal
                .say(&format!("Error saving expenses: {}", e))?,
        }

        self.terminal.say("Exiting. Goodbye!")
    }

    /// Append to the audit log if enabled, reporting failures
    fn record(&mut self, entry: AuditEntry) -> TrackerResult<()> {
        let result = match &self.audit {
            Some(logger) => logger.log(&entry),
            None => return Ok(()),
        };

        if let Err(e) = result {
            self.terminal.say(&format!("Warning: {}", e))?;
        }
        Ok(())
    }
}
