use std::io;

use anyhow::Result;
use clap::Parser;

use expense_tracker::audit::AuditLogger;
use expense_tracker::cli::{open_ledger, Session, Terminal};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Interactive command-line expense ledger",
    long_about = "Expense Tracker keeps a list of expenses in expenses.txt in the \
                  current directory. Run it without arguments to add, view and \
                  delete expenses from an interactive menu; changes are saved \
                  when you exit."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let paths = TrackerPaths::new();
    let settings = Settings::load_or_default(&paths).unwrap_or_else(|e| {
        println!("{}. Using default settings.", e);
        Settings::default()
    });

    let store = ExpenseStore::new(paths.ledger_file()).strict(settings.strict_load);
    let ledger = open_ledger(&store, &mut io::stdout())?;

    let terminal = Terminal::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(ledger, store, terminal);
    if settings.audit_enabled {
        session = session.with_audit(AuditLogger::new(paths.audit_log()));
    }

    session.run()?;
    Ok(())
}
