//! Main menu options

use std::fmt;

/// The four menu selections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Delete,
    Exit,
}

/// Why a menu line was not a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// A number that is not on the menu
    Unrecognized(i64),
    /// Not a number at all
    NotANumber(String),
}

impl MenuChoice {
    /// All options in menu order
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    /// The number the user types to pick this option
    pub const fn number(self) -> i64 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::View => 2,
            MenuChoice::Delete => 3,
            MenuChoice::Exit => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Expense",
            MenuChoice::View => "View Expenses",
            MenuChoice::Delete => "Delete Expense",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse a line typed at the menu prompt
    pub fn parse(input: &str) -> Result<Self, MenuError> {
        let trimmed = input.trim();
        let number: i64 = trimmed
            .parse()
            .map_err(|_| MenuError::NotANumber(trimmed.to_string()))?;

        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or(MenuError::Unrecognized(number))
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Render the menu block printed before each prompt
pub fn render_menu() -> String {
    let mut output = String::from("\nMenu:\n");
    for choice in MenuChoice::ALL {
        output.push_str(&choice.to_string());
        output.push('\n');
    }
    output
}
