//! # Menu State Machine
//!
//! The interactive menu loop.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Menu State Machine                               │
//! │                                                                         │
//! │                      ┌──────────────┐                                   │
//! │            ┌────────►│   MainMenu   │◄────────┐                         │
//! │            │         └──────┬───────┘         │                         │
//! │            │           1 │  │ 2   └─ 0        │                         │
//! │            │             ▼  ▼        ▼        │                         │
//! │     ┌──────┴───────┐ ┌─────────────┐ ┌──────┐ │                         │
//! │     │ CustomerMenu │ │  OrderMenu  │ │ Exit │ │                         │
//! │     └──────────────┘ └──────┬──────┘ └──────┘ │                         │
//! │            0 └───────────── 0 ────────────────┘                         │
//! │                                                                         │
//! │  Each state reads one selection, runs the action, prints the result    │
//! │  or the error message, and redisplays its menu. Invalid selections     │
//! │  never crash; EOF on stdin means "leave the current menu".             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Boundary
//! Every action returns `Result<(), AppError>`. [`report`] prints
//! recoverable errors and lets the loop continue; only
//! [`AppError::Storage`] propagates up and terminates the process.

pub mod customer;
pub mod order;

use ordesk_db::Database;

use crate::error::AppError;
use crate::prompt;

/// The states of the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Customers,
    Orders,
    Exit,
}

/// Runs the menu loop until the operator exits.
pub async fn run(db: &Database) -> Result<(), AppError> {
    let mut state = MenuState::Main;

    while state != MenuState::Exit {
        state = match state {
            MenuState::Main => main_menu()?,
            MenuState::Customers => customer::run(db).await?,
            MenuState::Orders => order::run(db).await?,
            MenuState::Exit => unreachable!("loop exits before dispatching Exit"),
        };
    }

    println!("Goodbye!");
    Ok(())
}

/// Displays the main menu and reads one selection.
fn main_menu() -> Result<MenuState, AppError> {
    println!();
    println!("--- Ordesk :: Customer & Order Management ---");
    println!("1. Manage Customers");
    println!("2. Manage Orders");
    println!("0. Exit");

    let Some(choice) = prompt::read_line("Choose an option: ")? else {
        return Ok(MenuState::Exit);
    };

    match prompt::parse_selection(&choice) {
        Ok(1) => Ok(MenuState::Customers),
        Ok(2) => Ok(MenuState::Orders),
        Ok(0) => Ok(MenuState::Exit),
        Ok(_) => {
            println!("Invalid option. Try again.");
            Ok(MenuState::Main)
        }
        Err(err) => {
            report(Err(err))?;
            Ok(MenuState::Main)
        }
    }
}

/// Prints recoverable errors and propagates fatal ones.
///
/// This is the error boundary of the whole application: everything except
/// storage failure is shown to the operator and forgotten.
pub(crate) fn report(result: Result<(), AppError>) -> Result<(), AppError> {
    match result {
        Ok(()) => Ok(()),
        Err(err @ AppError::Storage(_)) => Err(err),
        Err(err) => {
            println!("Error: {}", err);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_swallows_recoverable_errors() {
        assert!(report(Err(AppError::invalid_input("nope"))).is_ok());
        assert!(report(Err(AppError::NotFound("gone".to_string()))).is_ok());
        assert!(report(Ok(())).is_ok());
    }

    #[test]
    fn test_report_propagates_storage_failure() {
        let result = report(Err(AppError::Storage("disk gone".to_string())));
        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
