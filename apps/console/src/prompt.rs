//! # Prompt Helpers
//!
//! Reading and parsing operator input.
//!
//! Reading is plain blocking stdin: the menu loop is fully synchronous and
//! single-operator, so there is nothing to overlap with. Parsing is split
//! into pure functions so it can be tested without a terminal.

use std::io::{self, BufRead, Write};

use ordesk_core::Money;

use crate::error::AppError;

// =============================================================================
// Reading
// =============================================================================

/// Prints `prompt` (no newline), flushes, and reads one line from stdin.
///
/// ## Returns
/// * `Ok(Some(line))` - trimmed input, possibly empty
/// * `Ok(None)` - stdin reached EOF (operator hit Ctrl-D); callers treat
///   this as "leave the current menu"
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a numeric menu selection.
pub fn parse_selection(input: &str) -> Result<u32, AppError> {
    input.trim().parse().map_err(|_| {
        AppError::invalid_input(format!("'{}' is not a menu option", input.trim()))
    })
}

/// Parses an entity id typed by the operator.
///
/// `what` names the entity for the error message ("customer", "order").
pub fn parse_id(input: &str, what: &str) -> Result<i64, AppError> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::invalid_input(format!(
            "'{}' is not a valid {} id",
            trimmed, what
        ))),
    }
}

/// Parses an order amount like `49.90`.
pub fn parse_amount(input: &str) -> Result<Money, AppError> {
    let amount: Money = input.parse()?;
    Ok(amount)
}

/// Interprets a yes/no confirmation answer. Anything but `y`/`yes` is no.
pub fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Today's date in the order date format, for the empty-date default.
pub fn today() -> String {
    chrono::Local::now()
        .date_naive()
        .format(ordesk_core::DATE_FORMAT)
        .to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1").unwrap(), 1);
        assert_eq!(parse_selection(" 0 ").unwrap(), 0);
        assert!(parse_selection("x").is_err());
        assert!(parse_selection("").is_err());
        assert!(parse_selection("-1").is_err());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "customer").unwrap(), 42);
        assert!(parse_id("0", "customer").is_err());
        assert!(parse_id("-3", "customer").is_err());
        assert!(parse_id("abc", "customer").is_err());

        let err = parse_id("abc", "order").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(ref m) if m.contains("order")));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("49.90").unwrap(), Money::from_cents(4990));
        assert!(parse_amount("lots").is_err());
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
        assert!(!is_yes("si"));
    }

    #[test]
    fn test_today_is_well_formed() {
        assert!(ordesk_core::validation::validate_date(&today()).is_ok());
    }
}
