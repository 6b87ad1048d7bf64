//! # Validation Module
//!
//! Input validation utilities for Ordesk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Prompt parsing (apps/console)                                │
//! │  ├── Numeric menu selections, amount parsing                           │
//! │  └── Immediate operator feedback                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - field rules                                    │
//! │  ├── Required fields, date format                                      │
//! │  └── Runs before any SQL statement                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── UNIQUE constraint on email                                        │
//! │  └── Foreign key constraint on orders.customer_id                      │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Scope
//! Required fields and date format only. Email uniqueness belongs to the
//! database; email shape, name length and amount sign are not constraints
//! of this system. Any non-empty email and any parseable amount (zero
//! and negative included) are stored as typed.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{CustomerDraft, OrderDraft};
use crate::DATE_FORMAT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty (after trimming)
///
/// ## Example
/// ```rust
/// use ordesk_core::validation::validate_name;
///
/// assert!(validate_name("Ana").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
///
/// No shape check: the only email constraint this system has is
/// uniqueness, and that is enforced by the database.
///
/// ## Example
/// ```rust
/// use ordesk_core::validation::validate_email;
///
/// assert!(validate_email("ana@x.com").is_ok());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    Ok(())
}

/// Validates a product description.
///
/// Same rule as [`validate_name`], reported under the `product` field.
pub fn validate_product(product: &str) -> ValidationResult<()> {
    if product.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product".to_string(),
        });
    }

    Ok(())
}

/// Validates an order date string.
///
/// ## Rules
/// - Must parse as a real calendar date in `YYYY-MM-DD` form
///   (`2024-02-30` is rejected, not just shape-checked)
pub fn validate_date(date: &str) -> ValidationResult<()> {
    let date = date.trim();

    if date.is_empty() {
        return Err(ValidationError::Required {
            field: "date".to_string(),
        });
    }

    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| ValidationError::InvalidFormat {
        field: "date".to_string(),
        reason: "expected YYYY-MM-DD".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Draft Builders
// =============================================================================

/// Builds a validated [`CustomerDraft`] from raw operator input.
///
/// Fields are trimmed; an empty phone becomes `None`.
///
/// ## Example
/// ```rust
/// use ordesk_core::validation::customer_draft;
///
/// let draft = customer_draft(" Ana ", "ana@x.com", "123").unwrap();
/// assert_eq!(draft.name, "Ana");
/// assert_eq!(draft.phone.as_deref(), Some("123"));
///
/// let draft = customer_draft("Ana", "ana@x.com", "  ").unwrap();
/// assert!(draft.phone.is_none());
/// ```
pub fn customer_draft(name: &str, email: &str, phone: &str) -> ValidationResult<CustomerDraft> {
    validate_name(name)?;
    validate_email(email)?;

    let phone = phone.trim();
    Ok(CustomerDraft {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        phone: if phone.is_empty() {
            None
        } else {
            Some(phone.to_string())
        },
    })
}

/// Builds a validated [`OrderDraft`] from raw operator input.
///
/// Any amount that parsed as [`Money`] is accepted as-is.
pub fn order_draft(
    customer_id: i64,
    product: &str,
    amount: Money,
    date: &str,
) -> ValidationResult<OrderDraft> {
    validate_product(product)?;
    validate_date(date)?;

    Ok(OrderDraft {
        customer_id,
        product: product.trim().to_string(),
        amount_cents: amount.cents(),
        date: date.trim().to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Ana").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_email_requires_nonempty_only() {
        assert!(validate_email("ana@x.com").is_ok());
        // Any non-empty string is a valid email; only uniqueness is
        // constrained, and the database owns that
        assert!(validate_email("abc").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("   ").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-01-01").is_ok());
        assert!(validate_date("2024-2-3").is_err());
        assert!(validate_date("2024-02-30").is_err());
        assert!(validate_date("01/01/2024").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn test_customer_draft_trims_and_normalizes_phone() {
        let draft = customer_draft("  Ana  ", " ana@x.com ", "").unwrap();
        assert_eq!(draft.name, "Ana");
        assert_eq!(draft.email, "ana@x.com");
        assert!(draft.phone.is_none());
    }

    #[test]
    fn test_customer_draft_accepts_any_nonempty_email() {
        let draft = customer_draft("Ana", "abc", "").unwrap();
        assert_eq!(draft.email, "abc");
    }

    #[test]
    fn test_order_draft_requires_product_and_date() {
        assert!(order_draft(1, "", Money::from_cents(100), "2024-01-01").is_err());
        assert!(order_draft(1, "Book", Money::from_cents(100), "bad-date").is_err());

        let draft = order_draft(1, "Book", Money::from_cents(2990), "2024-01-01").unwrap();
        assert_eq!(draft.customer_id, 1);
        assert_eq!(draft.amount_cents, 2990);
    }

    #[test]
    fn test_order_draft_accepts_zero_and_negative_amounts() {
        let zero = order_draft(1, "Book", Money::zero(), "2024-01-01").unwrap();
        assert_eq!(zero.amount_cents, 0);

        let refund = order_draft(1, "Book", Money::from_cents(-500), "2024-01-01").unwrap();
        assert_eq!(refund.amount_cents, -500);
    }
}
