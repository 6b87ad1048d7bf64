//! # Domain Types
//!
//! Core domain types used throughout Ordesk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Customer     │   │      Order      │   │  OrderWithCustomer  │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id (i64 PK)    │◄──│  customer_id FK │   │  order_id           │   │
//! │  │  name           │   │  product        │   │  customer_name      │   │
//! │  │  email (unique) │   │  amount_cents   │   │  customer_email     │   │
//! │  │  phone (opt)    │   │  date           │   │  product/amount/date│   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  CustomerDraft  │   │   OrderDraft    │   Drafts carry operator     │
//! │  │  (no id yet)    │   │   (no id yet)   │   input into an INSERT      │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Ids are SQLite `INTEGER PRIMARY KEY AUTOINCREMENT` values, generated on
//! insert and immutable thereafter. Drafts are the same records without an
//! id; the repository returns the full entity once the row exists.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Customer
// =============================================================================

/// A customer on file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Row id, generated on insert, immutable.
    pub id: i64,

    /// Display name. Required, non-empty.
    pub name: String,

    /// Email address. Required, unique across all customers.
    pub email: String,

    /// Phone number. Optional.
    pub phone: Option<String>,
}

/// Operator input for creating or updating a customer.
///
/// Update replaces all mutable fields at once (name, email, phone);
/// the id never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

// =============================================================================
// Order
// =============================================================================

/// An order placed by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    /// Row id, generated on insert, immutable.
    pub id: i64,

    /// Owning customer. Must exist when the order is created;
    /// the row is removed by cascade when the customer is deleted.
    pub customer_id: i64,

    /// Product description. Required.
    pub product: String,

    /// Amount in cents (smallest currency unit). Required; any value
    /// that parsed, zero and negative included.
    pub amount_cents: i64,

    /// Order date as `YYYY-MM-DD`. Required.
    pub date: String,
}

impl Order {
    /// The amount as a [`Money`] value for arithmetic and display.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

/// Operator input for creating an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer_id: i64,
    pub product: String,
    pub amount_cents: i64,
    pub date: String,
}

// =============================================================================
// Order Listing Row
// =============================================================================

/// One row of the order listing: an order joined to its owning customer.
///
/// Produced by `OrderRepository::list_with_customers`. Field names match
/// the column aliases of the JOIN query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderWithCustomer {
    pub order_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub product: String,
    pub amount_cents: i64,
    pub date: String,
}

impl OrderWithCustomer {
    /// The amount as a [`Money`] value for arithmetic and display.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_amount_accessor() {
        let order = Order {
            id: 1,
            customer_id: 1,
            product: "Book".to_string(),
            amount_cents: 2990,
            date: "2024-01-01".to_string(),
        };
        assert_eq!(order.amount(), Money::from_cents(2990));
        assert_eq!(order.amount().to_string(), "29.90");
    }
}
