//! # Order Repository
//!
//! Database operations for orders.
//!
//! ## Key Operations
//! - Insert with foreign key check against customers
//! - Listing joined to the owning customer
//! - Individual deletion (cascade deletion lives in the customer repo)
//!
//! ## The JOIN Listing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              How list_with_customers Works                              │
//! │                                                                         │
//! │  orders                          customers                              │
//! │  ┌────┬─────────────┬────────┐   ┌────┬──────┬───────────┐             │
//! │  │ id │ customer_id │product │   │ id │ name │ email     │             │
//! │  │  1 │      1      │ Book   │──►│  1 │ Ana  │ ana@x.com │             │
//! │  │  2 │      1      │ Pen    │──►│  1 │ Ana  │ ana@x.com │             │
//! │  └────┴─────────────┴────────┘   └────┴──────┴───────────┘             │
//! │       │                                                                 │
//! │       ▼  INNER JOIN ON o.customer_id = c.id                             │
//! │  (1, Ana, ana@x.com, Book, 2990, 2024-01-01)                           │
//! │  (2, Ana, ana@x.com, Pen,   500, 2024-01-02)                           │
//! │                                                                         │
//! │  Every order has an owning customer (FK + cascade), so INNER JOIN      │
//! │  never drops rows.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use ordesk_core::{Order, OrderDraft, OrderWithCustomer};

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Inserts a new order and returns the stored row.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - `draft.customer_id` references no customer.
    ///   SQLite reports this as a FOREIGN KEY violation; it is translated
    ///   here because "customer not found" is what the operator needs to
    ///   hear, and the menu should not know about foreign keys.
    pub async fn insert(&self, draft: &OrderDraft) -> DbResult<Order> {
        debug!(
            customer_id = draft.customer_id,
            product = %draft.product,
            "Inserting order"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO orders (customer_id, product, amount_cents, date)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(draft.customer_id)
        .bind(&draft.product)
        .bind(draft.amount_cents)
        .bind(&draft.date)
        .execute(&self.pool)
        .await
        .map_err(|e| match DbError::from(e) {
            DbError::ForeignKeyViolation { .. } => DbError::not_found("Customer", draft.customer_id),
            other => other,
        })?;

        let id = result.last_insert_rowid();
        debug!(id, "Order inserted");

        Ok(Order {
            id,
            customer_id: draft.customer_id,
            product: draft.product.clone(),
            amount_cents: draft.amount_cents,
            date: draft.date.clone(),
        })
    }

    /// Lists all orders joined to their owning customer, in insertion order.
    ///
    /// Column aliases match the field names of
    /// [`OrderWithCustomer`](ordesk_core::OrderWithCustomer).
    pub async fn list_with_customers(&self) -> DbResult<Vec<OrderWithCustomer>> {
        let rows = sqlx::query_as::<_, OrderWithCustomer>(
            r#"
            SELECT
                o.id           AS order_id,
                c.name         AS customer_name,
                c.email        AS customer_email,
                o.product      AS product,
                o.amount_cents AS amount_cents,
                o.date         AS date
            FROM orders o
            INNER JOIN customers c ON o.customer_id = c.id
            ORDER BY o.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Listed orders with customers");
        Ok(rows)
    }

    /// Counts the orders owned by a customer.
    ///
    /// Used by the deletion confirmation prompt so the operator knows how
    /// many orders the cascade will remove.
    pub async fn count_for_customer(&self, customer_id: i64) -> DbResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE customer_id = ?1")
                .bind(customer_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    /// Deletes an order by id.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no order with this id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting order");

        let result = sqlx::query("DELETE FROM orders WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use ordesk_core::validation::{customer_draft, order_draft};
    use ordesk_core::Money;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn add_customer(db: &Database, name: &str, email: &str) -> i64 {
        db.customers()
            .insert(&customer_draft(name, email, "").unwrap())
            .await
            .unwrap()
            .id
    }

    fn book_draft(customer_id: i64) -> ordesk_core::OrderDraft {
        order_draft(customer_id, "Book", Money::from_cents(2990), "2024-01-01").unwrap()
    }

    #[tokio::test]
    async fn test_insert_requires_existing_customer() {
        let db = test_db().await;
        let repo = db.orders();

        let err = repo.insert(&book_draft(99)).await.unwrap_err();
        assert!(
            matches!(err, DbError::NotFound { ref entity, ref id } if entity == "Customer" && id == "99")
        );

        // No order row was created
        assert!(repo.list_with_customers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listing_joins_customer_fields() {
        let db = test_db().await;
        let ana = add_customer(&db, "Ana", "ana@x.com").await;

        let order = db.orders().insert(&book_draft(ana)).await.unwrap();
        assert_eq!(order.id, 1);

        let rows = db.orders().list_with_customers().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].order_id, 1);
        assert_eq!(rows[0].customer_name, "Ana");
        assert_eq!(rows[0].customer_email, "ana@x.com");
        assert_eq!(rows[0].product, "Book");
        assert_eq!(rows[0].amount().to_string(), "29.90");
        assert_eq!(rows[0].date, "2024-01-01");
    }

    #[tokio::test]
    async fn test_listing_is_insertion_ordered() {
        let db = test_db().await;
        let ana = add_customer(&db, "Ana", "ana@x.com").await;
        let repo = db.orders();

        for (product, date) in [("Pen", "2024-03-01"), ("Book", "2024-01-01")] {
            repo.insert(
                &order_draft(ana, product, Money::from_cents(100), date).unwrap(),
            )
            .await
            .unwrap();
        }

        // Insertion order, not date order
        let products: Vec<String> = repo
            .list_with_customers()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.product)
            .collect();
        assert_eq!(products, ["Pen", "Book"]);
    }

    #[tokio::test]
    async fn test_zero_and_negative_amounts_are_stored_as_typed() {
        let db = test_db().await;
        let ana = add_customer(&db, "Ana", "ana@x.com").await;
        let repo = db.orders();

        repo.insert(&order_draft(ana, "Sample", Money::zero(), "2024-01-01").unwrap())
            .await
            .unwrap();
        repo.insert(&order_draft(ana, "Refund", Money::from_cents(-500), "2024-01-02").unwrap())
            .await
            .unwrap();

        let rows = repo.list_with_customers().await.unwrap();
        assert_eq!(rows[0].amount(), Money::zero());
        assert_eq!(rows[1].amount().to_string(), "-5.00");
    }

    #[tokio::test]
    async fn test_deleting_customer_cascades_to_orders() {
        let db = test_db().await;
        let ana = add_customer(&db, "Ana", "ana@x.com").await;
        let bea = add_customer(&db, "Bea", "bea@x.com").await;

        db.orders().insert(&book_draft(ana)).await.unwrap();
        db.orders().insert(&book_draft(ana)).await.unwrap();
        db.orders()
            .insert(&order_draft(bea, "Pen", Money::from_cents(500), "2024-02-02").unwrap())
            .await
            .unwrap();

        assert_eq!(db.orders().count_for_customer(ana).await.unwrap(), 2);

        db.customers().delete(ana).await.unwrap();

        // Only Bea's order survives
        let rows = db.orders().list_with_customers().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].customer_name, "Bea");
        assert_eq!(db.orders().count_for_customer(ana).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_order_is_not_found() {
        let db = test_db().await;
        let err = db.orders().delete(5).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { ref entity, .. } if entity == "Order"));
    }

    /// End-to-end scenario: add Ana, add her Book order, list, delete Ana,
    /// list again.
    #[tokio::test]
    async fn test_ana_book_scenario() {
        let db = test_db().await;

        let ana = db
            .customers()
            .insert(&customer_draft("Ana", "ana@x.com", "123").unwrap())
            .await
            .unwrap();
        assert_eq!(ana.id, 1);

        let order = db
            .orders()
            .insert(&order_draft(ana.id, "Book", "29.90".parse().unwrap(), "2024-01-01").unwrap())
            .await
            .unwrap();
        assert_eq!(order.id, 1);

        let rows = db.orders().list_with_customers().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            (
                rows[0].order_id,
                rows[0].customer_name.as_str(),
                rows[0].product.as_str(),
                rows[0].amount().to_string().as_str(),
                rows[0].date.as_str(),
            ),
            (1, "Ana", "Book", "29.90", "2024-01-01")
        );

        db.customers().delete(ana.id).await.unwrap();
        assert!(db.orders().list_with_customers().await.unwrap().is_empty());
    }
}
