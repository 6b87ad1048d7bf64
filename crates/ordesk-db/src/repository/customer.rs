//! # Customer Repository
//!
//! Database operations for customers.
//!
//! ## Key Operations
//! - CRUD over the `customers` table
//! - Deletion cascades to the customer's orders (schema-level)
//!
//! ## Constraint Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Where Each Failure Comes From                           │
//! │                                                                         │
//! │  insert("Ana", "ana@x.com")                                            │
//! │       │                                                                 │
//! │       ├── email already on file ──► UNIQUE constraint failed:          │
//! │       │                             customers.email                     │
//! │       │                             → DbError::UniqueViolation          │
//! │       ▼                                                                 │
//! │  update(99, ...) / delete(99)                                          │
//! │       │                                                                 │
//! │       └── rows_affected == 0 ─────► DbError::NotFound                   │
//! │                                                                         │
//! │  Empty name/email never reach this layer; ordesk-core validation       │
//! │  rejects them while building the draft.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use ordesk_core::{Customer, CustomerDraft};

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CustomerRepository::new(pool);
///
/// let ana = repo.insert(&draft).await?;
/// let all = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Inserts a new customer and returns the stored row.
    ///
    /// ## Errors
    /// * `DbError::UniqueViolation` - email already registered
    pub async fn insert(&self, draft: &CustomerDraft) -> DbResult<Customer> {
        debug!(name = %draft.name, email = %draft.email, "Inserting customer");

        let result = sqlx::query(
            r#"
            INSERT INTO customers (name, email, phone)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Customer inserted");

        Ok(Customer {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
        })
    }

    /// Lists all customers in insertion order.
    ///
    /// Insertion order means ascending row id; SQLite autoincrement ids
    /// grow monotonically, so this matches creation order.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }

    /// Gets a customer by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Customer))` - Customer found
    /// * `Ok(None)` - No such id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Updates a customer's name, email and phone in place.
    ///
    /// The id is immutable; all three mutable fields are replaced at once.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no customer with this id; nothing is created
    /// * `DbError::UniqueViolation` - new email belongs to another customer
    pub async fn update(&self, id: i64, draft: &CustomerDraft) -> DbResult<Customer> {
        debug!(id, email = %draft.email, "Updating customer");

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = ?1, email = ?2, phone = ?3
            WHERE id = ?4
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id));
        }

        Ok(Customer {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
        })
    }

    /// Deletes a customer by id.
    ///
    /// All orders referencing the customer are removed by the schema's
    /// ON DELETE CASCADE in the same statement's effect.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no customer with this id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting customer");

        let result = sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id));
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
    use ordesk_core::validation::customer_draft;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_list_contains_customer_once() {
        let db = test_db().await;
        let repo = db.customers();

        let draft = customer_draft("Ana", "ana@x.com", "123").unwrap();
        let ana = repo.insert(&draft).await.unwrap();
        assert_eq!(ana.id, 1);

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Ana");
        assert_eq!(all[0].email, "ana@x.com");
        assert_eq!(all[0].phone.as_deref(), Some("123"));
    }

    #[tokio::test]
    async fn test_duplicate_email_fails_and_first_row_survives() {
        let db = test_db().await;
        let repo = db.customers();

        let first = customer_draft("Ana", "ana@x.com", "123").unwrap();
        repo.insert(&first).await.unwrap();

        let second = customer_draft("Other Ana", "ana@x.com", "").unwrap();
        let err = repo.insert(&second).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { ref field } if field.contains("email")));

        // First customer unaffected
        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Ana");
    }

    #[tokio::test]
    async fn test_list_is_insertion_ordered() {
        let db = test_db().await;
        let repo = db.customers();

        for (name, email) in [("Ana", "ana@x.com"), ("Bea", "bea@x.com"), ("Caio", "caio@x.com")] {
            repo.insert(&customer_draft(name, email, "").unwrap())
                .await
                .unwrap();
        }

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Ana", "Bea", "Caio"]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_in_place() {
        let db = test_db().await;
        let repo = db.customers();

        let ana = repo
            .insert(&customer_draft("Ana", "ana@x.com", "123").unwrap())
            .await
            .unwrap();

        let new_draft = customer_draft("Ana Maria", "ana.maria@x.com", "").unwrap();
        let updated = repo.update(ana.id, &new_draft).await.unwrap();
        assert_eq!(updated.id, ana.id);

        let fetched = repo.get_by_id(ana.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Ana Maria");
        assert_eq!(fetched.email, "ana.maria@x.com");
        assert!(fetched.phone.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found_and_creates_nothing() {
        let db = test_db().await;
        let repo = db.customers();

        let draft = customer_draft("Ghost", "ghost@x.com", "").unwrap();
        let err = repo.update(42, &draft).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_to_duplicate_email_fails() {
        let db = test_db().await;
        let repo = db.customers();

        repo.insert(&customer_draft("Ana", "ana@x.com", "").unwrap())
            .await
            .unwrap();
        let bea = repo
            .insert(&customer_draft("Bea", "bea@x.com", "").unwrap())
            .await
            .unwrap();

        let err = repo
            .update(bea.id, &customer_draft("Bea", "ana@x.com", "").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_not_found() {
        let db = test_db().await;
        let err = db.customers().delete(7).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_by_id_absent_is_none() {
        let db = test_db().await;
        assert!(db.customers().get_by_id(1).await.unwrap().is_none());
    }
}
