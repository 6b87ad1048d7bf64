//! # Order Menu
//!
//! The order management state: add, list (joined to customers), delete.
//!
//! ## Flows
//! - Adding an order first lists customers so the operator can pick the
//!   owning customer's id; an empty date defaults to today.
//! - The listing prints each order with its customer and a grand total.

use ordesk_core::validation::order_draft;
use ordesk_core::Money;
use ordesk_db::Database;

use super::{customer, report, MenuState};
use crate::error::AppError;
use crate::prompt;

/// Runs the order menu until the operator goes back.
pub async fn run(db: &Database) -> Result<MenuState, AppError> {
    loop {
        println!();
        println!("--- Order Management ---");
        println!("1. Add Order");
        println!("2. List Orders (with Customers)");
        println!("3. Delete Order");
        println!("0. Back to Main Menu");

        let Some(choice) = prompt::read_line("Choose an option: ")? else {
            return Ok(MenuState::Main);
        };

        match prompt::parse_selection(&choice) {
            Ok(1) => report(add(db).await)?,
            Ok(2) => report(list(db).await.map(|_| ()))?,
            Ok(3) => report(delete(db).await)?,
            Ok(0) => return Ok(MenuState::Main),
            Ok(_) => println!("Invalid option. Try again."),
            Err(err) => report(Err(err))?,
        }
    }
}

/// Prompts for the fields of a new order and inserts it.
///
/// The customer must exist; a dangling id comes back from the repository
/// as NotFound and is printed like any other recoverable error.
async fn add(db: &Database) -> Result<(), AppError> {
    println!("Select the customer for the order:");
    if !customer::list(db).await? {
        return Ok(());
    }

    let Some(id_input) = prompt::read_line("Customer id: ")? else {
        return Ok(());
    };
    let customer_id = prompt::parse_id(&id_input, "customer")?;

    let Some(product) = prompt::read_line("Product: ")? else {
        return Ok(());
    };
    let Some(amount_input) = prompt::read_line("Amount (e.g. 49.90): ")? else {
        return Ok(());
    };
    let amount = prompt::parse_amount(&amount_input)?;

    let today = prompt::today();
    let Some(date_input) = prompt::read_line(&format!("Date (default: {}): ", today))? else {
        return Ok(());
    };
    let date = if date_input.is_empty() {
        today
    } else {
        date_input
    };

    let draft = order_draft(customer_id, &product, amount, &date)?;
    let order = db.orders().insert(&draft).await?;

    println!("Order '{}' added (id: {}).", order.product, order.id);
    Ok(())
}

/// Prints all orders with their customers and a grand total.
/// Returns whether there was anything to print.
async fn list(db: &Database) -> Result<bool, AppError> {
    let rows = db.orders().list_with_customers().await?;

    if rows.is_empty() {
        println!("No orders on file.");
        return Ok(false);
    }

    println!();
    println!("--- Orders (with Customers) ---");
    for row in &rows {
        println!(
            "Order #{} | {} | R$ {} | {}",
            row.order_id,
            row.product,
            row.amount(),
            row.date
        );
        println!(
            "  -> Customer: {} ({})",
            row.customer_name, row.customer_email
        );
    }

    let total: Money = rows.iter().map(|r| r.amount()).sum();
    println!("-------------------------------");
    println!("{} order(s), total R$ {}", rows.len(), total);

    Ok(true)
}

/// Prompts for an id and deletes the order.
async fn delete(db: &Database) -> Result<(), AppError> {
    if !list(db).await? {
        return Ok(());
    }

    let Some(id_input) = prompt::read_line("Id of the order to delete: ")? else {
        return Ok(());
    };
    let id = prompt::parse_id(&id_input, "order")?;

    db.orders().delete(id).await?;

    println!("Order {} deleted.", id);
    Ok(())
}
