//! # Customer Menu
//!
//! The customer management state: add, list, update, delete.
//!
//! ## Flows (recovered from the operator's habits)
//! - Update and delete first print the current customer list so the
//!   operator can pick an id by sight.
//! - Update shows the current value of each field in its prompt.
//! - Delete asks for confirmation and says how many orders the cascade
//!   will take with it.

use ordesk_core::validation::customer_draft;
use ordesk_core::CoreError;
use ordesk_db::Database;

use super::{report, MenuState};
use crate::error::AppError;
use crate::prompt;

/// Runs the customer menu until the operator goes back.
pub async fn run(db: &Database) -> Result<MenuState, AppError> {
    loop {
        println!();
        println!("--- Customer Management ---");
        println!("1. Add Customer");
        println!("2. List Customers");
        println!("3. Update Customer");
        println!("4. Delete Customer");
        println!("0. Back to Main Menu");

        let Some(choice) = prompt::read_line("Choose an option: ")? else {
            return Ok(MenuState::Main);
        };

        match prompt::parse_selection(&choice) {
            Ok(1) => report(add(db).await)?,
            Ok(2) => report(list(db).await.map(|_| ()))?,
            Ok(3) => report(update(db).await)?,
            Ok(4) => report(delete(db).await)?,
            Ok(0) => return Ok(MenuState::Main),
            Ok(_) => println!("Invalid option. Try again."),
            Err(err) => report(Err(err))?,
        }
    }
}

/// Prompts for the fields of a new customer and inserts it.
async fn add(db: &Database) -> Result<(), AppError> {
    let Some(name) = prompt::read_line("Name: ")? else {
        return Ok(());
    };
    let Some(email) = prompt::read_line("Email: ")? else {
        return Ok(());
    };
    let Some(phone) = prompt::read_line("Phone (optional): ")? else {
        return Ok(());
    };

    let draft = customer_draft(&name, &email, &phone)?;
    let customer = db.customers().insert(&draft).await?;

    println!("Customer '{}' added (id: {}).", customer.name, customer.id);
    Ok(())
}

/// Prints all customers. Returns whether there was anything to print,
/// so update/delete (and order creation) can bail out of an empty
/// database early.
pub(crate) async fn list(db: &Database) -> Result<bool, AppError> {
    let customers = db.customers().list().await?;

    if customers.is_empty() {
        println!("No customers on file.");
        return Ok(false);
    }

    println!();
    println!("--- Customers ---");
    for c in &customers {
        println!(
            "ID: {} | Name: {} | Email: {} | Phone: {}",
            c.id,
            c.name,
            c.email,
            c.phone.as_deref().unwrap_or("-")
        );
    }
    println!("-----------------");

    Ok(true)
}

/// Prompts for an id and replacement fields, then updates the customer.
async fn update(db: &Database) -> Result<(), AppError> {
    if !list(db).await? {
        return Ok(());
    }

    let Some(id_input) = prompt::read_line("Id of the customer to update: ")? else {
        return Ok(());
    };
    let id = prompt::parse_id(&id_input, "customer")?;

    // Fetch first: tells the operator "not found" before they type three
    // fields, and lets each prompt show the current value.
    let current = db
        .customers()
        .get_by_id(id)
        .await?
        .ok_or(CoreError::CustomerNotFound(id))?;

    let Some(name) = prompt::read_line(&format!("New name (current: {}): ", current.name))? else {
        return Ok(());
    };
    let Some(email) = prompt::read_line(&format!("New email (current: {}): ", current.email))?
    else {
        return Ok(());
    };
    let Some(phone) = prompt::read_line(&format!(
        "New phone (current: {}): ",
        current.phone.as_deref().unwrap_or("-")
    ))?
    else {
        return Ok(());
    };

    let draft = customer_draft(&name, &email, &phone)?;
    db.customers().update(id, &draft).await?;

    println!("Customer {} updated.", id);
    Ok(())
}

/// Prompts for an id, confirms, and deletes the customer (orders cascade).
async fn delete(db: &Database) -> Result<(), AppError> {
    if !list(db).await? {
        return Ok(());
    }

    let Some(id_input) = prompt::read_line("Id of the customer to delete: ")? else {
        return Ok(());
    };
    let id = prompt::parse_id(&id_input, "customer")?;

    let order_count = db.orders().count_for_customer(id).await?;
    let Some(answer) = prompt::read_line(&format!(
        "Delete customer {} and their {} order(s)? (y/n): ",
        id, order_count
    ))?
    else {
        return Ok(());
    };

    if !prompt::is_yes(&answer) {
        println!("Cancelled.");
        return Ok(());
    }

    db.customers().delete(id).await?;

    println!("Customer {} deleted (orders removed by cascade).", id);
    Ok(())
}
