//! Todo example binary
//!
//! Mirrors a classic state-container walkthrough: add a few items, finish
//! one, drop one, and read a description back through a selector.

use anyhow::Result;
use chrono::Utc;
use todo_demo::{
    add_item, remove_item, select_open_count, set_done, todo_description, TodoReducer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uniflow_store::Store;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_demo=debug,uniflow_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todo Example: uniflow ===\n");

    let store = Store::new(TodoReducer);

    // The UI layer's render callback.
    {
        let store = store.clone();
        store.clone().subscribe(move || {
            println!("  [render] open items: {}", store.select(select_open_count));
        });
    }

    // The caller owns identity and time; the reducer only transforms state.
    let mut next_id = 1_u64;
    let mut fresh_id = || {
        let id = next_id;
        next_id += 1;
        id
    };

    println!(">>> Adding three items");
    let rice = fresh_id();
    store.dispatch(add_item(rice, "Buy rice", Utc::now()))?;
    let meat = fresh_id();
    store.dispatch(add_item(meat, "Buy meat", Utc::now()))?;
    let cheese = fresh_id();
    store.dispatch(add_item(cheese, "Buy cheese", Utc::now()))?;

    println!("\n>>> Removing item {cheese}");
    store.dispatch(remove_item(cheese))?;

    println!("\n>>> Finishing item {meat}");
    store.dispatch(set_done(meat))?;
    tracing::debug!(open = store.select(select_open_count), "list settled");

    println!(
        "\nDescription of item {meat}: {:?}",
        store.select(todo_description(meat))
    );
    println!(
        "Description of a missing item: {:?}",
        store.select(todo_description(999))
    );

    Ok(())
}
