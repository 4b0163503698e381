//! Counter example binary
//!
//! Demonstrates the uniflow store with a single counter slice.

use anyhow::Result;
use counter_demo::{decrease, increase, select_count, CounterReducer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uniflow_store::Store;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "counter_demo=debug,uniflow_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Counter Example: uniflow ===\n");

    let store = Store::new(CounterReducer);

    // A listener re-reads the count after every dispatch, the way a UI
    // layer would schedule a re-render.
    {
        let store = store.clone();
        store.clone().subscribe(move || {
            tracing::debug!(count = store.select(select_count), "state changed");
        });
    }

    println!("Initial count: {}", store.select(select_count));

    for _ in 0..3 {
        println!("\n>>> Dispatching: Increase");
        store.dispatch(increase())?;
        println!("Count: {}", store.select(select_count));
    }

    println!("\n>>> Dispatching: Decrease");
    store.dispatch(decrease())?;
    println!("Count: {}", store.select(select_count));

    println!("\nKey concepts demonstrated:");
    println!("  • State: CounterState (slice data)");
    println!("  • Action: CounterAction (intents)");
    println!("  • Reducer: pure function (state, action) → new state");
    println!("  • Store: dispatch / state / subscribe");
    println!("  • Selector: pure read projection");

    Ok(())
}
