//! Fleet demo: sign in, load fleet data, snapshot, log out.

use fleet_demo::{
    create_store, load_vehicle_types, load_vehicles, logout, persistence, select_current_user,
    select_vehicles, set_current_user, CannedApi,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fleet_demo=debug,uniflow_store=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = create_store();
    let api = CannedApi::healthy();

    {
        let render_store = store.clone();
        store.subscribe(move || {
            let state = render_store.state();
            tracing::debug!(
                vehicles = state.vehicle_state.data.len(),
                signed_in = state.auth_state.current_user.is_some(),
                actions = state.activity_state.actions_seen,
                "state changed"
            );
        });
    }

    store.dispatch(set_current_user("ada"))?;
    load_vehicles(&store, &api).await?;
    load_vehicle_types(&store, &api).await?;

    println!(
        "signed in as {:?}, vehicles: {:?}",
        store.select(select_current_user),
        store.select(select_vehicles)
    );

    let saved = persistence::snapshot(&store)?;
    tracing::info!(bytes = saved.len(), "snapshot taken");

    store.dispatch(logout())?;
    println!(
        "after logout: user {:?}, vehicles {:?}",
        store.select(select_current_user),
        store.select(select_vehicles)
    );

    let restored = persistence::restore(&saved)?;
    println!(
        "restored session: user {:?}, vehicles {:?}",
        restored.select(select_current_user),
        restored.select(select_vehicles)
    );

    Ok(())
}
