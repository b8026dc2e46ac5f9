//! Walks one full branch cycle against a configured backend: login,
//! snapshot refresh, an aggregated intake, a dispense, a shipment view.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use rust_decimal::Decimal;

use client::dispense::{DispenseContext, Dispenser};
use client::intake::submit_intake;
use client::remote::Credentials;
use client::session::{self, SharedSession, SessionSupervisor};
use client::{Config, HttpRemote, RemoteStore};

use domain::catalog::{ItemKind, StockSnapshot};
use domain::dispensing::CartLine;
use domain::intake::DraftLine;
use domain::shipments::{view, SortOrder, StatusFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let config = Config::from_env();
    let branch_id = std::env::var("DISPENSARY_BRANCH").unwrap_or("branch-1".to_string());
    let remote = HttpRemote::new(&config);

    let credentials = Credentials {
        login: std::env::var("DISPENSARY_LOGIN").unwrap_or("demo".to_string()),
        password: std::env::var("DISPENSARY_PASSWORD").unwrap_or("demo".to_string()),
    };

    let slot: SharedSession = Arc::new(Mutex::new(None));
    let record = session::login(&remote, &credentials, &slot).await?;
    let supervisor = SessionSupervisor::spawn(slot.clone());
    tracing::info!("logged in as {} ({})", record.principal.login, record.principal.role);

    // Mirror the branch catalog
    let mut snapshot = StockSnapshot::new();
    snapshot.replace_all(remote.list_items(Some(&branch_id)).await?);
    tracing::info!("snapshot holds {} items", snapshot.len());

    // Record a small intake with a duplicated row to show the merge
    session::require_valid(&slot)?;
    let lines = vec![
        DraftLine::new(
            ItemKind::Medicine,
            Some("demo-med".to_string()),
            2,
            Some(Decimal::from(10)),
            Some(Decimal::from(15)),
        ),
        DraftLine::new(
            ItemKind::Medicine,
            Some("demo-med".to_string()),
            3,
            Some(Decimal::from(10)),
            Some(Decimal::from(15)),
        ),
    ];
    let receipt = submit_intake(&remote, &lines).await?;
    for (kind, summary) in &receipt.batches {
        tracing::info!("intake recorded for {kind}: {summary}");
    }

    // Refresh and dispense the first available item
    snapshot.replace_all(remote.list_items(Some(&branch_id)).await?);
    let first_item = snapshot.items().next().cloned();
    if let Some(item) = first_item {
        session::require_valid(&slot)?;
        let mut cart = vec![CartLine::new(Some(item.id.clone()), 1)];
        let ctx = DispenseContext {
            patient_id: std::env::var("DISPENSARY_PATIENT").unwrap_or("demo-patient".to_string()),
            employee_id: record.principal.id.clone(),
            branch_id: branch_id.clone(),
        };

        let mut dispenser = Dispenser::new(&remote);
        match dispenser.submit(&mut cart, &mut snapshot, &ctx).await {
            Ok(()) => tracing::info!("dispensed 1 unit of {}", item.name),
            Err(err) => tracing::warn!("dispense failed: {err}"),
        }
    }

    // Newest shipments for this branch
    let shipments = remote.list_shipments(Some(&branch_id)).await?;
    for shipment in view(&shipments, SortOrder::New, StatusFilter::All) {
        tracing::info!(
            "shipment {} [{:?}] {}",
            shipment.id,
            shipment.classification(),
            shipment.effective_date()
        );
    }

    supervisor.shutdown();
    session::logout(&slot);
    Ok(())
}
