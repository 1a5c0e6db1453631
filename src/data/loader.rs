//! Simulated remote fetch of the mock datasets

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{mock, ResourceKind};
use crate::app::state::AppMessage;
use crate::models::{InventoryItem, Order, Shipment, User};

/// Rows delivered by one fetch
#[derive(Debug, Clone)]
pub enum LoadedData {
    Shipments(Vec<Shipment>),
    Inventory(Vec<InventoryItem>),
    Orders(Vec<Order>),
    Users(Vec<User>),
}

impl LoadedData {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Shipments(_) => ResourceKind::Shipments,
            Self::Inventory(_) => ResourceKind::Inventory,
            Self::Orders(_) => ResourceKind::Orders,
            Self::Users(_) => ResourceKind::Users,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Shipments(rows) => rows.len(),
            Self::Inventory(rows) => rows.len(),
            Self::Orders(rows) => rows.len(),
            Self::Users(rows) => rows.len(),
        }
    }
}

/// Fetch one resource after the configured latency
pub async fn fetch(kind: ResourceKind, latency: Duration) -> LoadedData {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
    match kind {
        ResourceKind::Shipments => LoadedData::Shipments(mock::shipments()),
        ResourceKind::Inventory => LoadedData::Inventory(mock::inventory()),
        ResourceKind::Orders => LoadedData::Orders(mock::orders()),
        ResourceKind::Users => LoadedData::Users(mock::users()),
    }
}

/// Run a fetch in the background and hand the rows to the state manager
pub fn spawn_fetch(
    kind: ResourceKind,
    latency: Duration,
    state_tx: mpsc::Sender<AppMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::debug!("Fetching {}", kind.name());
        let data = fetch(kind, latency).await;
        if let Err(e) = state_tx.send(AppMessage::DatasetLoaded(data)).await {
            tracing::error!("Failed to deliver {} dataset: {}", kind.name(), e);
        }
    })
}

/// Kick off the initial load of every resource
pub fn spawn_initial_load(latency: Duration, state_tx: &mpsc::Sender<AppMessage>) {
    for &kind in ResourceKind::all() {
        spawn_fetch(kind, latency, state_tx.clone());
    }
}
