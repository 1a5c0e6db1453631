//! Application state management

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, RwLock};

use crate::data::loader::{spawn_fetch, LoadedData};
use crate::data::{Dataset, ResourceKind};
use crate::models::{InventoryItem, Order, Shipment, SupportTicket, User};

/// Messages for state updates
#[derive(Debug)]
pub enum AppMessage {
    // Data source
    DatasetLoaded(LoadedData),
    ReloadRequested { kind: ResourceKind },

    // Support
    TicketSubmitted { ticket: SupportTicket },
}

/// UI update signals
#[derive(Debug, Clone)]
pub enum UiUpdateSignal {
    DatasetUpdated(ResourceKind),
    TicketSubmitted { reference: String },
}

/// Central application state
pub struct AppState {
    pub shipments: RwLock<Dataset<Shipment>>,
    pub inventory: RwLock<Dataset<InventoryItem>>,
    pub orders: RwLock<Dataset<Order>>,
    pub users: RwLock<Dataset<User>>,
    pub tickets: RwLock<Vec<SupportTicket>>,
    pub ui_update_tx: broadcast::Sender<UiUpdateSignal>,

    // Configuration
    pub fetch_latency: Duration,
}

impl AppState {
    pub fn new(ui_update_tx: broadcast::Sender<UiUpdateSignal>, fetch_latency: Duration) -> Self {
        Self {
            shipments: RwLock::new(Dataset::new()),
            inventory: RwLock::new(Dataset::new()),
            orders: RwLock::new(Dataset::new()),
            users: RwLock::new(Dataset::new()),
            tickets: RwLock::new(Vec::new()),
            ui_update_tx,
            fetch_latency,
        }
    }

    pub async fn store(&self, data: LoadedData) {
        match data {
            LoadedData::Shipments(rows) => self.shipments.write().await.replace(rows),
            LoadedData::Inventory(rows) => self.inventory.write().await.replace(rows),
            LoadedData::Orders(rows) => self.orders.write().await.replace(rows),
            LoadedData::Users(rows) => self.users.write().await.replace(rows),
        }
    }

    pub async fn mark_loading(&self, kind: ResourceKind) {
        match kind {
            ResourceKind::Shipments => self.shipments.write().await.mark_loading(),
            ResourceKind::Inventory => self.inventory.write().await.mark_loading(),
            ResourceKind::Orders => self.orders.write().await.mark_loading(),
            ResourceKind::Users => self.users.write().await.mark_loading(),
        }
    }

    /// Row count of a dataset without waiting on a writer
    pub fn try_count(&self, kind: ResourceKind) -> Option<usize> {
        match kind {
            ResourceKind::Shipments => self.shipments.try_read().ok().map(|d| d.len()),
            ResourceKind::Inventory => self.inventory.try_read().ok().map(|d| d.len()),
            ResourceKind::Orders => self.orders.try_read().ok().map(|d| d.len()),
            ResourceKind::Users => self.users.try_read().ok().map(|d| d.len()),
        }
    }
}

/// Run the state manager task
pub async fn run_state_manager(
    state: Arc<AppState>,
    mut rx: mpsc::Receiver<AppMessage>,
    state_tx: mpsc::Sender<AppMessage>,
    ui_update_tx: broadcast::Sender<UiUpdateSignal>,
) {
    tracing::info!("State manager started");

    while let Some(msg) = rx.recv().await {
        match msg {
            AppMessage::DatasetLoaded(data) => {
                let kind = data.kind();
                tracing::info!("Loaded {} {}", data.len(), kind.name());
                state.store(data).await;
                let _ = ui_update_tx.send(UiUpdateSignal::DatasetUpdated(kind));
            }

            AppMessage::ReloadRequested { kind } => {
                tracing::info!("Reloading {}", kind.name());
                state.mark_loading(kind).await;
                let _ = ui_update_tx.send(UiUpdateSignal::DatasetUpdated(kind));
                spawn_fetch(kind, state.fetch_latency, state_tx.clone());
            }

            AppMessage::TicketSubmitted { ticket } => {
                let reference = ticket.short_reference();
                tracing::info!("Support ticket {} submitted: {}", reference, ticket.subject);
                state.tickets.write().await.push(ticket);
                let _ = ui_update_tx.send(UiUpdateSignal::TicketSubmitted { reference });
            }
        }
    }

    tracing::info!("State manager stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;

    fn setup() -> (
        Arc<AppState>,
        mpsc::Sender<AppMessage>,
        broadcast::Receiver<UiUpdateSignal>,
    ) {
        let (ui_tx, ui_rx) = broadcast::channel(16);
        let state = Arc::new(AppState::new(ui_tx.clone(), Duration::ZERO));
        let (tx, rx) = mpsc::channel(16);
        tokio::spawn(run_state_manager(state.clone(), rx, tx.clone(), ui_tx));
        (state, tx, ui_rx)
    }

    #[tokio::test]
    async fn loaded_dataset_is_stored_and_signalled() {
        let (state, tx, mut ui_rx) = setup();
        tx.send(AppMessage::DatasetLoaded(LoadedData::Shipments(mock::shipments())))
            .await
            .unwrap();

        match ui_rx.recv().await.unwrap() {
            UiUpdateSignal::DatasetUpdated(kind) => assert_eq!(kind, ResourceKind::Shipments),
            other => panic!("unexpected signal: {:?}", other),
        }
        let shipments = state.shipments.read().await;
        assert!(shipments.is_loaded());
        assert_eq!(shipments.len(), mock::shipments().len());
    }

    #[tokio::test]
    async fn reload_marks_loading_then_refetches() {
        let (state, tx, mut ui_rx) = setup();
        tx.send(AppMessage::ReloadRequested { kind: ResourceKind::Users })
            .await
            .unwrap();

        // one signal for the loading flag, one for the fresh rows
        for _ in 0..2 {
            match ui_rx.recv().await.unwrap() {
                UiUpdateSignal::DatasetUpdated(kind) => assert_eq!(kind, ResourceKind::Users),
                other => panic!("unexpected signal: {:?}", other),
            }
        }
        assert!(state.users.read().await.is_loaded());
    }

    #[tokio::test]
    async fn tickets_are_recorded() {
        let (state, tx, mut ui_rx) = setup();
        let ticket = SupportTicket::new("Damaged box", "Arrived crushed");
        let expected = ticket.short_reference();
        tx.send(AppMessage::TicketSubmitted { ticket }).await.unwrap();

        match ui_rx.recv().await.unwrap() {
            UiUpdateSignal::TicketSubmitted { reference } => assert_eq!(reference, expected),
            other => panic!("unexpected signal: {:?}", other),
        }
        assert_eq!(state.tickets.read().await.len(), 1);
    }
}
