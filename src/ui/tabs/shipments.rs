//! Shipments page

use tokio::sync::RwLock;

use super::{Resource, SummaryCard};
use crate::app::state::AppState;
use crate::data::{Dataset, ResourceKind};
use crate::models::{Shipment, ShipmentStatus};
use crate::table::{BadgeVariant, Column};
use crate::ui::dialogs::details::DetailSection;

pub type ShipmentsTab = super::resource::ResourcePage<Shipment>;

impl Resource for Shipment {
    const KIND: ResourceKind = ResourceKind::Shipments;
    const TITLE: &'static str = "Shipments";
    const NOUN: &'static str = "Shipment";
    const SEARCH_HINT: &'static str = "Search tracking number, city or customer...";
    const CATEGORY: &'static str = "Status";

    fn dataset(state: &AppState) -> &RwLock<Dataset<Self>> {
        &state.shipments
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::plain("trackingNumber", "Tracking Number").sortable().width(17),
            Column::plain("origin", "Origin").sortable(),
            Column::plain("destination", "Destination").sortable(),
            Column::custom("status", "Status", |s: &Shipment| s.status.badge())
                .sortable()
                .width(12),
            Column::plain("estimatedDelivery", "Est. Delivery").sortable().width(13),
            Column::plain("customer", "Customer").sortable(),
        ]
    }

    fn label(&self) -> String {
        self.tracking_number.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.tracking_number.as_str(),
            self.origin.as_str(),
            self.destination.as_str(),
            self.customer.as_str(),
        ]
    }

    fn category(&self) -> &str {
        self.status.as_str()
    }

    fn categories(_rows: &[Self]) -> Vec<String> {
        ShipmentStatus::all().iter().map(|s| s.as_str().to_string()).collect()
    }

    fn detail_sections(&self) -> Vec<DetailSection> {
        let (lat, lng) = self.coordinates;
        vec![DetailSection::new("Current position")
            .field("Latitude", format!("{:.4}", lat))
            .field("Longitude", format!("{:.4}", lng))]
    }

    fn summary_cards(rows: &[Self]) -> Vec<SummaryCard> {
        let count = |status: ShipmentStatus| rows.iter().filter(|s| s.status == status).count();
        vec![
            SummaryCard {
                title: "Total",
                count: rows.len(),
                variant: BadgeVariant::Default,
            },
            SummaryCard {
                title: "In Transit",
                count: count(ShipmentStatus::InTransit),
                variant: BadgeVariant::Primary,
            },
            SummaryCard {
                title: "Delivered",
                count: count(ShipmentStatus::Delivered),
                variant: BadgeVariant::Success,
            },
        ]
    }
}
