pub mod analytics;
pub mod dashboard;
pub mod inventory;
pub mod orders;
pub mod resource;
pub mod settings;
pub mod shipments;
pub mod support;
pub mod users;

use tokio::sync::RwLock;

use crate::app::state::AppState;
use crate::data::{Dataset, ResourceKind};
use crate::table::{BadgeVariant, Column, Record};
use crate::ui::dialogs::details::DetailSection;

/// Count shown above a resource table
pub struct SummaryCard {
    pub title: &'static str,
    pub count: usize,
    pub variant: BadgeVariant,
}

/// A record type with its own table page
pub trait Resource: Record + Clone + Send + Sync + 'static {
    const KIND: ResourceKind;
    const TITLE: &'static str;
    /// Singular display name, e.g. "Shipment"
    const NOUN: &'static str;
    const SEARCH_HINT: &'static str;
    /// Label of the category filter
    const CATEGORY: &'static str;

    fn dataset(state: &AppState) -> &RwLock<Dataset<Self>>;

    fn columns() -> Vec<Column<Self>>;

    /// Short name used in dialog titles and notifications
    fn label(&self) -> String;

    /// Fields matched by the free-text search
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared against the category filter
    fn category(&self) -> &str;

    /// Category filter options, without the leading "all"
    fn categories(rows: &[Self]) -> Vec<String>;

    /// Extra sections for the details dialog
    fn detail_sections(&self) -> Vec<DetailSection> {
        Vec::new()
    }

    fn summary_cards(_rows: &[Self]) -> Vec<SummaryCard> {
        Vec::new()
    }
}
