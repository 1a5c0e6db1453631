//! Inventory page

use std::collections::BTreeSet;

use tokio::sync::RwLock;

use super::Resource;
use crate::app::state::AppState;
use crate::data::{Dataset, ResourceKind};
use crate::models::InventoryItem;
use crate::table::{CellContent, Column};
use crate::ui::dialogs::details::DetailSection;

pub type InventoryTab = super::resource::ResourcePage<InventoryItem>;

/// Quantity at or below the reorder point is shown in the alert tone
fn quantity_cell(item: &InventoryItem) -> CellContent {
    if item.needs_reorder() {
        CellContent::alert(item.quantity.to_string())
    } else {
        CellContent::plain(item.quantity.to_string())
    }
}

impl Resource for InventoryItem {
    const KIND: ResourceKind = ResourceKind::Inventory;
    const TITLE: &'static str = "Inventory";
    const NOUN: &'static str = "Item";
    const SEARCH_HINT: &'static str = "Search SKU, name or location...";
    const CATEGORY: &'static str = "Category";

    fn dataset(state: &AppState) -> &RwLock<Dataset<Self>> {
        &state.inventory
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::plain("sku", "SKU").sortable().width(10),
            Column::plain("name", "Name").sortable(),
            Column::plain("category", "Category").sortable().width(12),
            Column::custom("quantity", "Quantity", quantity_cell).sortable().width(9),
            Column::custom("status", "Status", |i: &InventoryItem| i.status.badge())
                .sortable()
                .width(13),
            Column::plain("location", "Location").sortable().width(12),
            Column::plain("lastUpdated", "Last Updated").sortable().width(12),
        ]
    }

    fn label(&self) -> String {
        format!("{} ({})", self.name, self.sku)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.sku.as_str(), self.name.as_str(), self.location.as_str()]
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn categories(rows: &[Self]) -> Vec<String> {
        rows.iter()
            .map(|item| item.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn detail_sections(&self) -> Vec<DetailSection> {
        let stock = DetailSection::new("Stock")
            .field("Reorder point", self.reorder_point.to_string())
            .cell("On hand", quantity_cell(self));
        let stock = if self.needs_reorder() {
            stock.cell("Action", CellContent::alert("Reorder required"))
        } else {
            stock
        };
        vec![stock]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;
    use crate::table::Tone;

    #[test]
    fn low_quantity_uses_alert_tone() {
        let items = mock::inventory();
        for item in &items {
            let tone = quantity_cell(item).tone;
            assert_eq!(tone == Tone::Alert, item.quantity <= item.reorder_point);
        }
        assert!(items.iter().any(|i| i.needs_reorder()));
    }

    #[test]
    fn categories_are_unique_and_sorted() {
        let categories = InventoryItem::categories(&mock::inventory());
        let mut sorted = categories.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(categories, sorted);
        assert!(!categories.is_empty());
    }
}
