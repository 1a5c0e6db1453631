use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::StockStatus;
use crate::table::{CellValue, Record, RowId};

/// A stocked product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: RowId,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub reorder_point: u32,
    pub status: StockStatus,
    pub location: String,
    pub last_updated: NaiveDate,
}

impl Record for InventoryItem {
    fn id(&self) -> RowId {
        self.id
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "sku" => Some(self.sku.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            "quantity" => Some(self.quantity.into()),
            "reorderPoint" => Some(self.reorder_point.into()),
            "status" => Some(self.status.as_str().into()),
            "location" => Some(self.location.as_str().into()),
            "lastUpdated" => Some(self.last_updated.format("%Y-%m-%d").to_string().into()),
            _ => None,
        }
    }
}

impl InventoryItem {
    pub fn needs_reorder(&self) -> bool {
        self.quantity <= self.reorder_point
    }
}
