use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::ShipmentStatus;
use crate::table::{CellValue, Record, RowId};

/// A tracked shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: RowId,
    pub tracking_number: String,
    pub origin: String,
    pub destination: String,
    pub status: ShipmentStatus,
    pub estimated_delivery: NaiveDate,
    pub customer: String,
    /// Latitude, longitude of the current position
    pub coordinates: (f64, f64),
}

impl Record for Shipment {
    fn id(&self) -> RowId {
        self.id
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "trackingNumber" => Some(self.tracking_number.as_str().into()),
            "origin" => Some(self.origin.as_str().into()),
            "destination" => Some(self.destination.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "estimatedDelivery" => Some(self.estimated_delivery.format("%Y-%m-%d").to_string().into()),
            "customer" => Some(self.customer.as_str().into()),
            _ => None,
        }
    }
}
