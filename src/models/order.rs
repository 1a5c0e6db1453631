use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::{OrderStatus, PaymentStatus};
use crate::table::{CellValue, Record, RowId};

/// One product line on an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: RowId,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.zip, self.country
        )
    }
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: RowId,
    pub order_number: String,
    pub customer: String,
    pub date: NaiveDate,
    pub total: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub items: Vec<OrderItem>,
    pub shipping_address: Address,
}

impl Record for Order {
    fn id(&self) -> RowId {
        self.id
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "orderNumber" => Some(self.order_number.as_str().into()),
            "customer" => Some(self.customer.as_str().into()),
            "date" => Some(self.date.format("%Y-%m-%d").to_string().into()),
            "total" => Some(self.total.into()),
            "status" => Some(self.status.as_str().into()),
            "paymentStatus" => Some(self.payment_status.as_str().into()),
            _ => None,
        }
    }
}

impl Order {
    /// Still moving through fulfilment
    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            OrderStatus::Pending | OrderStatus::Processing | OrderStatus::Shipped
        )
    }
}
