pub mod inventory;
pub mod metrics;
pub mod order;
pub mod shipment;
pub mod status;
pub mod support;
pub mod user;

pub use inventory::InventoryItem;
pub use metrics::{Activity, ActivityKind, CategoryShare, MonthlyVolume, RevenuePoint, TimeRange, Trend};
pub use order::{Address, Order, OrderItem};
pub use shipment::Shipment;
pub use status::{OrderStatus, PaymentStatus, ShipmentStatus, StockStatus, UserRole, UserStatus};
pub use support::{DocLink, Faq, SupportTicket};
pub use user::User;
