//! Status values and their badge presentation

use serde::{Deserialize, Serialize};

use crate::table::{BadgeVariant, CellContent};

/// Badge variant and label for a status key; unknown keys keep their raw text
pub fn status_badge(status: &str) -> CellContent {
    let (variant, label) = match status {
        "pending" => (BadgeVariant::Warning, "Pending"),
        "processing" => (BadgeVariant::Info, "Processing"),
        "in-transit" => (BadgeVariant::Primary, "In Transit"),
        "delivered" => (BadgeVariant::Success, "Delivered"),
        "cancelled" => (BadgeVariant::Danger, "Cancelled"),
        "in-stock" => (BadgeVariant::Success, "In Stock"),
        "low-stock" => (BadgeVariant::Warning, "Low Stock"),
        "out-of-stock" => (BadgeVariant::Danger, "Out of Stock"),
        "paid" => (BadgeVariant::Success, "Paid"),
        "unpaid" => (BadgeVariant::Danger, "Unpaid"),
        "refunded" => (BadgeVariant::Info, "Refunded"),
        other => return CellContent::badge(other, BadgeVariant::Default),
    };
    CellContent::badge(label, variant)
}

macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $key:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            pub fn all() -> &'static [$name] {
                &[$(Self::$variant),+]
            }

            pub fn badge(&self) -> CellContent {
                status_badge(self.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

status_enum!(
    /// Shipment lifecycle
    ShipmentStatus {
        Pending => "pending",
        InTransit => "in-transit",
        Delivered => "delivered",
        Cancelled => "cancelled",
    }
);

status_enum!(
    /// Order fulfilment status
    OrderStatus {
        Pending => "pending",
        Processing => "processing",
        Shipped => "shipped",
        Delivered => "delivered",
        Cancelled => "cancelled",
    }
);

status_enum!(PaymentStatus {
    Paid => "paid",
    Unpaid => "unpaid",
    Refunded => "refunded",
});

status_enum!(StockStatus {
    InStock => "in-stock",
    LowStock => "low-stock",
    OutOfStock => "out-of-stock",
});

status_enum!(UserStatus {
    Active => "active",
    Inactive => "inactive",
});

status_enum!(UserRole {
    Admin => "admin",
    Manager => "manager",
    Driver => "driver",
});

impl UserRole {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Driver => "Driver",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Tone;

    #[test]
    fn known_statuses_map_to_variants() {
        assert_eq!(
            status_badge("in-transit"),
            CellContent::badge("In Transit", BadgeVariant::Primary)
        );
        assert_eq!(
            StockStatus::OutOfStock.badge(),
            CellContent::badge("Out of Stock", BadgeVariant::Danger)
        );
        assert_eq!(PaymentStatus::Refunded.badge().tone, Tone::Badge(BadgeVariant::Info));
    }

    #[test]
    fn unknown_status_keeps_raw_text() {
        assert_eq!(
            OrderStatus::Shipped.badge(),
            CellContent::badge("shipped", BadgeVariant::Default)
        );
    }

    #[test]
    fn serde_uses_kebab_case_keys() {
        let json = serde_json::to_string(&ShipmentStatus::InTransit).unwrap();
        assert_eq!(json, "\"in-transit\"");
    }
}
