//! Dashboard and analytics figures

use serde::{Deserialize, Serialize};

/// Shipments and orders handled in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyVolume {
    pub month: String,
    pub shipments: u64,
    pub orders: u64,
}

/// Revenue, orders and expenses for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: u64,
    pub orders: u64,
    pub expenses: u64,
}

/// Share of sales per product category, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub value: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Shipment,
    Order,
    Location,
}

/// Entry of the recent activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub time: String,
}

/// Month-over-month change in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend(pub f64);

impl Trend {
    /// Change from `previous` to `current`; none without a base value
    pub fn between(previous: u64, current: u64) -> Option<Self> {
        if previous == 0 {
            return None;
        }
        Some(Self((current as f64 - previous as f64) / previous as f64 * 100.0))
    }

    pub fn is_positive(&self) -> bool {
        self.0 >= 0.0
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+.1}%", self.0)
    }
}

/// Analytics reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "6months")]
    Last6Months,
    #[serde(rename = "1year")]
    LastYear,
}

impl TimeRange {
    pub fn all() -> &'static [TimeRange] {
        &[Self::Last7Days, Self::Last30Days, Self::Last6Months, Self::LastYear]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 Days",
            Self::Last30Days => "Last 30 Days",
            Self::Last6Months => "Last 6 Months",
            Self::LastYear => "Last Year",
        }
    }

    /// Number of monthly points covered by the range
    pub fn months(&self) -> usize {
        match self {
            Self::Last7Days | Self::Last30Days => 1,
            Self::Last6Months => 6,
            Self::LastYear => 12,
        }
    }

    /// Tail of a monthly series covered by this range
    pub fn window<'a, T>(&self, series: &'a [T]) -> &'a [T] {
        let n = self.months().min(series.len());
        &series[series.len() - n..]
    }
}
