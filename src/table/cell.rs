//! Row records and cell values

use std::cmp::Ordering;
use std::fmt;

/// Unique row identifier
pub type RowId = u64;

/// A record that can be displayed as one table line
pub trait Record {
    fn id(&self) -> RowId;

    /// Raw value of a named field, `None` if the record has no such field
    fn field(&self, key: &str) -> Option<CellValue>;
}

/// Raw field value used for display and natural ordering
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Natural ordering: numeric when both sides are numbers, lexicographic otherwise
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            _ => self.to_string().cmp(&other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

/// Badge color variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
}

/// How a rendered cell should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Alert,
    Badge(BadgeVariant),
}

/// Display-ready cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellContent {
    pub text: String,
    pub tone: Tone,
}

impl CellContent {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }

    pub fn alert(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Alert,
        }
    }

    pub fn badge(text: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Badge(variant),
        }
    }

    pub fn empty() -> Self {
        Self::plain("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_numerically() {
        let a = CellValue::Number(9.0);
        let b = CellValue::Number(10.0);
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
    }

    #[test]
    fn nan_sorts_consistently() {
        let nan = CellValue::Number(f64::NAN.abs());
        let one = CellValue::Number(1.0);
        assert_eq!(nan.natural_cmp(&one), Ordering::Greater);
        assert_eq!(one.natural_cmp(&nan), Ordering::Less);
        assert_eq!(nan.natural_cmp(&nan), Ordering::Equal);

        let mut values = vec![nan.clone(), one.clone(), CellValue::Number(-2.0), nan, one];
        values.sort_by(|a, b| a.natural_cmp(b));
        let shown: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        assert_eq!(shown, ["-2", "1", "1", "NaN", "NaN"]);
    }

    #[test]
    fn mixed_values_compare_as_text() {
        // "10" < "9" lexicographically
        let a = CellValue::Number(10.0);
        let b = CellValue::text("9");
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
    }

    #[test]
    fn whole_numbers_display_without_fraction() {
        assert_eq!(CellValue::Number(150.0).to_string(), "150");
        assert_eq!(CellValue::Number(12.5).to_string(), "12.5");
    }
}
