//! In-memory datasets and the simulated data source

pub mod loader;
pub mod mock;

/// Resources backed by a table page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Shipments,
    Inventory,
    Orders,
    Users,
}

impl ResourceKind {
    pub fn all() -> &'static [ResourceKind] {
        &[Self::Shipments, Self::Inventory, Self::Orders, Self::Users]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Shipments => "shipments",
            Self::Inventory => "inventory",
            Self::Orders => "orders",
            Self::Users => "users",
        }
    }
}

/// Rows of one resource plus load bookkeeping
#[derive(Debug, Clone)]
pub struct Dataset<R> {
    rows: Vec<R>,
    loaded: bool,
    revision: u64,
}

impl<R> Default for Dataset<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            loaded: false,
            revision: 0,
        }
    }
}

impl<R> Dataset<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Bumped on every change so readers can skip unchanged data
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn replace(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.loaded = true;
        self.revision += 1;
    }

    /// Keep the current rows but flag a refetch in progress
    pub fn mark_loading(&mut self) {
        self.loaded = false;
        self.revision += 1;
    }
}
