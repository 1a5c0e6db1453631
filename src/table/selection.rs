//! Row selection (checkbox) model

use std::collections::BTreeSet;

use super::cell::RowId;

/// Header checkbox state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheck {
    Unchecked,
    Partial,
    Checked,
}

impl HeaderCheck {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Unchecked => "[ ]",
            Self::Partial => "[-]",
            Self::Checked => "[x]",
        }
    }
}

/// Set of checked row identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<RowId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with exactly `visible_ids`
    pub fn select_all<I: IntoIterator<Item = RowId>>(&mut self, visible_ids: I) {
        self.ids = visible_ids.into_iter().collect();
    }

    pub fn toggle(&mut self, id: RowId, checked: bool) {
        if checked {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order
    pub fn ids(&self) -> Vec<RowId> {
        self.ids.iter().copied().collect()
    }

    /// Header "select all" checkbox is checked
    pub fn all_selected(&self, visible_count: usize) -> bool {
        all_selected(self.len(), visible_count)
    }

    pub fn header_check(&self, visible_count: usize) -> HeaderCheck {
        if self.all_selected(visible_count) {
            HeaderCheck::Checked
        } else if self.is_empty() {
            HeaderCheck::Unchecked
        } else {
            HeaderCheck::Partial
        }
    }
}

/// Checked iff sizes match and neither is zero
pub fn all_selected(selected: usize, visible: usize) -> bool {
    selected > 0 && selected == visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_then_uncheck_one() {
        let mut sel = Selection::new();
        sel.select_all([1, 2, 3]);
        sel.toggle(2, false);
        assert_eq!(sel.ids(), vec![1, 3]);
    }

    #[test]
    fn select_all_replaces_previous_selection() {
        let mut sel = Selection::new();
        sel.toggle(9, true);
        sel.select_all([1, 2]);
        assert!(!sel.is_selected(9));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn select_all_with_empty_input_clears() {
        let mut sel = Selection::new();
        sel.select_all([4, 5]);
        sel.select_all(Vec::new());
        assert!(sel.is_empty());
    }

    #[test]
    fn toggle_is_idempotent() {
        let mut sel = Selection::new();
        sel.toggle(7, true);
        sel.toggle(7, true);
        assert_eq!(sel.len(), 1);
        sel.toggle(7, false);
        sel.toggle(7, false);
        assert!(sel.is_empty());
    }

    #[test]
    fn header_checked_only_when_counts_match_and_non_zero() {
        let mut sel = Selection::new();
        assert!(!sel.all_selected(0));
        assert_eq!(sel.header_check(3), HeaderCheck::Unchecked);

        sel.select_all([1, 2, 3]);
        assert!(sel.all_selected(3));
        assert_eq!(sel.header_check(3), HeaderCheck::Checked);

        sel.toggle(1, false);
        assert!(!sel.all_selected(3));
        assert_eq!(sel.header_check(3), HeaderCheck::Partial);
    }
}
