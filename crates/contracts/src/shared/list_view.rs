//! Generic list-view pipeline: stable sort, text search, categorical
//! filters and pagination for every table page.
//!
//! Each list page used to carry its own copy of this logic; it is unified
//! here as one function over a [`TableRecord`] implementation so the sort
//! and filter rules cannot drift between entities.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sentinel meaning "categorical filter off"
pub const FILTER_ALL: &str = "all";

// ============================================================================
// Specs
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(&self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(column: &str) -> Self {
        Self {
            column: column.to_string(),
            direction: SortDirection::Asc,
        }
    }

    /// Header-click behavior: same column toggles direction, a new column
    /// starts ascending.
    pub fn toggle(&mut self, column: &str) {
        if self.column == column {
            self.direction = self.direction.toggled();
        } else {
            self.column = column.to_string();
            self.direction = SortDirection::Asc;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text query matched case-insensitively against the record's
    /// searchable fields
    pub text: String,
    /// Exact status match, `"all"` = off
    pub status: String,
    /// Exact role match (user listings), `"all"` = off
    pub role: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            text: String::new(),
            status: FILTER_ALL.to_string(),
            role: FILTER_ALL.to_string(),
        }
    }
}

impl FilterState {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    /// True when any filter narrows the view
    pub fn is_active(&self) -> bool {
        !self.text.trim().is_empty() || self.status != FILTER_ALL || self.role != FILTER_ALL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// 0-based page index
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 10,
        }
    }
}

impl PageState {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }
}

// ============================================================================
// Record trait
// ============================================================================
/// What a record type must expose to go through the pipeline. The query
/// passed to `matches_text` is already lowercased and non-empty.
pub trait TableRecord {
    /// Case-insensitive substring match against the entity's searchable
    /// fields; true when any field matches.
    fn matches_text(&self, query: &str) -> bool;

    /// Compare by a named column. `None` for an unknown column — the
    /// pipeline then leaves the input order untouched.
    fn compare_by_column(&self, other: &Self, column: &str) -> Option<Ordering>;

    /// Status value for the categorical filter, if the entity has one
    fn status_key(&self) -> Option<&str> {
        None
    }

    /// Role value for the categorical filter (user listings)
    fn role_key(&self) -> Option<&str> {
        None
    }
}

// ============================================================================
// Result
// ============================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    /// The page slice to render
    pub visible: Vec<T>,
    /// Filtered count before pagination
    pub total: usize,
    /// Visible slice is empty
    pub is_empty: bool,
    /// Nothing matched *because of* active filters — distinct from a
    /// genuinely empty collection
    pub is_not_found: bool,
}

impl<T> ListView<T> {
    pub fn total_pages(&self, page_size: usize) -> usize {
        if self.total == 0 || page_size == 0 {
            1
        } else {
            (self.total + page_size - 1) / page_size
        }
    }
}

// ============================================================================
// Pipeline
// ============================================================================
/// Sort → text filter → categorical filters → paginate. The steps run in
/// this fixed order; the input is never mutated.
///
/// The sort is stable regardless of the underlying primitive: ties (and the
/// unknown-column case) fall back to the original input index, and
/// descending direction reverses the comparison but not the tiebreak.
pub fn apply<T: TableRecord + Clone>(
    records: &[T],
    sort: &SortSpec,
    filters: &FilterState,
    page: &PageState,
) -> ListView<T> {
    let genuinely_empty = records.is_empty();

    // Decorate with the input index so equal keys keep their relative order
    let mut stabilized: Vec<(usize, &T)> = records.iter().enumerate().collect();
    stabilized.sort_by(|(ia, a), (ib, b)| {
        let cmp = a
            .compare_by_column(b, &sort.column)
            .unwrap_or(Ordering::Equal);
        let cmp = match sort.direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        };
        cmp.then(ia.cmp(ib))
    });

    let mut filtered: Vec<&T> = stabilized.into_iter().map(|(_, record)| record).collect();

    let query = filters.text.trim().to_lowercase();
    if !query.is_empty() {
        filtered.retain(|record| record.matches_text(&query));
    }

    if filters.status != FILTER_ALL {
        filtered.retain(|record| record.status_key() == Some(filters.status.as_str()));
    }

    if filters.role != FILTER_ALL {
        filtered.retain(|record| record.role_key() == Some(filters.role.as_str()));
    }

    let total = filtered.len();

    let start = page.page.saturating_mul(page.page_size);
    let end = start.saturating_add(page.page_size).min(total);
    let visible: Vec<T> = if start < total {
        filtered[start..end].iter().map(|r| (*r).clone()).collect()
    } else {
        Vec::new()
    };

    ListView {
        is_empty: visible.is_empty(),
        is_not_found: total == 0 && filters.is_active() && !genuinely_empty,
        visible,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        status: &'static str,
        total_amount: f64,
    }

    impl Row {
        fn new(name: &str, status: &'static str, total_amount: f64) -> Self {
            Self {
                name: name.to_string(),
                status,
                total_amount,
            }
        }
    }

    impl TableRecord for Row {
        fn matches_text(&self, query: &str) -> bool {
            self.name.to_lowercase().contains(query)
        }

        fn compare_by_column(&self, other: &Self, column: &str) -> Option<Ordering> {
            match column {
                "name" => Some(self.name.cmp(&other.name)),
                "totalAmount" => self.total_amount.partial_cmp(&other.total_amount),
                _ => None,
            }
        }

        fn status_key(&self) -> Option<&str> {
            Some(self.status)
        }
    }

    fn clients() -> Vec<Row> {
        vec![
            Row::new("Acme", "Pagado", 100.0),
            Row::new("Bravo", "Parcial", 50.0),
            Row::new("Acme Corp", "Pagado", 100.0),
        ]
    }

    fn no_sort() -> SortSpec {
        SortSpec::asc("")
    }

    #[test]
    fn test_text_filter_case_insensitive_preserves_order() {
        let view = apply(
            &clients(),
            &no_sort(),
            &FilterState::with_text("acme"),
            &PageState::default(),
        );
        let names: Vec<&str> = view.visible.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Acme Corp"]);
        assert!(!view.is_empty);
        assert_eq!(view.total, 2);
    }

    #[test]
    fn test_stable_sort_desc_keeps_relative_order_of_ties() {
        let sales = clients();
        let sort = SortSpec {
            column: "totalAmount".into(),
            direction: SortDirection::Desc,
        };
        let view = apply(&sales, &sort, &FilterState::default(), &PageState::default());
        let names: Vec<&str> = view.visible.iter().map(|r| r.name.as_str()).collect();
        // The two 100s keep their input order; 50 goes last
        assert_eq!(names, vec!["Acme", "Acme Corp", "Bravo"]);
    }

    #[test]
    fn test_stability_survives_direction_toggling() {
        let rows = vec![
            Row::new("x", "Pagado", 1.0),
            Row::new("y", "Pagado", 1.0),
            Row::new("z", "Pagado", 1.0),
        ];
        let mut sort = SortSpec::asc("totalAmount");
        for _ in 0..4 {
            let view = apply(&rows, &sort, &FilterState::default(), &PageState::default());
            let names: Vec<&str> = view.visible.iter().map(|r| r.name.as_str()).collect();
            assert_eq!(names, vec!["x", "y", "z"]);
            sort.toggle("totalAmount");
        }
    }

    #[test]
    fn test_unknown_column_is_noop_sort() {
        let view = apply(
            &clients(),
            &SortSpec::asc("nonexistent"),
            &FilterState::default(),
            &PageState::default(),
        );
        let names: Vec<&str> = view.visible.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Bravo", "Acme Corp"]);
    }

    #[test]
    fn test_categorical_filter_exact_match_composes_with_text() {
        let filters = FilterState {
            text: "acme".into(),
            status: "Pagado".into(),
            role: FILTER_ALL.into(),
        };
        let view = apply(&clients(), &no_sort(), &filters, &PageState::default());
        assert_eq!(view.total, 2);

        let filters = FilterState {
            text: "bravo".into(),
            status: "Pagado".into(),
            role: FILTER_ALL.into(),
        };
        let view = apply(&clients(), &no_sort(), &filters, &PageState::default());
        assert_eq!(view.total, 0);
        assert!(view.is_not_found);
    }

    #[test]
    fn test_pagination_window_and_bounds() {
        let rows: Vec<Row> = (0..7)
            .map(|i| Row::new(&format!("c{}", i), "Pagado", i as f64))
            .collect();

        let view = apply(
            &rows,
            &no_sort(),
            &FilterState::default(),
            &PageState::new(1, 3),
        );
        let names: Vec<&str> = view.visible.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c3", "c4", "c5"]);
        assert_eq!(view.total, 7);
        assert!(view.visible.len() <= 3);

        // Past the last page: empty slice, total intact, not a "not found"
        let view = apply(
            &rows,
            &no_sort(),
            &FilterState::default(),
            &PageState::new(9, 3),
        );
        assert!(view.visible.is_empty());
        assert!(view.is_empty);
        assert!(!view.is_not_found);
        assert_eq!(view.total, 7);
    }

    #[test]
    fn test_not_found_distinct_from_genuinely_empty() {
        // Genuinely empty input: is_empty but never is_not_found
        let view = apply(
            &Vec::<Row>::new(),
            &no_sort(),
            &FilterState::with_text("acme"),
            &PageState::default(),
        );
        assert!(view.is_empty);
        assert!(!view.is_not_found);

        // Filter that matches nothing: both flags
        let view = apply(
            &clients(),
            &no_sort(),
            &FilterState::with_text("zzz"),
            &PageState::default(),
        );
        assert!(view.is_empty);
        assert!(view.is_not_found);

        // No filter, no matches problem: neither
        let view = apply(
            &clients(),
            &no_sort(),
            &FilterState::default(),
            &PageState::default(),
        );
        assert!(!view.is_empty);
        assert!(!view.is_not_found);
    }

    #[test]
    fn test_idempotent_and_input_untouched() {
        let rows = clients();
        let sort = SortSpec::asc("name");
        let filters = FilterState::with_text("a");
        let page = PageState::default();

        let first = apply(&rows, &sort, &filters, &page);
        let second = apply(&rows, &sort, &filters, &page);
        assert_eq!(first, second);
        assert_eq!(rows, clients());
    }

    #[test]
    fn test_total_pages() {
        let view = ListView::<Row> {
            visible: vec![],
            total: 7,
            is_empty: true,
            is_not_found: false,
        };
        assert_eq!(view.total_pages(3), 3);
        assert_eq!(view.total_pages(10), 1);

        let empty = ListView::<Row> {
            visible: vec![],
            total: 0,
            is_empty: true,
            is_not_found: false,
        };
        assert_eq!(empty.total_pages(10), 1);
    }
}
