use contracts::domain::a004_sale::aggregate::Sale;
use contracts::shared::list_view::{FilterState, PageState, SortDirection, SortSpec};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SalesListState {
    pub items: Vec<Sale>,
    pub filters: FilterState,
    pub sort: SortSpec,
    pub page: PageState,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_not_found: bool,
    pub is_loaded: bool,
}

impl Default for SalesListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filters: FilterState::default(),
            // Latest sales first
            sort: SortSpec {
                column: "saleDate".to_string(),
                direction: SortDirection::Desc,
            },
            page: PageState::default(),
            total_count: 0,
            total_pages: 1,
            is_not_found: false,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<SalesListState> {
    RwSignal::new(SalesListState::default())
}
