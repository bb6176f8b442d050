use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::list_view::{FilterState, PageState, SortSpec};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductsListState {
    pub items: Vec<Product>,
    pub filters: FilterState,
    pub sort: SortSpec,
    pub page: PageState,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_not_found: bool,
    pub is_loaded: bool,
}

impl Default for ProductsListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filters: FilterState::default(),
            sort: SortSpec::asc("name"),
            page: PageState::default(),
            total_count: 0,
            total_pages: 1,
            is_not_found: false,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ProductsListState> {
    RwSignal::new(ProductsListState::default())
}
