use contracts::domain::a001_client::aggregate::Client;
use contracts::shared::list_view::{FilterState, PageState, SortSpec};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ClientsListState {
    pub items: Vec<Client>,
    pub filters: FilterState,
    pub sort: SortSpec,
    pub page: PageState,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_not_found: bool,
    pub is_loaded: bool,
}

impl Default for ClientsListState {
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

pub fn create_state() -> RwSignal<ClientsListState> {
    RwSignal::new(ClientsListState::default())
}
