use contracts::shared::list_view::{FilterState, PageState, SortSpec};
use contracts::system::users::User;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub items: Vec<User>,
    pub filters: FilterState,
    pub sort: SortSpec,
    pub page: PageState,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_not_found: bool,
    pub is_loaded: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filters: FilterState::default(),
            sort: SortSpec::asc("displayName"),
            page: PageState::default(),
            total_count: 0,
            total_pages: 1,
            is_not_found: false,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}
