use contracts::domain::a003_order::aggregate::Order;
use contracts::shared::list_view::{FilterState, PageState, SortDirection, SortSpec};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct OrdersListState {
    pub items: Vec<Order>,
    pub filters: FilterState,
    pub sort: SortSpec,
    pub page: PageState,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_not_found: bool,
    pub is_loaded: bool,
}

impl Default for OrdersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filters: FilterState::default(),
            // Upcoming deliveries first
            sort: SortSpec {
                column: "deliveryDate".to_string(),
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

pub fn create_state() -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::default())
}
