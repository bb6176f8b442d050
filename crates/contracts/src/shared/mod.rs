//! Pure shared logic consumed by both frontend and backend

pub mod access;
pub mod list_view;

pub use access::{can_access, filter_menu, MenuItem, MenuSection, Role};
pub use list_view::{
    FilterState, ListView, PageState, SortDirection, SortSpec, TableRecord, FILTER_ALL,
};
