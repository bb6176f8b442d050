use crate::domain::a001_client::ui::details::ClientForm;
use crate::domain::a001_client::ui::list::ClientsList;
use crate::domain::a002_product::ui::details::ProductForm;
use crate::domain::a002_product::ui::list::ProductsList;
use crate::domain::a003_order::ui::details::OrderForm;
use crate::domain::a003_order::ui::list::OrdersList;
use crate::domain::a004_sale::ui::details::SaleForm;
use crate::domain::a004_sale::ui::list::SalesList;
use crate::domain::a005_calendar_event::ui::list::CalendarPage;
use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::system::auth::guard::RequireRoles;
use crate::system::users::ui::details::{AccountPage, CreateUserPage};
use crate::system::users::ui::list::UsersListPage;
use contracts::shared::access::Role;
use leptos::prelude::*;

/// Content for a single opened tab. Stays mounted while the tab is open so
/// page state survives tab switches; only the active one is displayed.
#[component]
fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = StoredValue::new(tab.key.clone());

    let is_active = move || {
        tabs_store.active.get().as_deref() == Some(tab_key.get_value().as_str())
    };

    let content = match tab.key.as_str() {
        "sales_list" => view! {
            <RequireRoles roles=vec![Role::Admin, Role::User]>
                <SalesList />
            </RequireRoles>
        }
        .into_any(),
        "sales_new" => view! {
            <RequireRoles roles=vec![Role::Admin, Role::User]>
                <SaleForm />
            </RequireRoles>
        }
        .into_any(),
        "clients_list" => view! {
            <RequireRoles roles=vec![Role::Admin, Role::User]>
                <ClientsList />
            </RequireRoles>
        }
        .into_any(),
        "clients_new" => view! {
            <RequireRoles roles=vec![Role::Admin, Role::User]>
                <ClientForm />
            </RequireRoles>
        }
        .into_any(),
        "orders_list" => view! {
            <RequireRoles roles=vec![Role::Admin, Role::User]>
                <OrdersList />
            </RequireRoles>
        }
        .into_any(),
        "orders_new" => view! {
            <RequireRoles roles=vec![Role::Admin, Role::User]>
                <OrderForm />
            </RequireRoles>
        }
        .into_any(),
        "products_list" => view! {
            <RequireRoles roles=vec![Role::Admin, Role::User]>
                <ProductsList />
            </RequireRoles>
        }
        .into_any(),
        "products_new" => view! {
            <RequireRoles roles=vec![Role::Admin, Role::User]>
                <ProductForm />
            </RequireRoles>
        }
        .into_any(),
        "users_list" => view! { <UsersListPage /> }.into_any(),
        "users_new" => view! { <CreateUserPage /> }.into_any(),
        "account" => view! { <AccountPage /> }.into_any(),
        "calendar" => view! { <CalendarPage /> }.into_any(),
        _ => view! { <div class="page">"Página no encontrada"</div> }.into_any(),
    };

    view! {
        <div class="app-tab-page" style:display=move || if is_active() { "block" } else { "none" }>
            {content}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="app-tabs__bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| {
                    view! { <TabComponent tab=tab tabs_store=tabs_store /> }
                }
            />
        </div>
        <div class="app-tabs__content">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| {
                    view! { <TabPage tab=tab tabs_store=tabs_store /> }
                }
            />
        </div>
    }
}
