use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// A single tab label in the tab bar
#[component]
pub fn Tab(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let key_for_close = StoredValue::new(tab.key.clone());

    let is_active = move || {
        tabs_store.active.get().as_deref() == Some(key.get_value().as_str())
    };

    view! {
        <div
            class="app-tab"
            class:app-tab--active=is_active
            on:click=move |_| tabs_store.activate_tab(&key.get_value())
        >
            <span class="app-tab__title">{tab.title.clone()}</span>
            <button
                class="app-tab__close"
                on:click=move |ev| {
                    ev.stop_propagation();
                    tabs_store.close_tab(&key_for_close.get_value());
                }
            >
                {icon("x")}
            </button>
        </div>
    }
}
