//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, application title, current user info and
//! the logout action.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        spawn_local(async move {
            let _ = do_logout(set_auth_state).await;
        });
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            // Left section - brand
            <div class="top-header__brand">
                <span class="top-header__title">"Administración Comercial"</span>
            </div>

            // Right section - actions
            <div class="top-header__actions">
                // Sidebar toggle
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Ocultar navegación" } else { "Mostrar navegación" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>

                // User info
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.get().user_info
                            .map(|u| u.username.clone())
                            .unwrap_or_else(|| "Invitado".to_string())}
                    </span>
                </div>

                // Logout
                <button class="top-header__icon-btn" on:click=logout title="Salir">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
