use contracts::shared::access::{can_access, Role};
use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires authentication.
/// Shows fallback if not authenticated.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <div class="page">"Sesión no iniciada."</div> }
        >
            {children()}
        </Show>
    }
}

/// Component that requires one of the given roles.
///
/// Uses the same `can_access` policy as the navigation filter, so a page
/// can never be reachable that the menu would hide. The fallback mirrors
/// the classic "Permission Denied" panel.
#[component]
pub fn RequireRoles(roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let allowed = StoredValue::new(roles);

    view! {
        <Show
            when=move || {
                let state = auth_state.get();
                let role = state
                    .user_info
                    .as_ref()
                    .map(|u| u.role)
                    .unwrap_or(Role::Guest);
                state.access_token.is_some()
                    && allowed.with_value(|roles| can_access(Some(roles), role))
            }
            fallback=|| view! {
                <div class="page">
                    <div class="alert alert--error">
                        <strong>"Permiso denegado"</strong>
                        <p>"No tiene permiso para acceder a esta página"</p>
                    </div>
                </div>
            }
        >
            {children()}
        </Show>
    }
}

/// Component that requires admin privileges
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    view! {
        <RequireRoles roles=vec![Role::Admin]>
            {children()}
        </RequireRoles>
    }
}
