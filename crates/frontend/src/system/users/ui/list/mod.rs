mod state;

pub use state::UsersListState;

use contracts::shared::access::Role;
use contracts::shared::list_view::{self, FILTER_ALL};
use contracts::system::users::{User, UserStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;
use state::create_state;

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let state = create_state();
    let all_users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing_user: RwSignal<Option<User>> = RwSignal::new(None);

    let refresh_view = move || {
        let data = all_users.get_untracked();
        state.update(|s| {
            let mut view = list_view::apply(&data, &s.sort, &s.filters, &s.page);
            let total_pages = view.total_pages(s.page.page_size);
            if s.page.page >= total_pages {
                // Page ran past the last filtered page; clamp and redo the slice
                s.page.page = total_pages.saturating_sub(1);
                view = list_view::apply(&data, &s.sort, &s.filters, &s.page);
            }
            s.total_count = view.total;
            s.total_pages = total_pages;
            s.is_not_found = view.is_not_found;
            s.items = view.visible;
        });
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => {
                    all_users.set(data);
                    state.update(|s| {
                        s.page.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar los usuarios: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    // Any filter change resets to the first page; sort and page changes
    // leave filters alone
    let apply_text_filter = move |text: String| {
        state.update(|s| {
            s.filters.text = text;
            s.page.page = 0;
        });
        refresh_view();
    };

    let apply_role_filter = move |role: String| {
        state.update(|s| {
            s.filters.role = role;
            s.page.page = 0;
        });
        refresh_view();
    };

    let apply_status_filter = move |status: String| {
        state.update(|s| {
            s.filters.status = status;
            s.page.page = 0;
        });
        refresh_view();
    };

    let toggle_sort = move |column: &'static str| {
        move |_| {
            state.update(|s| s.sort.toggle(column));
            refresh_view();
        }
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page.page = page);
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page.page_size = size;
            s.page.page = 0;
        });
        refresh_view();
    };

    // Optimistic delete: drop the row locally, no refetch
    let delete_row = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("¿Eliminar este usuario?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_user(&id).await {
                Ok(()) => {
                    all_users.update(|users| users.retain(|u| u.id != id));
                    refresh_view();
                }
                Err(e) => set_error.set(Some(format!("No se pudo eliminar: {}", e))),
            }
        });
    };

    let text_filter = Signal::derive(move || state.with(|s| s.filters.text.clone()));

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Lista Usuarios"</h1>
                    <Badge>
                        {move || state.get().total_count.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Filtros"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.get().page.page)
                                total_pages=Signal::derive(move || state.get().total_pages)
                                total_count=Signal::derive(move || state.get().total_count)
                                page_size=Signal::derive(move || state.get().page.page_size)
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                        <div class="filter-panel-header__right">
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <SearchInput
                            value=text_filter
                            on_change=Callback::new(apply_text_filter)
                            placeholder="Nombre, compañía o email..."
                        />
                        <select
                            class="filter-select"
                            on:change=move |ev| apply_role_filter(event_target_value(&ev))
                        >
                            <option value=FILTER_ALL>"Rol: todos"</option>
                            <option value=Role::User.as_str()>"user"</option>
                            <option value=Role::Admin.as_str()>"admin"</option>
                        </select>
                        <select
                            class="filter-select"
                            on:change=move |ev| apply_status_filter(event_target_value(&ev))
                        >
                            <option value=FILTER_ALL>"Estado: todos"</option>
                            {UserStatus::ALL.iter().map(|status| {
                                view! { <option value=status.as_str()>{status.as_str()}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="sys-users-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=140.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("displayName")>
                                        "Nombre"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "displayName"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "displayName"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=140.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("company")>
                                        "Compañía"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "company"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "company"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=90.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("role")>
                                        "Rol"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "role"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "role"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=100.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("isVerified")>
                                        "Verificado"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "isVerified"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "isVerified"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=90.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("status")>
                                        "Estado"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "status"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "status"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=130.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("created_at")>
                                        "Creado"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "created_at"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "created_at"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=90.0>
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|u| u.id.clone()
                                children=move |user| {
                                    let user_id = user.id.clone();
                                    let user_for_edit = user.clone();
                                    let created = format_datetime(&user.created_at);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {user.display_name.clone().unwrap_or_else(|| user.username.clone())}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user.company.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if user.role == Role::Admin {
                                                        view! { <span class="badge badge--warning">"admin"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--neutral">"user"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if user.is_verified { "Sí" } else { "No" }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if user.status == UserStatus::Active {
                                                        view! { <span class="badge badge--success">"active"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--error">"banned"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing_user.set(Some(user_for_edit.clone()))
                                                    attr:title="Editar"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_row(user_id.clone())
                                                    attr:title="Eliminar"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    {move || state.with(|s| s.is_not_found).then(|| view! {
                        <div class="table-empty">"Sin resultados para los filtros aplicados"</div>
                    })}
                </div>

                {move || editing_user.get().map(|user| view! {
                    <super::details::EditUserForm
                        user=user
                        on_close=move || editing_user.set(None)
                        on_saved=move || { editing_user.set(None); load_data(); }
                    />
                })}
            </div>
        </PageFrame>
    }
}
