mod state;

use contracts::domain::a003_order::aggregate::{FulfillmentStatus, Order, OrderStatus};
use contracts::shared::list_view::{self, FILTER_ALL};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_order::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_amount;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

fn status_badge(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pendiente => "badge badge--warning",
        OrderStatus::Completado => "badge badge--success",
        OrderStatus::Descartado => "badge badge--error",
    }
}

fn fulfillment_badge(status: FulfillmentStatus) -> &'static str {
    match status {
        FulfillmentStatus::Completo => "badge badge--success",
        FulfillmentStatus::Parcial => "badge badge--warning",
        FulfillmentStatus::NoCumplido => "badge badge--error",
    }
}

#[component]
pub fn OrdersList() -> impl IntoView {
    let state = create_state();
    let all_orders: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing_order: RwSignal<Option<Order>> = RwSignal::new(None);

    let refresh_view = move || {
        let data = all_orders.get_untracked();
        state.update(|s| {
            let mut view = list_view::apply(&data, &s.sort, &s.filters, &s.page);
            let total_pages = view.total_pages(s.page.page_size);
            if s.page.page >= total_pages {
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
            match api::fetch_all().await {
                Ok(data) => {
                    all_orders.set(data);
                    state.update(|s| {
                        s.page.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar los pedidos: {}", e)));
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

    let apply_text_filter = move |text: String| {
        state.update(|s| {
            s.filters.text = text;
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

    let delete_row = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("¿Eliminar este pedido?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    all_orders.update(|items| items.retain(|o| o.to_string_id() != id));
                    refresh_view();
                }
                Err(e) => set_error.set(Some(format!("No se pudo eliminar: {}", e))),
            }
        });
    };

    let text_filter = Signal::derive(move || state.with(|s| s.filters.text.clone()));

    view! {
        <PageFrame page_id="a003_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Lista de Pedidos"</h1>
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
                            placeholder="Cliente o producto..."
                        />
                        <select
                            class="filter-select"
                            on:change=move |ev| apply_status_filter(event_target_value(&ev))
                        >
                            <option value=FILTER_ALL>"Estado: todos"</option>
                            {OrderStatus::ALL.iter().map(|status| {
                                view! { <option value=status.as_str()>{status.as_str()}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="a003-orders-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=120.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("deliveryDate")>
                                        "Fecha de Entrega"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "deliveryDate"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "deliveryDate"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=150.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("client")>
                                        "Cliente"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "client"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "client"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=200.0>
                                    "Productos"
                                </TableHeaderCell>
                                <TableHeaderCell min_width=110.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("negotiatedPrice")>
                                        "Precio Total"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "negotiatedPrice"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "negotiatedPrice"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=80.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("currency")>
                                        "Moneda"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "currency"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "currency"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=100.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("status")>
                                        "Estado"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "status"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "status"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=130.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("fulfillmentStatus")>
                                        "Nivel de Cumplimiento"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "fulfillmentStatus"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "fulfillmentStatus"))}
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
                                key=|o| o.to_string_id()
                                children=move |order| {
                                    let order_id = order.to_string_id();
                                    let order_for_edit = order.clone();
                                    let delivery = order
                                        .delivery_date
                                        .map(|d| d.format("%d/%m/%Y").to_string())
                                        .unwrap_or_else(|| "-".to_string());
                                    let products = order
                                        .items
                                        .iter()
                                        .map(|line| line.product_name.clone())
                                        .collect::<Vec<_>>()
                                        .join(", ");
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{delivery}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{order.client_name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{products}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_amount(order.negotiated_price)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{order.currency.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_badge(order.status)>{order.status.as_str()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=fulfillment_badge(order.fulfillment_status)>
                                                        {order.fulfillment_status.as_str()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing_order.set(Some(order_for_edit.clone()))
                                                    attr:title="Editar"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_row(order_id.clone())
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

                {move || editing_order.get().map(|order| view! {
                    <super::details::EditOrderModal
                        order=order
                        on_close=move || editing_order.set(None)
                        on_saved=move || { editing_order.set(None); load_data(); }
                    />
                })}
            </div>
        </PageFrame>
    }
}
