mod state;

use contracts::domain::a004_sale::aggregate::{Sale, SaleStatus};
use contracts::shared::list_view::{self, FILTER_ALL};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_sale::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_amount;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

fn status_badge(status: SaleStatus) -> &'static str {
    match status {
        SaleStatus::Pagado => "badge badge--success",
        SaleStatus::Parcial => "badge badge--warning",
        SaleStatus::NoPagado => "badge badge--error",
    }
}

#[component]
pub fn SalesList() -> impl IntoView {
    let state = create_state();
    let all_sales: RwSignal<Vec<Sale>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let viewing_sale: RwSignal<Option<Sale>> = RwSignal::new(None);

    let refresh_view = move || {
        let data = all_sales.get_untracked();
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
                    all_sales.set(data);
                    state.update(|s| {
                        s.page.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar las ventas: {}", e)));
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
            .map(|w| w.confirm_with_message("¿Eliminar esta venta?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    all_sales.update(|items| items.retain(|s| s.to_string_id() != id));
                    refresh_view();
                }
                Err(e) => set_error.set(Some(format!("No se pudo eliminar: {}", e))),
            }
        });
    };

    // Payment mutations answer with the updated sale; patch it in place
    let patch_sale = move |updated: Sale| {
        let id = updated.to_string_id();
        all_sales.update(|items| {
            if let Some(slot) = items.iter_mut().find(|s| s.to_string_id() == id) {
                *slot = updated.clone();
            }
        });
        viewing_sale.set(Some(updated));
        refresh_view();
    };

    let text_filter = Signal::derive(move || state.with(|s| s.filters.text.clone()));
    let active_status = Signal::derive(move || state.with(|s| s.filters.status.clone()));

    view! {
        <PageFrame page_id="a004_sale--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Lista de Ventas"</h1>
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

                // Status tabs: all / Pagado / Parcial / No Pagado
                <div class="status-tabs">
                    {[FILTER_ALL, "Pagado", "Parcial", "No Pagado"].iter().map(|option| {
                        let value = *option;
                        let label = if value == FILTER_ALL { "Todas" } else { value };
                        view! {
                            <button
                                class="status-tab"
                                class:status-tab--active=move || active_status.get() == value
                                on:click=move |_| apply_status_filter(value.to_string())
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Buscar"</span>
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
                            placeholder="Número de venta o cliente..."
                        />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="a004-sales-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=130.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("saleNumber")>
                                        "Número de Venta"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "saleNumber"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "saleNumber"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=150.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("customerName")>
                                        "Cliente"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "customerName"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "customerName"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=120.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("saleDate")>
                                        "Fecha de Venta"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "saleDate"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "saleDate"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=100.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("totalAmount")>
                                        "Total"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "totalAmount"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "totalAmount"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=90.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("national")>
                                        "Nacional"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "national"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "national"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=100.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("amountOwed")>
                                        "Adeudo"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "amountOwed"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "amountOwed"))}
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
                                <TableHeaderCell min_width=110.0>
                                    "Acciones"
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|s| s.to_string_id()
                                children=move |sale| {
                                    let sale_id = sale.to_string_id();
                                    let sale_for_view = sale.clone();
                                    let sale_date = sale
                                        .sale_date
                                        .map(|d| d.format("%d/%m/%Y").to_string())
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-weight: 500;">{sale.base.code.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{sale.client_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{sale_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format!("{} {}", format_amount(sale.total_amount), sale.currency)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if sale.national { "Sí" } else { "No" }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_amount(sale.amount_owed)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_badge(sale.status)>{sale.status.as_str()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| viewing_sale.set(Some(sale_for_view.clone()))
                                                    attr:title="Detalle y pagos"
                                                >
                                                    {icon("eye")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_row(sale_id.clone())
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

                {move || viewing_sale.get().map(|sale| view! {
                    <super::details::SaleDetailModal
                        sale=sale
                        on_close=move || viewing_sale.set(None)
                        on_patched=Callback::new(patch_sale)
                    />
                })}
            </div>
        </PageFrame>
    }
}
