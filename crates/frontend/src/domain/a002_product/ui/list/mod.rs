mod state;

use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::list_view;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_product::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

#[component]
pub fn ProductsList() -> impl IntoView {
    let state = create_state();
    let all_products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing_product: RwSignal<Option<Product>> = RwSignal::new(None);

    let refresh_view = move || {
        let data = all_products.get_untracked();
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
                    all_products.set(data);
                    state.update(|s| {
                        s.page.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar los productos: {}", e)));
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
            .map(|w| w.confirm_with_message("¿Eliminar este producto?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    all_products.update(|items| items.retain(|p| p.to_string_id() != id));
                    refresh_view();
                }
                Err(e) => set_error.set(Some(format!("No se pudo eliminar: {}", e))),
            }
        });
    };

    let text_filter = Signal::derive(move || state.with(|s| s.filters.text.clone()));

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Lista de Productos"</h1>
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
                            placeholder="Nombre o características..."
                        />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="a002-products-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("name")>
                                        "Nombre"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "name"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "name"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=200.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("characteristics")>
                                        "Características"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "characteristics"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "characteristics"))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=90.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("unit")>
                                        "Unidad"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort, "unit"))>
                                            {move || state.with(|s| get_sort_indicator(&s.sort, "unit"))}
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
                                key=|p| p.to_string_id()
                                children=move |product| {
                                    let product_id = product.to_string_id();
                                    let product_for_edit = product.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{product.base.description.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{product.characteristics.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{product.unit.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing_product.set(Some(product_for_edit.clone()))
                                                    attr:title="Editar"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_row(product_id.clone())
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

                {move || editing_product.get().map(|product| view! {
                    <super::details::EditProductModal
                        product=product
                        on_close=move || editing_product.set(None)
                        on_saved=move || { editing_product.set(None); load_data(); }
                    />
                })}
            </div>
        </PageFrame>
    }
}
