use contracts::domain::a003_order::aggregate::{
    FulfillmentStatus, Order, OrderDto, OrderLine, OrderStatus,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_order::api;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// Editable order line draft; parsed into an `OrderLine` on save
#[derive(Clone, Copy)]
struct LineDraft {
    key: usize,
    name: RwSignal<String>,
    quantity: RwSignal<String>,
    unit_price: RwSignal<String>,
}

fn new_draft(key: usize, line: Option<&OrderLine>) -> LineDraft {
    LineDraft {
        key,
        name: RwSignal::new(line.map(|l| l.product_name.clone()).unwrap_or_default()),
        quantity: RwSignal::new(
            line.map(|l| l.quantity.to_string())
                .unwrap_or_else(|| "1".to_string()),
        ),
        unit_price: RwSignal::new(
            line.map(|l| l.unit_price.to_string())
                .unwrap_or_else(|| "0".to_string()),
        ),
    }
}

fn drafts_to_lines(drafts: &[LineDraft]) -> Vec<OrderLine> {
    drafts
        .iter()
        .filter(|d| !d.name.get_untracked().trim().is_empty())
        .map(|d| OrderLine {
            product_id: None,
            product_name: d.name.get_untracked(),
            quantity: d.quantity.get_untracked().parse().unwrap_or(0.0),
            unit_price: d.unit_price.get_untracked().parse().unwrap_or(0.0),
        })
        .collect()
}

/// Line item editor shared by the create page and the edit modal
#[component]
fn LineEditor(lines: RwSignal<Vec<LineDraft>>, next_key: StoredValue<usize>) -> impl IntoView {
    let add_line = move |_| {
        let key = next_key.get_value();
        next_key.set_value(key + 1);
        lines.update(|ls| ls.push(new_draft(key, None)));
    };

    view! {
        <div class="line-editor">
            <div class="line-editor__header">
                <Label>"Productos"</Label>
                <Button appearance=ButtonAppearance::Secondary on_click=add_line>
                    {icon("plus")}
                    " Agregar"
                </Button>
            </div>
            <For
                each=move || lines.get()
                key=|line| line.key
                children=move |line| {
                    let key = line.key;
                    view! {
                        <div class="line-editor__row">
                            <Input value=line.name placeholder="Producto" />
                            <Input value=line.quantity placeholder="Cantidad" />
                            <Input value=line.unit_price placeholder="Precio unitario" />
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| lines.update(|ls| ls.retain(|l| l.key != key))
                                attr:title="Quitar"
                            >
                                {icon("trash")}
                            </Button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Create-order page (opened from the sidebar)
#[component]
pub fn OrderForm() -> impl IntoView {
    let client_name = RwSignal::new(String::new());
    let delivery_date = RwSignal::new(String::new());
    let negotiated_price = RwSignal::new(String::new());
    let currency = RwSignal::new("MXN".to_string());
    let lines: RwSignal<Vec<LineDraft>> = RwSignal::new(vec![new_draft(0, None)]);
    let next_key = StoredValue::new(1usize);
    let (error, set_error) = signal::<Option<String>>(None);
    let (done, set_done) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);
        set_done.set(None);

        let dto = OrderDto {
            id: None,
            code: None,
            client_id: None,
            client_name: client_name.get(),
            items: lines.with_untracked(|ls| drafts_to_lines(ls)),
            delivery_date: delivery_date.get().parse().ok(),
            negotiated_price: negotiated_price.get().parse().ok(),
            currency: Some(currency.get()),
            status: Some(OrderStatus::Pendiente),
            fulfillment_status: Some(FulfillmentStatus::NoCumplido),
            comment: None,
        };

        spawn_local(async move {
            match api::upsert(dto).await {
                Ok(_) => {
                    set_done.set(Some("Pedido creado".to_string()));
                    client_name.set(String::new());
                    delivery_date.set(String::new());
                    negotiated_price.set(String::new());
                    lines.set(vec![new_draft(next_key.get_value(), None)]);
                    next_key.set_value(next_key.get_value() + 1);
                    set_saving.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a003_order--new" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h1 class="page__title">"Nuevo Pedido"</h1>
            </div>
            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || done.get().map(|m| view! { <div class="alert alert--success">{m}</div> })}

                <div class="form">
                    <div class="form__group">
                        <Label>"Cliente"</Label>
                        <Input value=client_name disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Fecha de Entrega"</Label>
                        <input
                            type="date"
                            prop:value=move || delivery_date.get()
                            on:input=move |ev| delivery_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Precio Total"</Label>
                        <Input value=negotiated_price disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Moneda"</Label>
                        <Input value=currency disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <LineEditor lines=lines next_key=next_key />

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Guardando..." } else { "Crear" }}
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}

/// Modal for editing an existing order
#[component]
pub fn EditOrderModal<F1, F2>(order: Order, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let client_name = RwSignal::new(order.client_name.clone());
    let delivery_date = RwSignal::new(
        order
            .delivery_date
            .map(|d| d.to_string())
            .unwrap_or_default(),
    );
    let negotiated_price = RwSignal::new(order.negotiated_price.to_string());
    let currency = RwSignal::new(order.currency.clone());
    let status = RwSignal::new(order.status.as_str().to_string());
    let fulfillment = RwSignal::new(order.fulfillment_status.as_str().to_string());
    let lines: RwSignal<Vec<LineDraft>> = RwSignal::new(
        order
            .items
            .iter()
            .enumerate()
            .map(|(i, line)| new_draft(i, Some(line)))
            .collect(),
    );
    let next_key = StoredValue::new(order.items.len());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let order_id = order.to_string_id();
    let code = order.base.code.clone();
    let title = format!("Editar pedido: {}", order.client_name);

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);

        let dto = OrderDto {
            id: Some(order_id.clone()),
            code: Some(code.clone()),
            client_id: None,
            client_name: client_name.get(),
            items: lines.with_untracked(|ls| drafts_to_lines(ls)),
            delivery_date: delivery_date.get().parse().ok(),
            negotiated_price: negotiated_price.get().parse().ok(),
            currency: Some(currency.get()),
            status: Some(OrderStatus::parse(&status.get())),
            fulfillment_status: Some(FulfillmentStatus::parse(&fulfillment.get())),
            comment: None,
        };

        spawn_local(async move {
            match api::upsert(dto).await {
                Ok(_) => on_saved(),
                Err(e) => {
                    set_error.set(Some(format!("Error al guardar: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal modal--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close()
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Cliente"</Label>
                        <Input value=client_name disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Fecha de Entrega"</Label>
                        <input
                            type="date"
                            prop:value=move || delivery_date.get()
                            on:input=move |ev| delivery_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Precio Total"</Label>
                        <Input value=negotiated_price disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Moneda"</Label>
                        <Input value=currency disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Estado"</Label>
                        <select
                            on:change=move |ev| status.set(event_target_value(&ev))
                        >
                            {OrderStatus::ALL.iter().map(|option| {
                                let value = option.as_str();
                                view! {
                                    <option
                                        value=value
                                        selected=move || status.get() == value
                                    >
                                        {value}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <Label>"Nivel de Cumplimiento"</Label>
                        <select
                            on:change=move |ev| fulfillment.set(event_target_value(&ev))
                        >
                            {[FulfillmentStatus::Completo, FulfillmentStatus::Parcial, FulfillmentStatus::NoCumplido]
                                .iter().map(|option| {
                                    let value = option.as_str();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || fulfillment.get() == value
                                        >
                                            {value}
                                        </option>
                                    }
                                }).collect_view()}
                        </select>
                    </div>

                    <LineEditor lines=lines next_key=next_key />
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close()
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
