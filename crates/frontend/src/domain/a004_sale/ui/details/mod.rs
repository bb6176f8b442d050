use contracts::domain::a004_sale::aggregate::{PaymentDto, Sale, SaleDto, SaleLine};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_sale::api;
use crate::shared::date_utils::format_amount;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// Editable sale line draft; parsed into a `SaleLine` on save
#[derive(Clone, Copy)]
struct LineDraft {
    key: usize,
    name: RwSignal<String>,
    quantity: RwSignal<String>,
    unit_price: RwSignal<String>,
}

fn new_draft(key: usize) -> LineDraft {
    LineDraft {
        key,
        name: RwSignal::new(String::new()),
        quantity: RwSignal::new("1".to_string()),
        unit_price: RwSignal::new("0".to_string()),
    }
}

fn drafts_to_lines(drafts: &[LineDraft]) -> Vec<SaleLine> {
    drafts
        .iter()
        .filter(|d| !d.name.get_untracked().trim().is_empty())
        .map(|d| SaleLine {
            product_id: None,
            product_name: d.name.get_untracked(),
            quantity: d.quantity.get_untracked().parse().unwrap_or(0.0),
            unit_price: d.unit_price.get_untracked().parse().unwrap_or(0.0),
        })
        .collect()
}

/// Create-sale page (opened from the sidebar)
#[component]
pub fn SaleForm() -> impl IntoView {
    let sale_number = RwSignal::new(String::new());
    let client_name = RwSignal::new(String::new());
    let sale_date = RwSignal::new(String::new());
    let currency = RwSignal::new("MXN".to_string());
    let national = RwSignal::new(true);
    let lines: RwSignal<Vec<LineDraft>> = RwSignal::new(vec![new_draft(0)]);
    let next_key = StoredValue::new(1usize);
    let (error, set_error) = signal::<Option<String>>(None);
    let (done, set_done) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);
        set_done.set(None);

        let dto = SaleDto {
            id: None,
            sale_number: if sale_number.get().trim().is_empty() {
                None
            } else {
                Some(sale_number.get())
            },
            client_id: None,
            client_name: client_name.get(),
            sale_date: sale_date.get().parse().ok(),
            currency: Some(currency.get()),
            national: Some(national.get()),
            items: lines.with_untracked(|ls| drafts_to_lines(ls)),
            // Server derives the total from the lines
            total_amount: None,
            comment: None,
        };

        spawn_local(async move {
            match api::upsert(dto).await {
                Ok(_) => {
                    set_done.set(Some("Venta creada".to_string()));
                    sale_number.set(String::new());
                    client_name.set(String::new());
                    sale_date.set(String::new());
                    lines.set(vec![new_draft(next_key.get_value())]);
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

    let add_line = move |_| {
        let key = next_key.get_value();
        next_key.set_value(key + 1);
        lines.update(|ls| ls.push(new_draft(key)));
    };

    view! {
        <PageFrame page_id="a004_sale--new" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h1 class="page__title">"Crear Venta"</h1>
            </div>
            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || done.get().map(|m| view! { <div class="alert alert--success">{m}</div> })}

                <div class="form">
                    <div class="form__group">
                        <Label>"Número de Venta"</Label>
                        <Input value=sale_number disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Cliente"</Label>
                        <Input value=client_name disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Fecha de Venta"</Label>
                        <input
                            type="date"
                            prop:value=move || sale_date.get()
                            on:input=move |ev| sale_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Moneda"</Label>
                        <Input value=currency disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Checkbox checked=national label="Nacional" />
                    </div>

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

/// Detail modal: totals plus the payments panel. Payment mutations patch
/// the sale in place from the server response.
#[component]
pub fn SaleDetailModal<F1>(sale: Sale, on_close: F1, on_patched: Callback<Sale>) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
{
    let payment_date = RwSignal::new(String::new());
    let payment_amount = RwSignal::new(String::new());
    let payment_comments = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let sale_stored = RwSignal::new(sale.clone());
    let sale_id = StoredValue::new(sale.to_string_id());

    let add_payment = move |_| {
        let date = match payment_date.get().parse::<chrono::NaiveDate>() {
            Ok(date) => date,
            Err(_) => {
                set_error.set(Some("Fecha de pago inválida".to_string()));
                return;
            }
        };
        let amount = match payment_amount.get().parse::<f64>() {
            Ok(amount) if amount > 0.0 => amount,
            _ => {
                set_error.set(Some("Monto inválido".to_string()));
                return;
            }
        };

        set_saving.set(true);
        set_error.set(None);

        let dto = PaymentDto {
            date,
            amount,
            comments: payment_comments.get(),
        };

        spawn_local(async move {
            match api::add_payment(&sale_id.get_value(), dto).await {
                Ok(updated) => {
                    payment_date.set(String::new());
                    payment_amount.set(String::new());
                    payment_comments.set(String::new());
                    sale_stored.set(updated.clone());
                    on_patched.run(updated);
                    set_saving.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_saving.set(false);
                }
            }
        });
    };

    let delete_payment = move |payment_id: String| {
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::delete_payment(&sale_id.get_value(), &payment_id).await {
                Ok(updated) => {
                    sale_stored.set(updated.clone());
                    on_patched.run(updated);
                    set_saving.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_saving.set(false);
                }
            }
        });
    };

    let title = format!("Venta {}", sale.base.code);

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

                    <div class="sale-summary">
                        <p>"Cliente: " {sale.client_name.clone()}</p>
                        <p>
                            "Total Vendido: "
                            {move || {
                                let s = sale_stored.get();
                                format!("{} {}", format_amount(s.total_amount), s.currency)
                            }}
                        </p>
                        <p>
                            "Monto Pagado: "
                            {move || format_amount(sale_stored.get().amount_paid)}
                        </p>
                        <p>
                            "Monto Adeudado: "
                            {move || format_amount(sale_stored.get().amount_owed)}
                        </p>
                    </div>

                    <h3>"Pagos"</h3>
                    <For
                        each=move || sale_stored.get().payments
                        key=|p| p.id.clone()
                        children=move |payment| {
                            let payment_id = payment.id.clone();
                            view! {
                                <div class="payment-row">
                                    <span>
                                        {format!(
                                            "Fecha: {} - Monto: {} - Comentarios: {}",
                                            payment.date.format("%d/%m/%Y"),
                                            format_amount(payment.amount),
                                            payment.comments
                                        )}
                                    </span>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| delete_payment(payment_id.clone())
                                        disabled=Signal::derive(move || saving.get())
                                        attr:title="Eliminar pago"
                                    >
                                        {icon("trash")}
                                    </Button>
                                </div>
                            }
                        }
                    />

                    // New payment form, shown while something is still owed
                    <Show when=move || (sale_stored.get().amount_owed > 0.0)>
                        <div class="payment-form">
                            <h4>"Registrar pago"</h4>
                            <div class="form__group">
                                <Label>"Fecha"</Label>
                                <input
                                    type="date"
                                    prop:value=move || payment_date.get()
                                    on:input=move |ev| payment_date.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form__group">
                                <Label>"Monto"</Label>
                                <Input value=payment_amount disabled=Signal::derive(move || saving.get()) />
                            </div>
                            <div class="form__group">
                                <Label>"Comentarios"</Label>
                                <Input value=payment_comments disabled=Signal::derive(move || saving.get()) />
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=add_payment
                                disabled=Signal::derive(move || saving.get())
                            >
                                {move || if saving.get() { "Guardando..." } else { "Registrar" }}
                            </Button>
                        </div>
                    </Show>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close()
                    >
                        "Cerrar"
                    </Button>
                </div>
            </div>
        </div>
    }
}
