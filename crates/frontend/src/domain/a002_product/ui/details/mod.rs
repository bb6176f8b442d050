use contracts::domain::a002_product::aggregate::{Product, ProductDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_product::api;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// Create-product page (opened from the sidebar)
#[component]
pub fn ProductForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let characteristics = RwSignal::new(String::new());
    let unit = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (done, set_done) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);
        set_done.set(None);

        let dto = ProductDto {
            id: None,
            code: None,
            name: name.get(),
            characteristics: Some(characteristics.get()),
            unit: Some(unit.get()),
            comment: None,
            updated_at: None,
        };

        spawn_local(async move {
            match api::upsert(dto).await {
                Ok(_) => {
                    set_done.set(Some("Producto creado".to_string()));
                    name.set(String::new());
                    characteristics.set(String::new());
                    unit.set(String::new());
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
        <PageFrame page_id="a002_product--new" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h1 class="page__title">"Nuevo Producto"</h1>
            </div>
            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || done.get().map(|m| view! { <div class="alert alert--success">{m}</div> })}

                <div class="form">
                    <div class="form__group">
                        <Label>"Nombre"</Label>
                        <Input value=name disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Características"</Label>
                        <Input value=characteristics disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Unidad"</Label>
                        <Input value=unit disabled=Signal::derive(move || saving.get()) />
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

/// Modal for editing an existing product
#[component]
pub fn EditProductModal<F1, F2>(product: Product, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let name = RwSignal::new(product.base.description.clone());
    let characteristics = RwSignal::new(product.characteristics.clone());
    let unit = RwSignal::new(product.unit.clone());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let product_id = product.to_string_id();
    let code = product.base.code.clone();
    let title = format!("Editar: {}", product.base.description);

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);

        let dto = ProductDto {
            id: Some(product_id.clone()),
            code: Some(code.clone()),
            name: name.get(),
            characteristics: Some(characteristics.get()),
            unit: Some(unit.get()),
            comment: None,
            updated_at: None,
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
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
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
                        <Label>"Nombre"</Label>
                        <Input value=name disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Características"</Label>
                        <Input value=characteristics disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Unidad"</Label>
                        <Input value=unit disabled=Signal::derive(move || saving.get()) />
                    </div>
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
