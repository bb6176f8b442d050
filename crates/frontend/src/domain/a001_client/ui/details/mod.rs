use contracts::domain::a001_client::aggregate::{Client, ClientDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_client::api;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// Create-client page (opened from the sidebar)
#[component]
pub fn ClientForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (done, set_done) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);
        set_done.set(None);

        let dto = ClientDto {
            id: None,
            code: None,
            name: name.get(),
            company: Some(company.get()),
            email: Some(email.get()),
            phone: Some(phone.get()),
            address: Some(address.get()),
            comment: None,
            updated_at: None,
        };

        spawn_local(async move {
            match api::upsert(dto).await {
                Ok(_) => {
                    set_done.set(Some("Cliente creado".to_string()));
                    name.set(String::new());
                    company.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    address.set(String::new());
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
        <PageFrame page_id="a001_client--new" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h1 class="page__title">"Nuevo Cliente"</h1>
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
                        <Label>"Compañía"</Label>
                        <Input value=company disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input
                            value=email
                            input_type=InputType::Email
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Teléfono"</Label>
                        <Input value=phone disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Dirección"</Label>
                        <Input value=address disabled=Signal::derive(move || saving.get()) />
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

/// Modal for editing an existing client
#[component]
pub fn EditClientModal<F1, F2>(client: Client, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let name = RwSignal::new(client.base.description.clone());
    let company = RwSignal::new(client.company.clone());
    let email = RwSignal::new(client.email.clone());
    let phone = RwSignal::new(client.phone.clone());
    let address = RwSignal::new(client.address.clone());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let client_id = client.to_string_id();
    let code = client.base.code.clone();
    let title = format!("Editar: {}", client.base.description);

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);

        let dto = ClientDto {
            id: Some(client_id.clone()),
            code: Some(code.clone()),
            name: name.get(),
            company: Some(company.get()),
            email: Some(email.get()),
            phone: Some(phone.get()),
            address: Some(address.get()),
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
                        <Label>"Compañía"</Label>
                        <Input value=company disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input
                            value=email
                            input_type=InputType::Email
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Teléfono"</Label>
                        <Input value=phone disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Dirección"</Label>
                        <Input value=address disabled=Signal::derive(move || saving.get()) />
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
