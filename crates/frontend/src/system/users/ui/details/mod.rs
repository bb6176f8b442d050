use contracts::shared::access::Role;
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User, UserStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;

/// Modal for editing an existing user
#[component]
pub fn EditUserForm<F1, F2>(user: User, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let display_name = RwSignal::new(user.display_name.clone().unwrap_or_default());
    let company = RwSignal::new(user.company.clone().unwrap_or_default());
    let email = RwSignal::new(user.email.clone().unwrap_or_default());
    let is_admin = RwSignal::new(user.role == Role::Admin);
    let is_verified = RwSignal::new(user.is_verified);
    let is_active = RwSignal::new(user.status == UserStatus::Active);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let username_display = user.username.clone();

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);

        let dto = UpdateUserDto {
            id: user.id.clone(),
            display_name: if display_name.get().trim().is_empty() {
                None
            } else {
                Some(display_name.get())
            },
            company: if company.get().trim().is_empty() {
                None
            } else {
                Some(company.get())
            },
            email: if email.get().trim().is_empty() {
                None
            } else {
                Some(email.get())
            },
            role: if is_admin.get() { Role::Admin } else { Role::User },
            is_verified: is_verified.get(),
            status: if is_active.get() {
                UserStatus::Active
            } else {
                UserStatus::Banned
            },
        };

        spawn_local(async move {
            match api::update_user(dto).await {
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
                    <h2 class="modal-title">{format!("Editar: {}", username_display)}</h2>
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
                        <Input
                            value=display_name
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Compañía"</Label>
                        <Input
                            value=company
                            disabled=Signal::derive(move || saving.get())
                        />
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
                        <Checkbox checked=is_admin label="Administrador" />
                    </div>

                    <div class="form__group">
                        <Checkbox checked=is_verified label="Verificado" />
                    </div>

                    <div class="form__group">
                        <Checkbox checked=is_active label="Activo" />
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

/// Create-user page (admin only)
#[component]
pub fn CreateUserPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <CreateUserInner />
        </RequireAdmin>
    }
}

#[component]
fn CreateUserInner() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let display_name = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let is_admin = RwSignal::new(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (done, set_done) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);
        set_done.set(None);

        let dto = CreateUserDto {
            username: username.get(),
            password: password.get(),
            display_name: if display_name.get().trim().is_empty() {
                None
            } else {
                Some(display_name.get())
            },
            company: if company.get().trim().is_empty() {
                None
            } else {
                Some(company.get())
            },
            email: if email.get().trim().is_empty() {
                None
            } else {
                Some(email.get())
            },
            role: if is_admin.get() { Role::Admin } else { Role::User },
        };

        spawn_local(async move {
            match api::create_user(dto).await {
                Ok(_) => {
                    set_done.set(Some("Usuario creado".to_string()));
                    username.set(String::new());
                    password.set(String::new());
                    display_name.set(String::new());
                    company.set(String::new());
                    email.set(String::new());
                    is_admin.set(false);
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
        <PageFrame page_id="sys_users--new" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h1 class="page__title">"Crear Usuario"</h1>
            </div>
            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || done.get().map(|m| view! { <div class="alert alert--success">{m}</div> })}

                <div class="form">
                    <div class="form__group">
                        <Label>"Usuario"</Label>
                        <Input value=username disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Contraseña"</Label>
                        <Input
                            value=password
                            input_type=InputType::Password
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Nombre"</Label>
                        <Input value=display_name disabled=Signal::derive(move || saving.get()) />
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
                        <Checkbox checked=is_admin label="Administrador" />
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

/// Account page: change the current user's password
#[component]
pub fn AccountPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (done, set_done) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        if new_password.get() != confirm_password.get() {
            set_error.set(Some("Las contraseñas no coinciden".to_string()));
            return;
        }

        let user_id = match auth_state.with_untracked(|s| s.user_info.as_ref().map(|u| u.id.clone()))
        {
            Some(id) => id,
            None => return,
        };

        set_saving.set(true);
        set_error.set(None);
        set_done.set(None);

        let dto = ChangePasswordDto {
            user_id,
            old_password: Some(old_password.get()),
            new_password: new_password.get(),
        };

        spawn_local(async move {
            match api::change_password(dto).await {
                Ok(()) => {
                    set_done.set(Some("Contraseña actualizada".to_string()));
                    old_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
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
        <PageFrame page_id="sys_account--detail" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h1 class="page__title">"Mi cuenta"</h1>
            </div>
            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || done.get().map(|m| view! { <div class="alert alert--success">{m}</div> })}

                <div class="form">
                    <div class="form__group">
                        <Label>"Contraseña actual"</Label>
                        <Input
                            value=old_password
                            input_type=InputType::Password
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Nueva contraseña"</Label>
                        <Input
                            value=new_password
                            input_type=InputType::Password
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Confirmar contraseña"</Label>
                        <Input
                            value=confirm_password
                            input_type=InputType::Password
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Guardando..." } else { "Cambiar contraseña" }}
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}
