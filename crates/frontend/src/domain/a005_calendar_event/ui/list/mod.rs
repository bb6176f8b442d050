use contracts::domain::a005_calendar_event::aggregate::{CalendarEvent, CalendarEventDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_calendar_event::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Calendar page: chronological event list with CRUD. The actual calendar
/// grid is a rendering concern left to a widget; this page owns the data.
#[component]
pub fn CalendarPage() -> impl IntoView {
    let events: RwSignal<Vec<CalendarEvent>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (is_loaded, set_is_loaded) = signal(false);
    let editing_event: RwSignal<Option<CalendarEvent>> = RwSignal::new(None);
    let (show_create, set_show_create) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(data) => {
                    events.set(data);
                    set_is_loaded.set(true);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("No se pudieron cargar los eventos: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            load_data();
        }
    });

    // Optimistic removal, same as the table pages
    let delete_event = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("¿Eliminar este evento?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => events.update(|items| items.retain(|e| e.to_string_id() != id)),
                Err(e) => set_error.set(Some(format!("No se pudo eliminar: {}", e))),
            }
        });
    };

    view! {
        <PageFrame page_id="a005_calendar_event--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Calendario"</h1>
                    <Badge>
                        {move || events.get().len().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create.set(true)
                    >
                        {icon("plus")}
                        " Nuevo Evento"
                    </Button>
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

                <div class="event-list">
                    <For
                        each=move || events.get()
                        key=|e| e.to_string_id()
                        children=move |event| {
                            let event_id = event.to_string_id();
                            let event_for_edit = event.clone();
                            let when = if event.all_day {
                                format!("{} (todo el día)", event.start.format("%d/%m/%Y"))
                            } else {
                                format_datetime(&event.start.to_rfc3339())
                            };
                            view! {
                                <div class="event-list__row">
                                    <span
                                        class="event-list__color"
                                        style:background-color=event.color.clone()
                                    ></span>
                                    <div class="event-list__body">
                                        <span class="event-list__title">{event.base.description.clone()}</span>
                                        <span class="event-list__when">{when}</span>
                                    </div>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| editing_event.set(Some(event_for_edit.clone()))
                                        attr:title="Editar"
                                    >
                                        {icon("edit")}
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| delete_event(event_id.clone())
                                        attr:title="Eliminar"
                                    >
                                        {icon("trash")}
                                    </Button>
                                </div>
                            }
                        }
                    />

                    {move || (is_loaded.get() && events.get().is_empty()).then(|| view! {
                        <div class="table-empty">"Sin eventos programados"</div>
                    })}
                </div>

                {move || show_create.get().then(|| view! {
                    <EventDialog
                        event=None
                        on_close=move || set_show_create.set(false)
                        on_saved=move || { set_show_create.set(false); load_data(); }
                    />
                })}

                {move || editing_event.get().map(|event| view! {
                    <EventDialog
                        event=Some(event)
                        on_close=move || editing_event.set(None)
                        on_saved=move || { editing_event.set(None); load_data(); }
                    />
                })}
            </div>
        </PageFrame>
    }
}

/// Create/edit dialog for an event
#[component]
fn EventDialog<F1, F2>(
    event: Option<CalendarEvent>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let is_edit = event.is_some();
    let event_id = event.as_ref().map(|e| e.to_string_id());
    let event_code = event.as_ref().map(|e| e.base.code.clone());

    let title = RwSignal::new(
        event
            .as_ref()
            .map(|e| e.base.description.clone())
            .unwrap_or_default(),
    );
    let body_text = RwSignal::new(event.as_ref().map(|e| e.body_text.clone()).unwrap_or_default());
    let start = RwSignal::new(
        event
            .as_ref()
            .map(|e| e.start.format("%Y-%m-%dT%H:%M").to_string())
            .unwrap_or_default(),
    );
    let end = RwSignal::new(
        event
            .as_ref()
            .and_then(|e| e.end)
            .map(|end| end.format("%Y-%m-%dT%H:%M").to_string())
            .unwrap_or_default(),
    );
    let all_day = RwSignal::new(event.as_ref().map(|e| e.all_day).unwrap_or(false));
    let color = RwSignal::new(event.as_ref().map(|e| e.color.clone()).unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let parse_local = |value: &str| -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
            .ok()
            .map(|naive| naive.and_utc())
    };

    let on_save = move |_| {
        let start_parsed = match parse_local(&start.get()) {
            Some(value) => value,
            None => {
                set_error.set(Some("Fecha de inicio inválida".to_string()));
                return;
            }
        };

        set_saving.set(true);
        set_error.set(None);

        let dto = CalendarEventDto {
            id: event_id.clone(),
            code: event_code.clone(),
            title: title.get(),
            body_text: Some(body_text.get()),
            start: start_parsed,
            end: parse_local(&end.get()),
            all_day: Some(all_day.get()),
            color: Some(color.get()),
            comment: None,
        };

        spawn_local(async move {
            match api::upsert(dto).await {
                Ok(_) => on_saved(),
                Err(e) => {
                    set_error.set(Some(e));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">
                        {if is_edit { "Editar Evento" } else { "Nuevo Evento" }}
                    </h2>
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
                        <Label>"Título"</Label>
                        <Input value=title disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Descripción"</Label>
                        <Input value=body_text disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Inicio"</Label>
                        <input
                            type="datetime-local"
                            prop:value=move || start.get()
                            on:input=move |ev| start.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Fin"</Label>
                        <input
                            type="datetime-local"
                            prop:value=move || end.get()
                            on:input=move |ev| end.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <Checkbox checked=all_day label="Todo el día" />
                    </div>
                    <div class="form__group">
                        <Label>"Color"</Label>
                        <Input value=color disabled=Signal::derive(move || saving.get()) />
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
