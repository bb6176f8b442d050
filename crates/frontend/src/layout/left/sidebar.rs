//! Sidebar component with collapsible menu groups.
//!
//! The static tree from `nav_config` is pruned with `filter_menu` for the
//! current role before anything renders, so a restricted entry never even
//! reaches the DOM.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::nav_config::nav_sections;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::shared::access::{filter_menu, Role};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    // Resolve the role once, untracked; a role change means a re-login,
    // which rebuilds the whole layout anyway
    let role = auth_state.with_untracked(|state| {
        state
            .user_info
            .as_ref()
            .map(|u| u.role)
            .unwrap_or(Role::Guest)
    });

    let sections = filter_menu(&nav_sections(), role);

    let expanded_groups: RwSignal<Vec<String>> = RwSignal::new(vec![]);

    view! {
        <div class="app-sidebar__content">
            {sections.into_iter().map(|section| {
                view! {
                    <div class="app-sidebar__section">
                        <div class="app-sidebar__subheader">{section.subheader.clone()}</div>
                        {section.items.into_iter().map(|item| {
                            let icon_name = item.icon.clone().unwrap_or_default();
                            let title = item.title.clone();
                            let children = item.children.clone().unwrap_or_default();
                            let has_children = !children.is_empty();

                            let group_id = StoredValue::new(title.clone());
                            let open_key = StoredValue::new(item.path.clone());
                            let title_stored = StoredValue::new(title.clone());

                            let on_click = move |_| {
                                if has_children {
                                    let gid = group_id.get_value();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                } else if let Some(key) = open_key.get_value() {
                                    ctx.open_tab(&key, &title_stored.get_value());
                                }
                            };

                            let is_active = move || {
                                open_key.get_value().map(|key| {
                                    ctx.active.get().as_deref() == Some(key.as_str())
                                }).unwrap_or(false)
                            };

                            view! {
                                <div>
                                    // Parent item
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=is_active
                                        style:padding-left="12px"
                                        on:click=on_click
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(&icon_name)}
                                            <span>{title.clone()}</span>
                                        </div>
                                        {has_children.then(|| {
                                            let gid_exp = group_id.get_value();
                                            view! {
                                                <div
                                                    class="app-sidebar__chevron"
                                                    class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                                >
                                                    {icon("chevron-right")}
                                                </div>
                                            }
                                        })}
                                    </div>

                                    // Children (always leaves after filtering)
                                    {has_children.then(|| {
                                        let gid_show = group_id.get_value();
                                        let kids_stored = StoredValue::new(children.clone());
                                        view! {
                                            <Show when=move || expanded_groups.get().contains(&gid_show)>
                                                <div class="app-sidebar__children">
                                                    {kids_stored.get_value().into_iter().filter_map(|child| {
                                                        let key = child.path.clone()?;
                                                        let label = child.title.clone();
                                                        let key_stored = StoredValue::new(key);
                                                        let label_stored = StoredValue::new(label.clone());
                                                        Some(view! {
                                                            <div
                                                                class="app-sidebar__item"
                                                                class:app-sidebar__item--active=move || {
                                                                    ctx.active.get().as_deref() == Some(key_stored.get_value().as_str())
                                                                }
                                                                style:padding-left="22px"
                                                                on:click=move |_| {
                                                                    ctx.open_tab(&key_stored.get_value(), &label_stored.get_value());
                                                                }
                                                            >
                                                                <div class="app-sidebar__item-content">
                                                                    {icon("item")}
                                                                    <span>{label.clone()}</span>
                                                                </div>
                                                            </div>
                                                        })
                                                    }).collect_view()}
                                                </div>
                                            </Show>
                                        }
                                    })}
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
