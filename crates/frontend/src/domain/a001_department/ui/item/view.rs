use super::state::{create_state, BreadcrumbSegment};
use super::{LibraryRow, MemberRow};
use crate::domain::a001_department::api;
use crate::domain::a001_department::ui::dialogs::{
    AddLibraryDialog, AddMemberDialog, DeleteLibraryDialog, DeleteMemberDialog,
};
use crate::domain::a001_department::ui::list::DepartmentsList;
use crate::shared::url_utils::group_id_from_href;
use crate::system::org_context::use_org;
use contracts::domain::a002_member::Member;
use contracts::domain::a003_library::Library;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Root of the department panel. Resolves the active department from the
/// address bar, loads its members and libraries, and mediates every
/// dialog. Children render from the snapshot it owns.
#[component]
pub fn DepartmentItemView(
    show_add_department_dialog: RwSignal<bool>,
    show_add_member_dialog: RwSignal<bool>,
    show_add_library_dialog: RwSignal<bool>,
) -> impl IntoView {
    let org = use_org();
    let state = create_state();

    let org_id = StoredValue::new(org.org_id);

    // Per-operation generation stamps. A completion whose stamp no longer
    // matches was issued for a superseded department and is dropped.
    let libraries_seq = StoredValue::new(0u64);
    let info_seq = StoredValue::new(0u64);

    let load_libraries = move |group_id: String| {
        libraries_seq.update_value(|s| *s += 1);
        let seq = libraries_seq.get_value();
        let org_id = org_id.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api::list_department_libraries(&org_id, &group_id).await {
                Ok(libraries) if libraries_seq.get_value() == seq => {
                    state.update(|s| s.apply_libraries(libraries));
                }
                Ok(_) => {
                    log::debug!("dropping stale library list for department {}", group_id);
                }
                Err(e) => {
                    // The panel stays silent: prior state is kept, no retry.
                    log::warn!("listing libraries for department {} failed: {}", group_id, e);
                }
            }
        });
    };

    let load_info = move |group_id: String| {
        info_seq.update_value(|s| *s += 1);
        let seq = info_seq.get_value();
        let org_id = org_id.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api::get_department_info(&org_id, &group_id, true).await {
                Ok(info) if info_seq.get_value() == seq => {
                    state.update(|s| s.apply_info(info));
                }
                Ok(_) => {
                    log::debug!("dropping stale info for department {}", group_id);
                }
                Err(e) => {
                    log::warn!("loading info for department {} failed: {}", group_id, e);
                }
            }
        });
    };

    let select_group = move |target: String| {
        let next = if target.is_empty() { None } else { Some(target) };
        // Keep the address bar in sync; the panel re-renders from its own
        // signal, the site router stays outside this view.
        if let Some(window) = web_sys::window() {
            let href = match &next {
                Some(id) => format!("/org/departmentadmin/groups/{}/", id),
                None => "/org/departmentadmin/".to_string(),
            };
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
            }
        }
        match next {
            Some(id) => {
                state.update(|s| s.group_id = Some(id.clone()));
                load_libraries(id.clone());
                load_info(id);
            }
            None => state.update(|s| s.clear_selection()),
        }
    };
    let on_select_group = Callback::new(select_group);

    // Initial selection comes from the address bar; no marker means no
    // department selected and no fetch.
    let href = web_sys::window().and_then(|w| w.location().href().ok());
    if let Some(id) = href.as_deref().and_then(group_id_from_href) {
        state.update(|s| s.group_id = Some(id.clone()));
        load_libraries(id.clone());
        load_info(id);
    }

    let current_group = move || state.with_untracked(|s| s.group_id.clone()).unwrap_or_default();

    // Completion callbacks of every mutating flow: re-run the matching
    // load for the current department, wholesale.
    let on_member_changed = Callback::new(move |_: ()| {
        if let Some(id) = state.with_untracked(|s| s.group_id.clone()) {
            load_info(id);
        }
    });
    let on_department_changed = Callback::new(move |_: ()| {
        if let Some(id) = state.with_untracked(|s| s.group_id.clone()) {
            load_info(id);
        }
    });
    let on_library_changed = Callback::new(move |_: ()| {
        if let Some(id) = state.with_untracked(|s| s.group_id.clone()) {
            load_libraries(id);
        }
    });

    let on_toggle_frozen = Callback::new(move |frozen: bool| {
        state.update(|s| s.is_item_frozen = frozen);
    });
    let cancel_dialogs = Callback::new(move |_: ()| state.update(|s| s.cancel_dialogs()));
    let open_delete_member =
        Callback::new(move |member: Member| state.update(|s| s.open_delete_member_dialog(member)));
    let open_delete_library = Callback::new(move |library: Library| {
        state.update(|s| s.open_delete_library_dialog(library))
    });

    // Memoized slices so a freeze toggle or dialog flag flip does not tear
    // down and recreate the row components (their hover/editor state is
    // local).
    let breadcrumb = Memo::new(move |_| state.with(|s| s.breadcrumb()));
    let group_id_memo = Memo::new(move |_| state.with(|s| s.group_id.clone()));
    let subgroups = Memo::new(move |_| state.with(|s| s.subgroups.clone()));
    let members = Memo::new(move |_| state.with(|s| s.members.clone()));
    let members_empty = Memo::new(move |_| state.with(|s| s.members_table_is_empty()));
    let libraries = Memo::new(move |_| state.with(|s| s.libraries.clone()));
    let is_item_frozen = Memo::new(move |_| state.with(|s| s.is_item_frozen));
    let show_delete_member = Memo::new(move |_| state.with(|s| s.show_delete_member_dialog));
    let show_delete_library = Memo::new(move |_| state.with(|s| s.show_delete_library_dialog));
    let deleted_member = Memo::new(move |_| state.with(|s| s.deleted_member.clone()));
    let deleted_library = Memo::new(move |_| state.with(|s| s.deleted_library.clone()));

    view! {
        <div class="content department-item">
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title breadcrumb">
                        {move || {
                            breadcrumb
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(i, segment)| {
                                    let BreadcrumbSegment { label, target } = segment;
                                    let sep = (i > 0)
                                        .then(|| view! { <span class="breadcrumb__sep">" / "</span> });
                                    let inner = match target {
                                        Some(target) => {
                                            view! {
                                                <a
                                                    href="#"
                                                    on:click=move |ev| {
                                                        ev.prevent_default();
                                                        on_select_group.run(target.clone());
                                                    }
                                                >
                                                    {label}
                                                </a>
                                            }
                                                .into_any()
                                        }
                                        None => view! { <span>{label}</span> }.into_any(),
                                    };
                                    view! {
                                        <>
                                            {sep}
                                            {inner}
                                        </>
                                    }
                                })
                                .collect_view()
                        }}
                    </h2>
                </div>
            </div>

            <DepartmentsList
                group_id=group_id_memo
                subgroups=subgroups
                show_add_department_dialog=show_add_department_dialog
                on_select_group=on_select_group
                on_department_changed=on_department_changed
            />

            <div class="department-section org-members">
                <h3 class="section__title">"Members"</h3>
                {move || {
                    if members_empty.get() {
                        view! { <p class="empty-tip">"No members"</p> }.into_any()
                    } else {
                        let group_id = group_id_memo.get().unwrap_or_default();
                        view! {
                            <div class="table-container">
                                <table>
                                    <thead>
                                        <tr>
                                            <th style="width: 5%;"></th>
                                            <th style="width: 50%;">"Name"</th>
                                            <th style="width: 15%;">"Role"</th>
                                            <th style="width: 30%;"></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {members
                                            .get()
                                            .into_iter()
                                            .map(|member| {
                                                view! {
                                                    <MemberRow
                                                        member=member
                                                        group_id=group_id.clone()
                                                        is_item_frozen=is_item_frozen
                                                        on_member_changed=on_member_changed
                                                        on_delete=open_delete_member
                                                        on_toggle_frozen=on_toggle_frozen
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>

            <div class="department-section org-libraries">
                <h3 class="section__title">"Libraries"</h3>
                {move || {
                    let items = libraries.get();
                    if items.is_empty() {
                        view! { <p class="empty-tip">"No libraries"</p> }.into_any()
                    } else {
                        view! {
                            <div class="table-container">
                                <table>
                                    <thead>
                                        <tr>
                                            <th style="width: 5%;"></th>
                                            <th style="width: 50%;">"Name"</th>
                                            <th style="width: 30%;">"Size"</th>
                                            <th style="width: 15%;"></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {items
                                            .into_iter()
                                            .map(|library| {
                                                view! {
                                                    <LibraryRow
                                                        library=library
                                                        on_delete=open_delete_library
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>

            <Show when=move || show_delete_member.get()>
                {move || {
                    deleted_member
                        .get()
                        .map(|member| {
                            view! {
                                <DeleteMemberDialog
                                    member=member
                                    group_id=current_group()
                                    toggle=cancel_dialogs
                                    on_member_changed=on_member_changed
                                />
                            }
                        })
                }}
            </Show>

            <Show when=move || show_delete_library.get()>
                {move || {
                    deleted_library
                        .get()
                        .map(|library| {
                            view! {
                                <DeleteLibraryDialog
                                    library=library
                                    group_id=current_group()
                                    toggle=cancel_dialogs
                                    on_library_changed=on_library_changed
                                />
                            }
                        })
                }}
            </Show>

            <Show when=move || show_add_member_dialog.get()>
                {move || {
                    view! {
                        <AddMemberDialog
                            group_id=current_group()
                            toggle=Callback::new(move |_| show_add_member_dialog.set(false))
                            on_member_changed=on_member_changed
                        />
                    }
                }}
            </Show>

            <Show when=move || show_add_library_dialog.get()>
                {move || {
                    view! {
                        <AddLibraryDialog
                            group_id=current_group()
                            toggle=Callback::new(move |_| show_add_library_dialog.set(false))
                            on_library_changed=on_library_changed
                        />
                    }
                }}
            </Show>
        </div>
    }
}
