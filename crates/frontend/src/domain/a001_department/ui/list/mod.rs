use crate::domain::a001_department::ui::dialogs::AddDepartmentDialog;
use crate::shared::icons::icon;
use contracts::domain::a001_department::{Department, DepartmentId};
use leptos::prelude::*;

/// Subgroups of the current department, rendered as a flat link list.
/// Selecting one routes the whole panel to that department. The
/// add-department dialog is coordinated by the page header but rendered
/// here, nested under the current department.
#[component]
pub fn DepartmentsList(
    #[prop(into)] group_id: Signal<Option<String>>,
    #[prop(into)] subgroups: Signal<Vec<Department>>,
    show_add_department_dialog: RwSignal<bool>,
    on_select_group: Callback<String>,
    on_department_changed: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="department-section org-groups">
            {move || {
                let groups = subgroups.get();
                if groups.is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <ul class="department-list">
                            {groups
                                .into_iter()
                                .map(|group| {
                                    let target = group.id.to_string();
                                    view! {
                                        <li class="department-list__item">
                                            <span class="department-list__icon">
                                                {icon("folder-closed")}
                                            </span>
                                            <a
                                                href="#"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    on_select_group.run(target.clone());
                                                }
                                            >
                                                {group.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}

            <Show when=move || show_add_department_dialog.get()>
                {move || {
                    let parent = group_id
                        .get()
                        .and_then(|id| DepartmentId::from_string(&id).ok())
                        .map(|id| id.value());
                    view! {
                        <AddDepartmentDialog
                            parent_group=parent
                            toggle=Callback::new(move |_| show_add_department_dialog.set(false))
                            on_department_changed=on_department_changed
                        />
                    }
                }}
            </Show>
        </div>
    }
}
