use crate::domain::a001_department::api;
use crate::shared::modal::Modal;
use crate::system::org_context::use_org;
use leptos::prelude::*;
use thaw::*;

/// Create a department; when the panel currently shows one, the new
/// department is nested under it.
#[component]
pub fn AddDepartmentDialog(
    parent_group: Option<i64>,
    toggle: Callback<()>,
    on_department_changed: Callback<()>,
) -> impl IntoView {
    let org = use_org();
    let (name, set_name) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let submit = {
        let org_id = org.org_id;
        move |_| {
            let value = name.get_untracked().trim().to_string();
            if value.is_empty() {
                set_error.set(Some("Name is required.".to_string()));
                return;
            }
            if busy.get_untracked() {
                return;
            }
            set_busy.set(true);
            let org_id = org_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::add_department(&org_id, &value, parent_group).await {
                    Ok(()) => {
                        on_department_changed.run(());
                        toggle.run(());
                    }
                    Err(e) => {
                        log::warn!("creating department {} failed: {}", value, e);
                        set_error.set(Some(format!("Failed to create department: {}", e)));
                        set_busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <Modal title="New Department".to_string() on_close=toggle>
            {move || error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

            <div class="detail-form">
                <div class="form__group">
                    <label class="form__label" for="department-name">"Name"</label>
                    <input
                        id="department-name"
                        class="form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="dialog-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| toggle.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || busy.get())
                >
                    "Submit"
                </Button>
            </div>
        </Modal>
    }
}
