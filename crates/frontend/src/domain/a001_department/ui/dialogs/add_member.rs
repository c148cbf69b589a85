use crate::domain::a001_department::api;
use crate::shared::modal::Modal;
use crate::system::org_context::use_org;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AddMemberDialog(
    group_id: String,
    toggle: Callback<()>,
    on_member_changed: Callback<()>,
) -> impl IntoView {
    let org = use_org();
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let submit = {
        let org_id = org.org_id;
        move |_| {
            let value = email.get_untracked().trim().to_string();
            if value.is_empty() {
                set_error.set(Some("Email is required.".to_string()));
                return;
            }
            if busy.get_untracked() {
                return;
            }
            set_busy.set(true);
            let org_id = org_id.clone();
            let group_id = group_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::add_department_member(&org_id, &group_id, &value).await {
                    Ok(()) => {
                        on_member_changed.run(());
                        toggle.run(());
                    }
                    Err(e) => {
                        log::warn!("adding member {} failed: {}", value, e);
                        set_error.set(Some(format!("Failed to add member: {}", e)));
                        set_busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <Modal title="Add Member".to_string() on_close=toggle>
            {move || error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

            <div class="detail-form">
                <div class="form__group">
                    <label class="form__label" for="member-email">"Email"</label>
                    <input
                        id="member-email"
                        class="form__input"
                        type="email"
                        placeholder="name@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
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
