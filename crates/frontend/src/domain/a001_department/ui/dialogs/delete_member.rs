use crate::domain::a001_department::api;
use crate::shared::modal::Modal;
use crate::system::org_context::use_org;
use contracts::domain::a002_member::Member;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DeleteMemberDialog(
    member: Member,
    group_id: String,
    toggle: Callback<()>,
    on_member_changed: Callback<()>,
) -> impl IntoView {
    let org = use_org();
    let (busy, set_busy) = signal(false);

    let confirm_text = format!("Really remove {} from this department?", member.name);

    let delete = {
        let org_id = org.org_id;
        let email = member.email.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            set_busy.set(true);
            let org_id = org_id.clone();
            let group_id = group_id.clone();
            let email = email.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_department_member(&org_id, &group_id, &email).await {
                    Ok(()) => {
                        on_member_changed.run(());
                        toggle.run(());
                    }
                    Err(e) => {
                        log::warn!("deleting member {} failed: {}", email, e);
                        set_busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <Modal title="Delete Member".to_string() on_close=toggle>
            <p class="dialog-text">{confirm_text}</p>

            <div class="dialog-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| toggle.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=delete
                    disabled=Signal::derive(move || busy.get())
                >
                    "Delete"
                </Button>
            </div>
        </Modal>
    }
}
