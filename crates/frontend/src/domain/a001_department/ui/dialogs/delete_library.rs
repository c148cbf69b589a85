use crate::domain::a001_department::api;
use crate::shared::modal::Modal;
use crate::system::org_context::use_org;
use contracts::domain::a003_library::Library;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DeleteLibraryDialog(
    library: Library,
    group_id: String,
    toggle: Callback<()>,
    on_library_changed: Callback<()>,
) -> impl IntoView {
    let org = use_org();
    let (busy, set_busy) = signal(false);

    let confirm_text = format!("Really delete library {}?", library.name);

    let delete = {
        let org_id = org.org_id;
        let library_id = library.id.as_string();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            set_busy.set(true);
            let org_id = org_id.clone();
            let group_id = group_id.clone();
            let library_id = library_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_department_library(&org_id, &group_id, &library_id).await {
                    Ok(()) => {
                        on_library_changed.run(());
                        toggle.run(());
                    }
                    Err(e) => {
                        log::warn!("deleting library {} failed: {}", library_id, e);
                        set_busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <Modal title="Delete Library".to_string() on_close=toggle>
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
