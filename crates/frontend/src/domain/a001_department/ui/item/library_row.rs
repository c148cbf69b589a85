use crate::shared::format::bytes_to_size;
use crate::shared::icons::icon;
use contracts::domain::a003_library::Library;
use leptos::prelude::*;

/// One library shared with the department: icon by attributes, name,
/// human-readable size and a hover-revealed delete affordance. Libraries
/// have no edit-in-progress concept, so hover is never suspended here.
#[component]
pub fn LibraryRow(library: Library, on_delete: Callback<Library>) -> impl IntoView {
    let (highlight, set_highlight) = signal(false);

    let icon_name = library.icon_name();
    let name = library.name.clone();
    let size = bytes_to_size(library.size);
    let library_for_delete = library.clone();

    view! {
        <tr
            class=move || if highlight.get() { "tr-highlight" } else { "" }
            on:mouseenter=move |_| set_highlight.set(true)
            on:mouseleave=move |_| set_highlight.set(false)
        >
            <td>
                <div class="icon-cell-container">{icon(icon_name)}</div>
            </td>
            <td>{name}</td>
            <td>{size}</td>
            <td
                class="cursor-pointer text-center"
                on:click=move |_| on_delete.run(library_for_delete.clone())
            >
                <span
                    class=move || if highlight.get() { "action-icon" } else { "action-icon vh" }
                    title="Delete"
                >
                    {icon("x")}
                </span>
            </td>
        </tr>
    }
}
