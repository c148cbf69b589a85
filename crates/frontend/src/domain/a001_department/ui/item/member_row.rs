use super::state::hover_transition;
use crate::domain::a001_department::api;
use crate::shared::icons::icon;
use crate::system::org_context::use_org;
use contracts::domain::a002_member::{Member, MemberRole};
use leptos::prelude::*;

/// One member of the department.
///
/// The owner never gets an actionable row; everyone else gets a
/// hover-highlighted row with an inline role editor and a delete
/// affordance. While the table is frozen (an edit in flight) hover and
/// delete are suspended.
#[component]
pub fn MemberRow(
    member: Member,
    group_id: String,
    #[prop(into)] is_item_frozen: Signal<bool>,
    on_member_changed: Callback<()>,
    on_delete: Callback<Member>,
    on_toggle_frozen: Callback<bool>,
) -> impl IntoView {
    if member.is_owner() {
        return view! { <></> }.into_any();
    }

    let org = use_org();
    let (highlight, set_highlight) = signal(false);

    let hover = move |entering: bool| {
        if let Some(next) = hover_transition(is_item_frozen.get_untracked(), entering) {
            set_highlight.set(next);
        }
    };

    let change_role = {
        let email = member.email.clone();
        let org_id = org.org_id;
        move |role: MemberRole| {
            let email = email.clone();
            let org_id = org_id.clone();
            let group_id = group_id.clone();
            // Fire and forget: the highlight clears now, the table refreshes
            // when the server answers.
            set_highlight.set(false);
            wasm_bindgen_futures::spawn_local(async move {
                match api::set_member_admin(&org_id, &group_id, &email, role.is_admin_flag()).await
                {
                    Ok(()) => on_member_changed.run(()),
                    Err(e) => log::warn!("updating role for {} failed: {}", email, e),
                }
            });
        }
    };

    let member_link = format!("/org/useradmin/info/{}/", urlencoding::encode(&member.email));
    let member_for_delete = member.clone();
    let avatar_url = member.avatar_url.clone();
    let name = member.name.clone();
    let role = member.role;

    view! {
        <tr
            class=move || if highlight.get() { "tr-highlight" } else { "" }
            on:mouseenter=move |_| hover(true)
            on:mouseleave=move |_| hover(false)
        >
            <td>
                <img class="avatar" src=avatar_url alt="avatar" width="24"/>
            </td>
            <td>
                <a href=member_link>{name}</a>
            </td>
            <td>
                <RoleEditor
                    current_role=role
                    edit_icon_visible=Signal::derive(move || highlight.get())
                    on_toggle_frozen=on_toggle_frozen
                    on_role_changed=Callback::new(change_role)
                />
            </td>
            {move || {
                if is_item_frozen.get() {
                    view! { <td></td> }.into_any()
                } else {
                    let member = member_for_delete.clone();
                    view! {
                        <td
                            class="cursor-pointer text-center"
                            on:click=move |_| on_delete.run(member.clone())
                        >
                            <span
                                class=move || {
                                    if highlight.get() { "action-icon" } else { "action-icon vh" }
                                }
                                title="Delete"
                            >
                                {icon("x")}
                            </span>
                        </td>
                    }
                        .into_any()
                }
            }}
        </tr>
    }
    .into_any()
}

/// Text-mode role editor: the current role with a pencil shown on row
/// hover; opening it freezes the table until a choice is made or the menu
/// is dismissed.
#[component]
fn RoleEditor(
    current_role: MemberRole,
    #[prop(into)] edit_icon_visible: Signal<bool>,
    on_toggle_frozen: Callback<bool>,
    on_role_changed: Callback<MemberRole>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    let toggle = move |next: bool| {
        set_open.set(next);
        on_toggle_frozen.run(next);
    };

    view! {
        <div class="role-editor">
            {move || {
                if open.get() {
                    view! {
                        <ul class="role-editor__menu">
                            {MemberRole::assignable()
                                .into_iter()
                                .map(|role| {
                                    view! {
                                        <li>
                                            <button
                                                class="role-editor__option"
                                                on:click=move |_| {
                                                    toggle(false);
                                                    on_role_changed.run(role);
                                                }
                                            >
                                                {role.as_str()}
                                                {(role == current_role).then(|| icon("check"))}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                } else {
                    view! {
                        <span class="role-editor__text">
                            {current_role.as_str()}
                            <button
                                class=move || {
                                    if edit_icon_visible.get() {
                                        "role-editor__edit"
                                    } else {
                                        "role-editor__edit vh"
                                    }
                                }
                                title="Edit"
                                on:click=move |_| toggle(true)
                            >
                                {icon("pencil")}
                            </button>
                        </span>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
