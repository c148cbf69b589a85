use crate::domain::a001_department::ui::item::DepartmentItemView;
use crate::shared::icons::icon;
use crate::system::org_context::OrgContext;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // The org scope is injected by the hosting page; read it once and hand
    // it to the whole panel via context.
    provide_context(OrgContext::from_window());

    // Add-flow dialogs are coordinated here; the item view only renders
    // them and reports completion back through its refresh callbacks.
    let show_add_department_dialog = RwSignal::new(false);
    let show_add_member_dialog = RwSignal::new(false);
    let show_add_library_dialog = RwSignal::new(false);

    view! {
        <div class="main-panel department-admin">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 class="page__title">"Department Admin"</h1>
                <Space>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| show_add_department_dialog.set(true)>
                        {icon("plus")}
                        " New Department"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_add_member_dialog.set(true)>
                        {icon("plus")}
                        " Add Member"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_add_library_dialog.set(true)>
                        {icon("plus")}
                        " New Library"
                    </Button>
                </Space>
            </Flex>

            <DepartmentItemView
                show_add_department_dialog=show_add_department_dialog
                show_add_member_dialog=show_add_member_dialog
                show_add_library_dialog=show_add_library_dialog
            />
        </div>
    }
}
