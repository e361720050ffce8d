use crate::domain::a001_project::ui::create::{CreateProjectDialog, CreateProjectViewModel};
use crate::domain::a001_project::ui::list::ProjectList;
use crate::shared::i18n::I18nService;
use crate::shared::icons::icon;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Translation and toast services are shared by every page via context.
    provide_context(I18nService::detect());
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <ProjectsPage />
            <NotificationHost />
        </ConfigProvider>
    }
}

#[component]
fn ProjectsPage() -> impl IntoView {
    let i18n = use_context::<I18nService>().expect("I18nService not found in context");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");

    let (reload, set_reload) = signal(0u32);
    let (created_count, set_created_count) = signal(0u32);

    let on_created = Callback::new(move |created: bool| {
        if created {
            set_created_count.update(|n| *n += 1);
            set_reload.update(|n| *n += 1);
        }
    });
    let vm = CreateProjectViewModel::new(i18n, notifications, on_created);

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="header__title">{move || i18n.t("PROJECT.PROJECTS")}</h1>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.new_project()>
                    {icon("plus")}
                    {move || i18n.t("PROJECT.NEW_PROJECT")}
                </Button>
            </div>
            <Show when=move || { created_count.get() > 0 }>
                <p class="form-hint">
                    {move || format!("{}: {}", i18n.t("PROJECT.CREATED_THIS_SESSION"), created_count.get())}
                </p>
            </Show>
            <ProjectList reload=reload />
            <CreateProjectDialog vm=vm />
        </div>
    }
}
