use super::view_model::CreateProjectViewModel;
use crate::shared::form_validation::CREATE_PROJECT_NAME;
use crate::shared::i18n::I18nService;
use leptos::prelude::*;
use thaw::*;

/// Create Project dialog
///
/// Opening and closing is driven by the view model; the dialog itself cannot
/// be dismissed by clicking the mask or pressing Escape.
#[component]
pub fn CreateProjectDialog(vm: CreateProjectViewModel) -> impl IntoView {
    let i18n = use_context::<I18nService>().expect("I18nService not found in context");

    let open = RwSignal::new(false);
    Effect::new(move |_| {
        open.set(vm.is_open());
    });

    on_cleanup(move || vm.dispose());

    let input_class = move || {
        if vm.show_name_error() {
            "form__input invalid"
        } else {
            "form__input"
        }
    };
    let tooltip_class = move || {
        if vm.show_name_error() {
            "form-tooltip error"
        } else {
            "form-tooltip"
        }
    };

    view! {
        <Dialog open=open mask_closeable=false close_on_esc=false>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || i18n.t("PROJECT.NEW_PROJECT")}</DialogTitle>
                    <DialogContent>
                        <form
                            novalidate=true
                            on:submit=move |ev| {
                                ev.prevent_default();
                                if vm.can_submit() {
                                    vm.submit();
                                }
                            }
                        >
                            <div class="form-group">
                                <label for=CREATE_PROJECT_NAME>
                                    {move || i18n.t("PROJECT.NAME")}
                                </label>
                                <input
                                    id=CREATE_PROJECT_NAME
                                    name=CREATE_PROJECT_NAME
                                    type="text"
                                    autocomplete="off"
                                    class=input_class
                                    prop:value=move || vm.name()
                                    on:input=move |ev| vm.on_name_input(event_target_value(&ev))
                                />
                                <Show when=move || vm.is_checking()>
                                    <span class="form-hint">
                                        {move || i18n.t("PROJECT.CHECKING_NAME")}
                                    </span>
                                </Show>
                                <div class=tooltip_class>{move || vm.name_tooltip()}</div>
                            </div>

                            <div class="form-group">
                                <span>{move || i18n.t("PROJECT.ACCESS_LEVEL")}</span>
                                <div class="form__checkbox-wrapper">
                                    <input
                                        id="create_project_public"
                                        type="checkbox"
                                        class="form__checkbox"
                                        prop:checked=move || vm.is_public()
                                        on:change=move |ev| vm.set_public(event_target_checked(&ev))
                                    />
                                    <label class="form__checkbox-label" for="create_project_public">
                                        {move || i18n.t("PROJECT.PUBLIC")}
                                    </label>
                                </div>
                                <span class="form-hint">{move || i18n.t("PROJECT.PUBLIC_HINT")}</span>
                            </div>
                        </form>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || !vm.can_submit())
                            on_click=move |_| vm.submit()
                        >
                            {move || i18n.t("BUTTON.OK")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| vm.cancel()
                        >
                            {move || i18n.t("BUTTON.CANCEL")}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
