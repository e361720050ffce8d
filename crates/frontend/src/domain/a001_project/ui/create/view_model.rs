use super::model;
use super::state::{dispatch_outcome, CreateProjectState, NAME_CHECK_DEBOUNCE_MS};
use crate::shared::debounce::{DebounceTicket, Debouncer};
use crate::shared::form_validation::validate_create_project;
use crate::shared::i18n::I18nService;
use crate::shared::notifications::NotificationService;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// ViewModel for the Create Project dialog
///
/// Owned by the page that opens the dialog: the page calls `new_project`, the
/// dialog renders from `state`, and `on_created(true)` reports a successful
/// creation back to the page.
#[derive(Clone, Copy)]
pub struct CreateProjectViewModel {
    pub state: RwSignal<CreateProjectState>,
    debouncer: StoredValue<Debouncer<String>>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    i18n: I18nService,
    notifications: NotificationService,
    on_created: Callback<bool>,
}

impl CreateProjectViewModel {
    pub fn new(
        i18n: I18nService,
        notifications: NotificationService,
        on_created: Callback<bool>,
    ) -> Self {
        Self {
            state: RwSignal::new(CreateProjectState::new()),
            debouncer: StoredValue::new(Debouncer::new(NAME_CHECK_DEBOUNCE_MS)),
            timer: StoredValue::new_local(None),
            i18n,
            notifications,
            on_created,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.opened)
    }

    pub fn can_submit(&self) -> bool {
        self.state
            .with(|s| s.can_submit(&validate_create_project(&s.project)))
    }

    pub fn name(&self) -> String {
        self.state.with(|s| s.project.name.clone())
    }

    pub fn is_public(&self) -> bool {
        self.state.with(|s| s.is_public())
    }

    pub fn show_name_error(&self) -> bool {
        self.state.with(|s| s.shows_name_error())
    }

    pub fn is_checking(&self) -> bool {
        self.state.with(|s| s.check_ongoing)
    }

    pub fn name_tooltip(&self) -> String {
        let key = self.state.with(|s| s.name_tooltip);
        self.i18n.t(key)
    }

    pub fn new_project(&self) {
        self.timer.try_set_value(None);
        self.state.update(|s| s.new_project());
    }

    pub fn cancel(&self) {
        self.timer.try_set_value(None);
        self.state.update(|s| s.cancel());
    }

    pub fn set_public(&self, public: bool) {
        self.state.update(|s| s.set_public(public));
    }

    /// Name field input handler: record the value and (re)arm the debounce timer.
    pub fn on_name_input(&self, name: String) {
        self.state.update(|s| s.set_name(name.clone()));

        let Some(ticket) = self.debouncer.try_update_value(|d| d.push(name)).flatten() else {
            return;
        };

        let vm = *self;
        let delay_ms = self.debouncer.with_value(|d| d.delay_ms());
        // Replacing the stored timer drops (cancels) the previous one
        self.timer.try_set_value(Some(Timeout::new(delay_ms, move || {
            vm.on_debounce_elapsed(ticket);
        })));
    }

    fn on_debounce_elapsed(&self, ticket: DebounceTicket) {
        let Some(name) = self.debouncer.try_update_value(|d| d.fire(ticket)).flatten() else {
            return;
        };

        let form = self
            .state
            .with_untracked(|s| validate_create_project(&s.project));
        let Some(check) = self
            .state
            .try_update(|s| s.begin_name_check(&form))
            .flatten()
        else {
            log::debug!("create project: skipping remote check for invalid name {:?}", name);
            return;
        };

        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::check_project_exists(&check.name).await;
            if let Err(e) = &result {
                log::warn!("create project: existence check for {:?} failed: {}", check.name, e);
            }
            let applied = state.try_update(|s| s.finish_name_check(check.seq, result));
            if applied == Some(false) {
                log::debug!("create project: dropped stale check #{}", check.seq);
            }
        });
    }

    /// Submit the form. A no-op while a previous submission is in flight.
    pub fn submit(&self) {
        let Some(request) = self.state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        let state = self.state;
        let i18n = self.i18n;
        let notifications = self.notifications;
        let on_created = self.on_created;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::create_project(&request).await.map(|id| {
                log::info!(
                    "create project: {:?} created with id {}",
                    request.project_name,
                    id.as_deref().unwrap_or("?")
                );
            });

            let Some(outcome) = state.try_update(|s| s.finish_submit(result)).flatten() else {
                return;
            };

            dispatch_outcome(
                outcome,
                |key| i18n.t_untracked(key),
                || on_created.run(true),
                |text| notifications.show_success(text),
                |error, text| notifications.handle_error(error, text),
            );
        });
    }

    /// Release the debounce timer. Safe to call more than once.
    pub fn dispose(&self) {
        let closed = self
            .debouncer
            .try_update_value(|d| d.close())
            .unwrap_or(false);
        if closed {
            self.timer.try_set_value(None);
        }
    }
}
