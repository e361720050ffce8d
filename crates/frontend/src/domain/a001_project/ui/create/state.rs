//! Create Project dialog - state and transitions
//!
//! Holds every flag the dialog works with and the rules that move them. No
//! signals, timers or HTTP here: the view model feeds events in and performs
//! the side effects the transitions ask for.

use crate::shared::api_error::ApiError;
use crate::shared::form_validation::{FormValidation, CREATE_PROJECT_NAME};
use contracts::domain::a001_project::{CreateProjectRequest, ProjectDraft};

/// Quiet period before the name is checked against the server
pub const NAME_CHECK_DEBOUNCE_MS: u32 = 300;

/// Metadata key toggled by the "Public" checkbox
pub const METADATA_PUBLIC: &str = "public";

pub mod keys {
    pub const NAME_TOOLTIP: &str = "PROJECT.NAME_TOOLTIP";
    pub const NAME_ALREADY_EXISTS: &str = "PROJECT.NAME_ALREADY_EXISTS";
    pub const NAME_IS_ILLEGAL: &str = "PROJECT.NAME_IS_ILLEGAL";
    pub const UNKNOWN_ERROR: &str = "PROJECT.UNKNOWN_ERROR";
    pub const CREATED_SUCCESS: &str = "PROJECT.CREATED_SUCCESS";
}

/// A name existence query to send to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCheck {
    pub seq: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Failed {
        message_key: &'static str,
        error: ApiError,
    },
}

/// Message key shown for a failed creation request.
pub fn error_message_key(error: &ApiError) -> &'static str {
    match error.status() {
        Some(409) => keys::NAME_ALREADY_EXISTS,
        Some(400) => keys::NAME_IS_ILLEGAL,
        _ => keys::UNKNOWN_ERROR,
    }
}

/// Route a finished submission to its side effects. `t` resolves message keys.
pub fn dispatch_outcome(
    outcome: SubmitOutcome,
    t: impl Fn(&str) -> String,
    on_created: impl FnOnce(),
    show_success: impl FnOnce(String),
    show_error: impl FnOnce(&ApiError, String),
) {
    match outcome {
        SubmitOutcome::Created => {
            on_created();
            show_success(t(keys::CREATED_SUCCESS));
        }
        SubmitOutcome::Failed { message_key, error } => {
            show_error(&error, t(message_key));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectState {
    pub project: ProjectDraft,
    pub opened: bool,
    pub has_changed: bool,
    pub is_submit_ongoing: bool,
    pub is_name_valid: bool,
    pub name_tooltip: &'static str,
    /// An existence query is on the wire
    pub check_ongoing: bool,
    /// The debounce timer is armed and no query has been issued yet
    pub check_pending: bool,
    check_seq: u64,
}

impl Default for CreateProjectState {
    fn default() -> Self {
        Self {
            project: ProjectDraft::default(),
            opened: false,
            has_changed: false,
            is_submit_ongoing: false,
            is_name_valid: true,
            name_tooltip: keys::NAME_TOOLTIP,
            check_ongoing: false,
            check_pending: false,
            check_seq: 0,
        }
    }
}

impl CreateProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog with an empty draft.
    ///
    /// Responses to checks issued before this call are discarded.
    pub fn new_project(&mut self) {
        self.project = ProjectDraft::default();
        self.has_changed = false;
        self.is_name_valid = true;
        self.name_tooltip = keys::NAME_TOOLTIP;
        self.check_ongoing = false;
        self.check_pending = false;
        self.check_seq += 1;

        self.opened = true;
    }

    pub fn cancel(&mut self) {
        self.opened = false;
        self.check_pending = false;
        self.check_ongoing = false;
        self.check_seq += 1;
    }

    /// Record a keystroke in the name field. The caller pushes the same value
    /// into the debouncer.
    pub fn set_name(&mut self, name: String) {
        if self.project.name != name {
            self.project.name = name;
            self.has_changed = true;
        }
        self.check_pending = true;
    }

    /// The name field is flagged only once the user has edited the form.
    pub fn shows_name_error(&self) -> bool {
        self.has_changed && !self.is_name_valid
    }

    pub fn is_public(&self) -> bool {
        self.project
            .metadata
            .get(METADATA_PUBLIC)
            .is_some_and(|v| v == "true")
    }

    pub fn set_public(&mut self, public: bool) {
        self.project
            .metadata
            .insert(METADATA_PUBLIC.to_string(), public.to_string());
        self.has_changed = true;
    }

    /// The debounce window elapsed.
    ///
    /// Returns the query to send when the name is locally valid. Either way any
    /// query still in flight becomes stale.
    pub fn begin_name_check(&mut self, form: &FormValidation) -> Option<NameCheck> {
        self.check_pending = false;
        let field = form.field(CREATE_PROJECT_NAME)?;

        self.check_seq += 1;
        self.is_name_valid = field.valid;
        self.name_tooltip = keys::NAME_TOOLTIP;

        if field.valid {
            self.check_ongoing = true;
            Some(NameCheck {
                seq: self.check_seq,
                name: field.value.clone(),
            })
        } else {
            self.check_ongoing = false;
            None
        }
    }

    /// Apply the server's answer to check `seq`: `Ok(true)` means the name is
    /// taken. Failures are treated as "does not exist".
    ///
    /// Returns `false` when the answer was stale and ignored.
    pub fn finish_name_check(&mut self, seq: u64, result: Result<bool, ApiError>) -> bool {
        if seq != self.check_seq {
            return false;
        }
        self.check_ongoing = false;
        if let Ok(true) = result {
            self.is_name_valid = false;
            self.name_tooltip = keys::NAME_ALREADY_EXISTS;
        }
        true
    }

    pub fn can_submit(&self, form: &FormValidation) -> bool {
        form.is_valid()
            && !self.is_submit_ongoing
            && self.is_name_valid
            && !self.check_ongoing
            && !self.check_pending
    }

    /// Start a submission. `None` while one is already in flight.
    pub fn begin_submit(&mut self) -> Option<CreateProjectRequest> {
        if self.is_submit_ongoing {
            return None;
        }
        self.is_submit_ongoing = true;
        Some(self.project.to_request())
    }

    /// Apply the server's answer. `None` when no submission is in flight, so a
    /// repeated answer cannot report a creation twice.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Option<SubmitOutcome> {
        if !self.is_submit_ongoing {
            return None;
        }
        self.is_submit_ongoing = false;
        let outcome = match result {
            Ok(()) => {
                self.opened = false;
                SubmitOutcome::Created
            }
            Err(error) => SubmitOutcome::Failed {
                message_key: error_message_key(&error),
                error,
            },
        };
        Some(outcome)
    }
}
