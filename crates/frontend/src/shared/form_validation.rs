//! Explicit validation results for forms.
//!
//! Forms compute a [`FormValidation`] from their draft and hand it to the
//! view model by reference, instead of reading validity back from the DOM.

use contracts::domain::a001_project::{validate_project_name, ProjectDraft};
use std::collections::BTreeMap;

/// Control name of the project name input in the create dialog
pub const CREATE_PROJECT_NAME: &str = "create_project_name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidation {
    pub value: String,
    pub valid: bool,
}

impl FieldValidation {
    pub fn valid(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            valid: true,
        }
    }

    pub fn invalid(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            valid: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidation {
    fields: BTreeMap<&'static str, FieldValidation>,
}

impl FormValidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: &'static str, field: FieldValidation) -> Self {
        self.fields.insert(name, field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldValidation> {
        self.fields.get(name)
    }

    /// True when every field is valid. An empty form is valid.
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|f| f.valid)
    }
}

pub fn validate_create_project(draft: &ProjectDraft) -> FormValidation {
    let field = match validate_project_name(&draft.name) {
        Ok(()) => FieldValidation::valid(&draft.name),
        Err(_) => FieldValidation::invalid(&draft.name),
    };
    FormValidation::new().with_field(CREATE_PROJECT_NAME, field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ProjectDraft {
        ProjectDraft {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_name() {
        let form = validate_create_project(&draft("library"));
        assert!(form.is_valid());
        let field = form.field(CREATE_PROJECT_NAME).unwrap();
        assert_eq!(field.value, "library");
    }

    #[test]
    fn test_invalid_name_marks_field() {
        let form = validate_create_project(&draft("Library"));
        assert!(!form.is_valid());
        let field = form.field(CREATE_PROJECT_NAME).unwrap();
        assert!(!field.valid);
        assert_eq!(field.value, "Library");
    }

    #[test]
    fn test_empty_draft_is_invalid() {
        assert!(!validate_create_project(&ProjectDraft::default()).is_valid());
    }

    #[test]
    fn test_one_invalid_field_invalidates_form() {
        let form = FormValidation::new()
            .with_field("a", FieldValidation::valid("x"))
            .with_field("b", FieldValidation::invalid(""));
        assert!(!form.is_valid());
        assert!(FormValidation::new().is_valid());
    }
}
