//! Project name rules shared by the create dialog and the server.
//!
//! A legal name is lowercase alphanumeric runs joined by single `.`, `_` or `-`
//! separators, e.g. `library`, `team-a.infra`, `ci_cache`.

use thiserror::Error;

pub const PROJECT_NAME_MIN_LEN: usize = 2;
pub const PROJECT_NAME_MAX_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectNameError {
    #[error("project name is required")]
    Empty,
    #[error("project name must be at least {} characters long", PROJECT_NAME_MIN_LEN)]
    TooShort,
    #[error("project name must be at most {} characters long", PROJECT_NAME_MAX_LEN)]
    TooLong,
    #[error("project name contains an illegal character {0:?}")]
    InvalidCharacter(char),
    #[error("project name must start and end with a letter or digit and not repeat separators")]
    BadSeparator,
}

fn is_separator(c: char) -> bool {
    matches!(c, '.' | '_' | '-')
}

pub fn validate_project_name(name: &str) -> Result<(), ProjectNameError> {
    if name.is_empty() {
        return Err(ProjectNameError::Empty);
    }

    let len = name.chars().count();
    if len < PROJECT_NAME_MIN_LEN {
        return Err(ProjectNameError::TooShort);
    }
    if len > PROJECT_NAME_MAX_LEN {
        return Err(ProjectNameError::TooLong);
    }

    let mut prev_separator = true; // a leading separator is rejected
    for c in name.chars() {
        if is_separator(c) {
            if prev_separator {
                return Err(ProjectNameError::BadSeparator);
            }
            prev_separator = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            prev_separator = false;
        } else {
            return Err(ProjectNameError::InvalidCharacter(c));
        }
    }

    if prev_separator {
        return Err(ProjectNameError::BadSeparator);
    }

    Ok(())
}
