pub mod api_error;
pub mod api_utils;
pub mod debounce;
pub mod form_validation;
pub mod i18n;
pub mod icons;
pub mod notifications;
