//! Create Project UI Module
//!
//! MVVM split with the dialog logic kept out of the signal layer:
//! - state.rs: flags and transitions, plain Rust, unit tested
//! - model.rs: API functions (existence check, create)
//! - view_model.rs: signals, debounce timer and async commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod state;
mod view;
mod view_model;

pub use state::METADATA_PUBLIC;
pub use view::CreateProjectDialog;
pub use view_model::CreateProjectViewModel;
