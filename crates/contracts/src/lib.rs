//! Types shared between the backend and the wasm frontend.

pub mod domain;
