//! Global success/error toasts.

use crate::shared::api_error::ApiError;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const SUCCESS_TTL_MS: u32 = 4_000;
const ERROR_TTL_MS: u32 = 8_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification--success",
            NotificationKind::Error => "notification notification--error",
        }
    }

    fn ttl_ms(&self) -> u32 {
        match self {
            NotificationKind::Success => SUCCESS_TTL_MS,
            NotificationKind::Error => ERROR_TTL_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

/// Toast queue shared through context.
///
/// Must be rendered by exactly one `NotificationHost`.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn show_success(&self, text: String) {
        self.push(NotificationKind::Success, text);
    }

    /// Surface a failed API call. `text` is the already localized message.
    pub fn handle_error(&self, error: &ApiError, text: String) {
        log::error!("{} ({})", text, error);
        self.push(NotificationKind::Error, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, kind: NotificationKind, text: String) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| items.push(Notification { id, kind, text }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(kind.ttl_ms()).await;
            svc.dismiss(id);
        });

        id
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)");

    view! {
        <div class="notifications">
            <For
                each=move || svc.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let glyph = match n.kind {
                        NotificationKind::Success => "check",
                        NotificationKind::Error => "x",
                    };
                    view! {
                        <div class=n.kind.class() role="status" on:click=move |_| svc.dismiss(id)>
                            {icon(glyph)}
                            <span>{n.text}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
