// =============================================================================
// Aarohan Web - Toast Notifications
// =============================================================================
// Table of Contents:
// 1. Toast Queue
// 2. Toast Service
// 3. Toaster Component
// =============================================================================

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Toast Queue
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Info => "toast toast-info",
            ToastKind::Error => "toast toast-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Info => "i",
            ToastKind::Error => "!",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// Visible toasts, oldest first. Ids are never reused.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            title: title.into(),
            message: message.into(),
        });
        id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

// -----------------------------------------------------------------------------
// 2. Toast Service
// -----------------------------------------------------------------------------

/// Shared handle to the toast queue, provided through context.
///
/// Each visible toast owns its auto-dismiss `Timeout`. The handles live in
/// owner-scoped storage, so unmounting the app cancels every pending timer.
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    timers: StoredValue<Vec<(u64, Timeout)>, LocalStorage>,
    duration_ms: u32,
}

impl ToastService {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            timers: StoredValue::new_local(Vec::new()),
            duration_ms,
        }
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, title.into(), message.into())
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, title.into(), message.into())
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, title.into(), message.into())
    }

    /// Remove a toast and cancel its timer.
    pub fn dismiss(&self, id: u64) {
        self.queue.try_update(|queue| queue.dismiss(id));
        self.timers
            .try_update_value(|timers| timers.retain(|(timer_id, _)| *timer_id != id));
    }

    /// Visible toasts, oldest first, read without tracking.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.queue
            .try_with_untracked(|queue| queue.toasts().to_vec())
            .unwrap_or_default()
    }

    /// Timer handles still held. Fired timers are released on the next push.
    pub fn pending_timers(&self) -> usize {
        self.timers.try_with_value(|timers| timers.len()).unwrap_or(0)
    }

    fn push(&self, kind: ToastKind, title: String, message: String) -> u64 {
        let Some(id) = self
            .queue
            .try_update(|queue| queue.push(kind, title, message))
        else {
            return 0;
        };
        log::debug!("Toast #{} shown ({:?})", id, kind);

        let queue = self.queue;
        // The callback only touches the queue. Its own handle is dropped
        // later, never from inside the callback.
        let timer = Timeout::new(self.duration_ms, move || {
            queue.try_update(|queue| queue.dismiss(id));
        });

        let live: Vec<u64> = self
            .queue
            .try_with_untracked(|queue| queue.toasts().iter().map(|t| t.id).collect())
            .unwrap_or_default();
        self.timers.try_update_value(|timers| {
            timers.retain(|(timer_id, _)| live.contains(timer_id));
            timers.push((id, timer));
        });
        id
    }
}

// -----------------------------------------------------------------------------
// 3. Toaster Component
// -----------------------------------------------------------------------------

/// Renders the toast stack. Place once near the root.
#[component]
pub fn Toaster() -> impl IntoView {
    let service = expect_context::<ToastService>();
    let queue = service.queue;

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class()>
                            <span class="toast-icon">{toast.kind.icon()}</span>
                            <div class="toast-body">
                                <strong class="toast-title">{toast.title}</strong>
                                <p class="toast-message">{toast.message}</p>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| service.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_and_are_not_reused() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "Sent", "Thanks");
        let b = queue.push(ToastKind::Info, "Note", "");
        assert!(b > a);
        assert!(queue.dismiss(b));
        let c = queue.push(ToastKind::Error, "Oops", "");
        assert!(c > b);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "A", "");
        let b = queue.push(ToastKind::Success, "B", "");
        assert!(queue.dismiss(a));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);
    }

    #[test]
    fn dismissing_twice_is_harmless() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Info, "Once", "");
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }
}
