// =============================================================================
// CornerInch Web - Toast Notifications Service
// =============================================================================
// Transient, queued, auto-dismissing messages shown after user actions.
// Rendering and the dismiss timers live in `components::toaster`.
// =============================================================================

use std::collections::VecDeque;

use leptos::prelude::*;

/// Toast flavour, used for styling and the ARIA role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// A message for the user: title plus a secondary description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Anything that can show a `Notice` to the user.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// A queued toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// FIFO of visible toasts. Pushing past the limit evicts the oldest.
#[derive(Clone, Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    limit: usize,
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 1,
            limit: limit.max(1),
        }
    }

    /// Queue a notice and return the id of its toast.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push_back(Toast { id, notice });
        while self.toasts.len() > self.limit {
            self.toasts.pop_front();
        }
        id
    }

    /// Remove a toast. Returns false when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Reactive handle to the page's toast queue, shared through `AppState`.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
    lifetime_ms: u32,
}

impl Toasts {
    pub fn new(limit: usize, lifetime_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(limit)),
            lifetime_ms,
        }
    }

    /// How long a toast stays up before it dismisses itself.
    pub fn lifetime_ms(&self) -> u32 {
        self.lifetime_ms
    }

    pub fn push(&self, notice: Notice) -> u64 {
        log::debug!("Toast: {}", notice.title);
        self.queue
            .try_update(|queue| queue.push(notice))
            .unwrap_or_default()
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }

    /// Current toasts, oldest first.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.iter().cloned().collect())
    }
}

impl Notifier for Toasts {
    fn notify(&self, notice: Notice) {
        self.push(notice);
    }
}
