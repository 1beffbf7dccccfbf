// =============================================================================
// CornerInch Web - Signup Form Controller
// =============================================================================
// Table of Contents:
// 1. Form State
// 2. Requests & Outcomes
// 3. Transport
// 4. Controller
// =============================================================================

use futures::future::LocalBoxFuture;
use leptos::prelude::*;

use crate::api::SignupError;
use crate::config::DeliveryMode;
use crate::services::toasts::{Notice, Notifier};
use crate::utils::{email_domain, form_pair};

pub const SUCCESS_TITLE: &str = "Thank you for joining our early community!";
pub const SUCCESS_DESCRIPTION: &str = "We'll notify you when we launch.";
pub const FAILURE_TITLE: &str = "We couldn't save your email.";
pub const FAILURE_DESCRIPTION: &str = "Please check your connection and try again.";

// -----------------------------------------------------------------------------
// 1. Form State
// -----------------------------------------------------------------------------

/// Email input value plus the in-flight flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupFormState {
    pub email: String,
    pub submitting: bool,
}

impl SignupFormState {
    /// Idle -> Submitting. Returns the request to send, or `None` when the
    /// field is empty or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<SignupRequest> {
        if self.submitting || self.email.is_empty() {
            return None;
        }
        self.submitting = true;
        Some(SignupRequest::new(self.email.clone()))
    }

    /// Submitting -> Idle, clearing the field.
    pub fn finish_submit(&mut self) {
        self.email.clear();
        self.submitting = false;
    }

    /// Submitting -> Idle, keeping what the user typed.
    pub fn abandon_submit(&mut self) {
        self.submitting = false;
    }
}

// -----------------------------------------------------------------------------
// 2. Requests & Outcomes
// -----------------------------------------------------------------------------

/// One signup to deliver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupRequest {
    email: String,
}

impl SignupRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// `email=<urlencoded address>`
    pub fn form_body(&self) -> String {
        form_pair("email", &self.email)
    }
}

/// What the transport could observe about a delivered request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryReceipt {
    /// Sent, but the response was not readable.
    Opaque,
    /// The collector answered with a 2xx status.
    Accepted { status: u16 },
}

/// Result of one call to `SignupForm::submit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Empty field or a submission already in flight. Nothing was sent.
    Ignored,
    Delivered(DeliveryReceipt),
    Failed(SignupError),
}

impl SignupOutcome {
    /// The toast this outcome shows, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SignupOutcome::Ignored => None,
            SignupOutcome::Delivered(_) => Some(Notice::success(SUCCESS_TITLE, SUCCESS_DESCRIPTION)),
            SignupOutcome::Failed(_) => Some(Notice::error(FAILURE_TITLE, FAILURE_DESCRIPTION)),
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Transport
// -----------------------------------------------------------------------------

/// Sends a signup to the external collector.
pub trait SignupTransport {
    fn deliver<'a>(
        &'a self,
        request: &'a SignupRequest,
    ) -> LocalBoxFuture<'a, Result<DeliveryReceipt, SignupError>>;
}

// -----------------------------------------------------------------------------
// 4. Controller
// -----------------------------------------------------------------------------

/// Signup form controller. Both forms on the page share one instance.
#[derive(Clone, Copy)]
pub struct SignupForm {
    state: RwSignal<SignupFormState>,
    delivery: DeliveryMode,
}

impl SignupForm {
    pub fn new(delivery: DeliveryMode) -> Self {
        Self {
            state: RwSignal::new(SignupFormState::default()),
            delivery,
        }
    }

    pub fn delivery(&self) -> DeliveryMode {
        self.delivery
    }

    pub fn email(&self) -> String {
        self.state.with(|s| s.email.clone())
    }

    pub fn set_email(&self, email: String) {
        self.state.update(|s| s.email = email);
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.submitting)
    }

    pub fn snapshot(&self) -> SignupFormState {
        self.state.get_untracked()
    }

    /// Run one submission: validate, send once, notify once, reset.
    pub async fn submit<T, N>(&self, transport: &T, notifier: &N) -> SignupOutcome
    where
        T: SignupTransport + ?Sized,
        N: Notifier + ?Sized,
    {
        // Read first so an ignored submit never notifies subscribers
        let ready = self.state.with_untracked(|s| !s.submitting && !s.email.is_empty());
        if !ready {
            return SignupOutcome::Ignored;
        }
        let Some(request) = self.state.try_update(SignupFormState::begin_submit).flatten() else {
            return SignupOutcome::Ignored;
        };

        log::info!("Signup submitted for @{}", email_domain(request.email()));

        let outcome = match (transport.deliver(&request).await, self.delivery) {
            (Ok(receipt), _) => SignupOutcome::Delivered(receipt),
            (Err(err), DeliveryMode::Opaque) => {
                // Response-blind delivery: the user is told it worked either way
                log::warn!("Signup delivery failed: {}", err);
                SignupOutcome::Delivered(DeliveryReceipt::Opaque)
            }
            (Err(err), DeliveryMode::Confirmed) => {
                log::warn!("Signup delivery failed: {}", err);
                SignupOutcome::Failed(err)
            }
        };

        if let Some(notice) = outcome.notice() {
            notifier.notify(notice);
        }

        match outcome {
            SignupOutcome::Failed(_) => self.state.update(SignupFormState::abandon_submit),
            _ => self.state.update(SignupFormState::finish_submit),
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::toasts::ToastKind;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::RefCell;

    /// Records requests and what the form looked like while they were in flight.
    struct FakeCollector {
        form: SignupForm,
        result: Result<DeliveryReceipt, SignupError>,
        sent: RefCell<Vec<SignupRequest>>,
        submitting_during_send: RefCell<Vec<bool>>,
    }

    impl FakeCollector {
        fn new(form: SignupForm, result: Result<DeliveryReceipt, SignupError>) -> Self {
            Self {
                form,
                result,
                sent: RefCell::new(Vec::new()),
                submitting_during_send: RefCell::new(Vec::new()),
            }
        }
    }

    impl SignupTransport for FakeCollector {
        fn deliver<'a>(
            &'a self,
            request: &'a SignupRequest,
        ) -> LocalBoxFuture<'a, Result<DeliveryReceipt, SignupError>> {
            async move {
                self.sent.borrow_mut().push(request.clone());
                self.submitting_during_send
                    .borrow_mut()
                    .push(self.form.is_submitting());
                self.result.clone()
            }
            .boxed_local()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    #[test]
    fn test_empty_email_is_a_no_op() {
        let form = SignupForm::new(DeliveryMode::Opaque);
        let collector = FakeCollector::new(form, Ok(DeliveryReceipt::Opaque));
        let notifier = RecordingNotifier::default();

        let before = form.snapshot();
        let outcome = block_on(form.submit(&collector, &notifier));

        assert_eq!(outcome, SignupOutcome::Ignored);
        assert_eq!(form.snapshot(), before);
        assert!(collector.sent.borrow().is_empty());
        assert!(notifier.notices.borrow().is_empty());
    }

    #[test]
    fn test_ignored_submit_leaves_subscribers_alone() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let form = SignupForm::new(DeliveryMode::Opaque);
        let collector = FakeCollector::new(form, Ok(DeliveryReceipt::Opaque));
        let notifier = RecordingNotifier::default();

        // Recomputes only when the form state notifies its subscribers
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let state = form.state;
        let watcher = Memo::new(move |_| {
            state.with(|s| s.submitting);
            counter.fetch_add(1, Ordering::SeqCst) + 1
        });
        assert_eq!(watcher.get_untracked(), 1);

        assert_eq!(block_on(form.submit(&collector, &notifier)), SignupOutcome::Ignored);
        assert_eq!(watcher.get_untracked(), 1);

        // Already in flight
        form.state.update(|s| {
            s.email = "ada@example.com".to_string();
            s.submitting = true;
        });
        assert_eq!(watcher.get_untracked(), 2);
        assert_eq!(block_on(form.submit(&collector, &notifier)), SignupOutcome::Ignored);
        assert_eq!(watcher.get_untracked(), 2);

        assert!(collector.sent.borrow().is_empty());
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_submit_sends_once_and_resets() {
        let form = SignupForm::new(DeliveryMode::Opaque);
        form.set_email("ada@example.com".to_string());
        let collector = FakeCollector::new(form, Ok(DeliveryReceipt::Opaque));
        let notifier = RecordingNotifier::default();

        assert!(!form.is_submitting());
        let outcome = block_on(form.submit(&collector, &notifier));

        assert_eq!(outcome, SignupOutcome::Delivered(DeliveryReceipt::Opaque));
        assert_eq!(*collector.submitting_during_send.borrow(), [true]);
        assert_eq!(form.snapshot(), SignupFormState::default());

        let sent = collector.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email(), "ada@example.com");
        assert_eq!(sent[0].form_body(), "email=ada%40example.com");

        let notices = notifier.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, ToastKind::Success);
        assert_eq!(notices[0].title, SUCCESS_TITLE);
        assert_eq!(notices[0].description, SUCCESS_DESCRIPTION);
    }

    #[test]
    fn test_opaque_mode_reports_success_on_network_error() {
        let form = SignupForm::new(DeliveryMode::Opaque);
        form.set_email("ada@example.com".to_string());
        let collector = FakeCollector::new(form, Err(SignupError::Network("offline".into())));
        let notifier = RecordingNotifier::default();

        let outcome = block_on(form.submit(&collector, &notifier));

        assert_eq!(outcome, SignupOutcome::Delivered(DeliveryReceipt::Opaque));
        assert_eq!(collector.sent.borrow().len(), 1);
        assert_eq!(form.snapshot(), SignupFormState::default());

        let notices = notifier.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, ToastKind::Success);
    }

    #[test]
    fn test_confirmed_mode_surfaces_rejection() {
        let form = SignupForm::new(DeliveryMode::Confirmed);
        form.set_email("ada@example.com".to_string());
        let collector = FakeCollector::new(form, Err(SignupError::Rejected { status: 500 }));
        let notifier = RecordingNotifier::default();

        let outcome = block_on(form.submit(&collector, &notifier));

        assert_eq!(outcome, SignupOutcome::Failed(SignupError::Rejected { status: 500 }));
        let notices = notifier.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, ToastKind::Error);

        // The address stays so the user can retry
        let state = form.snapshot();
        assert_eq!(state.email, "ada@example.com");
        assert!(!state.submitting);
    }

    #[test]
    fn test_confirmed_mode_success() {
        let form = SignupForm::new(DeliveryMode::Confirmed);
        form.set_email("ada@example.com".to_string());
        let collector = FakeCollector::new(form, Ok(DeliveryReceipt::Accepted { status: 200 }));
        let notifier = RecordingNotifier::default();

        let outcome = block_on(form.submit(&collector, &notifier));

        assert_eq!(outcome, SignupOutcome::Delivered(DeliveryReceipt::Accepted { status: 200 }));
        assert_eq!(notifier.notices.borrow()[0].kind, ToastKind::Success);
        assert_eq!(form.snapshot(), SignupFormState::default());
    }

    #[test]
    fn test_begin_submit_guards_in_flight() {
        let mut state = SignupFormState {
            email: "ada@example.com".to_string(),
            submitting: false,
        };

        assert!(state.begin_submit().is_some());
        assert!(state.submitting);
        assert_eq!(state.begin_submit(), None);

        state.finish_submit();
        assert_eq!(state, SignupFormState::default());
        assert_eq!(state.begin_submit(), None);
    }

    #[test]
    fn test_ignored_outcome_has_no_notice() {
        assert_eq!(SignupOutcome::Ignored.notice(), None);
    }
}
