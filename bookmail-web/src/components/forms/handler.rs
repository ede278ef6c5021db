use std::rc::Rc;

use bookmail::{DeliveryProvider, FormFields};
use leptos::ev::SubmitEvent;
use leptos::logging::{error, log, warn};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use super::FormError;
use crate::components::toast::Toaster;

const EMAIL_SENT: &str = "Email sent successfully!";

/// Reactive state of the contact form and the submit flow:
/// idle -> submitting -> idle.
#[derive(Clone)]
pub struct ContactFormHandler {
    provider: Rc<dyn DeliveryProvider>,
    fields: RwSignal<FormFields>,
    is_submitting: RwSignal<bool>,
    toaster: Toaster,
}

impl ContactFormHandler {
    pub fn new(provider: Rc<dyn DeliveryProvider>, toaster: Toaster) -> Self {
        Self {
            provider,
            fields: create_rw_signal(FormFields::default()),
            is_submitting: create_rw_signal(false),
            toaster,
        }
    }

    pub fn fields(&self) -> RwSignal<FormFields> {
        self.fields
    }

    pub fn is_submitting(&self) -> RwSignal<bool> {
        self.is_submitting
    }

    pub fn on_submit(&self, ev: SubmitEvent) {
        ev.prevent_default();
        let handler = self.clone();
        spawn_local(async move {
            // outcome is already reported through the toaster
            let _ = handler.submit().await;
        });
    }

    /// Validates the current fields and, when valid, hands them to the
    /// provider exactly once. Fields are cleared only after a successful
    /// delivery.
    pub async fn submit(&self) -> Result<(), FormError> {
        if self.is_submitting.get_untracked() {
            return Err(FormError::AlreadySubmitting);
        }

        let submission = self.fields.get_untracked().to_submission();
        let valid = match submission.validate() {
            Ok(valid) => valid,
            Err(err) => {
                let err = FormError::from(err);
                warn!("Submission rejected: {}", err);
                self.toaster.error(err.to_string());
                return Err(err);
            }
        };

        self.is_submitting.set(true);
        let result = self.provider.send(&valid).await.map_err(FormError::from);
        match &result {
            Ok(()) => {
                log!("Order for '{}' sent", valid.book_name());
                self.fields.set(FormFields::default());
                self.toaster.success(EMAIL_SENT);
            }
            Err(err) => {
                error!("{}", err);
                self.toaster.error(err.to_string());
            }
        }
        self.is_submitting.set(false);
        result
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use bookmail::{DeliveryError, ValidSubmission, ValidationError};
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;

    use super::*;
    use crate::components::toast::ToastKind;

    struct MockProvider {
        calls: Cell<usize>,
        result: Result<(), DeliveryError>,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl MockProvider {
        fn returning(result: Result<(), DeliveryError>) -> Rc<Self> {
            Rc::new(Self {
                calls: Cell::new(0),
                result,
                gate: RefCell::new(None),
            })
        }

        fn gated(gate: oneshot::Receiver<()>) -> Rc<Self> {
            Rc::new(Self {
                calls: Cell::new(0),
                result: Ok(()),
                gate: RefCell::new(Some(gate)),
            })
        }
    }

    #[async_trait(?Send)]
    impl DeliveryProvider for MockProvider {
        async fn send(
            &self,
            _submission: &ValidSubmission,
        ) -> Result<(), DeliveryError> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.result.clone()
        }
    }

    fn order(phone: &str, email: &str, book_name: &str) -> FormFields {
        FormFields {
            user_name: "Ada".to_string(),
            user_phone: phone.to_string(),
            user_email: email.to_string(),
            book_name: book_name.to_string(),
            book_quantity: "1".to_string(),
            message: "Thanks".to_string(),
        }
    }

    fn setup(provider: Rc<MockProvider>) -> (ContactFormHandler, Toaster) {
        let toaster = Toaster::new();
        let handler = ContactFormHandler::new(provider, toaster);
        (handler, toaster)
    }

    #[test]
    fn test_missing_contact_skips_delivery() {
        let runtime = create_runtime();
        let provider = MockProvider::returning(Ok(()));
        let (handler, toaster) = setup(provider.clone());
        handler.fields().set(order("", "", "Dune"));

        let result = block_on(handler.submit());

        assert_eq!(
            result,
            Err(FormError::Validation(ValidationError::MissingContact))
        );
        assert_eq!(provider.calls.get(), 0);
        let toasts = toaster.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind(), ToastKind::Error);
        assert_eq!(
            toasts[0].message(),
            "Please provide either a phone number or an email."
        );
        assert!(!handler.is_submitting().get_untracked());
        runtime.dispose();
    }

    #[test]
    fn test_missing_book_name_skips_delivery() {
        let runtime = create_runtime();
        let provider = MockProvider::returning(Ok(()));
        let (handler, toaster) = setup(provider.clone());
        handler.fields().set(order("555-0100", "", ""));

        let result = block_on(handler.submit());

        assert_eq!(
            result,
            Err(FormError::Validation(ValidationError::MissingBookName))
        );
        assert_eq!(provider.calls.get(), 0);
        assert_eq!(
            toaster.toasts().get_untracked()[0].message(),
            "Please provide a book name."
        );
        // nothing is cleared on a rejected attempt
        assert_eq!(handler.fields().get_untracked(), order("555-0100", "", ""));
        runtime.dispose();
    }

    #[test]
    fn test_success_sends_once_and_clears_fields() {
        let runtime = create_runtime();
        let provider = MockProvider::returning(Ok(()));
        let (handler, toaster) = setup(provider.clone());
        handler.fields().set(order("555-0100", "", "Dune"));

        let result = block_on(handler.submit());

        assert_eq!(result, Ok(()));
        assert_eq!(provider.calls.get(), 1);
        assert!(handler.fields().get_untracked().is_empty());
        let toasts = toaster.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind(), ToastKind::Success);
        assert_eq!(toasts[0].message(), "Email sent successfully!");
        assert!(!handler.is_submitting().get_untracked());
        runtime.dispose();
    }

    #[test]
    fn test_failure_keeps_fields_and_reports_detail() {
        let runtime = create_runtime();
        let provider = MockProvider::returning(Err(DeliveryError::Rejected {
            status: 400,
            text: "The service ID is invalid".to_string(),
        }));
        let (handler, toaster) = setup(provider.clone());
        let fields = order("", "reader@example.com", "Dune");
        handler.fields().set(fields.clone());

        let result = block_on(handler.submit());

        assert!(matches!(result, Err(FormError::Delivery(_))));
        assert_eq!(provider.calls.get(), 1);
        assert_eq!(handler.fields().get_untracked(), fields);
        let toasts = toaster.toasts().get_untracked();
        assert_eq!(toasts[0].kind(), ToastKind::Error);
        assert_eq!(
            toasts[0].message(),
            "Failed to send email: The service ID is invalid"
        );
        assert!(!handler.is_submitting().get_untracked());
        runtime.dispose();
    }

    #[test]
    fn test_submitting_flag_spans_the_call() {
        let runtime = create_runtime();
        let (release, gate) = oneshot::channel();
        let provider = MockProvider::gated(gate);
        let (handler, toaster) = setup(provider.clone());
        handler.fields().set(order("555-0100", "", "Dune"));

        let mut pool = LocalPool::new();
        let in_flight = handler.clone();
        pool.spawner()
            .spawn_local(async move {
                let _ = in_flight.submit().await;
            })
            .unwrap();
        pool.run_until_stalled();

        assert!(handler.is_submitting().get_untracked());
        assert_eq!(provider.calls.get(), 1);

        // a second attempt while in flight is ignored
        assert_eq!(
            block_on(handler.submit()),
            Err(FormError::AlreadySubmitting)
        );
        assert_eq!(provider.calls.get(), 1);

        release.send(()).unwrap();
        pool.run_until_stalled();

        assert!(!handler.is_submitting().get_untracked());
        assert!(handler.fields().get_untracked().is_empty());
        assert_eq!(toaster.toasts().get_untracked().len(), 1);
        runtime.dispose();
    }
}
