// =============================================================================
// CornerInch Web - Form Collector Client
// =============================================================================
// Posts signups to the external form collector as
// `application/x-www-form-urlencoded`.
// =============================================================================

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use web_sys::RequestMode;

use super::SignupError;
use crate::config::{DeliveryMode, SiteConfig};
use crate::signup::{DeliveryReceipt, SignupRequest, SignupTransport};
use crate::utils::FORM_CONTENT_TYPE;

/// HTTP client for the signup collector endpoint.
#[derive(Clone, Debug)]
pub struct FormCollector {
    endpoint: String,
    delivery: DeliveryMode,
}

impl FormCollector {
    pub fn new(endpoint: impl Into<String>, delivery: DeliveryMode) -> Self {
        Self {
            endpoint: endpoint.into(),
            delivery,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.signup_endpoint.clone(), config.delivery)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one signup. No retry, no timeout.
    pub async fn post(&self, request: &SignupRequest) -> Result<DeliveryReceipt, SignupError> {
        let mut builder = Request::post(&self.endpoint).header("Content-Type", FORM_CONTENT_TYPE);

        // The collector does not answer CORS preflights
        if self.delivery == DeliveryMode::Opaque {
            builder = builder.mode(RequestMode::NoCors);
        }

        let response = builder
            .body(request.form_body())
            .map_err(|e| SignupError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| SignupError::Network(e.to_string()))?;

        match self.delivery {
            // Opaque responses report status 0; there is nothing to check
            DeliveryMode::Opaque => Ok(DeliveryReceipt::Opaque),
            DeliveryMode::Confirmed => {
                let status = response.status();
                if response.ok() {
                    Ok(DeliveryReceipt::Accepted { status })
                } else {
                    Err(SignupError::Rejected { status })
                }
            }
        }
    }
}

impl SignupTransport for FormCollector {
    fn deliver<'a>(
        &'a self,
        request: &'a SignupRequest,
    ) -> LocalBoxFuture<'a, Result<DeliveryReceipt, SignupError>> {
        self.post(request).boxed_local()
    }
}
