//! HTTP client for the intake service.

use leadflow_core::{IntakeResponse, Lead, LeadId};

use crate::error::ClientError;

/// Posts leads to a configured intake endpoint.
///
/// One attempt per lead: no retry, no timeout beyond the HTTP client's
/// default, no cancellation.
#[derive(Debug, Clone)]
pub struct IntakeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl IntakeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        IntakeClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits one lead and returns the identifier the service assigned.
    ///
    /// A 2xx reply that omits `leadId` still counts as accepted.
    pub async fn submit(&self, lead: &Lead) -> Result<Option<LeadId>, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(lead)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let reply: IntakeResponse = response
            .json()
            .await
            .map_err(ClientError::InvalidResponse)?;
        if !reply.success {
            let message = if reply.message.is_empty() {
                "Submission failed".to_string()
            } else {
                reply.message
            };
            return Err(ClientError::Declined(message));
        }
        Ok(reply.lead_id)
    }
}
