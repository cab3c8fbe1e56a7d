//! The submission handler.
//!
//! Order of work for one submission:
//!
//! 1. normalize the raw input and run the validation rules, stopping at the
//!    first failure with nothing stored or sent;
//! 2. stamp the submission time and append to the local cache;
//! 3. post to the intake service if one is configured;
//! 4. report success and resolve the scheduling step, whatever happened in 3.
//!
//! A lead is only lost when both 2 and 3 fail, and even then the visitor is
//! not told; the loss is logged at error level.

use chrono::Utc;

use leadflow_core::{leads_to_csv, validate_submission, RawLeadForm};

use crate::cache::LocalCache;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::export::{export_file_name, CsvExport};
use crate::outcome::{Delivery, FallbackReason, UserOutcome};
use crate::remote::IntakeClient;
use crate::scheduling::SchedulingStep;

#[derive(Debug, Clone)]
pub struct SubmissionHandler {
    cache: LocalCache,
    remote: Option<IntakeClient>,
    calendly_username: Option<String>,
}

impl SubmissionHandler {
    pub fn new(config: &ClientConfig) -> Self {
        SubmissionHandler {
            cache: LocalCache::new(&config.cache_path),
            remote: config.endpoint.as_deref().map(IntakeClient::new),
            calendly_username: config.calendly_username.clone(),
        }
    }

    pub fn cache(&self) -> &LocalCache {
        &self.cache
    }

    /// Handles one press of the submit button.
    pub async fn submit(&self, raw: &RawLeadForm) -> UserOutcome {
        let lead = raw.normalize();
        if let Err(error) = validate_submission(&lead) {
            tracing::debug!(%error, "form rejected");
            return UserOutcome::Rejected { error };
        }
        let lead = lead.submitted_at(Utc::now());

        let cached = match self.cache.append(&lead) {
            Ok(count) => {
                tracing::info!(path = %self.cache.path().display(), count, "lead saved to local cache");
                Ok(())
            }
            Err(err) => {
                tracing::error!(path = %self.cache.path().display(), error = %err, "error saving to local cache");
                Err(err)
            }
        };

        let remote = match &self.remote {
            None => Err(FallbackReason::NotConfigured),
            Some(client) => client.submit(&lead).await.map_err(|err| {
                tracing::warn!(endpoint = client.endpoint(), error = %err, "backend submission error");
                FallbackReason::from(err)
            }),
        };

        let delivery = match (remote, cached) {
            (Ok(lead_id), cached) => Delivery::Remote {
                lead_id,
                cached: cached.is_ok(),
            },
            (Err(reason), Ok(())) => Delivery::LocalOnly { reason },
            (Err(reason), Err(cache_error)) => {
                tracing::error!(email = %lead.email, ?reason, "lead not persisted anywhere");
                Delivery::Failed {
                    cache_error: cache_error.to_string(),
                    reason,
                }
            }
        };

        UserOutcome::Accepted {
            message: delivery.user_message().to_string(),
            delivery,
            scheduling: SchedulingStep::resolve(self.calendly_username.as_deref()),
        }
    }

    /// Renders the whole local cache as CSV.
    ///
    /// Fails with [`ClientError::NothingToExport`] on an empty cache.
    pub fn export(&self) -> Result<CsvExport, ClientError> {
        let leads = self.cache.read_all();
        if leads.is_empty() {
            return Err(ClientError::NothingToExport);
        }
        let content = leads_to_csv(&leads)?;
        tracing::info!(count = leads.len(), "exported leads");
        Ok(CsvExport {
            file_name: export_file_name(Utc::now().date_naive()),
            content,
            count: leads.len(),
        })
    }
}
