//! LeadService: the single coordinator between HTTP handlers and storage.
//!
//! All business logic flows through [`LeadService`] and
//! [`booking_from_event`]. Handlers are thin wrappers that delegate here.

use std::path::PathBuf;

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use leadflow_core::{check_required, Lead, LeadId, LeadRecord};
use leadflow_storage::{InMemoryStore, JsonFileStore, LeadStore, StorageError};

use crate::error::ApiError;
use crate::schema::leads::{MISSING_FIELDS, SAVE_FAILED};
use crate::schema::webhook::{BookingNotice, InviteeCreatedPayload, INVITEE_CREATED, WEBHOOK_FAILED};

/// Owns the lead store and performs intake and listing.
///
/// Intake is a read-append-write over the whole collection. The service
/// has `&mut self` intake so that, once shared behind a mutex, it is the
/// only writer and concurrent submissions cannot lose each other's appends.
pub struct LeadService {
    store: Box<dyn LeadStore>,
}

impl LeadService {
    pub fn new(store: Box<dyn LeadStore>) -> Self {
        LeadService { store }
    }

    /// Creates a service backed by a JSON file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(JsonFileStore::new(path)))
    }

    /// Creates a service backed by an in-memory store (for testing).
    pub fn in_memory() -> Self {
        Self::new(Box::new(InMemoryStore::new()))
    }

    /// Accepts a submission and persists it.
    ///
    /// The identifier and receipt time are assigned before validation, so a
    /// rejected submission still consumes an identifier. Submitting the same
    /// lead twice stores two records.
    ///
    /// A store whose contents do not parse is treated as empty and replaced.
    /// A store that cannot be read at all fails the intake, so its existing
    /// leads are never overwritten.
    pub fn intake(&mut self, lead: Lead) -> Result<LeadRecord, ApiError> {
        let record = LeadRecord::new(lead, next_lead_id(), Utc::now());

        if check_required(&record.lead).is_err() {
            tracing::debug!(lead_id = %record.id, "rejecting lead with missing fields");
            return Err(ApiError::BadRequest(MISSING_FIELDS.to_string()));
        }

        let mut leads = match self.store.load_all() {
            Ok(leads) => leads,
            Err(StorageError::Serialization(err)) => {
                tracing::warn!(store = %self.store.describe(), error = %err, "unparseable leads, starting a new collection");
                Vec::new()
            }
            Err(err) => {
                tracing::error!(lead_id = %record.id, store = %self.store.describe(), error = %err, "error reading leads");
                return Err(ApiError::InternalError(SAVE_FAILED.to_string()));
            }
        };
        leads.push(record.clone());
        self.store.save_all(&leads).map_err(|err| {
            tracing::error!(lead_id = %record.id, error = %err, "error saving lead");
            ApiError::InternalError(SAVE_FAILED.to_string())
        })?;

        // TODO: notify by email and push to the CRM once those integrations exist.
        tracing::info!(
            lead_id = %record.id,
            email = %record.lead.email,
            country = %record.lead.country,
            total = leads.len(),
            "New lead received"
        );
        Ok(record)
    }

    /// Returns every stored lead, unfiltered and unpaginated. An unreadable
    /// store lists as empty.
    pub fn list(&self) -> Vec<LeadRecord> {
        self.store.load_all().unwrap_or_else(|err| {
            tracing::warn!(store = %self.store.describe(), error = %err, "error reading leads, using empty collection");
            Vec::new()
        })
    }
}

/// Mints a fresh lead identifier.
///
/// Time-ordered UUIDs keep identifiers increasing with arrival in practice.
pub fn next_lead_id() -> LeadId {
    LeadId(Uuid::now_v7().to_string())
}

/// Interprets a scheduling webhook body.
///
/// Returns the extracted booking for `invitee.created`, `None` for any other
/// or missing event type. A recognized event with a malformed payload is an
/// internal error. Nothing is persisted; matching the booking to a stored
/// lead is not implemented.
pub fn booking_from_event(body: &Value) -> Result<Option<BookingNotice>, ApiError> {
    let event = body.get("event").and_then(Value::as_str);
    if event != Some(INVITEE_CREATED) {
        tracing::debug!(event = ?event, "ignoring webhook event");
        return Ok(None);
    }

    let payload = body.get("payload").cloned().unwrap_or(Value::Null);
    let payload: InviteeCreatedPayload = serde_json::from_value(payload).map_err(|err| {
        tracing::error!(error = %err, "error processing scheduling webhook");
        ApiError::InternalError(WEBHOOK_FAILED.to_string())
    })?;

    let booking = BookingNotice::from(payload);
    tracing::info!(
        name = booking.name.as_deref().unwrap_or_default(),
        email = booking.email.as_deref().unwrap_or_default(),
        event = booking.event.as_deref().unwrap_or_default(),
        scheduled_at = booking.scheduled_at.as_deref().unwrap_or_default(),
        "New scheduling booking"
    );
    Ok(Some(booking))
}
