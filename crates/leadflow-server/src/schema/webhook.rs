//! Scheduling-integration webhook types.
//!
//! Calendly posts an envelope `{ "event": "...", "payload": { ... } }`. Only
//! `invitee.created` is interpreted; its payload is decoded into
//! [`InviteeCreatedPayload`]. Every other event is acknowledged unread.

use serde::{Deserialize, Serialize};

/// Event type announcing a new booking.
pub const INVITEE_CREATED: &str = "invitee.created";
/// Message returned when a recognized event cannot be processed.
pub const WEBHOOK_FAILED: &str = "Error processing webhook";

/// Payload of an `invitee.created` event.
///
/// The nested objects are required: an `invitee.created` event without them
/// is malformed. Leaf strings are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct InviteeCreatedPayload {
    pub invitee: Invitee,
    pub event_type: EventType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Invitee {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub scheduled_event: ScheduledEvent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduledEvent {
    #[serde(default)]
    pub start_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventType {
    #[serde(default)]
    pub name: Option<String>,
}

/// A booking extracted from an `invitee.created` event.
///
/// Carries the fields a future lead-to-booking matcher would correlate on:
/// invitee email against the lead's email, and the scheduled time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingNotice {
    pub name: Option<String>,
    pub email: Option<String>,
    pub event: Option<String>,
    pub scheduled_at: Option<String>,
}

impl From<InviteeCreatedPayload> for BookingNotice {
    fn from(payload: InviteeCreatedPayload) -> Self {
        BookingNotice {
            name: payload.invitee.name,
            email: payload.invitee.email,
            event: payload.event_type.name,
            scheduled_at: payload.invitee.scheduled_event.start_time,
        }
    }
}
