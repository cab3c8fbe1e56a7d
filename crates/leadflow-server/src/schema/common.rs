//! Common API response wrapper types.

use serde::{Deserialize, Serialize};

/// Bare `{ "success": true }` acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledged {
    pub success: bool,
}

impl Acknowledged {
    pub fn ok() -> Self {
        Acknowledged { success: true }
    }
}
