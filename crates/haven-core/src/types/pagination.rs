//! Limit/offset pagination for list endpoints that page.

use serde::{Deserialize, Serialize};

/// A limit/offset page request.
///
/// The inspection listings deliberately return every matching row; this
/// type is used by the notification feed only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Maximum rows to return.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Rows to skip.
    #[serde(default)]
    pub offset: u32,
}

impl PageRequest {
    /// Clamp the limit to the allowed maximum.
    pub fn clamped(self) -> Self {
        Self {
            limit: self.limit.min(MAX_LIMIT),
            offset: self.offset,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}

const MAX_LIMIT: u32 = 200;

fn default_limit() -> u32 {
    50
}
