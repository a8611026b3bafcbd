use serde::{Deserialize, Serialize};
use std::fmt;

/// Review state of a collaboration. Only `Pending -> Issued` happens on submit;
/// revocation may move it back depending on the configured policy.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollaborationStatus {
    #[serde(rename = "review_pending")]
    Pending,
    #[serde(rename = "review_issued")]
    Issued,
}

impl fmt::Display for CollaborationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollaborationStatus::Pending => write!(f, "Review pending"),
            CollaborationStatus::Issued => write!(f, "Review issued"),
        }
    }
}

/// Id carried by collaborations built from a QR scan. Stored collaborations start at 1.
pub const SCANNED_COLLABORATION_ID: u64 = 0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Collaboration {
    pub id: u64,                     // Unique ID for the collaboration
    pub freelancer_name: String,     // Freelancer who did the job
    pub job_title: String,           // Job title shown on the card
    pub status: CollaborationStatus, // Whether a review was issued yet
}

impl Collaboration {
    pub fn is_pending(&self) -> bool {
        self.status == CollaborationStatus::Pending
    }

    /// True for transient collaborations that the store does not track.
    pub fn is_scanned(&self) -> bool {
        self.id == SCANNED_COLLABORATION_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_wire_names() {
        let json = serde_json::to_string(&CollaborationStatus::Issued).unwrap();
        assert_eq!(json, "\"review_issued\"");
        let status: CollaborationStatus = serde_json::from_str("\"review_pending\"").unwrap();
        assert_eq!(status, CollaborationStatus::Pending);
    }
}
