/// Employer-side actions on the wallet: issuing reviews for collaborations,
/// revoking them and identifying a freelancer through the (mock) QR scan.
use crate::config::RevocationPolicy;
use crate::error::WalletError;
use crate::events::WalletEvent;
use crate::models::collaboration::{Collaboration, CollaborationStatus, SCANNED_COLLABORATION_ID};
use crate::models::review::{is_valid_rating, Review, ReviewDraft};
use crate::store::ReviewStore;
use leptos::logging::log;

/// Skills the employer can endorse from the review form.
pub const PREDEFINED_SKILLS: [&str; 8] = [
    "UI Design",
    "Figma",
    "Communication",
    "Prototyping",
    "User Research",
    "Problem Solving",
    "Creativity",
    "Time Management",
];

/// Values typed into the review form for one collaboration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFormState {
    pub rating: u8, // 0 until a star is picked
    pub review: String,
    pub skills: Vec<String>,
}

impl ReviewFormState {
    pub fn can_submit(&self) -> bool {
        is_valid_rating(self.rating)
    }

    /// Adds the skill, or removes it when already selected. Keeps selection order.
    pub fn toggle_skill(&mut self, skill: &str) {
        if let Some(index) = self.skills.iter().position(|s| s == skill) {
            self.skills.remove(index);
        } else {
            self.skills.push(skill.to_string());
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn into_draft(self, employer_name: &str, collaboration: &Collaboration) -> ReviewDraft {
        ReviewDraft {
            employer_name: employer_name.to_string(),
            freelancer_name: collaboration.freelancer_name.clone(),
            job_title: collaboration.job_title.clone(),
            rating: self.rating,
            review: self.review,
            skills: self.skills,
        }
    }
}

/// Outcome of a successful review submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub review: Review,
    pub collaboration_id: u64,
    /// False when the collaboration is not tracked by the store (QR-scanned freelancers).
    pub collaboration_updated: bool,
}

impl Submission {
    pub fn events(&self) -> Vec<WalletEvent> {
        let mut events = vec![WalletEvent::ReviewIssued(self.review.clone())];
        if self.collaboration_updated {
            events.push(WalletEvent::CollaborationStatusChanged {
                id: self.collaboration_id,
                status: CollaborationStatus::Issued,
            });
        }
        events
    }
}

/// Outcome of a revocation that removed a review.
#[derive(Debug, Clone, PartialEq)]
pub struct Revocation {
    pub review: Review,
    pub reopened: Option<u64>,
}

impl Revocation {
    pub fn events(&self) -> Vec<WalletEvent> {
        let mut events = vec![WalletEvent::ReviewRevoked(self.review.clone())];
        if let Some(id) = self.reopened {
            events.push(WalletEvent::CollaborationStatusChanged {
                id,
                status: CollaborationStatus::Pending,
            });
        }
        events
    }
}

/// Looks up a collaboration that is still waiting for a review.
pub fn pending_collaboration(store: &ReviewStore, id: u64) -> Result<Collaboration, WalletError> {
    store
        .collaboration(id)
        .filter(|c| c.is_pending())
        .cloned()
        .ok_or(WalletError::UnknownCollaboration(id))
}

/// Issues the review and marks the collaboration as issued.
/// Scanned collaborations only get the review.
pub fn submit_review(
    store: &mut ReviewStore,
    collaboration: &Collaboration,
    employer_name: &str,
    form: ReviewFormState,
) -> Result<Submission, WalletError> {
    if !form.can_submit() {
        return Err(WalletError::InvalidRating(form.rating));
    }

    let review = store.add_review(form.into_draft(employer_name, collaboration));
    let collaboration_updated = !collaboration.is_scanned()
        && store.update_collaboration_status(collaboration.id, CollaborationStatus::Issued);
    if collaboration_updated {
        store.link_review(review.id, collaboration.id);
    }

    log!(
        "[EMPLOYER] {} issued review {} to {}",
        employer_name,
        review.id,
        collaboration.freelancer_name
    );
    Ok(Submission {
        review,
        collaboration_id: collaboration.id,
        collaboration_updated,
    })
}

/// Revokes a review and applies the configured policy to the collaboration it
/// was issued for. Returns `None` when no review has that id.
pub fn revoke_review(
    store: &mut ReviewStore,
    review_id: u64,
    policy: RevocationPolicy,
) -> Option<Revocation> {
    let review = store.revoke_review(review_id)?;
    let linked = store.take_collaboration_for(review.id);
    let reopened = match policy {
        RevocationPolicy::ReopenCollaboration => linked.and_then(|id| store.reopen_collaboration(id)),
        RevocationPolicy::KeepIssued => None,
    };

    log!("[EMPLOYER] Revoked review {} (reopened: {:?})", review.id, reopened);
    Some(Revocation { review, reopened })
}

/// Mock QR scan: always identifies `freelancer_name` and pairs them with the job
/// title the employer typed. The collaboration is transient and never stored.
pub fn scan_qr(job_title: &str, freelancer_name: &str) -> Result<Collaboration, WalletError> {
    let job_title = job_title.trim();
    if job_title.is_empty() {
        return Err(WalletError::EmptyJobTitle);
    }

    Ok(Collaboration {
        id: SCANNED_COLLABORATION_ID,
        freelancer_name: freelancer_name.to_string(),
        job_title: job_title.to_string(),
        status: CollaborationStatus::Pending,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(rating: u8) -> ReviewFormState {
        ReviewFormState {
            rating,
            review: "Shipped early".into(),
            skills: vec!["Figma".into()],
        }
    }

    #[test]
    fn toggle_skill_adds_then_removes() {
        let mut state = ReviewFormState::default();
        state.toggle_skill("Figma");
        state.toggle_skill("Creativity");
        assert_eq!(state.skills, vec!["Figma", "Creativity"]);
        state.toggle_skill("Figma");
        assert_eq!(state.skills, vec!["Creativity"]);
    }

    #[test]
    fn submit_requires_a_rating() {
        let mut store = ReviewStore::seeded();
        let collaboration = pending_collaboration(&store, 1).unwrap();

        let err = submit_review(&mut store, &collaboration, "HashMasters", form(0)).unwrap_err();
        assert!(matches!(err, WalletError::InvalidRating(0)));
        let err = submit_review(&mut store, &collaboration, "HashMasters", form(6)).unwrap_err();
        assert!(matches!(err, WalletError::InvalidRating(6)));
        assert_eq!(store.reviews().len(), 5);
        assert_eq!(store.issued_count(), 0);
    }

    #[test]
    fn submit_issues_review_and_marks_collaboration() {
        let mut store = ReviewStore::seeded();
        let collaboration = pending_collaboration(&store, 3).unwrap();

        let submission = submit_review(&mut store, &collaboration, "HashMasters", form(4)).unwrap();

        assert_eq!(store.reviews().len(), 6);
        assert_eq!(store.reviews()[0].id, submission.review.id);
        assert_eq!(submission.review.freelancer_name, "Sarah Chen");
        assert_eq!(submission.review.employer_name, "HashMasters");
        assert_eq!(store.issued_count(), 1);
        assert_eq!(store.collaboration(3).unwrap().status, CollaborationStatus::Issued);
        assert_eq!(submission.events().len(), 2);

        // No longer offered for review.
        assert!(matches!(
            pending_collaboration(&store, 3),
            Err(WalletError::UnknownCollaboration(3))
        ));
    }

    #[test]
    fn revoke_reopens_collaboration_by_default_policy() {
        let mut store = ReviewStore::seeded();
        let collaboration = pending_collaboration(&store, 2).unwrap();
        let submission = submit_review(&mut store, &collaboration, "HashMasters", form(5)).unwrap();

        let revocation =
            revoke_review(&mut store, submission.review.id, RevocationPolicy::ReopenCollaboration).unwrap();

        assert_eq!(revocation.reopened, Some(2));
        assert!(store.collaboration(2).unwrap().is_pending());
        assert_eq!(store.reviews().len(), 5);
        assert_eq!(
            revocation.events()[1],
            WalletEvent::CollaborationStatusChanged {
                id: 2,
                status: CollaborationStatus::Pending
            }
        );
    }

    #[test]
    fn revoke_with_keep_policy_leaves_collaboration_issued() {
        let mut store = ReviewStore::seeded();
        let collaboration = pending_collaboration(&store, 2).unwrap();
        let submission = submit_review(&mut store, &collaboration, "HashMasters", form(5)).unwrap();

        let revocation = revoke_review(&mut store, submission.review.id, RevocationPolicy::KeepIssued).unwrap();

        assert_eq!(revocation.reopened, None);
        assert_eq!(store.issued_count(), 1);
        assert_eq!(revocation.events().len(), 1);
    }

    #[test]
    fn revoke_unknown_review_is_none() {
        let mut store = ReviewStore::seeded();
        assert!(revoke_review(&mut store, 77, RevocationPolicy::ReopenCollaboration).is_none());
        assert_eq!(store.reviews().len(), 5);
    }

    #[test]
    fn qr_scan_creates_transient_collaboration() {
        assert!(matches!(scan_qr("   ", "Alice"), Err(WalletError::EmptyJobTitle)));

        let mut store = ReviewStore::seeded();
        let scanned = scan_qr(" Illustration ", "Alice").unwrap();
        assert_eq!(scanned.job_title, "Illustration");
        assert!(scanned.is_pending());
        assert!(scanned.is_scanned());

        let submission = submit_review(&mut store, &scanned, "HashMasters", form(5)).unwrap();
        assert!(!submission.collaboration_updated);
        assert_eq!(store.issued_count(), 0);
        assert_eq!(store.reviews().len(), 6);
        assert_eq!(submission.events().len(), 1);
    }

    #[test]
    fn scanned_review_never_touches_a_stored_collaboration() {
        let mut collaborations = crate::store::seed_collaborations();
        collaborations.push(Collaboration {
            id: SCANNED_COLLABORATION_ID,
            freelancer_name: "Legacy".into(),
            job_title: "Imported".into(),
            status: CollaborationStatus::Pending,
        });
        let mut store = ReviewStore::with_data(crate::store::seed_reviews(), collaborations);

        let scanned = scan_qr("Illustration", "Alice").unwrap();
        let submission = submit_review(&mut store, &scanned, "HashMasters", form(5)).unwrap();

        assert!(!submission.collaboration_updated);
        assert!(store.collaboration(SCANNED_COLLABORATION_ID).unwrap().is_pending());
        assert_eq!(store.issued_count(), 0);
    }

    #[test]
    fn revoking_a_scanned_review_keeps_the_real_collaboration_issued() {
        let mut store = ReviewStore::seeded();
        let scanned = scan_qr("UX/UI Design for Mobile App", "Alice").unwrap();
        let from_scan = submit_review(&mut store, &scanned, "HashMasters", form(5)).unwrap();
        let collaboration = pending_collaboration(&store, 1).unwrap();
        let from_card = submit_review(&mut store, &collaboration, "HashMasters", form(4)).unwrap();

        let revocation =
            revoke_review(&mut store, from_scan.review.id, RevocationPolicy::ReopenCollaboration).unwrap();

        assert_eq!(revocation.reopened, None);
        assert_eq!(store.collaboration(1).unwrap().status, CollaborationStatus::Issued);
        assert!(store.review(from_card.review.id).is_some());

        // The card's own review still reopens it.
        let revocation =
            revoke_review(&mut store, from_card.review.id, RevocationPolicy::ReopenCollaboration).unwrap();
        assert_eq!(revocation.reopened, Some(1));
        assert!(store.collaboration(1).unwrap().is_pending());
    }
}
