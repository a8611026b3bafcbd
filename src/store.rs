/// In-memory state container for reviews and collaborations.
/// Reviews are kept most-recent-first; collaborations keep their seeded order.
use crate::models::collaboration::{Collaboration, CollaborationStatus};
use crate::models::review::{Review, ReviewDraft};
use chrono::{DateTime, Local};
use leptos::logging::log;
use std::collections::HashMap;

/// Display format for `Review::date_issued`, e.g. "May 20, 2024".
pub const DATE_FORMAT: &str = "%B %-d, %Y";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewStore {
    reviews: Vec<Review>,
    collaborations: Vec<Collaboration>,
    // review id -> id of the collaboration it was issued for
    issued_for: HashMap<u64, u64>,
    last_id: u64,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the demo profile: five reviews for Alice and four pending collaborations.
    pub fn seeded() -> Self {
        Self::with_data(seed_reviews(), seed_collaborations())
    }

    pub fn with_data(reviews: Vec<Review>, collaborations: Vec<Collaboration>) -> Self {
        let last_id = reviews.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            reviews,
            collaborations,
            issued_for: HashMap::new(),
            last_id,
        }
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn collaborations(&self) -> &[Collaboration] {
        &self.collaborations
    }

    pub fn review(&self, id: u64) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == id)
    }

    pub fn collaboration(&self, id: u64) -> Option<&Collaboration> {
        self.collaborations.iter().find(|c| c.id == id)
    }

    pub fn pending_collaborations(&self) -> Vec<Collaboration> {
        self.collaborations
            .iter()
            .filter(|c| c.is_pending())
            .cloned()
            .collect()
    }

    pub fn issued_count(&self) -> usize {
        self.collaborations
            .iter()
            .filter(|c| c.status == CollaborationStatus::Issued)
            .count()
    }

    /// Reviews received by a freelancer, most recent first.
    pub fn reviews_for(&self, freelancer_name: &str) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.freelancer_name == freelancer_name)
            .cloned()
            .collect()
    }

    /// Reviews issued by an employer, most recent first.
    pub fn reviews_by(&self, employer_name: &str) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.employer_name == employer_name)
            .cloned()
            .collect()
    }

    /// Issues a review dated now. The rating is stored as given.
    pub fn add_review(&mut self, draft: ReviewDraft) -> Review {
        self.add_review_at(draft, Local::now())
    }

    /// Issues a review dated `issued_at` and puts it at the front of the list.
    pub fn add_review_at(&mut self, draft: ReviewDraft, issued_at: DateTime<Local>) -> Review {
        let id = self.next_id(issued_at.timestamp_millis());
        let review = Review {
            id,
            review_snippet: draft.snippet(),
            date_issued: issued_at.format(DATE_FORMAT).to_string(),
            employer_name: draft.employer_name,
            freelancer_name: draft.freelancer_name,
            job_title: draft.job_title,
            rating: draft.rating,
            skills: draft.skills,
        };

        log!(
            "[STORE] Added review {} from {} for {} ({})",
            review.id,
            review.employer_name,
            review.freelancer_name,
            review.job_title
        );
        self.reviews.insert(0, review.clone());
        review
    }

    /// Sets the status of the collaboration with `id`. Unknown ids are ignored.
    /// Returns whether a collaboration matched.
    pub fn update_collaboration_status(&mut self, id: u64, status: CollaborationStatus) -> bool {
        match self.collaborations.iter_mut().find(|c| c.id == id) {
            Some(collaboration) => {
                collaboration.status = status;
                log!("[STORE] Collaboration {} is now {:?}", id, status);
                true
            }
            None => {
                log!("[STORE] No collaboration {} to update", id);
                false
            }
        }
    }

    /// Removes the review with `id`, keeping the order of the others.
    /// Collaborations are left untouched; unknown ids are ignored.
    pub fn revoke_review(&mut self, id: u64) -> Option<Review> {
        let index = self.reviews.iter().position(|r| r.id == id)?;
        let review = self.reviews.remove(index);
        log!("[STORE] Revoked review {}", id);
        Some(review)
    }

    /// Remembers that `review_id` was issued for the stored collaboration `collaboration_id`.
    pub fn link_review(&mut self, review_id: u64, collaboration_id: u64) {
        self.issued_for.insert(review_id, collaboration_id);
    }

    /// Forgets and returns the collaboration a review was issued for.
    /// Seeded and QR-scanned reviews have none.
    pub fn take_collaboration_for(&mut self, review_id: u64) -> Option<u64> {
        self.issued_for.remove(&review_id)
    }

    /// Moves an issued collaboration back to pending. Returns `None` when `id`
    /// is unknown or not issued.
    pub fn reopen_collaboration(&mut self, id: u64) -> Option<u64> {
        let collaboration = self
            .collaborations
            .iter_mut()
            .find(|c| c.id == id && c.status == CollaborationStatus::Issued)?;
        collaboration.status = CollaborationStatus::Pending;
        log!("[STORE] Reopened collaboration {}", id);
        Some(id)
    }

    // Timestamp-derived, but never reuses or goes below an id already handed out.
    fn next_id(&mut self, now_millis: i64) -> u64 {
        let candidate = u64::try_from(now_millis).unwrap_or(0);
        self.last_id = candidate.max(self.last_id + 1);
        self.last_id
    }
}

fn seed_review(
    id: u64,
    employer_name: &str,
    job_title: &str,
    date_issued: &str,
    rating: u8,
    review_snippet: &str,
    skills: &[&str],
) -> Review {
    Review {
        id,
        employer_name: employer_name.to_string(),
        freelancer_name: "Alice".to_string(),
        job_title: job_title.to_string(),
        date_issued: date_issued.to_string(),
        rating,
        review_snippet: review_snippet.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn seed_reviews() -> Vec<Review> {
    vec![
        seed_review(
            1,
            "FlowDesign Co",
            "UX/UI Design for Mobile App",
            "May 20, 2024",
            5,
            "Alice was exceptional. Her designs were creative and delivered ahead of schedule.",
            &["UI Design", "Figma", "Prototyping", "Communication"],
        ),
        seed_review(
            2,
            "NextGen Solutions",
            "Brand Identity Development",
            "April 15, 2024",
            5,
            "Outstanding work on our brand redesign. Professional and highly creative.",
            &["Brand Design", "Adobe Illustrator", "Creative Strategy"],
        ),
        seed_review(
            3,
            "TechFlow Inc",
            "Website Redesign",
            "March 10, 2024",
            4,
            "Great attention to detail and user experience. Delivered quality work on time.",
            &["Web Design", "Responsive Design", "User Research"],
        ),
        seed_review(
            4,
            "StartupX",
            "Logo and Marketing Materials",
            "February 22, 2024",
            5,
            "Amazing creativity and professional communication throughout the project.",
            &["Logo Design", "Print Design", "Adobe Creative Suite"],
        ),
        seed_review(
            5,
            "Global Dynamics",
            "App Interface Design",
            "January 18, 2024",
            5,
            "Exceeded expectations with innovative design solutions and timely delivery.",
            &["Mobile UI", "Design Systems", "User Testing"],
        ),
    ]
}

pub fn seed_collaborations() -> Vec<Collaboration> {
    [
        (1, "Alice", "UX/UI Design for Mobile App"),
        (2, "Marcus Johnson", "Frontend Development"),
        (3, "Sarah Chen", "Content Strategy & Writing"),
        (4, "David Rodriguez", "Backend API Development"),
    ]
    .into_iter()
    .map(|(id, freelancer_name, job_title)| Collaboration {
        id,
        freelancer_name: freelancer_name.to_string(),
        job_title: job_title.to_string(),
        status: CollaborationStatus::Pending,
    })
    .collect()
}
