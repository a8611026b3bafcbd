// src/models/review.rs
use serde::{Deserialize, Serialize};

/// Text used when an employer submits a review without writing anything.
pub const DEFAULT_REVIEW_TEXT: &str = "Great work and professional collaboration.";

/// Highest star rating a review can carry.
pub const MAX_RATING: u8 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: u64,                  // Creation-ordered identifier
    pub employer_name: String,    // Party that issued the review
    pub freelancer_name: String,  // Party the review is about
    pub job_title: String,        // Job the review refers to
    pub date_issued: String,      // Display date, e.g. "May 20, 2024"
    pub rating: u8,               // Star rating, 1-5 when issued through the UI
    pub review_snippet: String,   // Free-text comment
    pub skills: Vec<String>,      // Endorsed skills, in display order
}

/// Everything the issuing employer types into the review form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReviewDraft {
    pub employer_name: String,
    pub freelancer_name: String,
    pub job_title: String,
    pub rating: u8,
    pub review: String,
    pub skills: Vec<String>,
}

impl ReviewDraft {
    /// Returns the snippet to store, falling back to the canned sentence for blank input.
    pub fn snippet(&self) -> String {
        if self.review.trim().is_empty() {
            DEFAULT_REVIEW_TEXT.to_string()
        } else {
            self.review.clone()
        }
    }
}

/// Whether a star rating is within the range the UI allows.
pub fn is_valid_rating(rating: u8) -> bool {
    (1..=MAX_RATING).contains(&rating)
}

/// Filled/empty flags for the five stars of a rating.
pub fn star_states(rating: u8) -> [bool; MAX_RATING as usize] {
    let mut stars = [false; MAX_RATING as usize];
    for (i, star) in stars.iter_mut().enumerate() {
        *star = (i as u8) < rating;
    }
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_review_text_uses_default_snippet() {
        let draft = ReviewDraft {
            review: "   ".into(),
            ..ReviewDraft::default()
        };
        assert_eq!(draft.snippet(), DEFAULT_REVIEW_TEXT);

        let draft = ReviewDraft {
            review: "Solid delivery".into(),
            ..ReviewDraft::default()
        };
        assert_eq!(draft.snippet(), "Solid delivery");
    }

    #[test]
    fn rating_bounds() {
        assert!(!is_valid_rating(0));
        assert!(is_valid_rating(1));
        assert!(is_valid_rating(5));
        assert!(!is_valid_rating(6));
    }

    #[test]
    fn star_states_fill_from_the_left() {
        assert_eq!(star_states(3), [true, true, true, false, false]);
        assert_eq!(star_states(0), [false; 5]);
        assert_eq!(star_states(9), [true; 5]);
    }
}
