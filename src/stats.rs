use crate::models::review::Review;

/// Figures shown at the top of the freelancer profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ReputationSummary {
    pub average_rating: Option<f64>,
    pub total_reviews: usize,
    pub jobs_completed: u32,
}

impl ReputationSummary {
    /// `jobs_completed` starts at `jobs_completed_base` and moves with every review
    /// added or revoked since the profile held `seed_review_count` reviews.
    pub fn from_reviews(reviews: &[Review], jobs_completed_base: u32, seed_review_count: u32) -> Self {
        let total_reviews = reviews.len();
        let average_rating = if total_reviews == 0 {
            None
        } else {
            let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
            Some(f64::from(sum) / total_reviews as f64)
        };
        let count = u32::try_from(total_reviews).unwrap_or(u32::MAX);
        let jobs_completed = jobs_completed_base
            .saturating_add(count)
            .saturating_sub(seed_review_count);

        Self {
            average_rating,
            total_reviews,
            jobs_completed,
        }
    }

    /// Average with one decimal, ties rounded up; "0.0" for a profile without reviews.
    pub fn formatted_average(&self) -> String {
        let average = self.average_rating.unwrap_or(0.0);
        // `{:.1}` alone rounds 4.25 down to 4.2
        format!("{:.1}", (average * 10.0).round() / 10.0)
    }
}
