use reputation_wallet::config::RevocationPolicy;
use reputation_wallet::employer::{pending_collaboration, revoke_review, submit_review, ReviewFormState};
use reputation_wallet::models::collaboration::CollaborationStatus;
use reputation_wallet::stats::ReputationSummary;
use reputation_wallet::store::ReviewStore;

fn five_stars(review: &str) -> ReviewFormState {
    ReviewFormState {
        rating: 5,
        review: review.to_string(),
        skills: vec!["Communication".to_string(), "Figma".to_string()],
    }
}

#[test]
fn issuing_one_review_from_four_pending_collaborations() {
    let mut store = ReviewStore::seeded();
    assert_eq!(store.pending_collaborations().len(), 4);
    let reviews_before = store.reviews().len();

    let collaboration = pending_collaboration(&store, 1).unwrap();
    let submission = submit_review(&mut store, &collaboration, "HashMasters", five_stars("")).unwrap();

    assert_eq!(store.issued_count(), 1);
    assert_eq!(store.pending_collaborations().len(), 3);
    assert_eq!(store.reviews().len(), reviews_before + 1);
    assert_eq!(store.reviews()[0].id, submission.review.id);
    assert_eq!(
        submission.review.review_snippet,
        "Great work and professional collaboration."
    );
}

#[test]
fn freelancer_summary_follows_issue_and_revoke() {
    let mut store = ReviewStore::seeded();
    let summary = ReputationSummary::from_reviews(&store.reviews_for("Alice"), 32, 5);
    assert_eq!(summary.formatted_average(), "4.8");
    assert_eq!(summary.jobs_completed, 32);

    let collaboration = pending_collaboration(&store, 1).unwrap();
    let submission = submit_review(&mut store, &collaboration, "HashMasters", five_stars("Great")).unwrap();

    let summary = ReputationSummary::from_reviews(&store.reviews_for("Alice"), 32, 5);
    assert_eq!(summary.total_reviews, 6);
    assert_eq!(summary.jobs_completed, 33);
    assert_eq!(store.reviews_by("HashMasters").len(), 1);

    let revocation = revoke_review(&mut store, submission.review.id, RevocationPolicy::ReopenCollaboration).unwrap();
    assert_eq!(revocation.reopened, Some(1));
    assert_eq!(store.collaboration(1).unwrap().status, CollaborationStatus::Pending);

    let summary = ReputationSummary::from_reviews(&store.reviews_for("Alice"), 32, 5);
    assert_eq!(summary.total_reviews, 5);
    assert_eq!(summary.jobs_completed, 32);
    assert!(store.reviews_by("HashMasters").is_empty());
}

#[test]
fn revoking_a_seeded_review_keeps_the_rest_in_order() {
    let mut store = ReviewStore::seeded();
    assert!(revoke_review(&mut store, 2, RevocationPolicy::KeepIssued).is_some());
    assert!(revoke_review(&mut store, 2, RevocationPolicy::KeepIssued).is_none());

    let ids: Vec<u64> = store.reviews().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3, 4, 5]);
}
