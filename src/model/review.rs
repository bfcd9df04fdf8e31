use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A review of one movie. The active movie's reviews live in the data
/// slice, not on the movie record, and are refreshed per navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub author: String,
    pub comment: String,
    /// 0 to 10.
    pub rating: f64,
    pub date: DateTime<Utc>,
}

/// A review record as the server sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReview {
    pub user: RawReviewAuthor,
    pub comment: String,
    pub rating: f64,
    /// ISO-8601 timestamp.
    pub date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawReviewAuthor {
    pub name: String,
}

/// Adapt a reviews payload into the internal model.
pub fn create_reviews(raw: Vec<RawReview>) -> Vec<Review> {
    raw.into_iter()
        .map(|review| Review {
            author: review.user.name,
            comment: review.comment,
            rating: review.rating,
            date: review
                .date
                .parse::<DateTime<Utc>>()
                .unwrap_or_default(),
        })
        .collect()
}
