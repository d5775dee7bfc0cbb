//! # Rating Summary
//!
//! Aggregates a course's ratings into what the rating widget shows:
//! the average, the total, and a 5→1 star distribution.
//!
//! ```text
//!   4.3  ★★★★☆   (12 baho)
//!   5 ★ ████████████░░░░  7   58%
//!   4 ★ ████░░░░░░░░░░░░  2   17%
//!   3 ★ ██░░░░░░░░░░░░░░  1    8%
//!   2 ★ ██░░░░░░░░░░░░░░  1    8%
//!   1 ★ ██░░░░░░░░░░░░░░  1    8%
//! ```

use serde::Serialize;

use crate::types::Rating;

/// One row of the star distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StarBucket {
    /// Star value (5 down to 1).
    pub star: i32,
    /// Number of ratings with exactly this value.
    pub count: usize,
    /// Share of all ratings, 0..=100.
    pub percentage: f64,
}

/// Aggregated ratings of one course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    /// Arithmetic mean of every rating, 0 when there are none.
    pub average: f64,
    /// Number of ratings.
    pub total: usize,
    /// Buckets ordered 5, 4, 3, 2, 1.
    pub distribution: Vec<StarBucket>,
}

impl RatingSummary {
    /// Builds the summary.
    ///
    /// Values outside 1..=5 still count toward the average and total but
    /// fall into no bucket.
    pub fn from_ratings(ratings: &[Rating]) -> Self {
        let total = ratings.len();
        let average = if total == 0 {
            0.0
        } else {
            ratings.iter().map(|r| f64::from(r.rating)).sum::<f64>() / total as f64
        };

        let distribution = (1..=5)
            .rev()
            .map(|star| {
                let count = ratings.iter().filter(|r| r.rating == star).count();
                let percentage = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                };
                StarBucket {
                    star,
                    count,
                    percentage,
                }
            })
            .collect();

        RatingSummary {
            average,
            total,
            distribution,
        }
    }

    /// Average with one decimal, e.g. `4.3`.
    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average)
    }

    /// Whole stars to fill in the widget.
    pub fn filled_stars(&self) -> u8 {
        self.average.round().clamp(0.0, 5.0) as u8
    }
}

/// The rating `user_name` has already given, if any.
pub fn rating_by(ratings: &[Rating], user_name: &str) -> Option<i32> {
    ratings
        .iter()
        .find(|r| r.user_name == user_name)
        .map(|r| r.rating)
}
