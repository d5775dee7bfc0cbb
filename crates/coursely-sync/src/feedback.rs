//! Course comments and ratings.
//!
//! Lists are fetched per page view and never cached. Submissions need a
//! signed-in user and re-fetch the list once the backend accepts them.

use coursely_client::{ApiClient, ApiError, ApiResult};
use coursely_core::ratings::rating_by;
use coursely_core::{comment_text, Comment, CourseId, Rating, RatingSummary, User};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::session::SessionState;

/// Ratings of one course, with the widget summary and the viewer's own star.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRatings {
    pub ratings: Vec<Rating>,
    pub summary: RatingSummary,
    /// What the signed-in user already gave, matched by name.
    pub own: Option<i32>,
}

/// Comment and rating widgets for course pages.
#[derive(Clone)]
pub struct CourseFeedback {
    api: ApiClient,
    session_rx: watch::Receiver<SessionState>,
}

impl CourseFeedback {
    pub fn new(api: ApiClient, session_rx: watch::Receiver<SessionState>) -> Self {
        CourseFeedback { api, session_rx }
    }

    fn signed_in_user(&self) -> ApiResult<User> {
        self.session_rx
            .borrow()
            .user()
            .cloned()
            .ok_or(ApiError::AuthRequired)
    }

    pub async fn comments(&self, course_id: CourseId) -> ApiResult<Vec<Comment>> {
        self.api.course_comments(course_id).await
    }

    /// Posts a trimmed, non-empty comment and returns the refreshed list.
    pub async fn post_comment(&self, course_id: CourseId, draft: &str) -> ApiResult<Vec<Comment>> {
        let user = self.signed_in_user()?;
        let text = comment_text(draft)?;

        self.api.add_course_comment(course_id, &text).await?;
        info!(course_id, user_id = user.id, "Comment posted");

        self.comments(course_id).await
    }

    pub async fn ratings(&self, course_id: CourseId) -> ApiResult<CourseRatings> {
        let ratings = self.api.course_ratings(course_id).await?;
        let summary = RatingSummary::from_ratings(&ratings);
        let own = self
            .session_rx
            .borrow()
            .user()
            .and_then(|user| rating_by(&ratings, &user.name));

        debug!(course_id, total = summary.total, "Ratings loaded");
        Ok(CourseRatings {
            ratings,
            summary,
            own,
        })
    }

    /// Submits `rating` as-is and returns the refreshed ratings.
    ///
    /// The range is checked by the backend, not here.
    pub async fn rate(&self, course_id: CourseId, rating: i32) -> ApiResult<CourseRatings> {
        let user = self.signed_in_user()?;

        self.api.add_course_rating(course_id, rating).await?;
        info!(course_id, user_id = user.id, rating, "Rating submitted");

        self.ratings(course_id).await
    }
}
