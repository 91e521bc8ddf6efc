//! Attempt endpoints: `/courses/{cid}/quizzes/{qid}/attempts[...]`.

use kz_core::entities::{AttemptPatch, AttemptSubmission, QuizAttempt};

use crate::{
    KambazClient,
    error::ClientError,
    http::{check_response, read_json, read_optional, read_value},
};

impl KambazClient {
    /// Submit answers. The backend grades and returns the stored attempt.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend rejects the
    /// submission (e.g. attempt limit reached), or the body is not an attempt.
    pub async fn submit_attempt(
        &self,
        course_id: &str,
        quiz_id: &str,
        submission: &AttemptSubmission,
    ) -> Result<QuizAttempt, ClientError> {
        let url = self.quiz_url(course_id, quiz_id, &["attempts"]);
        tracing::debug!(%url, answers = submission.answers.len(), "submitting attempt");
        let resp = check_response(self.http.post(&url).json(submission).send().await?).await?;
        read_json(resp).await
    }

    /// Every attempt `user_id` made on a quiz, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is not an
    /// attempt array.
    pub async fn list_attempts(
        &self,
        course_id: &str,
        quiz_id: &str,
        user_id: &str,
    ) -> Result<Vec<QuizAttempt>, ClientError> {
        let url = self.quiz_url(course_id, quiz_id, &["attempts", user_id]);
        let resp = check_response(self.http.get(&url).send().await?).await?;
        read_json(resp).await
    }

    /// The newest attempt, or `None` when the backend answers `null`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is neither
    /// `null` nor an attempt.
    pub async fn latest_attempt(
        &self,
        course_id: &str,
        quiz_id: &str,
        user_id: &str,
    ) -> Result<Option<QuizAttempt>, ClientError> {
        let url = self.quiz_url(course_id, quiz_id, &["attempts", user_id, "latest"]);
        let resp = check_response(self.http.get(&url).send().await?).await?;
        read_optional(resp).await
    }

    /// Patch an incomplete attempt.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the backend rejects it.
    pub async fn update_attempt(
        &self,
        course_id: &str,
        quiz_id: &str,
        attempt_id: &str,
        patch: &AttemptPatch,
    ) -> Result<serde_json::Value, ClientError> {
        let url = self.quiz_url(course_id, quiz_id, &["attempts", attempt_id]);
        let resp = check_response(self.http.put(&url).json(patch).send().await?).await?;
        read_value(resp).await
    }
}
