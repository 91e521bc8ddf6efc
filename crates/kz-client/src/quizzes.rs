//! Quiz endpoints: `/courses/{cid}/quizzes[/{qid}[/publish|/unpublish]]`.

use kz_core::entities::Quiz;

use crate::{
    KambazClient,
    error::ClientError,
    http::{check_response, read_json, read_value},
};

impl KambazClient {
    /// List a course's quizzes. Students only receive published ones.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or the body is not a quiz array.
    pub async fn list_quizzes(&self, course_id: &str) -> Result<Vec<Quiz>, ClientError> {
        let url = self.url(&["courses", course_id, "quizzes"]);
        tracing::debug!(%url, "listing quizzes");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        read_json(resp).await
    }

    /// Fetch one quiz.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or the body is not a quiz.
    pub async fn get_quiz(&self, course_id: &str, quiz_id: &str) -> Result<Quiz, ClientError> {
        let url = self.quiz_url(course_id, quiz_id, &[]);
        let resp = check_response(self.http.get(&url).send().await?).await?;
        read_json(resp).await
    }

    /// Create `quiz` under its client-generated id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the backend rejects it.
    pub async fn create_quiz(&self, course_id: &str, quiz: &Quiz) -> Result<Quiz, ClientError> {
        let url = self.quiz_url(course_id, &quiz.id, &[]);
        tracing::debug!(%url, "creating quiz");
        let resp = check_response(self.http.post(&url).json(quiz).send().await?).await?;
        read_json(resp).await
    }

    /// Replace a quiz's configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the backend rejects it.
    pub async fn update_quiz(
        &self,
        course_id: &str,
        quiz: &Quiz,
    ) -> Result<serde_json::Value, ClientError> {
        let url = self.quiz_url(course_id, &quiz.id, &[]);
        let resp = check_response(self.http.put(&url).json(quiz).send().await?).await?;
        read_value(resp).await
    }

    /// Delete a quiz.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the backend rejects it.
    pub async fn delete_quiz(
        &self,
        course_id: &str,
        quiz_id: &str,
    ) -> Result<serde_json::Value, ClientError> {
        let url = self.quiz_url(course_id, quiz_id, &[]);
        let resp = check_response(self.http.delete(&url).send().await?).await?;
        read_value(resp).await
    }

    /// Publish a quiz. Returns the HTTP status; only `200` means success.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the backend rejects it.
    pub async fn publish_quiz(&self, course_id: &str, quiz_id: &str) -> Result<u16, ClientError> {
        self.set_published(course_id, quiz_id, "publish").await
    }

    /// Unpublish a quiz. Returns the HTTP status; only `200` means success.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the backend rejects it.
    pub async fn unpublish_quiz(&self, course_id: &str, quiz_id: &str) -> Result<u16, ClientError> {
        self.set_published(course_id, quiz_id, "unpublish").await
    }

    async fn set_published(
        &self,
        course_id: &str,
        quiz_id: &str,
        action: &str,
    ) -> Result<u16, ClientError> {
        let url = self.quiz_url(course_id, quiz_id, &[action]);
        tracing::debug!(%url, action, "changing publish state");
        let resp = check_response(self.http.post(&url).send().await?).await?;
        Ok(resp.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use kz_core::enums::QuizType;
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"[
        {
            "_id": "Q101",
            "title": "Ownership",
            "course": "RS101",
            "quizType": "Graded Quiz",
            "assignmentGroup": "Quizzes",
            "shuffleAnswers": true,
            "timeLimit": 20,
            "multipleAttempts": false,
            "howManyAttempts": 1,
            "showCorrectAnswers": "Immediately",
            "oneQuestionAtATime": true,
            "published": true,
            "points": 10,
            "dueDate": "2025-05-01T23:59:00.000Z",
            "__v": 0
        },
        {
            "_id": "Q102",
            "title": "Draft",
            "course": "RS101",
            "published": false
        }
    ]"#;

    #[test]
    fn parse_quiz_list() {
        let quizzes: Vec<Quiz> = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(quizzes.len(), 2);
        assert_eq!(quizzes[0].quiz_type, QuizType::GradedQuiz);
        assert_eq!(quizzes[0].time_limit, 20);
        assert!(quizzes[0].due_date.is_some());
        assert!(!quizzes[1].published);
        assert_eq!(quizzes[1].time_limit, 0);
    }

    #[test]
    fn publish_urls() {
        let client =
            KambazClient::new("http://localhost:4000/api", std::time::Duration::from_secs(1), None)
                .unwrap();
        assert_eq!(
            client.quiz_url("RS101", "Q101", &["publish"]),
            "http://localhost:4000/api/courses/RS101/quizzes/Q101/publish"
        );
    }
}
