//! Question endpoints: `/courses/{cid}/quizzes/{qid}/questions[/{questionId}]`.

use kz_core::entities::Question;

use crate::{
    KambazClient,
    error::ClientError,
    http::{check_response, read_json, read_value},
};

impl KambazClient {
    /// All questions of a quiz, in authoring order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or a question has an unknown `type`.
    pub async fn list_questions(
        &self,
        course_id: &str,
        quiz_id: &str,
    ) -> Result<Vec<Question>, ClientError> {
        let url = self.quiz_url(course_id, quiz_id, &["questions"]);
        let resp = check_response(self.http.get(&url).send().await?).await?;
        read_json(resp).await
    }

    /// Create a question.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the backend rejects it.
    pub async fn create_question(
        &self,
        course_id: &str,
        quiz_id: &str,
        question: &Question,
    ) -> Result<Question, ClientError> {
        let url = self.quiz_url(course_id, quiz_id, &["questions"]);
        tracing::debug!(%url, question_id = %question.id, "creating question");
        let resp = check_response(self.http.post(&url).json(question).send().await?).await?;
        read_json(resp).await
    }

    /// Replace a question.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the backend rejects it.
    pub async fn update_question(
        &self,
        course_id: &str,
        quiz_id: &str,
        question: &Question,
    ) -> Result<serde_json::Value, ClientError> {
        let url = self.quiz_url(course_id, quiz_id, &["questions", &question.id]);
        let resp = check_response(self.http.put(&url).json(question).send().await?).await?;
        read_value(resp).await
    }

    /// Delete a question.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the backend rejects it.
    pub async fn delete_question(
        &self,
        course_id: &str,
        quiz_id: &str,
        question_id: &str,
    ) -> Result<serde_json::Value, ClientError> {
        let url = self.quiz_url(course_id, quiz_id, &["questions", question_id]);
        let resp = check_response(self.http.delete(&url).send().await?).await?;
        read_value(resp).await
    }
}

#[cfg(test)]
mod tests {
    use kz_core::entities::QuestionKind;
    use kz_core::enums::QuestionType;

    use super::*;

    const FIXTURE: &str = r#"[
        {"_id":"q1","quiz":"Q101","course":"RS101","title":"Moves","type":"multiple-choice",
         "question":"After a move the source is...","points":2,
         "choices":["usable","unusable"],"correctAnswer":1},
        {"_id":"q2","quiz":"Q101","course":"RS101","title":"Borrow","type":"true-false",
         "question":"&mut is exclusive","points":0.5,"correctAnswer":true},
        {"_id":"q3","quiz":"Q101","course":"RS101","title":"Blank","type":"fill-in-blank",
         "question":"Shared refs use ___","points":3,"possibleAnswers":["&"]}
    ]"#;

    #[test]
    fn parse_mixed_questions() {
        let questions: Vec<Question> = serde_json::from_str(FIXTURE).unwrap();
        let types: Vec<QuestionType> = questions.iter().map(Question::question_type).collect();
        assert_eq!(
            types,
            vec![
                QuestionType::MultipleChoice,
                QuestionType::TrueFalse,
                QuestionType::FillInBlank
            ]
        );
        assert!(matches!(
            questions[1].kind,
            QuestionKind::TrueFalse {
                correct_answer: true
            }
        ));
        assert_eq!(questions[1].points, 0.5);
        assert_eq!(kz_core::authoring::total_points(&questions), 5.5);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let json = r#"[{"_id":"q9","type":"essay","question":"Discuss"}]"#;
        assert!(serde_json::from_str::<Vec<Question>>(json).is_err());
    }
}
