//! Serde roundtrip and JsonSchema validation tests for all wire and output types.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use kz_core::entities::*;
use kz_core::enums::*;
use kz_core::grading::{PreviewScore, QuestionOutcome};
use kz_core::policy::Availability;
use kz_core::responses::*;
use kz_core::results::{ResultRow, ResultsView};
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, day, hour, 0, 0).unwrap()
}

fn sample_quiz() -> Quiz {
    Quiz {
        id: "Q101".into(),
        title: "Ownership and Borrowing".into(),
        description: "Covers chapter 4.".into(),
        course: "RS101".into(),
        quiz_type: QuizType::PracticeQuiz,
        assignment_group: AssignmentGroup::Exams,
        shuffle_answers: true,
        time_limit: 30,
        multiple_attempts: true,
        how_many_attempts: 3,
        show_correct_answers: "After Due Date".into(),
        access_code: "borrowck".into(),
        one_question_at_a_time: true,
        webcam_required: false,
        lock_questions_after_answering: false,
        due_date: Some(at(20, 23)),
        available_date: Some(at(1, 8)),
        until_date: None,
        published: true,
        points: 12.0,
    }
}

roundtrip_and_validate!(quiz_roundtrip, Quiz, sample_quiz());

roundtrip_and_validate!(
    quiz_without_dates_roundtrip,
    Quiz,
    Quiz {
        id: "Q102".into(),
        course: "RS101".into(),
        ..Quiz::default()
    }
);

roundtrip_and_validate!(
    multiple_choice_question_roundtrip,
    Question,
    Question {
        id: "q1".into(),
        quiz: "Q101".into(),
        course: "RS101".into(),
        title: "Moves".into(),
        prompt: "What happens to a String after it is moved?".into(),
        points: 4.0,
        kind: QuestionKind::MultipleChoice {
            choices: vec!["It is copied".into(), "It becomes unusable".into()],
            correct_answer: 1,
        },
    }
);

roundtrip_and_validate!(
    true_false_question_roundtrip,
    Question,
    Question {
        id: "q2".into(),
        quiz: "Q101".into(),
        course: "RS101".into(),
        title: "Borrowing".into(),
        prompt: "Two mutable borrows may coexist.".into(),
        points: 2.0,
        kind: QuestionKind::TrueFalse {
            correct_answer: false,
        },
    }
);

roundtrip_and_validate!(
    fill_in_blank_question_roundtrip,
    Question,
    Question {
        id: "q3".into(),
        quiz: "Q101".into(),
        course: "RS101".into(),
        title: "Keyword".into(),
        prompt: "Shared references are created with ___".into(),
        points: 6.0,
        kind: QuestionKind::FillInBlank {
            possible_answers: vec!["&".into(), "ampersand".into()],
        },
    }
);

roundtrip_and_validate!(
    attempt_roundtrip,
    QuizAttempt,
    QuizAttempt {
        id: "A1".into(),
        quiz: "Q101".into(),
        student: "U7".into(),
        course: "RS101".into(),
        attempt_number: 2,
        started_at: at(5, 10),
        submitted_at: Some(at(5, 11)),
        answers: vec![
            AttemptAnswer {
                question_id: "q1".into(),
                answer: AnswerValue::Index(1),
                is_correct: true,
                points_earned: 4.0,
            },
            AttemptAnswer {
                question_id: "q3".into(),
                answer: AnswerValue::Text("and".into()),
                is_correct: false,
                points_earned: 0.0,
            },
        ],
        score: 4.0,
        total_points: 12.0,
        is_completed: true,
    }
);

roundtrip_and_validate!(
    submission_roundtrip,
    AttemptSubmission,
    AttemptSubmission {
        answers: vec![
            SubmittedAnswer {
                question_id: "q1".into(),
                answer: AnswerValue::NO_CHOICE,
            },
            SubmittedAnswer {
                question_id: "q2".into(),
                answer: AnswerValue::Bool(false),
            },
        ],
    }
);

roundtrip_and_validate!(
    attempt_patch_roundtrip,
    AttemptPatch,
    AttemptPatch {
        answers: None,
        is_completed: Some(true),
        submitted_at: Some(at(6, 9)),
    }
);

roundtrip_and_validate!(
    user_roundtrip,
    User,
    User {
        id: "U7".into(),
        username: "ferris".into(),
        first_name: "Ferris".into(),
        last_name: "Crab".into(),
        email: "ferris@example.edu".into(),
        role: Role::Ta,
    }
);

roundtrip_and_validate!(
    preview_score_roundtrip,
    PreviewScore,
    PreviewScore {
        score: 6.0,
        total: 12.0,
        percentage: 50,
        letter_grade: 'F',
        outcomes: vec![QuestionOutcome {
            question_id: "q3".into(),
            is_correct: true,
            points_earned: 6.0,
            points: 6.0,
        }],
    }
);

roundtrip_and_validate!(
    results_view_roundtrip,
    ResultsView,
    ResultsView {
        quiz_id: "Q101".into(),
        quiz_title: "Ownership and Borrowing".into(),
        score: 4.0,
        total: 12.0,
        percentage: 33,
        letter_grade: 'F',
        passed: false,
        attempt_number: Some(2),
        rows: vec![ResultRow {
            index: 1,
            question_id: "q1".into(),
            prompt: "What happens to a String after it is moved?".into(),
            is_correct: true,
            points_earned: 4.0,
            points: 4.0,
            answer: "It becomes unusable".into(),
            correct_answer: "It becomes unusable".into(),
        }],
        notice: None,
    }
);

roundtrip_and_validate!(
    quiz_listing_roundtrip,
    QuizListing,
    QuizListing {
        quiz: sample_quiz(),
        question_count: 3,
        availability: Availability::NotAvailableUntil(at(1, 8)),
        summary: "Not available until 2025-04-01 | Due 2025-04-20 | 12 pts | 3 Questions".into(),
        latest_score: None,
    }
);

roundtrip_and_validate!(
    publish_response_roundtrip,
    PublishResponse,
    PublishResponse {
        quiz_id: "Q101".into(),
        published: true,
        status: 200,
    }
);

roundtrip_and_validate!(
    attempt_status_roundtrip,
    AttemptStatusResponse,
    AttemptStatusResponse {
        quiz_id: "Q101".into(),
        published: true,
        availability: Availability::Always,
        attempts_taken: 1,
        attempt_limit: 3,
        can_take: true,
        latest_score: Some(4.0),
    }
);

// Enum wire values

#[test]
fn enum_wire_values() {
    assert_eq!(
        serde_json::to_value(QuizType::GradedSurvey).unwrap(),
        "Graded Survey"
    );
    assert_eq!(
        serde_json::to_value(QuestionType::FillInBlank).unwrap(),
        "fill-in-blank"
    );
    assert_eq!(serde_json::to_value(Role::Faculty).unwrap(), "FACULTY");
    assert_eq!(
        serde_json::to_value(AssignmentGroup::Project).unwrap(),
        "Project"
    );
}

#[test]
fn attempt_answers_by_question() {
    let answers: BTreeMap<String, AnswerValue> =
        serde_json::from_str(r#"{"q1": 0, "q2": true, "q3": "ampersand"}"#).unwrap();
    assert_eq!(answers["q1"], AnswerValue::Index(0));
    assert_eq!(answers["q2"], AnswerValue::Bool(true));
    assert_eq!(answers["q3"], AnswerValue::Text("ampersand".into()));
}
