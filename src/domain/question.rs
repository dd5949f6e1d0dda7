//! Question records and coercion of client-supplied question fields.

use serde::Serialize;
use serde_json::Value;

/// A persisted trivia question, in the shape clients receive it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// A question that has passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Reasons a create-question body is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionFieldError {
    #[error("body must be a JSON object")]
    NotAnObject,
    #[error("missing field: {0}")]
    Missing(&'static str),
    #[error("field {0} has an unusable value")]
    Invalid(&'static str),
}

impl NewQuestion {
    /// Build a question from a JSON body.
    ///
    /// All four keys must be present. Text fields accept any scalar;
    /// `category` and `difficulty` accept integers or numeric strings.
    pub fn from_json(body: &Value) -> Result<Self, QuestionFieldError> {
        let obj = body.as_object().ok_or(QuestionFieldError::NotAnObject)?;

        for key in ["question", "answer", "difficulty", "category"] {
            if !obj.contains_key(key) {
                return Err(QuestionFieldError::Missing(key));
            }
        }

        let question =
            coerce_text(&obj["question"]).ok_or(QuestionFieldError::Invalid("question"))?;
        let answer = coerce_text(&obj["answer"]).ok_or(QuestionFieldError::Invalid("answer"))?;
        let difficulty =
            coerce_int(&obj["difficulty"]).ok_or(QuestionFieldError::Invalid("difficulty"))?;
        let category =
            coerce_int(&obj["category"]).ok_or(QuestionFieldError::Invalid("category"))?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

/// Read an integer from a JSON number or a numeric string.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_accepts_numeric_strings() {
        let body = json!({
            "question": "What boils at 100C?",
            "answer": "Water",
            "difficulty": "2",
            "category": "1",
        });
        let q = NewQuestion::from_json(&body).unwrap();
        assert_eq!(q.category, 1);
        assert_eq!(q.difficulty, 2);
        assert_eq!(q.answer, "Water");
    }

    #[test]
    fn test_from_json_reports_first_missing_field() {
        let body = json!({"question": "q", "answer": "a", "category": 1});
        assert_eq!(
            NewQuestion::from_json(&body),
            Err(QuestionFieldError::Missing("difficulty"))
        );
    }

    #[test]
    fn test_from_json_allows_empty_text() {
        let body = json!({"question": "", "answer": "", "difficulty": 1, "category": 1});
        let q = NewQuestion::from_json(&body).unwrap();
        assert!(q.question.is_empty());
    }

    #[test]
    fn test_from_json_rejects_non_numeric_category() {
        let body = json!({"question": "q", "answer": "a", "difficulty": 1, "category": "Art"});
        assert_eq!(
            NewQuestion::from_json(&body),
            Err(QuestionFieldError::Invalid("category"))
        );
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert_eq!(
            NewQuestion::from_json(&json!(["question"])),
            Err(QuestionFieldError::NotAnObject)
        );
    }

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce_int(&json!(7)), Some(7));
        assert_eq!(coerce_int(&json!(" 3 ")), Some(3));
        assert_eq!(coerce_int(&json!(1.5)), None);
        assert_eq!(coerce_int(&json!(null)), None);
    }
}
