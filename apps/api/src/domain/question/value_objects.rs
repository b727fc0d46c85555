use thiserror::Error;

/// Reasons a request payload is rejected before it reaches the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field must not be blank: {0}")]
    BlankField(&'static str),

    #[error("{field} is not a valid integer: {value}")]
    NotAnInteger { field: &'static str, value: String },

    #[error("category id must be positive, got {0}")]
    InvalidCategory(i32),
}

/// Validated input for creating a question
///
/// All four fields are required. Any integer is accepted as a difficulty.
/// Whether `category_id` names an existing category is checked by the store
/// on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category_id: i32,
    difficulty: i32,
}

impl NewQuestion {
    pub fn new(
        question: Option<String>,
        answer: Option<String>,
        category_id: Option<i32>,
        difficulty: Option<i32>,
    ) -> Result<Self, ValidationError> {
        let question = required_text("question", question)?;
        let answer = required_text("answer", answer)?;

        let category_id = category_id.ok_or(ValidationError::MissingField("category"))?;
        if category_id <= 0 {
            return Err(ValidationError::InvalidCategory(category_id));
        }

        let difficulty = difficulty.ok_or(ValidationError::MissingField("difficulty"))?;

        Ok(Self {
            question,
            answer,
            category_id,
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category_id(&self) -> i32 {
        self.category_id
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(value)
}
