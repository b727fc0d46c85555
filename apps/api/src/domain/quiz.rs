use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::domain::question::Question;

/// Category selector sent by the quiz client
///
/// Category id `0` is the client's way of saying "all categories".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    Any,
    Only(i32),
}

impl QuizCategory {
    pub fn from_id(id: i32) -> Self {
        if id == 0 {
            QuizCategory::Any
        } else {
            QuizCategory::Only(id)
        }
    }

    /// The category filter to apply to the pool, if any
    pub fn category_id(&self) -> Option<i32> {
        match self {
            QuizCategory::Any => None,
            QuizCategory::Only(id) => Some(*id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("no questions left to ask")]
    Exhausted,
}

/// Picks one question uniformly at random from the quiz pool
pub fn pick_question<R>(pool: &[Question], rng: &mut R) -> Result<Question, QuizError>
where
    R: Rng + ?Sized,
{
    pool.choose(rng).cloned().ok_or(QuizError::Exhausted)
}
