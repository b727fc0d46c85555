// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod category_repository;
pub mod question_repository;

pub use category_repository::CategoryRepository;
pub use question_repository::QuestionRepository;
