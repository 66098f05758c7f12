pub mod difficulty;
pub mod question;

pub use difficulty::Difficulty;
pub use question::{AnswerRecord, Question};
