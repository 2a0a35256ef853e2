pub mod paragraph;
pub mod question;

pub use paragraph::{NumberingRef, Paragraph, SourceDocument};
pub use question::{AnswerKey, Question};
