//! Assessment Module - The self-assessment input and its scoring.
//!
//! # Components
//!
//! - `question` - The fixed 45-question schema and its six categories
//! - `submission` - Validated, immutable submission built once at the boundary
//! - `scorer` - Weighted category aggregation into a `ScoreSummary`

mod question;
mod scorer;
mod submission;

pub use question::{
    question, Category, Question, QuestionId, MAX_ANSWER, MIN_ANSWER, QUESTIONS, QUESTION_COUNT,
};
pub use scorer::{CategoryScore, CategoryScorer, ScoreSummary};
pub use submission::{
    AnswerValue, CompanyProfile, EmployeeCountBucket, InputDefects, RawSubmission,
    RevenueBucket, Submission, UNNAMED_COMPANY,
};
