mod add_question_answer;
mod create_topic;
mod delete_question_answer;
mod delete_topic;
pub mod dto;
mod get_topic;
mod list_topics;
mod update_question_answer;
mod update_topic;

pub use add_question_answer::*;
pub use create_topic::*;
pub use delete_question_answer::*;
pub use delete_topic::*;
pub use get_topic::*;
pub use list_topics::*;
pub use update_question_answer::*;
pub use update_topic::*;
