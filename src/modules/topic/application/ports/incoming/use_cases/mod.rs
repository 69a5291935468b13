mod add_question_answer_use_case;
mod create_topic_use_case;
mod delete_question_answer_use_case;
mod delete_topic_use_case;
mod get_topic_use_case;
mod list_topics_use_case;
mod update_question_answer_use_case;
mod update_topic_use_case;

pub use add_question_answer_use_case::{
    AddQuestionAnswerCommand, AddQuestionAnswerError, AddQuestionAnswerUseCase,
};
pub use create_topic_use_case::{
    CreateTopicCommand, CreateTopicError, CreateTopicInput, CreateTopicUseCase,
    QuestionAnswerInput,
};
pub use delete_question_answer_use_case::{DeleteQuestionAnswerError, DeleteQuestionAnswerUseCase};
pub use delete_topic_use_case::{DeleteTopicError, DeleteTopicUseCase};
pub use get_topic_use_case::{GetTopicError, GetTopicUseCase};
pub use list_topics_use_case::{ListTopicsError, ListTopicsUseCase, TopicList};
pub use update_question_answer_use_case::{
    UpdateQuestionAnswerCommand, UpdateQuestionAnswerError, UpdateQuestionAnswerUseCase,
};
pub use update_topic_use_case::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase};
