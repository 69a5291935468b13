//! Curated starter content, loaded with `shunyamarg_backend seed`.

use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicInput, QuestionAnswerInput,
};
use crate::topic::application::topic_use_cases::TopicUseCases;

/// Seeded rows carry the nil id as their author.
pub fn seed_actor() -> UserId {
    UserId::from(Uuid::nil())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

fn qa(question: &str, answer: &str, order: i32) -> QuestionAnswerInput {
    QuestionAnswerInput {
        question: question.to_string(),
        answer: answer.to_string(),
        order: Some(order),
    }
}

fn topic(
    title: &str,
    icon: &str,
    preview: &str,
    description: &str,
    order: i32,
    questions_answers: Vec<QuestionAnswerInput>,
) -> CreateTopicInput {
    CreateTopicInput {
        title: title.to_string(),
        icon: Some(icon.to_string()),
        preview: preview.to_string(),
        description: description.to_string(),
        questions_answers,
        is_active: Some(true),
        order: Some(order),
    }
}

pub fn seed_topics() -> Vec<CreateTopicInput> {
    vec![
        topic(
            "Glimpses of TattvaBodh",
            "🕉️",
            "Explore the essence of self-knowledge and reality",
            "TattvaBodh reveals the fundamental truths about the nature of reality, the self, \
             and consciousness through the lens of Vedantic inquiry.",
            1,
            vec![
                qa(
                    "What is TattvaBodh?",
                    "A foundational Vedanta text that explains the basic principles of reality \
                     and self-knowledge. It serves as a primer for beginning students.",
                    1,
                ),
                qa(
                    "What qualifications does it ask of a student?",
                    "Discrimination (Viveka), dispassion (Vairagya), the six virtues \
                     (Shatsampatti) and the desire for liberation (Mumukshutva).",
                    2,
                ),
            ],
        ),
        topic(
            "Understanding Hindu Scriptures",
            "📚",
            "Journey through the sacred texts of Hinduism",
            "An introduction to the Vedas, the Upanishads and the epics, with their historical \
             context and philosophical depth.",
            2,
            vec![
                qa(
                    "What are the Vedas?",
                    "The oldest sacred texts of Hinduism, in four collections: Rigveda, \
                     Yajurveda, Samaveda and Atharvaveda.",
                    1,
                ),
                qa(
                    "What are the Upanishads?",
                    "Philosophical texts forming the concluding portions of the Vedas. They \
                     explore the relationship between Atman and Brahman.",
                    2,
                ),
            ],
        ),
        topic(
            "Patanjali Yoga Sutra",
            "🧘",
            "Master the eight limbs of classical yoga",
            "The systematic approach to yoga philosophy and practice set out in Patanjali's \
             sutras, from ethical restraint to absorption.",
            3,
            vec![
                qa(
                    "What are the eight limbs of yoga?",
                    "Yama, Niyama, Asana, Pranayama, Pratyahara, Dharana, Dhyana and Samadhi.",
                    1,
                ),
                qa(
                    "What is the goal of yoga according to Patanjali?",
                    "Chitta Vritti Nirodha, the stilling of the fluctuations of the mind.",
                    2,
                ),
            ],
        ),
    ]
}

/// Creates every curated topic. Topics whose title is already taken are skipped.
pub async fn run(topic: &TopicUseCases) -> SeedReport {
    let mut report = SeedReport::default();

    for input in seed_topics() {
        let title = input.title.clone();

        let command = match CreateTopicCommand::new(seed_actor(), input) {
            Ok(cmd) => cmd,
            Err(e) => {
                tracing::error!(%title, error = %e, "Seed topic failed validation");
                report.failed += 1;
                continue;
            }
        };

        match topic.create.execute(command).await {
            Ok(created) => {
                tracing::info!(topic_id = %created.id, slug = %created.slug, "Seeded topic");
                report.created += 1;
            }
            Err(CreateTopicError::TopicAlreadyExists) => {
                tracing::info!(%title, "Topic already present, skipping");
                report.skipped += 1;
            }
            Err(e) => {
                tracing::error!(%title, error = %e, "Failed to seed topic");
                report.failed += 1;
            }
        }
    }

    report
}
