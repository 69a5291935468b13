use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::{QuestionAnswer, Topic};

pub const TITLE_UNIQUE_INDEX: &str = "idx_topics_title_unique";
pub const SLUG_UNIQUE_INDEX: &str = "idx_topics_slug_unique";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", unique)]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub icon: String,

    #[sea_orm(column_type = "Text")]
    pub preview: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text", unique)]
    pub slug: String,

    // Ordered list of entries, embedded in the topic row
    #[sea_orm(column_type = "JsonBinary")]
    pub questions_answers: Json,

    pub is_active: bool,

    pub display_order: i32,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub created_by: Option<Uuid>,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub updated_by: Option<Uuid>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn into_topic(self) -> Result<Topic, serde_json::Error> {
        let questions_answers: Vec<QuestionAnswer> =
            serde_json::from_value(self.questions_answers)?;

        Ok(Topic {
            id: self.id,
            title: self.title,
            icon: self.icon,
            preview: self.preview,
            description: self.description,
            slug: self.slug,
            questions_answers,
            is_active: self.is_active,
            order: self.display_order,
            created_by: self.created_by.map(UserId::from),
            updated_by: self.updated_by.map(UserId::from),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model(questions_answers: Json) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            title: "My Topic".to_string(),
            icon: "📚".to_string(),
            preview: "Preview".to_string(),
            description: "Description".to_string(),
            slug: "my-topic".to_string(),
            questions_answers,
            is_active: true,
            display_order: 2,
            created_by: Some(Uuid::new_v4()),
            updated_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn converts_row_to_topic() {
        let qa_id = Uuid::new_v4();
        let row = model(serde_json::json!([
            { "id": qa_id, "question": "Why?", "answer": "Because.", "order": 1 }
        ]));
        let creator = row.created_by;

        let topic = row.into_topic().unwrap();

        assert_eq!(topic.order, 2);
        assert_eq!(topic.created_by.map(|u| u.value()), creator);
        assert_eq!(topic.questions_answers.len(), 1);
        assert_eq!(topic.questions_answers[0].id, qa_id);
        assert_eq!(topic.questions_answers[0].order, 1);
    }

    #[test]
    fn missing_entry_order_defaults_to_zero() {
        let row = model(serde_json::json!([
            { "id": Uuid::new_v4(), "question": "Q?", "answer": "A" }
        ]));

        let topic = row.into_topic().unwrap();
        assert_eq!(topic.questions_answers[0].order, 0);
    }

    #[test]
    fn malformed_entries_are_rejected() {
        let row = model(serde_json::json!({ "not": "a list" }));
        assert!(row.into_topic().is_err());
    }
}
