use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // updated_at maintenance function
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = NOW();
                    RETURN NEW;
                END;
                $$ LANGUAGE plpgsql;
                "#,
            )
            .await?;

        // =====================================================
        // Create topics table
        // =====================================================
        manager.create_table(topics_table()).await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Names are matched by the repository when classifying duplicates
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_topics_title_unique
                ON topics (title);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_topics_slug_unique
                ON topics (slug);
                "#,
            )
            .await?;

        // List order: display_order asc, newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topics_active_sort
                ON topics (is_active, display_order ASC, created_at DESC);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_topics_updated_at
                BEFORE UPDATE ON topics
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_topics_updated_at ON topics;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_topics_title_unique;
                DROP INDEX IF EXISTS idx_topics_slug_unique;
                DROP INDEX IF EXISTS idx_topics_active_sort;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Topics::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column();")
            .await?;

        Ok(())
    }
}

/// Title and slug are unbounded `text`; only the preview carries a length cap.
fn topics_table() -> TableCreateStatement {
    Table::create()
        .table(Topics::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Topics::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(Topics::Title).text().not_null())
        .col(
            ColumnDef::new(Topics::Icon)
                .text()
                .not_null()
                .default("📚"),
        )
        .col(ColumnDef::new(Topics::Preview).string_len(150).not_null())
        .col(ColumnDef::new(Topics::Description).text().not_null())
        .col(ColumnDef::new(Topics::Slug).text().not_null())
        // Q&A entries live inline; one row is one aggregate
        .col(
            ColumnDef::new(Topics::QuestionsAnswers)
                .json_binary()
                .not_null()
                .default(Expr::cust("'[]'::jsonb")),
        )
        .col(
            ColumnDef::new(Topics::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(Topics::DisplayOrder)
                .integer()
                .not_null()
                .default(0),
        )
        .col(ColumnDef::new(Topics::CreatedBy).uuid().null())
        .col(ColumnDef::new(Topics::UpdatedBy).uuid().null())
        .col(
            ColumnDef::new(Topics::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Topics::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
    Title,
    Icon,
    Preview,
    Description,
    Slug,
    QuestionsAnswers,
    IsActive,
    DisplayOrder,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
