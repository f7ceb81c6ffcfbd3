//! Lookup index for listing the questions of one quiz.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_question_quiz_id")
                    .table(Question::Table)
                    .col(Question::QuizId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_question_quiz_id").table(Question::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Question { Table, QuizId }
