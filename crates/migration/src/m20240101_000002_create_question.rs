//! Create `question` table.
//!
//! `quiz_id` points at a row owned by the quiz service, which may live in a
//! different database, so no foreign key is declared.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Question::Table)
                    .if_not_exists()
                    .col(big_integer(Question::Id).auto_increment().primary_key())
                    .col(text(Question::Text).not_null())
                    .col(big_integer_null(Question::QuizId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Question::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Question { Table, Id, Text, QuizId }
