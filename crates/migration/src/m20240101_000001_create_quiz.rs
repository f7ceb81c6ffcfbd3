//! Create `quiz` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quiz::Table)
                    .if_not_exists()
                    .col(big_integer(Quiz::Id).auto_increment().primary_key())
                    .col(string_len(Quiz::Title, 256).not_null())
                    .col(text_null(Quiz::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Quiz::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Quiz { Table, Id, Title, Description }
