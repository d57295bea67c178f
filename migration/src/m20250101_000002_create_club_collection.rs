use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Club::Table)
                    .if_not_exists()
                    .col(string(Club::Id).primary_key())
                    .col(string(Club::Name))
                    .col(string_null(Club::League))
                    .col(string_null(Club::Country))
                    .col(double(Club::Budget).default(0.0))
                    .col(string_null(Club::Stadium))
                    .col(text_null(Club::Bio))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Club::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Club {
    Table,
    #[sea_orm(iden = "_id")]
    Id,
    Name,
    League,
    Country,
    Budget,
    Stadium,
    Bio,
}
