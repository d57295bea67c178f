use sea_orm_migration::{prelude::*, schema::*};

/// Listings reference players and clubs by id only. No foreign keys are declared:
/// references are checked by the application at write time.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TransferListing::Table)
                    .if_not_exists()
                    .col(string(TransferListing::Id).primary_key())
                    .col(string(TransferListing::PlayerId))
                    .col(string_null(TransferListing::FromClubId))
                    .col(double(TransferListing::AskingPrice))
                    .col(string(TransferListing::Status).default("open"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TransferListing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TransferListing {
    #[sea_orm(iden = "transferlisting")]
    Table,
    #[sea_orm(iden = "_id")]
    Id,
    PlayerId,
    FromClubId,
    AskingPrice,
    Status,
}
