use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TransferOffer::Table)
                    .if_not_exists()
                    .col(string(TransferOffer::Id).primary_key())
                    .col(string(TransferOffer::ListingId))
                    .col(string(TransferOffer::ClubId))
                    .col(double(TransferOffer::OfferAmount))
                    .col(string(TransferOffer::Status).default("pending"))
                    .col(text_null(TransferOffer::Message))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TransferOffer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TransferOffer {
    #[sea_orm(iden = "transferoffer")]
    Table,
    #[sea_orm(iden = "_id")]
    Id,
    ListingId,
    ClubId,
    OfferAmount,
    Status,
    Message,
}
