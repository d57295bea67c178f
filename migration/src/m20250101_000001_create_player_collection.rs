use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(string(Player::Id).primary_key())
                    .col(string(Player::Name))
                    .col(string(Player::Position))
                    .col(integer_null(Player::Age))
                    .col(string_null(Player::Nationality))
                    .col(string_null(Player::CurrentClubId))
                    .col(integer_null(Player::HeightCm))
                    .col(string_null(Player::PreferredFoot))
                    .col(text_null(Player::Bio))
                    .col(json(Player::Skills))
                    .col(double_null(Player::MarketValue))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    #[sea_orm(iden = "_id")]
    Id,
    Name,
    Position,
    Age,
    Nationality,
    CurrentClubId,
    HeightCm,
    PreferredFoot,
    Bio,
    Skills,
    MarketValue,
}
