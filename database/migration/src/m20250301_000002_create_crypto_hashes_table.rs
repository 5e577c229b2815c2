use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_teams_table::Teams;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CryptoHashes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CryptoHashes::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CryptoHashes::TeamId).string().not_null())
                    .col(ColumnDef::new(CryptoHashes::HashValue).string().not_null())
                    .col(
                        ColumnDef::new(CryptoHashes::TokenAmount)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    // "RUB" | "USDT"
                    .col(
                        ColumnDef::new(CryptoHashes::Currency)
                            .string_len(8)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CryptoHashes::ExchangeRate).double().null())
                    .col(
                        ColumnDef::new(CryptoHashes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CryptoHashes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_crypto_hashes_team_id")
                            .from(CryptoHashes::Table, CryptoHashes::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_crypto_hashes_team_id")
                    .table(CryptoHashes::Table)
                    .col(CryptoHashes::TeamId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CryptoHashes::Table).to_owned())
            .await
    }
}

/// Crypto hashes table definition
#[derive(Iden)]
enum CryptoHashes {
    Table,
    Id,
    TeamId,
    HashValue,
    TokenAmount,
    Currency,
    ExchangeRate,
    CreatedAt,
    UpdatedAt,
}
