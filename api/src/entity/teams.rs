//! SeaORM Entity for teams table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub rub_price_per_lot: f64,
    #[sea_orm(column_type = "Double")]
    pub usdt_price_per_lot: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::crypto_hashes::Entity")]
    CryptoHashes,
}

impl Related<super::crypto_hashes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CryptoHashes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
