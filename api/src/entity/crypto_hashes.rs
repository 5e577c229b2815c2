//! SeaORM Entity for crypto_hashes table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Currency a hash record is denominated in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(8))")]
pub enum Currency {
    #[sea_orm(string_value = "RUB")]
    #[serde(rename = "RUB")]
    Rub,
    #[sea_orm(string_value = "USDT")]
    #[serde(rename = "USDT")]
    Usdt,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Rub => write!(f, "RUB"),
            Currency::Usdt => write!(f, "USDT"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "crypto_hashes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub team_id: String,
    pub hash_value: String,
    #[sea_orm(column_type = "Double")]
    pub token_amount: f64,
    pub currency: Currency,
    #[sea_orm(column_type = "Double", nullable)]
    pub exchange_rate: Option<f64>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::TeamId",
        to = "super::teams::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team,
}

impl Related<super::teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
