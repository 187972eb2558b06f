use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Row shape of the local task collection. Serializes to the wire document
/// shape, `_id` included.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "_id")]
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub done: bool,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
