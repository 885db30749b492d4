//! Product entity - A priced item that belongs to exactly one category.
//!
//! Names are unique ignoring case. The case-folded form is stored in
//! `name_key`, which carries the unique index and is what lookups compare.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier, assigned on insert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Trimmed product name (e.g., "Laptop")
    pub name: String,
    /// `name` case-folded by `name_key`
    #[sea_orm(unique)]
    pub name_key: String,
    /// Unit price
    pub price: f64,
    /// ID of the category this product belongs to
    pub category_id: i64,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Case-folded form of a product name used for uniqueness.
#[must_use]
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}
