//! Entity module - Contains the SeaORM entity definitions for the catalog tables.
//! Each entity has a Model struct for row data and an Entity struct for queries.

pub mod category;
pub mod product;

pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
