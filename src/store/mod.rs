//! Storage collaborators of the product service.
//!
//! The service only talks to these traits, so tests can substitute in-memory
//! doubles and production wires in the SeaORM-backed implementations.

mod seaorm;

pub use seaorm::{SeaOrmCategoryStore, SeaOrmProductStore};

use crate::{
    errors::Result,
    models::{Category, NewProduct, Product},
};
use async_trait::async_trait;

/// Lookup and persistence of product records.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products in the store's natural order.
    async fn find_all(&self) -> Result<Vec<Product>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>>;
    async fn exists_by_id(&self, id: i64) -> Result<bool>;
    /// True if any product's name equals `name` ignoring case.
    async fn exists_by_name_ignore_case(&self, name: &str) -> Result<bool>;
    /// Stores a new product and returns it with its assigned id.
    async fn insert(&self, product: NewProduct) -> Result<Product>;
    /// Writes every field of an existing product.
    async fn save(&self, product: Product) -> Result<Product>;
    /// Removes a product. Callers check existence first.
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// Lookup of category records.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>>;
    async fn exists_by_id(&self, id: i64) -> Result<bool>;
}
