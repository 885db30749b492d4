//! Domain types exchanged between the product service, its stores, and callers.

use crate::entities;
use serde::{Deserialize, Serialize};

/// A grouping entity referenced by products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: i64,
    /// Descriptive name
    pub name: String,
}

impl From<entities::category::Model> for Category {
    fn from(model: entities::category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// A persisted product together with its resolved category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier, immutable once set
    pub id: i64,
    /// Trimmed name, unique ignoring case
    pub name: String,
    /// Unit price
    pub price: f64,
    /// The category this product belongs to
    pub category: Category,
}

/// A product that has not been stored yet; the store assigns its id.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: Category,
}

/// Input for creating a product. All fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
    pub category_id: i64,
}

/// Partial update for a product.
///
/// `None` means the field was not supplied and is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl ProductPatch {
    /// True when no field was supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.category_id.is_none()
    }
}
