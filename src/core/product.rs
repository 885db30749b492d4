//! Product business logic - validation and partial-update rules.
//!
//! The service sits directly on top of a [`ProductStore`] and a [`CategoryStore`].
//! Each operation validates against the stores, issues at most one mutating
//! store call, and fails fast on the first broken rule.
//!
//! The duplicate-name check and the following write are separate store calls,
//! so two concurrent creates with the same name both pass the check; the
//! SeaORM store's unique index on the folded name rejects the second write.

use crate::{
    entities::product::name_key,
    errors::{Error, Result},
    models::{Category, CreateProduct, NewProduct, Product, ProductPatch},
    store::{CategoryStore, ProductStore},
};
use std::sync::Arc;
use tracing::instrument;

fn category_not_found(id: i64) -> Error {
    Error::NotFound {
        message: format!("Category with ID {id} does not exist"),
    }
}

fn duplicate_name(name: &str) -> Error {
    Error::DuplicateResource {
        message: format!("Product with name '{name}' already exists"),
    }
}

/// Application service encapsulating product business rules.
pub struct ProductService<P: ProductStore, C: CategoryStore> {
    products: Arc<P>,
    categories: Arc<C>,
}

impl<P: ProductStore, C: CategoryStore> ProductService<P, C> {
    /// Creates a service over the given stores.
    #[must_use]
    pub const fn new(products: Arc<P>, categories: Arc<C>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Returns every product in the store's natural order. An empty store
    /// yields an empty list.
    ///
    /// # Errors
    /// Returns an error if the store query fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.products.find_all().await
    }

    /// Returns the product with the given id.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if no such product exists.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> Result<Product> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound {
                message: format!("Product with ID {id} not found"),
            })
    }

    /// Creates a product with a trimmed name.
    ///
    /// Checks run in a fixed order: duplicate name, then category existence.
    /// Price and empty names are not validated here.
    ///
    /// # Errors
    /// - `Error::DuplicateResource` if a product with the same name (ignoring case) exists
    /// - `Error::NotFound` if the category does not exist
    #[instrument(skip(self, request), fields(category_id = request.category_id))]
    pub async fn create_product(&self, request: CreateProduct) -> Result<Product> {
        let name = request.name.trim();
        if self.products.exists_by_name_ignore_case(name).await? {
            return Err(duplicate_name(&request.name));
        }

        if !self.categories.exists_by_id(request.category_id).await? {
            return Err(category_not_found(request.category_id));
        }
        // The category can disappear between the two calls.
        let category = self.find_category(request.category_id).await?;

        self.products
            .insert(NewProduct {
                name: name.to_string(),
                price: request.price,
                category,
            })
            .await
    }

    /// Applies a partial update. Only supplied fields are touched; they are
    /// checked in the order name, price, category and the first failure wins.
    /// A patch with no fields is rejected once the product is known to exist.
    ///
    /// # Errors
    /// - `Error::NotFound` if the product or the new category does not exist
    /// - `Error::Validation` for an empty name, a price that is not positive,
    ///   or a patch with no fields
    /// - `Error::DuplicateResource` if another product already has the new name
    #[instrument(skip(self, patch))]
    pub async fn update_product(&self, id: i64, patch: ProductPatch) -> Result<Product> {
        let mut product = self.get_product(id).await?;
        if patch.is_empty() {
            return Err(Error::Validation {
                message: "At least one field must be provided for update".to_string(),
            });
        }

        if let Some(name) = patch.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(Error::Validation {
                    message: "Product name cannot be empty".to_string(),
                });
            }
            if self.products.exists_by_name_ignore_case(name).await?
                && name_key(&product.name) != name_key(name)
            {
                return Err(duplicate_name(name));
            }
            product.name = name.to_string();
        }

        if let Some(price) = patch.price {
            // Written so NaN fails the check too.
            if !(price > 0.0 && price.is_finite()) {
                return Err(Error::Validation {
                    message: "Price must be greater than 0".to_string(),
                });
            }
            product.price = price;
        }

        if let Some(category_id) = patch.category_id {
            product.category = self.find_category(category_id).await?;
        }

        self.products.save(product).await
    }

    /// Deletes the product with the given id.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if no such product exists.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> Result<()> {
        if !self.products.exists_by_id(id).await? {
            return Err(Error::NotFound {
                message: format!("Product with ID {id} not found, cannot delete"),
            });
        }
        self.products.delete_by_id(id).await
    }

    async fn find_category(&self, id: i64) -> Result<Category> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| category_not_found(id))
    }
}
