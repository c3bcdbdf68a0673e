//! Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use crate::models::Product;
use leptos::prelude::*;
use reactive_stores::Store;

/// Catalog state with field-level reactivity
///
/// Each gateway operation has its own in-flight flag so unrelated UI
/// elements never react to an unrelated call. `fetch_error` only ever holds
/// the most recent load failure; CRUD failures go through the notification
/// sink instead.
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Local mirror of the remote catalog
    pub products: Vec<Product>,
    /// Full-collection load in flight
    pub fetching: bool,
    /// Create call in flight
    pub creating: bool,
    /// Update call in flight
    pub updating: bool,
    /// Delete call in flight
    pub deleting: bool,
    /// Most recent load failure; the stale collection stays usable
    pub fetch_error: Option<String>,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a newly created product to the end of the collection
pub fn store_append_product(store: &CatalogStore, product: Product) {
    store.products().write().push(product);
}

/// Replace the product with a matching id; no-op if the id is absent
pub fn store_replace_product(store: &CatalogStore, updated: Product) {
    store
        .products()
        .write()
        .iter_mut()
        .find(|p| p.id == updated.id)
        .map(|p| *p = updated);
}

/// Remove the product with a matching id
pub fn store_remove_product(store: &CatalogStore, id: &str) {
    store.products().write().retain(|p| p.id != id);
}

/// True while any gateway call is outstanding; gates the create action
pub fn store_is_busy(store: &CatalogStore) -> bool {
    store.fetching().get()
        || store.creating().get()
        || store.updating().get()
        || store.deleting().get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: &str, title: &str) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            sku: format!("SKU-{id}"),
            price: 1.0,
            description: String::new(),
            image_url: None,
        }
    }

    #[test]
    fn test_append_replace_remove() {
        let store = Store::new(CatalogState::default());
        store_append_product(&store, make_product("1", "Mug"));
        store_append_product(&store, make_product("2", "Anvil"));
        assert_eq!(store.products().read_untracked().len(), 2);

        store_replace_product(&store, make_product("2", "Anvil Mk2"));
        assert_eq!(store.products().read_untracked()[1].title, "Anvil Mk2");

        // unknown id is a no-op
        store_replace_product(&store, make_product("9", "Ghost"));
        assert_eq!(store.products().read_untracked().len(), 2);

        store_remove_product(&store, "1");
        let products = store.products().read_untracked();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "2");
    }

    #[test]
    fn test_busy_covers_every_operation() {
        let store = Store::new(CatalogState::default());
        assert!(!store_is_busy(&store));
        store.deleting().set(true);
        assert!(store_is_busy(&store));
        store.deleting().set(false);
        assert!(!store_is_busy(&store));
    }
}
