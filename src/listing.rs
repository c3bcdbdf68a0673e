//! Listing Derivation
//!
//! Pure filter + sort over the product collection. The displayed list is
//! always computed in one pass from explicit inputs so it can never mix a
//! fresh sort with a stale filter result.

use crate::models::Product;
use std::cmp::Ordering;

/// Sortable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Title,
    Sku,
    Price,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Sku => "sku",
            SortField::Price => "price",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "title" => Some(SortField::Title),
            "sku" => Some(SortField::Sku),
            "price" => Some(SortField::Price),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active sort column and direction. Defaults to (title, ascending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    /// Selecting the active field flips the direction; selecting a new
    /// field resets to ascending.
    pub fn select(self, field: SortField) -> Self {
        if field == self.field {
            Self {
                field,
                direction: self.direction.toggled(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Asc,
            }
        }
    }
}

/// Case-insensitive substring match against title or SKU
fn matches_search(product: &Product, term: &str) -> bool {
    let term = term.to_lowercase();
    product.title.to_lowercase().contains(&term) || product.sku.to_lowercase().contains(&term)
}

fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::Sku => a.sku.cmp(&b.sku),
        SortField::Price => a.price.total_cmp(&b.price),
    }
}

/// Derive the display list: filter by search term, then stable-sort.
/// Equal keys retain the collection's original order.
pub fn derive_listing(products: &[Product], search_term: &str, sort: SortState) -> Vec<Product> {
    let mut listing: Vec<Product> = products
        .iter()
        .filter(|p| matches_search(p, search_term))
        .cloned()
        .collect();
    listing.sort_by(|a, b| {
        let ordering = compare(a, b, sort.field);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    listing
}
