use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::models::Product;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog {} is not a list of products: {source}", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A product that decodes but breaks a value constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductViolation {
    #[error("duplicate id {0}")]
    DuplicateId(i64),
    #[error("product {0} has an empty name")]
    EmptyName(i64),
    #[error("product {0} has an empty author")]
    EmptyAuthor(i64),
    #[error("product {0} has a negative quantity")]
    NegativeQuantity(i64),
    #[error("product {0} has a negative price")]
    NegativePrice(i64),
}

// ── Load ──────────────────────────────────────────────────────────────────────

/// Read the backing file and return it exactly as decoded.
///
/// The document must be an array of objects carrying the six product fields
/// with the right JSON types; anything else is an error. Value constraint
/// violations are logged and the file is still served. Runs on every catalog
/// request; nothing is cached between calls.
pub async fn load_catalog(path: &Path) -> Result<Value, CatalogError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog: Value = serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let products = Vec::<Product>::deserialize(&catalog).map_err(|source| CatalogError::Schema {
        path: path.to_path_buf(),
        source,
    })?;

    for violation in validate_products(&products) {
        warn!(catalog = %path.display(), %violation, "Catalog entry violates product constraints");
    }

    Ok(catalog)
}

// ── Validate ──────────────────────────────────────────────────────────────────

/// Collect every constraint the decoder cannot express: unique ids, non-empty
/// name and author, non-negative quantity and price.
pub fn validate_products(products: &[Product]) -> Vec<ProductViolation> {
    let mut seen = HashSet::with_capacity(products.len());
    let mut violations = Vec::new();

    for product in products {
        if !seen.insert(product.id) {
            violations.push(ProductViolation::DuplicateId(product.id));
        }
        if product.name.trim().is_empty() {
            violations.push(ProductViolation::EmptyName(product.id));
        }
        if product.author.trim().is_empty() {
            violations.push(ProductViolation::EmptyAuthor(product.id));
        }
        if product.quantity < 0 {
            violations.push(ProductViolation::NegativeQuantity(product.id));
        }
        if product.price_value() < 0.0 {
            violations.push(ProductViolation::NegativePrice(product.id));
        }
    }

    violations
}
