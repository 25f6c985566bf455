//! Input validation for product and category payloads.
//!
//! Validation happens before any store call; a payload that fails here never
//! causes a write.

use serde::Deserialize;

use stockroom_core::{ServiceError, ServiceResult};

use crate::product::QuantityPatch;

/// Raw product payload as received from a caller. Every field is optional so
/// that presence checks are owned here rather than by the transport layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<i64>,
    pub quantity: Option<i64>,
}

/// Normalized create-product fields. `category` is still a name at this
/// point; the service resolves it to an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProductCreate {
    pub name: String,
    pub category: String,
    pub price: i64,
    pub quantity: i64,
}

/// Validate a create-product payload.
///
/// Requires all four fields, a price of at least 1 and a non-negative
/// quantity. The quantity minimum used to differ between layers (the old
/// store demanded 1); the handler-level minimum of 0 is authoritative now.
pub fn validate_product_create(draft: ProductDraft) -> ServiceResult<ValidProductCreate> {
    let (Some(name), Some(category), Some(price), Some(quantity)) = (
        draft.name.filter(|n| !n.is_empty()),
        draft.category,
        draft.price,
        draft.quantity,
    ) else {
        return Err(ServiceError::validation("All fields are required"));
    };

    if price < 1 {
        return Err(ServiceError::validation("Price must be a positive number"));
    }
    if quantity < 0 {
        return Err(ServiceError::validation(
            "Quantity must be a non-negative integer",
        ));
    }
    if category.trim().is_empty() {
        return Err(ServiceError::validation("Invalid category format"));
    }

    Ok(ValidProductCreate {
        name,
        category,
        price,
        quantity,
    })
}

/// Validate an update-product payload under the quantity-only policy.
///
/// Any attempt to set a name, a category or a positive price is rejected. A
/// present-but-non-positive price slips through the check and is then
/// dropped from the patch; this quirk is kept for compatibility with the
/// previous service.
pub fn validate_product_update(draft: ProductDraft) -> ServiceResult<QuantityPatch> {
    let positive_price = draft.price.is_some_and(|p| p > 0);
    if draft.name.is_some() || draft.category.is_some() || positive_price {
        return Err(ServiceError::validation("You can only update quantity"));
    }

    match draft.quantity {
        // Zero is rejected alongside negatives: a zero "update" carried no
        // observable intent in the previous service and callers rely on the
        // rejection.
        Some(quantity) if quantity >= 1 => Ok(QuantityPatch { quantity }),
        // Legacy string, misspelling included; callers match it verbatim.
        _ => Err(ServiceError::validation("You must only update quanity")),
    }
}

/// Validate a create-category payload: the name must be present and
/// non-empty.
pub fn validate_category_name(name: Option<String>) -> ServiceResult<String> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ServiceError::validation("Category name is required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> ProductDraft {
        ProductDraft {
            name: Some("Laptop".to_string()),
            category: Some("electronics".to_string()),
            price: Some(1000),
            quantity: Some(10),
        }
    }

    #[test]
    fn create_accepts_a_complete_payload() {
        let valid = validate_product_create(full_draft()).unwrap();
        assert_eq!(valid.name, "Laptop");
        assert_eq!(valid.category, "electronics");
        assert_eq!(valid.price, 1000);
        assert_eq!(valid.quantity, 10);
    }

    #[test]
    fn create_rejects_missing_fields() {
        for draft in [
            ProductDraft {
                name: None,
                ..full_draft()
            },
            ProductDraft {
                name: Some(String::new()),
                ..full_draft()
            },
            ProductDraft {
                category: None,
                ..full_draft()
            },
            ProductDraft {
                price: None,
                ..full_draft()
            },
            ProductDraft {
                quantity: None,
                ..full_draft()
            },
        ] {
            let err = validate_product_create(draft).unwrap_err();
            assert_eq!(err, ServiceError::validation("All fields are required"));
        }
    }

    #[test]
    fn create_rejects_non_positive_price() {
        for price in [0, -5] {
            let err = validate_product_create(ProductDraft {
                price: Some(price),
                ..full_draft()
            })
            .unwrap_err();
            assert_eq!(
                err,
                ServiceError::validation("Price must be a positive number")
            );
        }
    }

    #[test]
    fn create_accepts_zero_quantity_but_rejects_negative() {
        let valid = validate_product_create(ProductDraft {
            quantity: Some(0),
            ..full_draft()
        })
        .unwrap();
        assert_eq!(valid.quantity, 0);

        let err = validate_product_create(ProductDraft {
            quantity: Some(-1),
            ..full_draft()
        })
        .unwrap_err();
        assert_eq!(
            err,
            ServiceError::validation("Quantity must be a non-negative integer")
        );
    }

    #[test]
    fn create_rejects_blank_category() {
        let err = validate_product_create(ProductDraft {
            category: Some("   ".to_string()),
            ..full_draft()
        })
        .unwrap_err();
        assert_eq!(err, ServiceError::validation("Invalid category format"));
    }

    #[test]
    fn update_accepts_a_quantity_only_payload() {
        let patch = validate_product_update(ProductDraft {
            quantity: Some(15),
            ..ProductDraft::default()
        })
        .unwrap();
        assert_eq!(patch.quantity, 15);
    }

    #[test]
    fn update_rejects_name_category_and_positive_price() {
        for draft in [
            ProductDraft {
                name: Some("X".to_string()),
                quantity: Some(5),
                ..ProductDraft::default()
            },
            ProductDraft {
                category: Some("toys".to_string()),
                quantity: Some(5),
                ..ProductDraft::default()
            },
            ProductDraft {
                price: Some(100),
                quantity: Some(5),
                ..ProductDraft::default()
            },
        ] {
            let err = validate_product_update(draft).unwrap_err();
            assert_eq!(err, ServiceError::validation("You can only update quantity"));
        }
    }

    #[test]
    fn update_lets_a_non_positive_price_through_and_drops_it() {
        // Compatibility quirk: price <= 0 passes the disallowed-field check,
        // and the resulting patch still only carries the quantity.
        let patch = validate_product_update(ProductDraft {
            price: Some(0),
            quantity: Some(7),
            ..ProductDraft::default()
        })
        .unwrap();
        assert_eq!(patch, QuantityPatch { quantity: 7 });
    }

    #[test]
    fn update_rejects_missing_zero_or_negative_quantity() {
        for quantity in [None, Some(0), Some(-3)] {
            let err = validate_product_update(ProductDraft {
                quantity,
                ..ProductDraft::default()
            })
            .unwrap_err();
            // The exact legacy string, typo and all.
            assert_eq!(err, ServiceError::validation("You must only update quanity"));
        }
    }

    #[test]
    fn category_name_must_be_present_and_non_empty() {
        assert_eq!(
            validate_category_name(Some("electronics".to_string())).unwrap(),
            "electronics"
        );
        for name in [None, Some(String::new())] {
            let err = validate_category_name(name).unwrap_err();
            assert_eq!(err, ServiceError::validation("Category name is required"));
        }
    }
}
