//! Shape validation for incoming product drafts
//!
//! Checks run in a fixed order (name, category, price, stock) and stop at
//! the first failure, so the reported message always identifies the first
//! invalid field.

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, ProductDraft};

pub const INVALID_NAME: &str = "The name should be a valid string";
pub const INVALID_CATEGORY: &str = "The category should be a valid string";
pub const INVALID_PRICE: &str = "The price should be a valid number";
pub const INVALID_STOCK: &str = "The stock should be a valid integer";

/// Validate a draft and produce the well-typed product fields.
///
/// Rules:
/// - `name` and `category` must be strings that are non-empty after
///   trimming; the stored value keeps the original, untrimmed text.
/// - `price` must be a JSON number (zero and negative values accepted).
/// - `stock` must be a JSON integer.
///
/// No side effects; the draft is left untouched.
pub fn validate_draft(draft: &ProductDraft) -> ProductResult<NewProduct> {
    let name = valid_string(&draft.name).ok_or_else(|| invalid(INVALID_NAME))?;
    let category = valid_string(&draft.category).ok_or_else(|| invalid(INVALID_CATEGORY))?;
    let price = draft.price.as_f64().ok_or_else(|| invalid(INVALID_PRICE))?;
    let stock = draft.stock.as_i64().ok_or_else(|| invalid(INVALID_STOCK))?;

    Ok(NewProduct {
        name: name.to_string(),
        category: category.to_string(),
        price,
        stock,
    })
}

fn valid_string(value: &serde_json::Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}

fn invalid(message: &str) -> ProductError {
    ProductError::Validation(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(body: serde_json::Value) -> ProductDraft {
        serde_json::from_value(body).unwrap()
    }

    fn message(result: ProductResult<NewProduct>) -> String {
        match result {
            Err(ProductError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_draft_produces_fields() {
        let fields = validate_draft(&draft(json!({
            "name": "Product 1",
            "category": "Category 1",
            "price": 10,
            "stock": 10
        })))
        .unwrap();

        assert_eq!(fields.name, "Product 1");
        assert_eq!(fields.category, "Category 1");
        assert_eq!(fields.price, 10.0);
        assert_eq!(fields.stock, 10);
    }

    #[test]
    fn test_missing_name() {
        let result = validate_draft(&draft(json!({
            "category": "Category 1",
            "price": 10,
            "stock": 10
        })));
        assert_eq!(message(result), INVALID_NAME);
    }

    #[test]
    fn test_name_must_be_a_string() {
        let result = validate_draft(&draft(json!({
            "name": 42,
            "category": "Category 1",
            "price": 10,
            "stock": 10
        })));
        assert_eq!(message(result), INVALID_NAME);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let result = validate_draft(&draft(json!({
            "name": "   ",
            "category": "Category 1",
            "price": 10,
            "stock": 10
        })));
        assert_eq!(message(result), INVALID_NAME);
    }

    #[test]
    fn test_missing_category() {
        let result = validate_draft(&draft(json!({
            "name": "Product 1",
            "price": 10,
            "stock": 10
        })));
        assert_eq!(message(result), INVALID_CATEGORY);
    }

    #[test]
    fn test_price_must_be_a_number() {
        let result = validate_draft(&draft(json!({
            "name": "Product 1",
            "category": "Category 1",
            "price": "10",
            "stock": 10
        })));
        assert_eq!(message(result), INVALID_PRICE);
    }

    #[test]
    fn test_missing_stock() {
        let result = validate_draft(&draft(json!({
            "name": "Product 1",
            "category": "Category 1",
            "price": 10
        })));
        assert_eq!(message(result), INVALID_STOCK);
    }

    #[test]
    fn test_stock_must_be_an_integer() {
        let result = validate_draft(&draft(json!({
            "name": "Product 1",
            "category": "Category 1",
            "price": 10,
            "stock": 1.5
        })));
        assert_eq!(message(result), INVALID_STOCK);
    }

    #[test]
    fn test_checks_run_in_order_name_first() {
        // Everything is wrong; the name message wins
        let result = validate_draft(&draft(json!({})));
        assert_eq!(message(result), INVALID_NAME);

        // Name ok, everything else wrong; the category message is next
        let result = validate_draft(&draft(json!({ "name": "Product 1" })));
        assert_eq!(message(result), INVALID_CATEGORY);

        // Name and category ok; price before stock
        let result = validate_draft(&draft(json!({
            "name": "Product 1",
            "category": "Category 1"
        })));
        assert_eq!(message(result), INVALID_PRICE);
    }

    #[test]
    fn test_zero_and_negative_values_are_accepted() {
        let fields = validate_draft(&draft(json!({
            "name": "Product 1",
            "category": "Category 1",
            "price": -5.5,
            "stock": 0
        })))
        .unwrap();
        assert_eq!(fields.price, -5.5);
        assert_eq!(fields.stock, 0);
    }

    #[test]
    fn test_untrimmed_name_is_preserved() {
        let fields = validate_draft(&draft(json!({
            "name": " Product 1 ",
            "category": "Category 1",
            "price": 10,
            "stock": 10
        })))
        .unwrap();
        assert_eq!(fields.name, " Product 1 ");
    }
}
