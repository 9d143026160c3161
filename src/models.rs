//! Wire models and form-field parsing.
//!
//! Data structures matching the inventory service, plus the pure validation
//! used to gate form submission.

use serde::{Deserialize, Serialize};

/// Catalog entry as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweet {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

/// Payload for creating a sweet. Only constructible through [`SweetDraft::parse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweetDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl SweetDraft {
    /// Validate raw form fields into a draft.
    ///
    /// Name and category must be non-empty after trimming, price must parse
    /// to a strictly positive number, quantity to a non-negative integer.
    pub fn parse(name: &str, category: &str, price: &str, quantity: &str) -> Result<Self, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        let category = category.trim();
        if category.is_empty() {
            return Err("Category is required".to_string());
        }
        let price: f64 = price
            .trim()
            .parse()
            .map_err(|_| "Price must be a number".to_string())?;
        // NaN fails every comparison, so test the positive case directly.
        if !(price > 0.0) {
            return Err("Price must be greater than zero".to_string());
        }
        let quantity: u32 = quantity
            .trim()
            .parse()
            .map_err(|_| "Quantity must be a non-negative integer".to_string())?;
        Ok(Self {
            name: name.to_string(),
            category: category.to_string(),
            price,
            quantity,
        })
    }
}

/// Partial update sent to `PATCH /sweets/{id}`. Absent fields are omitted
/// from the JSON body entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SweetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl SweetPatch {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.price.is_none() && self.quantity.is_none()
    }
}

/// Edit form fields as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct EditFields {
    pub category: String,
    pub price: String,
    pub quantity: String,
}

impl EditFields {
    /// Pre-fill from the item being edited.
    pub fn from_sweet(sweet: &Sweet) -> Self {
        Self {
            category: sweet.category.clone(),
            price: sweet.price.to_string(),
            quantity: sweet.quantity.to_string(),
        }
    }

    /// Compute the minimal patch against the item's current values.
    ///
    /// Every field must still be valid, and at least one must differ from
    /// `current` — a no-op edit never reaches the network.
    pub fn diff(&self, current: &Sweet) -> Result<SweetPatch, String> {
        let category = self.category.trim();
        if category.is_empty() {
            return Err("Category is required".to_string());
        }
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "Price must be a number".to_string())?;
        if !(price > 0.0) {
            return Err("Price must be greater than zero".to_string());
        }
        let quantity: u32 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| "Quantity must be a non-negative integer".to_string())?;

        let mut patch = SweetPatch::default();
        if category != current.category {
            patch.category = Some(category.to_string());
        }
        if price != current.price {
            patch.price = Some(price);
        }
        if quantity != current.quantity {
            patch.quantity = Some(quantity);
        }
        if patch.is_empty() {
            return Err("No changes to save".to_string());
        }
        Ok(patch)
    }
}

/// Search criteria for `GET /sweets/search`. Raw input strings; blank fields
/// are left out of the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweetFilter {
    pub name: String,
    pub category: String,
    pub min_price: String,
    pub max_price: String,
}

impl SweetFilter {
    /// Query parameters in service order, skipping blank fields.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for (key, value) in [
            ("name", &self.name),
            ("category", &self.category),
            ("min_price", &self.min_price),
            ("max_price", &self.max_price),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                pairs.push((key, value.to_string()));
            }
        }
        pairs
    }
}

/// Restock amounts must be strictly positive integers.
pub fn parse_restock_amount(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|amount| *amount > 0)
}

/// Purchase quantity: positive integer, never more than the displayed stock.
pub fn parse_purchase_qty(input: &str, available: u32) -> Result<u32, String> {
    let qty: u32 = input
        .trim()
        .parse()
        .map_err(|_| "Enter a whole number of items".to_string())?;
    if qty == 0 {
        return Err("Quantity must be at least 1".to_string());
    }
    if qty > available {
        return Err(format!(
            "Only {available} items are available. Please enter a valid quantity."
        ));
    }
    Ok(qty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweet() -> Sweet {
        Sweet {
            id: 1,
            name: "Ladoo".to_string(),
            category: "Indian".to_string(),
            price: 2.5,
            quantity: 3,
        }
    }

    #[test]
    fn test_draft_parse_valid() {
        let draft = SweetDraft::parse(" Ladoo ", "Indian", "2.50", "0").unwrap();
        assert_eq!(draft.name, "Ladoo");
        assert_eq!(draft.price, 2.5);
        assert_eq!(draft.quantity, 0);
    }

    #[test]
    fn test_draft_parse_rejects_blank_name_and_category() {
        assert!(SweetDraft::parse("   ", "Indian", "1", "1").is_err());
        assert!(SweetDraft::parse("Ladoo", "", "1", "1").is_err());
    }

    #[test]
    fn test_draft_parse_rejects_non_positive_price() {
        assert!(SweetDraft::parse("Ladoo", "Indian", "0", "1").is_err());
        assert!(SweetDraft::parse("Ladoo", "Indian", "-2", "1").is_err());
        assert!(SweetDraft::parse("Ladoo", "Indian", "cheap", "1").is_err());
    }

    #[test]
    fn test_draft_parse_rejects_nan_price() {
        // "NaN" parses as f64 but compares false against everything.
        assert!(SweetDraft::parse("Ladoo", "Indian", "NaN", "1").is_err());
    }

    #[test]
    fn test_draft_parse_rejects_negative_or_fractional_quantity() {
        assert!(SweetDraft::parse("Ladoo", "Indian", "1", "-1").is_err());
        assert!(SweetDraft::parse("Ladoo", "Indian", "1", "1.5").is_err());
    }

    #[test]
    fn test_diff_produces_minimal_patch() {
        let fields = EditFields {
            category: "Indian".to_string(),
            price: "3.0".to_string(),
            quantity: "3".to_string(),
        };
        let patch = fields.diff(&sweet()).unwrap();
        assert_eq!(patch.category, None);
        assert_eq!(patch.price, Some(3.0));
        assert_eq!(patch.quantity, None);
    }

    #[test]
    fn test_diff_blocks_no_op_edit() {
        let fields = EditFields::from_sweet(&sweet());
        assert_eq!(fields.diff(&sweet()), Err("No changes to save".to_string()));
    }

    #[test]
    fn test_diff_rejects_invalid_fields_even_when_changed() {
        let fields = EditFields {
            category: "".to_string(),
            price: "3.0".to_string(),
            quantity: "3".to_string(),
        };
        assert!(fields.diff(&sweet()).is_err());
    }

    #[test]
    fn test_diff_rejects_nan_price() {
        let fields = EditFields {
            category: "Indian".to_string(),
            price: "nan".to_string(),
            quantity: "3".to_string(),
        };
        assert_eq!(
            fields.diff(&sweet()),
            Err("Price must be greater than zero".to_string())
        );
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = SweetPatch {
            price: Some(3.0),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"price":3.0}"#);
    }

    #[test]
    fn test_filter_query_pairs_skip_blank_fields() {
        let filter = SweetFilter {
            name: "ladoo".to_string(),
            category: "  ".to_string(),
            min_price: "".to_string(),
            max_price: "5".to_string(),
        };
        assert_eq!(
            filter.query_pairs(),
            vec![("name", "ladoo".to_string()), ("max_price", "5".to_string())]
        );
    }

    #[test]
    fn test_empty_filter_has_no_pairs() {
        assert!(SweetFilter::default().query_pairs().is_empty());
    }

    #[test]
    fn test_parse_restock_amount_requires_positive() {
        assert_eq!(parse_restock_amount("5"), Some(5));
        assert_eq!(parse_restock_amount("0"), None);
        assert_eq!(parse_restock_amount("-3"), None);
        assert_eq!(parse_restock_amount("lots"), None);
    }

    #[test]
    fn test_parse_purchase_qty_clamps_to_stock() {
        assert_eq!(parse_purchase_qty("2", 3), Ok(2));
        assert!(parse_purchase_qty("4", 3).unwrap_err().contains("Only 3"));
        assert!(parse_purchase_qty("0", 3).is_err());
    }
}
