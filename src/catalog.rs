//! Displayed-list reconciliation helpers.
//!
//! A page owns its `Vec<Sweet>` wholesale; after a successful mutation the
//! matching entry is patched in place by id, never re-sorted.

use crate::models::Sweet;

/// Append a newly created sweet. Ignores the call if an entry with the same
/// id is already displayed, so create-then-refetch can never duplicate.
pub fn append_sweet(sweets: &mut Vec<Sweet>, created: Sweet) {
    if sweets.iter().any(|s| s.id == created.id) {
        return;
    }
    sweets.push(created);
}

/// Replace the entry matching `updated.id` with the server-returned sweet.
pub fn replace_sweet(sweets: &mut [Sweet], updated: Sweet) {
    if let Some(entry) = sweets.iter_mut().find(|s| s.id == updated.id) {
        *entry = updated;
    }
}

/// Remove the entry with the given id.
pub fn remove_sweet(sweets: &mut Vec<Sweet>, id: u32) {
    sweets.retain(|s| s.id != id);
}

/// Aggregates for the admin dashboard header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogStats {
    pub total_sweets: usize,
    pub total_stock: u32,
    pub out_of_stock: usize,
    pub avg_price: f64,
}

impl CatalogStats {
    pub fn compute(sweets: &[Sweet]) -> Self {
        let total_sweets = sweets.len();
        let total_stock = sweets.iter().map(|s| s.quantity).sum();
        let out_of_stock = sweets.iter().filter(|s| s.quantity == 0).count();
        let avg_price = if sweets.is_empty() {
            0.0
        } else {
            sweets.iter().map(|s| s.price).sum::<f64>() / sweets.len() as f64
        };
        Self {
            total_sweets,
            total_stock,
            out_of_stock,
            avg_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sweet(id: u32, quantity: u32) -> Sweet {
        Sweet {
            id,
            name: format!("Sweet {}", id),
            category: "Candy".to_string(),
            price: 2.0,
            quantity,
        }
    }

    #[test]
    fn test_append_sweet_refuses_duplicate_id() {
        let mut sweets = vec![make_sweet(1, 3)];
        append_sweet(&mut sweets, make_sweet(2, 0));
        append_sweet(&mut sweets, make_sweet(2, 5));
        assert_eq!(sweets.len(), 2);
        assert_eq!(sweets[1].quantity, 0);
    }

    #[test]
    fn test_replace_sweet_patches_matching_entry_only() {
        let mut sweets = vec![make_sweet(1, 3), make_sweet(2, 1)];
        let mut updated = make_sweet(1, 2);
        updated.price = 9.0;
        replace_sweet(&mut sweets, updated);
        assert_eq!(sweets[0].quantity, 2);
        assert_eq!(sweets[0].price, 9.0);
        assert_eq!(sweets[1].quantity, 1);
    }

    #[test]
    fn test_replace_sweet_keeps_order() {
        let mut sweets = vec![make_sweet(3, 1), make_sweet(1, 1), make_sweet(2, 1)];
        replace_sweet(&mut sweets, make_sweet(1, 7));
        let ids: Vec<u32> = sweets.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_replace_sweet_ignores_vanished_entry() {
        let mut sweets = vec![make_sweet(1, 3)];
        replace_sweet(&mut sweets, make_sweet(9, 5));
        assert_eq!(sweets.len(), 1);
        assert_eq!(sweets[0].id, 1);
    }

    #[test]
    fn test_remove_sweet() {
        let mut sweets = vec![make_sweet(1, 3), make_sweet(2, 1)];
        remove_sweet(&mut sweets, 1);
        assert_eq!(sweets.len(), 1);
        assert_eq!(sweets[0].id, 2);
    }

    #[test]
    fn test_stats_on_empty_catalog() {
        let stats = CatalogStats::compute(&[]);
        assert_eq!(stats, CatalogStats::default());
    }

    #[test]
    fn test_stats_totals() {
        let mut expensive = make_sweet(2, 0);
        expensive.price = 4.0;
        let sweets = vec![make_sweet(1, 3), expensive];
        let stats = CatalogStats::compute(&sweets);
        assert_eq!(stats.total_sweets, 2);
        assert_eq!(stats.total_stock, 3);
        assert_eq!(stats.out_of_stock, 1);
        assert_eq!(stats.avg_price, 3.0);
    }
}
