use std::fmt;

use super::errors::DomainError;
use super::order::Order;

/// Which of the two backing collections an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Pending,
    Completed,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Pending => f.write_str("pending"),
            StoreKind::Completed => f.write_str("completed"),
        }
    }
}

/// Result of reading a store, keeping "absent" and "unreadable" apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<Order>),
    NotFound,
    Corrupt(String),
}

impl LoadOutcome {
    /// Collapses `NotFound` and `Corrupt` to an empty collection.
    pub fn into_orders(self) -> Vec<Order> {
        match self {
            LoadOutcome::Loaded(orders) => orders,
            LoadOutcome::NotFound | LoadOutcome::Corrupt(_) => Vec::new(),
        }
    }
}

pub trait OrderRepository {
    fn load(&self, store: StoreKind) -> LoadOutcome;
    fn save(&self, store: StoreKind, orders: &[Order]) -> Result<(), DomainError>;
    /// Human-readable location of a store, used in operator messages.
    fn location(&self, store: StoreKind) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_and_corrupt_collapse_to_empty() {
        assert!(LoadOutcome::NotFound.into_orders().is_empty());
        assert!(LoadOutcome::Corrupt("bad".to_string())
            .into_orders()
            .is_empty());
    }

    #[test]
    fn loaded_keeps_orders() {
        let order = Order {
            order_id: "O1".to_string(),
            customer: "c".to_string(),
            items: vec![],
        };
        assert_eq!(
            LoadOutcome::Loaded(vec![order.clone()]).into_orders(),
            vec![order]
        );
    }
}
