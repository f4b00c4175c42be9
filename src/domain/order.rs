use serde::{Deserialize, Serialize};

/// Customer name stored when the operator leaves the field blank.
pub const DEFAULT_CUSTOMER: &str = "未命名顧客";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: u64,
    pub quantity: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u64, quantity: u64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> u128 {
        u128::from(self.price) * u128::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Order {
    /// Sum of the item subtotals.
    pub fn total(&self) -> u128 {
        self.items.iter().map(Item::subtotal).sum()
    }
}

/// Order as entered by the operator, before normalization.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_id: String,
    pub customer: String,
    pub items: Vec<Item>,
}

/// Trims and uppercases an operator-supplied order id.
///
/// Returns `None` when nothing is left after trimming.
pub fn normalize_order_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Trims a customer name, substituting [`DEFAULT_CUSTOMER`] when blank.
pub fn normalize_customer(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_CUSTOMER.to_string()
    } else {
        trimmed.to_string()
    }
}
