//! Order Registry: all orders of one session, keyed by order id.

use std::collections::HashMap;

use crate::types::Order;

/// Orders are never removed within a session.
#[derive(Clone, Debug, Default)]
pub struct OrderRegistry {
    inner: HashMap<String, Order>,
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, order: Order) {
        self.inner.insert(order.id.clone(), order);
    }

    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.inner.get(order_id)
    }

    pub fn get_mut(&mut self, order_id: &str) -> Option<&mut Order> {
        self.inner.get_mut(order_id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Size;

    #[test]
    fn insert_keys_by_order_id() {
        let mut reg = OrderRegistry::new();
        reg.insert(Order::new("o-1", "AAAA1111", "Samsung TV", Size::L));
        reg.insert(Order::new("o-2", "BBBB2222", "QA Job Offer", Size::S));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get("o-2").map(|o| o.item_size), Some(Size::S));
        assert!(reg.get("o-3").is_none());
    }
}
