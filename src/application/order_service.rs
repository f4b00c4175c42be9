use crate::config::CorruptStorePolicy;
use crate::domain::errors::DomainError;
use crate::domain::order::{normalize_customer, normalize_order_id, NewOrder, Order};
use crate::domain::ports::{LoadOutcome, OrderRepository, StoreKind};

pub struct OrderService<R> {
    repo: R,
    corrupt_policy: CorruptStorePolicy,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R, corrupt_policy: CorruptStorePolicy) -> Self {
        Self {
            repo,
            corrupt_policy,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Loads a store, applying the corrupt-store policy.
    fn load(&self, store: StoreKind) -> Result<Vec<Order>, DomainError> {
        match self.repo.load(store) {
            LoadOutcome::Loaded(orders) => Ok(orders),
            LoadOutcome::NotFound => Ok(Vec::new()),
            LoadOutcome::Corrupt(detail) => match self.corrupt_policy {
                CorruptStorePolicy::TreatAsEmpty => {
                    log::warn!(
                        "{} store {} is unreadable, treating it as empty: {}",
                        store,
                        self.repo.location(store),
                        detail
                    );
                    Ok(Vec::new())
                }
                CorruptStorePolicy::Refuse => Err(DomainError::CorruptStore {
                    path: self.repo.location(store),
                    detail,
                }),
            },
        }
    }

    pub fn pending_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.load(StoreKind::Pending)
    }

    /// Validates and appends a new order to the pending store.
    ///
    /// The id is uppercased and must not collide with a pending order. Ids
    /// already present in the completed store may be reused.
    pub fn add_order(&self, new_order: NewOrder) -> Result<Order, DomainError> {
        let order_id = normalize_order_id(&new_order.order_id).ok_or(DomainError::EmptyOrderId)?;
        if new_order.items.is_empty() {
            return Err(DomainError::NoItems);
        }

        let mut pending = self.load(StoreKind::Pending)?;
        if pending.iter().any(|o| o.order_id == order_id) {
            return Err(DomainError::DuplicateOrderId(order_id));
        }

        let order = Order {
            order_id,
            customer: normalize_customer(&new_order.customer),
            items: new_order.items,
        };
        pending.push(order.clone());
        self.repo.save(StoreKind::Pending, &pending)?;

        log::info!(
            "Added order {} with {} item(s)",
            order.order_id,
            order.items.len()
        );
        Ok(order)
    }

    /// Moves the pending order at 0-based `position` to the end of the
    /// completed store.
    ///
    /// Both stores are read before either is written. The two saves are
    /// independent: if the second fails the order is in neither store.
    pub fn fulfill_order(&self, position: usize) -> Result<Order, DomainError> {
        let mut pending = self.load(StoreKind::Pending)?;
        if position >= pending.len() {
            return Err(DomainError::IndexOutOfRange {
                index: position.saturating_add(1),
                len: pending.len(),
            });
        }
        let mut completed = self.load(StoreKind::Completed)?;

        let order = pending.remove(position);
        self.repo.save(StoreKind::Pending, &pending)?;

        completed.push(order.clone());
        self.repo.save(StoreKind::Completed, &completed)?;

        log::info!("Fulfilled order {}", order.order_id);
        Ok(order)
    }
}
