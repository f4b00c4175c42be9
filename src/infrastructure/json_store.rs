use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::StoreConfig;
use crate::domain::errors::DomainError;
use crate::domain::order::Order;
use crate::domain::ports::{LoadOutcome, OrderRepository, StoreKind};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<io::Error> for DomainError {
    fn from(e: io::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

/// Keeps each store as one JSON array document, rewritten whole on save.
pub struct JsonOrderRepository {
    pending_path: PathBuf,
    completed_path: PathBuf,
}

impl JsonOrderRepository {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            pending_path: config.pending_path.clone(),
            completed_path: config.completed_path.clone(),
        }
    }

    pub fn path(&self, store: StoreKind) -> &Path {
        match store {
            StoreKind::Pending => &self.pending_path,
            StoreKind::Completed => &self.completed_path,
        }
    }
}

/// Serializes with four-space indentation; non-ASCII text is written as-is.
fn to_pretty_json(orders: &[Order]) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    orders.serialize(&mut ser)?;
    Ok(buf)
}

impl OrderRepository for JsonOrderRepository {
    fn load(&self, store: StoreKind) -> LoadOutcome {
        let path = self.path(store);
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} store {} does not exist", store, path.display());
                return LoadOutcome::NotFound;
            }
            Err(e) => return LoadOutcome::Corrupt(e.to_string()),
        };

        match serde_json::from_slice::<Vec<Order>>(&bytes) {
            Ok(orders) => {
                log::debug!(
                    "Loaded {} order(s) from {} store {}",
                    orders.len(),
                    store,
                    path.display()
                );
                LoadOutcome::Loaded(orders)
            }
            Err(e) => LoadOutcome::Corrupt(e.to_string()),
        }
    }

    fn save(&self, store: StoreKind, orders: &[Order]) -> Result<(), DomainError> {
        let path = self.path(store);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = to_pretty_json(orders)?;
        fs::write(path, content)?;
        log::debug!(
            "Saved {} order(s) to {} store {}",
            orders.len(),
            store,
            path.display()
        );
        Ok(())
    }

    fn location(&self, store: StoreKind) -> String {
        self.path(store).display().to_string()
    }
}
