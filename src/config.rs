use std::env;
use std::path::PathBuf;

pub const DEFAULT_PENDING_PATH: &str = "orders.json";
pub const DEFAULT_COMPLETED_PATH: &str = "output_orders.json";

/// What to do when a backing document exists but cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptStorePolicy {
    /// Read the store as empty and warn.
    #[default]
    TreatAsEmpty,
    /// Fail the operation and leave the file untouched.
    Refuse,
}

impl CorruptStorePolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "empty" => Some(CorruptStorePolicy::TreatAsEmpty),
            "refuse" => Some(CorruptStorePolicy::Refuse),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub pending_path: PathBuf,
    pub completed_path: PathBuf,
    pub corrupt_policy: CorruptStorePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            pending_path: PathBuf::from(DEFAULT_PENDING_PATH),
            completed_path: PathBuf::from(DEFAULT_COMPLETED_PATH),
            corrupt_policy: CorruptStorePolicy::default(),
        }
    }
}

impl StoreConfig {
    pub fn new(pending_path: impl Into<PathBuf>, completed_path: impl Into<PathBuf>) -> Self {
        Self {
            pending_path: pending_path.into(),
            completed_path: completed_path.into(),
            corrupt_policy: CorruptStorePolicy::default(),
        }
    }

    pub fn with_corrupt_policy(mut self, policy: CorruptStorePolicy) -> Self {
        self.corrupt_policy = policy;
        self
    }

    /// Builds the configuration from `ORDERS_*` environment variables,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup("ORDERS_PENDING_PATH").filter(|p| !p.is_empty()) {
            config.pending_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("ORDERS_COMPLETED_PATH").filter(|p| !p.is_empty()) {
            config.completed_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup("ORDERS_CORRUPT_POLICY") {
            match CorruptStorePolicy::parse(&raw) {
                Some(policy) => config.corrupt_policy = policy,
                None => log::warn!(
                    "Unknown ORDERS_CORRUPT_POLICY {:?}, using {:?}",
                    raw,
                    config.corrupt_policy
                ),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_use_the_two_fixed_file_names() {
        let config = StoreConfig::default();
        assert_eq!(config.pending_path, PathBuf::from("orders.json"));
        assert_eq!(config.completed_path, PathBuf::from("output_orders.json"));
        assert_eq!(config.corrupt_policy, CorruptStorePolicy::TreatAsEmpty);
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(StoreConfig::from_lookup(|_| None), StoreConfig::default());
    }

    #[test]
    fn environment_overrides_paths_and_policy() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("ORDERS_PENDING_PATH", "/tmp/p.json"),
            ("ORDERS_COMPLETED_PATH", "/tmp/c.json"),
            ("ORDERS_CORRUPT_POLICY", "Refuse"),
        ]));
        assert_eq!(config.pending_path, PathBuf::from("/tmp/p.json"));
        assert_eq!(config.completed_path, PathBuf::from("/tmp/c.json"));
        assert_eq!(config.corrupt_policy, CorruptStorePolicy::Refuse);
    }

    #[test]
    fn unknown_policy_keeps_default() {
        let config =
            StoreConfig::from_lookup(lookup_from(&[("ORDERS_CORRUPT_POLICY", "explode")]));
        assert_eq!(config.corrupt_policy, CorruptStorePolicy::TreatAsEmpty);
    }

    #[test]
    fn blank_path_override_is_ignored() {
        let config = StoreConfig::from_lookup(lookup_from(&[("ORDERS_PENDING_PATH", "")]));
        assert_eq!(config.pending_path, PathBuf::from(DEFAULT_PENDING_PATH));
    }
}
