//! Fixed registry of ticker keys and their menu labels

/// Reserved key for the free-text entry
pub const OTHERS_KEY: &str = "others";

/// Registry entries in menu order
const ENTRIES: &[(&str, &str)] = &[
    (OTHERS_KEY, "Others"),
    ("btc", "BTC"),
    ("eth", "ETH"),
    ("avax", "AVAX"),
    ("luna", "Luna"),
    ("xrp", "XRP"),
    ("doge", "Doge🐕"),
];

/// Immutable mapping between ticker keys and display labels
///
/// Contains the catch-all `others` entry followed by the known tickers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionRegistry;

impl SelectionRegistry {
    /// Creates the registry
    pub fn new() -> Self {
        Self
    }

    /// Display labels in menu order
    pub fn labels(&self) -> Vec<&'static str> {
        ENTRIES.iter().map(|(_, label)| *label).collect()
    }

    /// Ticker keys in menu order
    pub fn keys(&self) -> Vec<&'static str> {
        ENTRIES.iter().map(|(key, _)| *key).collect()
    }

    /// Resolves a display label back to its key
    pub fn key_for(&self, label: &str) -> Option<&'static str> {
        ENTRIES
            .iter()
            .find(|(_, entry_label)| *entry_label == label)
            .map(|(key, _)| *key)
    }

    /// Resolves a key to its display label
    pub fn label_for(&self, key: &str) -> Option<&'static str> {
        ENTRIES
            .iter()
            .find(|(entry_key, _)| *entry_key == key)
            .map(|(_, label)| *label)
    }

    /// True for the reserved free-text key
    pub fn is_catch_all(&self, key: &str) -> bool {
        key == OTHERS_KEY
    }
}
