//! Ordered key/value metadata reported alongside an image.
//!
//! Items keep the order they were added in: `Width` and `Height` first,
//! then whatever the imaging library reports.

/// One metadata entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataItem {
    /// Entry name.
    pub key: String,
    /// Entry value rendered as text.
    pub value: String,
}

impl MetadataItem {
    /// Creates an item.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered list of metadata entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    items: Vec<MetadataItem>,
}

impl Metadata {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the list for an image: `Width`, `Height`, then `global` in order.
    pub fn for_image<I, K, V>(width: u32, height: u32, global: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut meta = Self::new();
        meta.push("Width", width.to_string());
        meta.push("Height", height.to_string());
        for (key, value) in global {
            meta.push(key, value);
        }
        meta
    }

    /// Appends an entry. Duplicate keys are kept.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.push(MetadataItem::new(key, value));
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.key == key)
            .map(|item| item.value.as_str())
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MetadataItem> {
        self.items.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
