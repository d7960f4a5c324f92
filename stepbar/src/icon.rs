//! Icon descriptors and the batches they are grouped into.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::IconError;

/// A single toolbar icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconDescriptor {
    /// Name looked up in the icon registry.
    #[serde(rename = "icon")]
    pub glyph: String,

    /// Emitted when the icon is clicked. Must be unique within a toolbar.
    pub action: String,
}

impl IconDescriptor {
    pub fn new(glyph: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            action: action.into(),
        }
    }
}

/// A contiguous slice of the icon list, revealed as one unit.
///
/// The key is every item's action joined together and identifies the batch
/// across renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconBatch {
    items: Vec<IconDescriptor>,
    key: String,
}

impl IconBatch {
    pub(crate) fn from_items(items: Vec<IconDescriptor>) -> Self {
        let key = items.iter().map(|icon| icon.action.as_str()).collect();
        Self { items, key }
    }

    pub fn items(&self) -> &[IconDescriptor] {
        &self.items
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Report the first action used by more than one icon.
pub fn check_unique_actions(icons: &[IconDescriptor]) -> Result<(), IconError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(icons.len());
    for (index, icon) in icons.iter().enumerate() {
        if let Some(&first) = seen.get(icon.action.as_str()) {
            return Err(IconError::DuplicateAction {
                action: icon.action.clone(),
                first,
                second: index,
            });
        }
        seen.insert(&icon.action, index);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_key_joins_actions() {
        let batch = IconBatch::from_items(vec![
            IconDescriptor::new("MdPlayArrow", "play"),
            IconDescriptor::new("MdPause", "pause"),
        ]);
        assert_eq!(batch.key(), "playpause");
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_empty_batch_has_empty_key() {
        let batch = IconBatch::from_items(Vec::new());
        assert!(batch.is_empty());
        assert_eq!(batch.key(), "");
        assert_eq!(batch, IconBatch::default());
    }
}
