//! Icon lookup by name.

use std::collections::HashMap;

/// Resolves glyph names to something drawable.
///
/// Unknown names resolve to `None` and are drawn as nothing.
pub trait IconRegistry {
    type Drawable;

    fn resolve(&self, glyph: &str) -> Option<Self::Drawable>;
}

impl<D: Clone> IconRegistry for HashMap<String, D> {
    type Drawable = D;

    fn resolve(&self, glyph: &str) -> Option<D> {
        self.get(glyph).cloned()
    }
}
