use std::collections::BTreeMap;

use cms_model::EditorKind;

/// Classification table from editor aliases to [`EditorKind`].
///
/// Built once per import run. Lookups are case-insensitive; aliases the
/// table does not know classify as [`EditorKind::PassThrough`].
#[derive(Debug, Clone)]
pub struct EditorRegistry {
    by_alias: BTreeMap<String, EditorKind>,
}

impl EditorRegistry {
    /// Registry seeded with the built-in editor aliases.
    pub fn builtin() -> Self {
        let mut registry = Self {
            by_alias: BTreeMap::new(),
        };
        for (alias, kind) in [
            ("cms.checkbox-list", EditorKind::MultiSelect),
            ("cms.dropdown", EditorKind::MultiSelect),
            ("cms.color-picker", EditorKind::Color),
            ("cms.content-picker", EditorKind::ReferencePicker),
            ("cms.media-picker", EditorKind::ReferencePicker),
            ("cms.member-picker", EditorKind::ReferencePicker),
            ("cms.tree-picker", EditorKind::ReferencePicker),
            ("cms.toggle", EditorKind::Boolean),
            ("cms.map-point", EditorKind::GeoPoint),
            ("cms.separator", EditorKind::Separator),
            ("cms.label", EditorKind::Separator),
        ] {
            registry.register(alias, kind);
        }
        registry
    }

    /// An empty registry; every alias classifies as pass-through.
    pub fn empty() -> Self {
        Self {
            by_alias: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, alias: &str, kind: EditorKind) {
        self.by_alias.insert(alias.to_ascii_lowercase(), kind);
    }

    pub fn with_alias(mut self, alias: &str, kind: EditorKind) -> Self {
        self.register(alias, kind);
        self
    }

    pub fn classify(&self, alias: &str) -> EditorKind {
        self.by_alias
            .get(&alias.trim().to_ascii_lowercase())
            .copied()
            .unwrap_or(EditorKind::PassThrough)
    }
}

impl Default for EditorRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_builtin_aliases_case_insensitively() {
        let registry = EditorRegistry::builtin();
        assert_eq!(registry.classify("CMS.Color-Picker"), EditorKind::Color);
        assert_eq!(registry.classify("cms.toggle"), EditorKind::Boolean);
        assert_eq!(registry.classify("cms.map-point"), EditorKind::GeoPoint);
    }

    #[test]
    fn unknown_aliases_pass_through() {
        let registry = EditorRegistry::builtin();
        assert_eq!(
            registry.classify("vendor.rich-text"),
            EditorKind::PassThrough
        );
    }

    #[test]
    fn custom_aliases_extend_the_table() {
        let registry =
            EditorRegistry::builtin().with_alias("vendor.switch", EditorKind::Boolean);
        assert_eq!(registry.classify("vendor.switch"), EditorKind::Boolean);
    }
}
