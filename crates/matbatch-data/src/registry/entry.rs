// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use matbatch_core::asset::{AssetHandle, AssetUUID, MaterialAsset};

/// One material in the registry, paired with its selection flag.
#[derive(Debug, Clone)]
pub struct SelectionEntry {
    uuid: AssetUUID,
    label: String,
    handle: Option<AssetHandle<MaterialAsset>>,
    pub(crate) selected: bool,
}

impl SelectionEntry {
    pub(crate) fn new(
        uuid: AssetUUID,
        label: String,
        handle: Option<AssetHandle<MaterialAsset>>,
    ) -> Self {
        Self {
            uuid,
            label,
            handle,
            selected: true,
        }
    }

    /// The asset's identity.
    pub fn uuid(&self) -> AssetUUID {
        self.uuid
    }

    /// The name shown next to the checkbox.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The shared material data, if the asset carries any.
    pub fn handle(&self) -> Option<&AssetHandle<MaterialAsset>> {
        self.handle.as_ref()
    }

    /// Whether the asset takes part in the next batch.
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

impl PartialEq for SelectionEntry {
    /// Entries are equal when they point at the same asset with the same
    /// label and selection state.
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
            && self.label == other.label
            && self.selected == other.selected
            && match (&self.handle, &other.handle) {
                (Some(a), Some(b)) => a.ptr_eq(b),
                (None, None) => true,
                _ => false,
            }
    }
}

/// Resolves the label of an asset: display name, then raw name, then
/// `fallback`. Empty names count as missing.
pub fn resolve_label(display_name: Option<&str>, name: Option<&str>, fallback: &str) -> String {
    display_name
        .filter(|s| !s.is_empty())
        .or_else(|| name.filter(|s| !s.is_empty()))
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use matbatch_core::asset::UNTITLED_MATERIAL;

    #[test]
    fn test_label_prefers_display_name() {
        assert_eq!(
            resolve_label(Some("Mossy Rock"), Some("Rock_01"), UNTITLED_MATERIAL),
            "Mossy Rock"
        );
    }

    #[test]
    fn test_label_falls_back_to_name() {
        assert_eq!(
            resolve_label(None, Some("Rock_01"), UNTITLED_MATERIAL),
            "Rock_01"
        );
    }

    #[test]
    fn test_label_falls_back_to_placeholder() {
        assert_eq!(resolve_label(None, None, UNTITLED_MATERIAL), "Untitled Material");
    }

    #[test]
    fn test_empty_names_count_as_missing() {
        assert_eq!(resolve_label(Some(""), Some("Rock_01"), UNTITLED_MATERIAL), "Rock_01");
        assert_eq!(resolve_label(Some(""), Some(""), UNTITLED_MATERIAL), UNTITLED_MATERIAL);
    }

    #[test]
    fn test_new_entry_is_selected() {
        let entry = SelectionEntry::new(
            AssetUUID::new(),
            "Rock".to_string(),
            Some(AssetHandle::new(MaterialAsset::default())),
        );
        assert!(entry.is_selected());
        assert_eq!(entry.label(), "Rock");
        assert!(entry.handle().is_some());
    }

    #[test]
    fn test_entries_without_data_compare_by_identity() {
        let uuid = AssetUUID::new();
        let a = SelectionEntry::new(uuid, "Rock".to_string(), None);
        let b = SelectionEntry::new(uuid, "Rock".to_string(), None);
        let c = SelectionEntry::new(
            uuid,
            "Rock".to_string(),
            Some(AssetHandle::new(MaterialAsset::default())),
        );
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
