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

//! The authoritative list of candidate materials and their selection state.

mod entry;

pub use entry::*;

use matbatch_core::asset::{
    AssetHandle, MaterialAsset, ProjectAsset, MATERIAL_TYPE_NAME, UNTITLED_MATERIAL,
};
use matbatch_core::{AssetSource, SourceError};

/// Tracks which material assets are loaded and which of them are selected.
///
/// The entry list starts empty and is only ever replaced as a whole by
/// [`refresh`](Self::refresh). Selection flags are reset on every refresh.
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    entries: Vec<SelectionEntry>,
    material_type_name: String,
    untitled_label: String,
}

impl AssetRegistry {
    /// Creates an empty registry filtering on the `"Material"` type tag.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            material_type_name: MATERIAL_TYPE_NAME.to_string(),
            untitled_label: UNTITLED_MATERIAL.to_string(),
        }
    }

    /// Overrides the type tag used to recognise materials.
    pub fn with_material_type(mut self, type_name: impl Into<String>) -> Self {
        self.material_type_name = type_name.into();
        self
    }

    /// Overrides the label used for assets without any name.
    pub fn with_untitled_label(mut self, label: impl Into<String>) -> Self {
        self.untitled_label = label.into();
        self
    }

    /// Reloads the entry list from `source`.
    ///
    /// Every asset tagged as a material becomes one entry, selected by
    /// default, even when it carries no material data. Returns the number of
    /// entries loaded.
    ///
    /// # Errors
    /// Returns the source's error if it cannot be queried. The previous entry
    /// list is kept untouched in that case.
    pub fn refresh(&mut self, source: &dyn AssetSource) -> Result<usize, SourceError> {
        let assets = source.assets().inspect_err(|e| {
            log::warn!("AssetRegistry: Refresh failed, keeping previous entries: {e}");
        })?;

        let entries: Vec<SelectionEntry> = assets
            .into_iter()
            .filter(|asset| asset.is_type(&self.material_type_name))
            .map(|asset| self.make_entry(asset))
            .collect();

        self.entries = entries;
        log::info!("AssetRegistry: Found {} materials", self.entries.len());
        Ok(self.entries.len())
    }

    fn make_entry(&self, asset: ProjectAsset) -> SelectionEntry {
        let ProjectAsset {
            uuid,
            display_name,
            name,
            material,
            ..
        } = asset;

        let label = resolve_label(
            display_name.as_deref(),
            name.as_deref(),
            &self.untitled_label,
        );

        if material.is_none() {
            log::debug!("AssetRegistry: '{label}' ({uuid}) has no material data");
        }
        SelectionEntry::new(uuid, label, material)
    }

    /// Sets the selection flag of every entry.
    pub fn set_all_selected(&mut self, selected: bool) {
        for entry in &mut self.entries {
            entry.selected = selected;
        }
    }

    /// Sets the selection flag of the entry at `index`.
    ///
    /// Returns `false` if there is no such entry.
    pub fn set_selected(&mut self, index: usize, selected: bool) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Flips the selection flag of the entry at `index`.
    ///
    /// Returns the new flag, or `None` if there is no such entry.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let entry = self.entries.get_mut(index)?;
        entry.selected = !entry.selected;
        Some(entry.selected)
    }

    /// Returns the handles of all selected materials, in refresh order.
    ///
    /// Selected entries without material data have no handle and are not
    /// yielded; [`selected_entries`](Self::selected_entries) still lists them.
    pub fn selected_assets(&self) -> impl Iterator<Item = &AssetHandle<MaterialAsset>> + '_ {
        self.selected_entries().filter_map(SelectionEntry::handle)
    }

    /// Returns all selected entries, in refresh order.
    pub fn selected_entries(&self) -> impl Iterator<Item = &SelectionEntry> + '_ {
        self.entries.iter().filter(|e| e.selected)
    }

    /// Returns every entry, selected or not.
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// Returns the number of selected entries.
    pub fn selected_count(&self) -> usize {
        self.selected_entries().count()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no materials are loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
