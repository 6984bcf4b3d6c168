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

use std::path::Path;

use anyhow::{Context, Result};
use matbatch_core::asset::{MATERIAL_TYPE_NAME, UNTITLED_MATERIAL};
use serde::{Deserialize, Serialize};

/// Tunables of the batch editor panel.
///
/// Fields missing from a settings file keep their default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// The type tag the registry keeps when refreshing.
    pub material_type_name: String,
    /// The label used for materials with neither a display name nor a name.
    pub untitled_label: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            material_type_name: MATERIAL_TYPE_NAME.to_string(),
            untitled_label: UNTITLED_MATERIAL.to_string(),
        }
    }
}

impl EditorSettings {
    /// Parses settings from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self> {
        ron::de::from_str(text).context("Failed to parse editor settings")
    }

    /// Reads settings from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file '{}'", path.display()))?;
        Self::from_ron_str(&text)
    }
}
