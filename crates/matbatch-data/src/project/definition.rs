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

use matbatch_core::asset::{AssetUUID, MaterialAsset};
use serde::{Deserialize, Serialize};

/// The serializable description of a whole project.
///
/// This is the stable, human-readable format used to snapshot the host
/// project's asset list to disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDefinition {
    /// All assets, in project order.
    #[serde(default)]
    pub assets: Vec<AssetDefinition>,
}

/// The serializable description of a single asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDefinition {
    /// Project-relative path. The asset's UUID is derived from it unless
    /// `uuid` is set.
    pub path: String,
    /// Explicit identity, for assets whose UUID does not come from `path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<AssetUUID>,
    /// Type discriminator, e.g. `"Material"`.
    pub type_name: String,
    /// Author-facing name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Raw asset name.
    #[serde(default)]
    pub name: Option<String>,
    /// Material data, for material assets.
    #[serde(default)]
    pub material: Option<MaterialAsset>,
}
