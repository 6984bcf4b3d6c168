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

//! An already-loaded, in-process project model acting as the asset source.

mod definition;

pub use definition::*;

use std::path::Path;

use anyhow::{Context, Result};
use matbatch_core::asset::{AssetHandle, AssetUUID, ProjectAsset};
use matbatch_core::{AssetSource, SourceError};

/// A project whose assets all live in memory.
///
/// Every query hands out clones of the same handles, so mutations applied
/// through the registry are visible on the next query and in
/// [`to_definition`](Self::to_definition).
///
/// Each asset keeps the project path it was loaded from, so a saved project
/// reloads with the same paths and identities.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProject {
    assets: Vec<(String, ProjectAsset)>,
}

impl InMemoryProject {
    /// Creates a project from an existing asset list.
    ///
    /// Assets built in memory have no project path; each is stored under its
    /// UUID instead.
    pub fn new(assets: Vec<ProjectAsset>) -> Self {
        let mut project = Self::default();
        for asset in assets {
            project.push(asset);
        }
        project
    }

    /// Builds the live project from its serializable description.
    pub fn from_definition(definition: ProjectDefinition) -> Self {
        let assets = definition
            .assets
            .into_iter()
            .map(|def| {
                let uuid = def.uuid.unwrap_or_else(|| AssetUUID::new_v5(&def.path));
                let asset = ProjectAsset {
                    uuid,
                    type_name: def.type_name,
                    display_name: def.display_name,
                    name: def.name,
                    material: def.material.map(AssetHandle::new),
                };
                (def.path, asset)
            })
            .collect();
        Self { assets }
    }

    /// Parses a RON project description.
    pub fn from_ron_str(text: &str) -> Result<Self> {
        let definition: ProjectDefinition =
            ron::de::from_str(text).context("Failed to parse project definition")?;
        Ok(Self::from_definition(definition))
    }

    /// Reads and parses a RON project file.
    pub fn from_ron_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read project file '{}'", path.display()))?;
        Self::from_ron_str(&text)
            .with_context(|| format!("Invalid project file '{}'", path.display()))
    }

    /// Adds an asset at the end of the project, stored under its UUID.
    pub fn push(&mut self, asset: ProjectAsset) {
        self.push_at(asset.uuid.to_string(), asset);
    }

    /// Adds an asset at the end of the project, stored under `path`.
    pub fn push_at(&mut self, path: impl Into<String>, asset: ProjectAsset) {
        self.assets.push((path.into(), asset));
    }

    /// Returns the project path of every asset, in project order.
    pub fn paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.assets.iter().map(|(path, _)| path.as_str())
    }

    /// Returns the number of assets of any type.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns `true` if the project holds no assets.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Snapshots the current state of every asset.
    ///
    /// A UUID is only written when it cannot be derived from the path.
    pub fn to_definition(&self) -> Result<ProjectDefinition> {
        let assets = self
            .assets
            .iter()
            .map(|(path, asset)| {
                let material = match &asset.material {
                    Some(handle) => Some(
                        handle
                            .read()
                            .with_context(|| format!("Cannot read material {}", asset.uuid))?
                            .clone(),
                    ),
                    None => None,
                };
                let uuid = (asset.uuid != AssetUUID::new_v5(path)).then_some(asset.uuid);
                Ok(AssetDefinition {
                    path: path.clone(),
                    uuid,
                    type_name: asset.type_name.clone(),
                    display_name: asset.display_name.clone(),
                    name: asset.name.clone(),
                    material,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ProjectDefinition { assets })
    }

    /// Serializes the current state as pretty-printed RON.
    pub fn to_ron_string(&self) -> Result<String> {
        let definition = self.to_definition()?;
        let pretty_config = ron::ser::PrettyConfig::default().indentor("  ".to_string());
        ron::ser::to_string_pretty(&definition, pretty_config)
            .context("Failed to serialize project definition")
    }
}

impl AssetSource for InMemoryProject {
    fn assets(&self) -> Result<Vec<ProjectAsset>, SourceError> {
        Ok(self.assets.iter().map(|(_, asset)| asset.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matbatch_core::asset::{BlendMode, MaterialAsset, RenderPass, MATERIAL_TYPE_NAME};

    const PROJECT: &str = r#"(
        assets: [
            (
                path: "materials/rock.mat",
                type_name: "Material",
                display_name: Some("Rock"),
                material: Some((main_pass: Some((depth_write: false, blend_mode: Add)))),
            ),
            (
                path: "textures/rock.png",
                type_name: "Texture",
                name: Some("rock_albedo"),
            ),
            (
                path: "materials/variant.mat",
                type_name: "Material",
                material: Some((main_pass: None)),
            ),
        ],
    )"#;

    #[test]
    fn test_from_ron_str() {
        let project = InMemoryProject::from_ron_str(PROJECT).unwrap();
        let assets = project.assets().unwrap();

        assert_eq!(assets.len(), 3);
        assert_eq!(assets[0].uuid, AssetUUID::new_v5("materials/rock.mat"));
        assert!(assets[0].is_type(MATERIAL_TYPE_NAME));
        assert_eq!(assets[0].display_name.as_deref(), Some("Rock"));

        let pass = assets[0]
            .material
            .as_ref()
            .unwrap()
            .read()
            .unwrap()
            .main_pass
            .unwrap();
        assert!(!pass.depth_write);
        assert_eq!(pass.blend_mode, BlendMode::Add);
        // Unspecified fields keep their defaults.
        assert!(!pass.two_sided);

        assert!(assets[1].material.is_none());
        assert!(assets[2]
            .material
            .as_ref()
            .unwrap()
            .read()
            .unwrap()
            .main_pass
            .is_none());
    }

    #[test]
    fn test_invalid_ron_is_an_error() {
        assert!(InMemoryProject::from_ron_str("(assets: [ (path: 3) ])").is_err());
    }

    #[test]
    fn test_queries_share_handles() {
        let mut project = InMemoryProject::default();
        project.push(ProjectAsset::material(
            AssetUUID::new(),
            MaterialAsset::with_pass(RenderPass::default()),
        ));

        let first = project.assets().unwrap();
        let second = project.assets().unwrap();
        let (Some(a), Some(b)) = (&first[0].material, &second[0].material) else {
            panic!("Expected material handles");
        };
        assert!(a.ptr_eq(b));
    }

    #[test]
    fn test_to_definition_reflects_mutations() {
        let project = InMemoryProject::from_ron_str(PROJECT).unwrap();
        let assets = project.assets().unwrap();
        if let Some(pass) = assets[0]
            .material
            .as_ref()
            .unwrap()
            .write()
            .unwrap()
            .main_pass
            .as_mut()
        {
            pass.two_sided = true;
        }

        let definition = project.to_definition().unwrap();
        let pass = definition.assets[0]
            .material
            .as_ref()
            .unwrap()
            .main_pass
            .unwrap();
        assert!(pass.two_sided);
    }

    #[test]
    fn test_ron_string_reloads() {
        let project = InMemoryProject::from_ron_str(PROJECT).unwrap();
        let text = project.to_ron_string().unwrap();
        let reloaded = InMemoryProject::from_ron_str(&text).unwrap();

        assert_eq!(reloaded.len(), project.len());
        assert_eq!(
            reloaded.to_definition().unwrap().assets[0].material,
            project.to_definition().unwrap().assets[0].material
        );
    }

    #[test]
    fn test_save_and_reload_keeps_paths_and_uuids() {
        let project = InMemoryProject::from_ron_str(PROJECT).unwrap();
        let text = project.to_ron_string().unwrap();
        assert!(text.contains("materials/rock.mat"));

        let reloaded = InMemoryProject::from_ron_str(&text).unwrap();
        assert_eq!(
            reloaded.paths().collect::<Vec<_>>(),
            vec!["materials/rock.mat", "textures/rock.png", "materials/variant.mat"]
        );

        let uuids = |p: &InMemoryProject| -> Vec<AssetUUID> {
            p.assets().unwrap().iter().map(|a| a.uuid).collect()
        };
        assert_eq!(uuids(&reloaded), uuids(&project));
        assert_eq!(reloaded.to_definition().unwrap(), project.to_definition().unwrap());
    }

    #[test]
    fn test_in_memory_assets_keep_their_uuid_on_reload() {
        let random = ProjectAsset::material(AssetUUID::new(), MaterialAsset::default());
        let mut project = InMemoryProject::new(vec![random.clone()]);
        project.push_at("materials/glass.mat", ProjectAsset::other(AssetUUID::new(), "Texture"));

        let definition = project.to_definition().unwrap();
        assert_eq!(definition.assets[0].uuid, Some(random.uuid));
        assert_eq!(definition.assets[1].path, "materials/glass.mat");

        let reloaded = InMemoryProject::from_ron_str(&project.to_ron_string().unwrap()).unwrap();
        let assets = reloaded.assets().unwrap();
        assert_eq!(assets[0].uuid, random.uuid);
        assert_eq!(assets[1].uuid, project.assets().unwrap()[1].uuid);
    }

    #[test]
    fn test_derived_uuid_is_not_written() {
        let project = InMemoryProject::from_ron_str(PROJECT).unwrap();
        let definition = project.to_definition().unwrap();
        assert!(definition.assets.iter().all(|a| a.uuid.is_none()));
    }
}
