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

//! Provides the primitive types describing project assets as seen by the
//! batch editor.
//!
//! The host editor owns every asset. This module only defines the shapes the
//! core works with:
//! - The [`Asset`] trait: A marker for all types that can live behind an [`AssetHandle`].
//! - [`ProjectAsset`]: One entry of the host project's asset list.
//! - The material data ([`MaterialAsset`], [`RenderPass`]) that mutations read and write.

mod handle;
mod materials;
mod uuid;

pub use handle::*;
pub use materials::*;
pub use uuid::*;

/// The type tag the host project uses for material assets.
pub const MATERIAL_TYPE_NAME: &str = "Material";

/// Label used when an asset has neither a display name nor a raw name.
pub const UNTITLED_MATERIAL: &str = "Untitled Material";

/// A marker trait for types that can be shared through an [`AssetHandle`].
///
/// The supertraits mirror what the host project model requires of its
/// asset payloads: they can be handed across threads and have no borrowed data.
///
/// # Examples
///
/// ```
/// use matbatch_core::asset::{Asset, AssetHandle};
///
/// struct Texture {
///     width: u32,
/// }
///
/// impl Asset for Texture {}
///
/// let handle = AssetHandle::new(Texture { width: 64 });
/// assert_eq!(handle.read().map(|t| t.width).ok(), Some(64));
/// ```
pub trait Asset: Send + Sync + 'static {}

/// One asset as exposed by the host project.
///
/// Only the fields the batch editor needs are modelled; everything else about
/// the asset stays opaque inside the host.
#[derive(Debug, Clone)]
pub struct ProjectAsset {
    /// Stable identity for the session.
    pub uuid: AssetUUID,

    /// Type discriminator, e.g. `"Material"` or `"Texture"`.
    pub type_name: String,

    /// Human-facing name set by the author, if any.
    pub display_name: Option<String>,

    /// Raw asset name, usually derived from the imported file.
    pub name: Option<String>,

    /// Shared material data. Present for material assets only.
    pub material: Option<AssetHandle<MaterialAsset>>,
}

impl ProjectAsset {
    /// Creates a material asset wrapping the given material data.
    pub fn material(uuid: AssetUUID, material: MaterialAsset) -> Self {
        Self {
            uuid,
            type_name: MATERIAL_TYPE_NAME.to_string(),
            display_name: None,
            name: None,
            material: Some(AssetHandle::new(material)),
        }
    }

    /// Creates an asset of another type, carrying no material data.
    pub fn other(uuid: AssetUUID, type_name: impl Into<String>) -> Self {
        Self {
            uuid,
            type_name: type_name.into(),
            display_name: None,
            name: None,
            material: None,
        }
    }

    /// Sets the display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the raw name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns `true` if the asset's type tag equals `type_name`.
    pub fn is_type(&self, type_name: &str) -> bool {
        self.type_name == type_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_constructor_sets_type_and_handle() {
        let asset = ProjectAsset::material(AssetUUID::new(), MaterialAsset::default());
        assert!(asset.is_type(MATERIAL_TYPE_NAME));
        assert!(asset.material.is_some());
        assert!(asset.display_name.is_none());
        assert!(asset.name.is_none());
    }

    #[test]
    fn test_other_constructor_has_no_material() {
        let asset = ProjectAsset::other(AssetUUID::new(), "Texture");
        assert!(asset.is_type("Texture"));
        assert!(!asset.is_type(MATERIAL_TYPE_NAME));
        assert!(asset.material.is_none());
    }

    #[test]
    fn test_clone_shares_material_handle() {
        let asset = ProjectAsset::material(AssetUUID::new(), MaterialAsset::default())
            .with_display_name("Rock")
            .with_name("rock_01");
        let cloned = asset.clone();

        let (Some(a), Some(b)) = (&asset.material, &cloned.material) else {
            panic!("Expected material handles");
        };
        assert!(a.ptr_eq(b));
        assert_eq!(cloned.display_name.as_deref(), Some("Rock"));
        assert_eq!(cloned.name.as_deref(), Some("rock_01"));
    }
}
