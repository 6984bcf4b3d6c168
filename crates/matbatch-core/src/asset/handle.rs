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

use super::Asset;
use crate::error::AssetAccessError;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A reference-counted handle to an asset owned by the host project.
///
/// Cloning a handle is cheap and shares the same underlying asset, so a
/// mutation made through one handle is visible through every other clone,
/// including the one the host project keeps.
#[derive(Debug)]
pub struct AssetHandle<T: Asset>(Arc<RwLock<T>>);

impl<T: Asset> AssetHandle<T> {
    /// Creates a new `AssetHandle` that takes ownership of the asset data.
    pub fn new(asset: T) -> Self {
        Self(Arc::new(RwLock::new(asset)))
    }

    /// Acquires shared read access to the asset.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, T>, AssetAccessError> {
        self.0.read().map_err(|_| AssetAccessError::Poisoned)
    }

    /// Acquires exclusive write access to the asset.
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, T>, AssetAccessError> {
        self.0.write().map_err(|_| AssetAccessError::Poisoned)
    }

    /// Returns `true` if both handles point to the same asset.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Asset> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
