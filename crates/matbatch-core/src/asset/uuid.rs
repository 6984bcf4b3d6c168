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

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A stable, unique identifier for a project asset.
///
/// The identity is opaque to the batch editor; it is only used for reporting
/// and for telling entries apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetUUID(Uuid);

impl AssetUUID {
    /// Creates a new, random (version 4) `AssetUUID`.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Derives a deterministic (version 5) `AssetUUID` from a project path.
    ///
    /// The same path always yields the same identifier, which keeps ids
    /// stable across reloads of a project file.
    pub fn new_v5(path: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_URL, path.as_bytes()))
    }
}

impl Default for AssetUUID {
    /// Creates a new, random (version 4) `AssetUUID`.
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssetUUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_v5_is_deterministic() {
        assert_eq!(
            AssetUUID::new_v5("materials/rock.mat"),
            AssetUUID::new_v5("materials/rock.mat")
        );
        assert_ne!(
            AssetUUID::new_v5("materials/rock.mat"),
            AssetUUID::new_v5("materials/moss.mat")
        );
    }

    #[test]
    fn test_new_is_random() {
        assert_ne!(AssetUUID::new(), AssetUUID::new());
    }
}
