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

//! Error types for asset access and per-asset mutations.

use thiserror::Error;

/// Failure to access the data behind an [`AssetHandle`](crate::asset::AssetHandle).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetAccessError {
    /// A previous writer panicked while holding the asset.
    #[error("asset lock is poisoned")]
    Poisoned,
}

/// A single mutation failed on a single asset.
///
/// These never escape a batch: the mutator records them against the asset
/// and moves on to the next one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// The mutator refused to modify the asset.
    #[error("mutation rejected: {reason}")]
    Rejected {
        /// Why the mutator gave up.
        reason: String,
    },
    /// The asset data could not be accessed.
    #[error("asset access failed: {0}")]
    Access(#[from] AssetAccessError),
}

impl MutationError {
    /// Convenience constructor for a mutator-declared failure.
    pub fn rejected(reason: impl Into<String>) -> Self {
        MutationError::Rejected {
            reason: reason.into(),
        }
    }
}
