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

//! The contract for the host editor's asset list.

use crate::asset::ProjectAsset;
use thiserror::Error;

/// Errors reported by an [`AssetSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The host project model cannot be reached right now.
    ///
    /// Recoverable: the caller may retry the query later.
    #[error("asset source is not available: {0}")]
    Unavailable(String),
}

/// A queryable collection of project assets.
///
/// Implemented by the host editor's project model. Every call returns the
/// full, current asset list; handles in the returned assets share the
/// underlying data with the host.
pub trait AssetSource {
    /// Returns every asset in the project, in the host's order.
    fn assets(&self) -> Result<Vec<ProjectAsset>, SourceError>;
}
