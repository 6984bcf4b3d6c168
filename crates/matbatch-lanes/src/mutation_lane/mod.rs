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

//! Applies a named transform to every selected material, one asset at a time.
//!
//! A batch is best-effort: an asset whose mutation fails is logged and
//! counted, and the batch moves on. Mutations already applied to other assets
//! are never rolled back.

mod catalog;

pub use catalog::*;

use matbatch_core::asset::{AssetUUID, MaterialAsset};
use matbatch_core::MutationError;
use matbatch_data::{AssetRegistry, SelectionEntry};

/// One asset the mutation failed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationFailure {
    /// The asset's identity.
    pub uuid: AssetUUID,
    /// The asset's label at the time of the batch.
    pub label: String,
    /// Why the mutation failed.
    pub error: MutationError,
}

/// The outcome of one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    /// The label of the mutation, used for reporting only.
    pub mutation_name: String,
    /// Number of selected assets the mutation was attempted on.
    pub attempted: usize,
    /// Number of assets the mutation succeeded on.
    pub succeeded: usize,
    /// Every failed asset, in registry order.
    pub failures: Vec<MutationFailure>,
}

impl MutationResult {
    fn new(mutation_name: &str) -> Self {
        Self {
            mutation_name: mutation_name.to_string(),
            attempted: 0,
            succeeded: 0,
            failures: Vec::new(),
        }
    }

    /// Number of assets the mutation failed on.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Returns `true` if every attempted asset was mutated.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// The status line shown to the operator after the batch.
    pub fn status_line(&self) -> String {
        format!(
            "Successfully modified {} materials ({}).",
            self.succeeded, self.mutation_name
        )
    }
}

/// Applies mutations to the selected entries of an [`AssetRegistry`].
///
/// Stateless: each call is an independent, synchronous pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchMutator;

impl BatchMutator {
    /// Creates a new batch mutator.
    pub fn new() -> Self {
        Self
    }

    /// Runs `mutator` on every selected material of `registry`.
    ///
    /// A failing asset never stops the batch. Each failure is logged with the
    /// asset's label and identity and recorded in the result. An entry
    /// without material data is left alone and counts as a success.
    pub fn apply<F>(
        &self,
        mutation_name: &str,
        mut mutator: F,
        registry: &AssetRegistry,
    ) -> MutationResult
    where
        F: FnMut(&mut MaterialAsset) -> Result<(), MutationError>,
    {
        let result = registry.selected_entries().fold(
            MutationResult::new(mutation_name),
            |mut result, entry| {
                result.attempted += 1;
                match Self::apply_one(entry, &mut mutator) {
                    Ok(()) => result.succeeded += 1,
                    Err(error) => {
                        log::warn!(
                            "Failed to mutate material '{}' ({}): {}",
                            entry.label(),
                            entry.uuid(),
                            error
                        );
                        result.failures.push(MutationFailure {
                            uuid: entry.uuid(),
                            label: entry.label().to_string(),
                            error,
                        });
                    }
                }
                result
            },
        );

        log::debug!(
            "BatchMutator: '{}' applied to {}/{} materials",
            result.mutation_name,
            result.succeeded,
            result.attempted
        );
        result
    }

    /// Runs a catalog mutation on every selected material of `registry`.
    pub fn apply_mutation(
        &self,
        mutation: MaterialMutation,
        registry: &AssetRegistry,
    ) -> MutationResult {
        self.apply(mutation.name(), |material| mutation.apply_to(material), registry)
    }

    fn apply_one<F>(entry: &SelectionEntry, mutator: &mut F) -> Result<(), MutationError>
    where
        F: FnMut(&mut MaterialAsset) -> Result<(), MutationError>,
    {
        let Some(handle) = entry.handle() else {
            return Ok(());
        };
        let mut material = handle.write()?;
        mutator(&mut *material)
    }
}
