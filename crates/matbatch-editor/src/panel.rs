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

use matbatch_core::asset::MaterialAsset;
use matbatch_core::{AssetSource, MutationError};
use matbatch_data::AssetRegistry;
use matbatch_lanes::{BatchMutator, MaterialMutation, MutationResult, UnknownMutation};

use crate::{EditorSettings, PanelDescriptor};

/// Receives blocking, user-visible messages from the panel.
///
/// Implemented by the host UI shell, typically with a modal message box.
pub trait Notifier {
    /// Shows an error message to the operator.
    fn show_error(&mut self, title: &str, message: &str);
}

/// A [`Notifier`] for headless hosts that writes messages to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show_error(&mut self, title: &str, message: &str) {
        log::error!("{title}: {message}");
    }
}

/// The state of the batch material optimizer panel.
///
/// Holds the selection registry and the status line. Every public method
/// corresponds to a control of the panel.
#[derive(Debug, Clone)]
pub struct BatchMaterialPanel {
    registry: AssetRegistry,
    mutator: BatchMutator,
    status: String,
}

impl BatchMaterialPanel {
    /// Status shown before the first action.
    pub const READY_STATUS: &'static str = "Ready.";

    /// Creates an empty panel configured by `settings`.
    pub fn new(settings: &EditorSettings) -> Self {
        let registry = AssetRegistry::new()
            .with_material_type(settings.material_type_name.clone())
            .with_untitled_label(settings.untitled_label.clone());
        Self {
            registry,
            mutator: BatchMutator::new(),
            status: Self::READY_STATUS.to_string(),
        }
    }

    /// Registration metadata for the host editor.
    pub fn descriptor() -> PanelDescriptor {
        PanelDescriptor::BATCH_MATERIAL_OPTIMIZER
    }

    /// "Refresh Material List": reloads the materials from `source`.
    ///
    /// Returns the number of materials found. If the source is unavailable
    /// the error is shown through `notifier` once, and the list and status
    /// are left as they were.
    pub fn refresh(
        &mut self,
        source: &dyn AssetSource,
        notifier: &mut dyn Notifier,
    ) -> Option<usize> {
        match self.registry.refresh(source) {
            Ok(count) => {
                self.status = format!("Found {count} Materials.");
                Some(count)
            }
            Err(e) => {
                notifier.show_error("Error", &e.to_string());
                None
            }
        }
    }

    /// "Select All".
    pub fn select_all(&mut self) {
        self.registry.set_all_selected(true);
    }

    /// "Deselect All".
    pub fn deselect_all(&mut self) {
        self.registry.set_all_selected(false);
    }

    /// A click on the checkbox of row `index`. Returns the new state.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        self.registry.toggle(index)
    }

    /// Runs a catalog mutation on the selected materials.
    pub fn run(&mut self, mutation: MaterialMutation) -> MutationResult {
        let result = self.mutator.apply_mutation(mutation, &self.registry);
        self.report(result)
    }

    /// Runs the catalog mutation called `name`.
    ///
    /// # Errors
    /// Returns [`UnknownMutation`] without touching any asset if the name is
    /// not in the catalog.
    pub fn run_named(&mut self, name: &str) -> Result<MutationResult, UnknownMutation> {
        let mutation = name.parse::<MaterialMutation>()?;
        Ok(self.run(mutation))
    }

    /// Runs a host-defined mutation on the selected materials.
    pub fn run_custom<F>(&mut self, mutation_name: &str, mutator: F) -> MutationResult
    where
        F: FnMut(&mut MaterialAsset) -> Result<(), MutationError>,
    {
        let result = self.mutator.apply(mutation_name, mutator, &self.registry);
        self.report(result)
    }

    fn report(&mut self, result: MutationResult) -> MutationResult {
        self.status = result.status_line();
        if !result.is_complete() {
            log::info!(
                "{} of {} materials could not be modified ({})",
                result.failed(),
                result.attempted,
                result.mutation_name
            );
        }
        result
    }

    /// One `(label, checked)` pair per checkbox, in list order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.registry
            .entries()
            .iter()
            .map(|e| (e.label(), e.is_selected()))
    }

    /// The current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The underlying selection registry.
    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }
}

impl Default for BatchMaterialPanel {
    fn default() -> Self {
        Self::new(&EditorSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matbatch_core::asset::{AssetUUID, ProjectAsset, RenderPass};
    use matbatch_core::SourceError;
    use matbatch_data::InMemoryProject;

    #[derive(Default)]
    struct RecordingNotifier(Vec<(String, String)>);

    impl Notifier for RecordingNotifier {
        fn show_error(&mut self, title: &str, message: &str) {
            self.0.push((title.to_string(), message.to_string()));
        }
    }

    struct OfflineSource;

    impl AssetSource for OfflineSource {
        fn assets(&self) -> Result<Vec<ProjectAsset>, SourceError> {
            Err(SourceError::Unavailable("editor model missing".into()))
        }
    }

    fn project(count: usize) -> InMemoryProject {
        InMemoryProject::new(
            (0..count)
                .map(|i| {
                    ProjectAsset::material(
                        AssetUUID::new(),
                        MaterialAsset::with_pass(RenderPass::default()),
                    )
                    .with_name(format!("Mat_{i}"))
                })
                .collect(),
        )
    }

    #[test]
    fn test_new_panel_is_ready() {
        let panel = BatchMaterialPanel::default();
        assert_eq!(panel.status(), "Ready.");
        assert_eq!(panel.rows().count(), 0);
    }

    #[test]
    fn test_refresh_updates_status_and_rows() {
        let mut panel = BatchMaterialPanel::default();
        let mut notifier = RecordingNotifier::default();

        assert_eq!(panel.refresh(&project(2), &mut notifier), Some(2));
        assert_eq!(panel.status(), "Found 2 Materials.");
        assert_eq!(
            panel.rows().collect::<Vec<_>>(),
            vec![("Mat_0", true), ("Mat_1", true)]
        );
        assert!(notifier.0.is_empty());
    }

    #[test]
    fn test_unavailable_source_reports_once() {
        let mut panel = BatchMaterialPanel::default();
        let mut notifier = RecordingNotifier::default();
        panel.refresh(&project(3), &mut notifier);

        assert_eq!(panel.refresh(&OfflineSource, &mut notifier), None);
        assert_eq!(notifier.0.len(), 1);
        assert_eq!(notifier.0[0].0, "Error");
        assert_eq!(
            notifier.0[0].1,
            "asset source is not available: editor model missing"
        );
        assert_eq!(panel.status(), "Found 3 Materials.");
        assert_eq!(panel.registry().len(), 3);
    }

    #[test]
    fn test_toggle_and_select_buttons() {
        let mut panel = BatchMaterialPanel::default();
        panel.refresh(&project(3), &mut LogNotifier);

        panel.deselect_all();
        assert_eq!(panel.toggle(2), Some(true));
        assert_eq!(panel.registry().selected_count(), 1);

        panel.select_all();
        assert_eq!(panel.registry().selected_count(), 3);
        assert_eq!(panel.toggle(7), None);
    }

    #[test]
    fn test_run_sets_status_line() {
        let mut panel = BatchMaterialPanel::default();
        panel.refresh(&project(3), &mut LogNotifier);
        panel.toggle(0);

        let result = panel.run(MaterialMutation::TwoSidedOn);
        assert_eq!(result.succeeded, 2);
        assert_eq!(panel.status(), "Successfully modified 2 materials (Two Sided On).");
    }

    #[test]
    fn test_run_named() {
        let mut panel = BatchMaterialPanel::default();
        panel.refresh(&project(1), &mut LogNotifier);

        let result = panel.run_named("Blend Normal").unwrap();
        assert_eq!(result.succeeded, 1);

        assert!(panel.run_named("Glow On").is_err());
        assert_eq!(panel.status(), "Successfully modified 1 materials (Blend Normal).");
    }

    #[test]
    fn test_run_custom_reports_failures_in_status() {
        let mut panel = BatchMaterialPanel::default();
        panel.refresh(&project(2), &mut LogNotifier);

        let result = panel.run_custom("Lock", |_| Err(MutationError::rejected("locked")));
        assert_eq!(result.attempted, 2);
        assert_eq!(result.succeeded, 0);
        assert_eq!(panel.status(), "Successfully modified 0 materials (Lock).");
    }

    #[test]
    fn test_descriptor() {
        let descriptor = BatchMaterialPanel::descriptor();
        assert_eq!(descriptor.name, "Batch Material Optimizer");
    }
}
