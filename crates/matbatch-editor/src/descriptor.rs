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

/// Metadata the host editor uses to register the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelDescriptor {
    /// Reverse-domain identifier, unique among the host's panels.
    pub id: &'static str,
    /// Title shown in the host's panel menu.
    pub name: &'static str,
    /// One-line summary.
    pub description: &'static str,
}

impl PanelDescriptor {
    /// The descriptor of the batch material optimizer panel.
    pub const BATCH_MATERIAL_OPTIMIZER: Self = Self {
        id: "io.matbatch.batch-material-optimizer",
        name: "Batch Material Optimizer",
        description: "Batch select and modify imported materials to optimize rendering properties.",
    };
}
