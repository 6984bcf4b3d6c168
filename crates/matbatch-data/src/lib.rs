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

//! # Matbatch Data
//!
//! Owns the selection state of the batch editor and provides an in-memory
//! project model that can stand in for the host editor.

#![warn(missing_docs)]

pub mod project;
pub mod registry;

pub use project::{AssetDefinition, InMemoryProject, ProjectDefinition};
pub use registry::{resolve_label, AssetRegistry, SelectionEntry};
