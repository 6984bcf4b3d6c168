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

//! Defines the material data that batch mutations operate on.

mod blend_mode;
mod color_mask;

pub use blend_mode::*;
pub use color_mask::*;

use serde::{Deserialize, Serialize};

use super::Asset;

/// The render-state block of a material's main pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderPass {
    /// Whether fragments write to the depth buffer.
    pub depth_write: bool,

    /// Whether back faces are rendered too.
    ///
    /// If `false`, back-facing triangles are culled.
    pub two_sided: bool,

    /// Per-channel color write mask. All channels off hides the material.
    pub color_mask: ColorMask,

    /// How the pass output is combined with the framebuffer.
    pub blend_mode: BlendMode,
}

impl Default for RenderPass {
    fn default() -> Self {
        Self {
            depth_write: true,
            two_sided: false,
            color_mask: ColorMask::ALL,
            blend_mode: BlendMode::Normal,
        }
    }
}

/// Material data as held by the host project.
///
/// A material variant may have no main pass at all. That is a valid state,
/// and every mutation must leave such a material untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialAsset {
    /// The main render pass, if the material defines one.
    pub main_pass: Option<RenderPass>,
}

impl MaterialAsset {
    /// Creates a material with the given main pass.
    pub fn with_pass(pass: RenderPass) -> Self {
        Self {
            main_pass: Some(pass),
        }
    }

    /// Creates a material without a main pass.
    pub fn without_pass() -> Self {
        Self { main_pass: None }
    }
}

impl Asset for MaterialAsset {}
