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

use std::fmt;
use std::str::FromStr;

use matbatch_core::asset::{BlendMode, ColorMask, MaterialAsset, RenderPass};
use matbatch_core::MutationError;
use thiserror::Error;

/// The predefined mutations offered by the batch editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialMutation {
    /// Enables depth writes.
    DepthWriteOn,
    /// Disables depth writes.
    DepthWriteOff,
    /// Renders back faces too.
    TwoSidedOn,
    /// Culls back faces.
    TwoSidedOff,
    /// Writes every color channel.
    VisibilityOn,
    /// Writes no color channel, hiding the material.
    VisibilityOff,
    /// Resets the blend mode to [`BlendMode::Normal`].
    BlendNormal,
}

/// Returned when parsing a name that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mutation '{0}'")]
pub struct UnknownMutation(pub String);

impl MaterialMutation {
    /// The full catalog, in panel order.
    pub const ALL: [MaterialMutation; 7] = [
        MaterialMutation::DepthWriteOn,
        MaterialMutation::DepthWriteOff,
        MaterialMutation::TwoSidedOn,
        MaterialMutation::TwoSidedOff,
        MaterialMutation::VisibilityOn,
        MaterialMutation::VisibilityOff,
        MaterialMutation::BlendNormal,
    ];

    /// The name reported in status lines.
    pub fn name(self) -> &'static str {
        match self {
            MaterialMutation::DepthWriteOn => "Depth Write On",
            MaterialMutation::DepthWriteOff => "Depth Write Off",
            MaterialMutation::TwoSidedOn => "Two Sided On",
            MaterialMutation::TwoSidedOff => "Two Sided Off",
            MaterialMutation::VisibilityOn => "Visibility On",
            MaterialMutation::VisibilityOff => "Visibility Off",
            MaterialMutation::BlendNormal => "Blend Normal",
        }
    }

    /// Applies the mutation to one material.
    ///
    /// A material without a main pass is left untouched; that is not a failure.
    pub fn apply_to(self, material: &mut MaterialAsset) -> Result<(), MutationError> {
        if let Some(pass) = material.main_pass.as_mut() {
            self.apply_to_pass(pass);
        }
        Ok(())
    }

    fn apply_to_pass(self, pass: &mut RenderPass) {
        match self {
            MaterialMutation::DepthWriteOn => pass.depth_write = true,
            MaterialMutation::DepthWriteOff => pass.depth_write = false,
            MaterialMutation::TwoSidedOn => pass.two_sided = true,
            MaterialMutation::TwoSidedOff => pass.two_sided = false,
            MaterialMutation::VisibilityOn => pass.color_mask = ColorMask::ALL,
            MaterialMutation::VisibilityOff => pass.color_mask = ColorMask::NONE,
            MaterialMutation::BlendNormal => pass.blend_mode = BlendMode::Normal,
        }
    }
}

impl fmt::Display for MaterialMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaterialMutation {
    type Err = UnknownMutation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialMutation::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownMutation(s.to_string()))
    }
}
