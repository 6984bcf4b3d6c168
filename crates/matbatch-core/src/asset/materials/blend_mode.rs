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

/// Defines how a render pass blends its output with the framebuffer.
///
/// The discriminants match the raw values the host editor stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum BlendMode {
    /// Standard alpha blending. This is the host's "normal" value (0).
    #[default]
    Normal = 0,

    /// Blending for colors already multiplied by alpha.
    PremultipliedAlpha = 1,

    /// Additive blending.
    Add = 2,

    /// Screen blending, brightening the destination.
    Screen = 3,

    /// Multiplicative blending, darkening the destination.
    Multiply = 4,

    /// No blending; the output replaces the destination.
    Disabled = 5,
}

impl BlendMode {
    /// Returns the raw value stored by the host editor.
    pub fn raw(self) -> u8 {
        self as u8
    }

    /// Maps a raw host value back to a blend mode.
    ///
    /// Returns `None` for values this editor does not know about.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Normal),
            1 => Some(Self::PremultipliedAlpha),
            2 => Some(Self::Add),
            3 => Some(Self::Screen),
            4 => Some(Self::Multiply),
            5 => Some(Self::Disabled),
            _ => None,
        }
    }
}
