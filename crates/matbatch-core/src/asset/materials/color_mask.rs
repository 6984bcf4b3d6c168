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

/// A 4-channel color write mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMask {
    /// Red channel.
    pub r: bool,
    /// Green channel.
    pub g: bool,
    /// Blue channel.
    pub b: bool,
    /// Alpha channel.
    pub a: bool,
}

impl ColorMask {
    /// Every channel written.
    pub const ALL: Self = Self::splat(true);

    /// No channel written; the material is effectively hidden.
    pub const NONE: Self = Self::splat(false);

    /// Creates a mask with the same value on every channel.
    pub const fn splat(value: bool) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
            a: value,
        }
    }

    /// Returns `true` if at least one channel is written.
    pub fn is_visible(&self) -> bool {
        self.r || self.g || self.b || self.a
    }
}

impl Default for ColorMask {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(ColorMask::ALL, ColorMask::splat(true));
        assert_eq!(ColorMask::NONE, ColorMask::splat(false));
        assert_eq!(ColorMask::default(), ColorMask::ALL);
    }

    #[test]
    fn test_visibility() {
        assert!(ColorMask::ALL.is_visible());
        assert!(!ColorMask::NONE.is_visible());

        let alpha_only = ColorMask {
            a: true,
            ..ColorMask::NONE
        };
        assert!(alpha_only.is_visible());
    }
}
