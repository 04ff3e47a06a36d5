// Copyright 2025 the Relic authors
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

//! Color palettes extracted from image carriers.

use bytemuck::{Pod, Zeroable};

/// An RGBA color, plain-old-data so palette tables can be copied wholesale.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Pod, Zeroable)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// A 256-entry color palette, usually derived from an image resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    /// The color table.
    pub colors: [Color; 256],
    /// True when the palette was loaded by name from a carrier image, as
    /// opposed to generated at runtime.
    pub named: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [Color::default(); 256],
            named: false,
        }
    }
}
