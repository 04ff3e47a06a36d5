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

//! Standalone effect definitions.

/// A decoded standalone effect.
///
/// Unlike items and spells, effects do not carry their own name; the cache
/// key alone identifies them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effect {
    /// The effect opcode.
    pub opcode: u32,
    /// Targeting mode.
    pub target: u32,
    /// Effect power level.
    pub power: u32,
}
