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

//! # Relic IO
//!
//! The concrete byte-level pieces the cache delegates to: a little-endian
//! stream cursor, the store binary codec, the text table codec, and a
//! directory-backed resource locator.

#![warn(missing_docs)]

mod locator;
mod store;
mod stream;
mod table;

pub use locator::*;
pub use store::*;
pub use stream::*;
pub use table::*;
