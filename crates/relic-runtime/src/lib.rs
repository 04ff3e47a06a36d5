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

//! # Relic Runtime
//!
//! The [`ResourceManager`]: one explicit context object owning the five
//! cache structures, the resource locator, and the importer registry. It
//! is the single entry point game code loads and releases assets through.
//!
//! The manager is deliberately single-threaded: it is invoked
//! synchronously from the game/UI thread, loads block until decode
//! completes or fails, and no locks are taken. A multi-threaded embedding
//! must wrap the whole manager behind one coarse lock or an actor
//! boundary; fine-grained locking would not preserve the
//! first-successful-decode-wins refcount protocol.

#![warn(missing_docs)]

mod manager;
mod registry;

pub use manager::*;
pub use registry::*;
