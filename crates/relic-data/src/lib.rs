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

//! # Relic Data
//!
//! The generic cache structures the resource manager is assembled from.
//! Each structure implements one retention policy:
//!
//! - [`KeyedCache`]: reference counted, soft-retained at refcount zero.
//! - [`SlotPool`]: reference counted with index-stable handles and
//!   first-fit slot reuse.
//! - [`NamedMap`]: exclusively owned mutable state, removed only by an
//!   explicit flush.
//! - [`NegativeCache`]: remembers confirmed-absent lookups with a
//!   tombstone.
//! - [`FactoryCache`]: exact-match dedup of expensive decode products, no
//!   refcounting.
//!
//! None of these touch I/O; decoding is injected by the caller.

#![warn(missing_docs)]

mod factory;
mod keyed;
mod named;
mod negative;
mod slot_pool;

pub use factory::*;
pub use keyed::*;
pub use named::*;
pub use negative::*;
pub use slot_pool::*;
