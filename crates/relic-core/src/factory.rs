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

//! Factory objects: expensive decode products shared for a whole session.

use std::any::Any;

/// How a factory object was decoded from its source.
///
/// The mode is part of the factory-cache key: the same animation file
/// decoded in two modes yields two distinct factory objects.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum FactoryMode {
    /// Plain decode.
    #[default]
    Normal,
    /// Decode at doubled resolution.
    Doubled,
}

/// A decoded sprite-sheet or image factory.
///
/// Factory objects are built once per `(key, class, mode)` and live until
/// the owning cache is cleared wholesale; they are never reference
/// counted. Concrete factories downcast through [`FactoryObject::as_any`].
pub trait FactoryObject: Any + Send + Sync + std::fmt::Debug {
    /// Upcast for downcasting to the concrete factory type.
    fn as_any(&self) -> &dyn Any;
}
