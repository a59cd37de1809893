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

use super::RenderBackend;
use crate::renderer::api::{GraphicsBackendType, RenderDesc};
use crate::renderer::error::RenderError;

/// A trait for a system that creates the concrete graphics backend at startup.
///
/// The render agent asks the factory once, during construction. A concrete
/// implementation lives in `lumen-infra`.
pub trait BackendFactory {
    /// Creates a backend matching the description.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InitializationFailed` if no compatible backend can
    /// be created.
    fn create_backend(&self, desc: &RenderDesc) -> Result<Box<dyn RenderBackend>, RenderError>;

    /// Checks if a backend API can be created by this factory on the current platform.
    fn is_backend_supported(&self, backend_type: GraphicsBackendType) -> bool;
}
