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

use super::backend::{FaultInjector, HeadlessBackend};
use super::command_log::CommandLog;
use lumen_core::renderer::{
    BackendFactory, GraphicsBackendType, RenderBackend, RenderDesc, RenderError,
};

/// Creates [`HeadlessBackend`]s that all record into the same [`CommandLog`].
#[derive(Debug, Clone, Default)]
pub struct HeadlessBackendFactory {
    log: CommandLog,
    faults: FaultInjector,
    available: bool,
    ready: bool,
}

impl HeadlessBackendFactory {
    /// A factory that creates ready headless backends.
    pub fn new() -> Self {
        Self {
            log: CommandLog::new(),
            faults: FaultInjector::new(),
            available: true,
            ready: true,
        }
    }

    /// A factory whose device creation always fails.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// A factory whose backends come up, but report they are not ready.
    pub fn not_ready() -> Self {
        Self {
            ready: false,
            ..Self::new()
        }
    }

    /// The log shared by every backend this factory creates.
    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }

    /// The fault injector shared by every backend this factory creates.
    pub fn faults(&self) -> FaultInjector {
        self.faults.clone()
    }
}

impl BackendFactory for HeadlessBackendFactory {
    fn create_backend(&self, desc: &RenderDesc) -> Result<Box<dyn RenderBackend>, RenderError> {
        if !self.is_backend_supported(desc.backend) {
            return Err(RenderError::InitializationFailed(format!(
                "the headless factory cannot create a {} backend",
                desc.backend.name()
            )));
        }
        if !self.available {
            return Err(RenderError::InitializationFailed(
                "headless device unavailable".to_string(),
            ));
        }

        let mut backend = HeadlessBackend::new(self.log.clone())
            .with_faults(self.faults.clone())
            .with_ready(self.ready);
        if let Some(label) = &desc.device_label {
            backend = backend.with_device_name(label.clone());
        }
        log::info!(
            "Created headless backend '{}' (ready: {})",
            backend.device_name(),
            self.ready
        );
        Ok(Box::new(backend))
    }

    fn is_backend_supported(&self, backend_type: GraphicsBackendType) -> bool {
        backend_type == GraphicsBackendType::Headless
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_headless_is_supported() {
        let factory = HeadlessBackendFactory::new();
        assert!(factory.is_backend_supported(GraphicsBackendType::Headless));
        assert!(!factory.is_backend_supported(GraphicsBackendType::Vulkan));

        let result = factory.create_backend(&RenderDesc::new(GraphicsBackendType::Dx12));
        assert!(matches!(result, Err(RenderError::InitializationFailed(_))));
    }

    #[test]
    fn test_device_label_becomes_device_name() {
        let mut desc = RenderDesc::new(GraphicsBackendType::Headless);
        desc.device_label = Some("capture".to_string());
        let backend = HeadlessBackendFactory::new().create_backend(&desc).unwrap();
        assert_eq!(backend.device_name(), "capture");
        assert!(backend.is_ready());
    }

    #[test]
    fn test_unavailable_factory_fails() {
        let desc = RenderDesc::new(GraphicsBackendType::Headless);
        assert!(HeadlessBackendFactory::unavailable()
            .create_backend(&desc)
            .is_err());
        let backend = HeadlessBackendFactory::not_ready()
            .create_backend(&desc)
            .unwrap();
        assert!(!backend.is_ready());
    }
}
