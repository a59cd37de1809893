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

//! Defines the error type of the rendering subsystem.

use std::fmt;

/// A high-level error that can occur while creating or driving the render pipeline.
///
/// Construction errors (`InitializationFailed`, `InvalidDescription`) are fatal
/// to the caller. `BeginFrameFailed` only drops the current frame; the pipeline
/// stays usable for the next one.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// An operation was attempted before the rendering system was initialized.
    NotInitialized,
    /// No compatible backend could be created.
    InitializationFailed(String),
    /// The render description handed to construction is not valid.
    InvalidDescription(String),
    /// Render settings could not be parsed or contain unusable values.
    InvalidConfiguration(String),
    /// The backend refused to begin a frame.
    BeginFrameFailed(String),
    /// The graphics device was lost (e.g., GPU driver crashed or was updated).
    DeviceLost,
    /// An unexpected or internal error occurred.
    Internal(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::NotInitialized => {
                write!(f, "The rendering system is not initialized.")
            }
            RenderError::InitializationFailed(msg) => {
                write!(f, "Failed to initialize graphics backend: {msg}")
            }
            RenderError::InvalidDescription(msg) => {
                write!(f, "Invalid render description: {msg}")
            }
            RenderError::InvalidConfiguration(msg) => {
                write!(f, "Invalid render configuration: {msg}")
            }
            RenderError::BeginFrameFailed(msg) => {
                write!(f, "The backend failed to begin the frame: {msg}")
            }
            RenderError::DeviceLost => write!(
                f,
                "The graphics device was lost and needs to be reinitialized."
            ),
            RenderError::Internal(msg) => {
                write!(f, "An internal or unexpected error occurred: {msg}")
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl RenderError {
    /// Returns `true` if the error only affects the current frame.
    pub fn is_frame_local(&self) -> bool {
        matches!(self, RenderError::BeginFrameFailed(_))
    }
}
