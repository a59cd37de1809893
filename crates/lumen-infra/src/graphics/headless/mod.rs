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

//! A headless backend that records every call instead of talking to a GPU.
//!
//! It is used for capture and inspection of the exact command stream the
//! pipeline produces, for CI machines without a GPU, and as the backend of
//! the pipeline's own tests.

mod backend;
mod command_log;
mod factory;
mod resources;

pub use backend::*;
pub use command_log::*;
pub use factory::*;
pub use resources::*;
