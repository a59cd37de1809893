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

//! Frame locks binding a queued element or light to one pipeline.
//!
//! A pipeline owns a [`FrameEpoch`]. Queuing stores a [`FrameLock`] pointing
//! weakly at that epoch and stamped with its current frame. The lock counts as
//! held only while the epoch is alive and still on that frame, so advancing
//! the epoch releases every outstanding lock at once, and dropping the
//! pipeline can never leave an element locked to a dead owner.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, MutexGuard, PoisonError, Weak,
};

static NEXT_PIPELINE_ID: AtomicU64 = AtomicU64::new(1);

/// The lock authority of one pipeline.
#[derive(Debug)]
pub struct FrameEpoch {
    pipeline_id: u64,
    frame: AtomicU64,
}

impl FrameEpoch {
    /// Creates an epoch with a process-unique pipeline id.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            pipeline_id: NEXT_PIPELINE_ID.fetch_add(1, Ordering::Relaxed),
            frame: AtomicU64::new(0),
        })
    }

    /// The unique id of the owning pipeline.
    pub fn pipeline_id(&self) -> u64 {
        self.pipeline_id
    }

    /// The frame locks are currently issued for.
    pub fn current_frame(&self) -> u64 {
        self.frame.load(Ordering::Acquire)
    }

    /// Moves to the next frame, invalidating every lock issued so far.
    /// Returns the new frame.
    pub fn advance(&self) -> u64 {
        self.frame.fetch_add(1, Ordering::AcqRel) + 1
    }

    fn issue(self: &Arc<Self>) -> FrameLock {
        FrameLock {
            owner: Arc::downgrade(self),
            frame: self.current_frame(),
        }
    }
}

/// A token proving that an element was queued by a pipeline for one frame.
#[derive(Debug, Clone)]
pub struct FrameLock {
    owner: Weak<FrameEpoch>,
    frame: u64,
}

impl FrameLock {
    /// Whether the owning pipeline is alive and still on the stamped frame.
    pub fn is_live(&self) -> bool {
        self.owner
            .upgrade()
            .is_some_and(|epoch| epoch.current_frame() == self.frame)
    }

    /// Whether this is a live lock issued by `epoch`.
    pub fn is_held_by(&self, epoch: &FrameEpoch) -> bool {
        self.owner.upgrade().is_some_and(|owner| {
            owner.pipeline_id == epoch.pipeline_id && owner.current_frame() == self.frame
        })
    }
}

/// Storage for the frame lock of one element or light.
#[derive(Debug, Default)]
pub struct LockSlot(Mutex<Option<FrameLock>>);

impl LockSlot {
    /// Creates an unlocked slot.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<FrameLock>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Locks the slot for the current frame of `epoch`.
    ///
    /// Returns `false`, leaving the slot untouched, if a live lock is already
    /// stored. Stale locks are overwritten.
    pub fn try_acquire(&self, epoch: &Arc<FrameEpoch>) -> bool {
        let mut slot = self.slot();
        if slot.as_ref().is_some_and(FrameLock::is_live) {
            return false;
        }
        *slot = Some(epoch.issue());
        true
    }

    /// Releases the slot if `epoch` holds a live lock on it.
    ///
    /// Returns `true` only when a live lock was released. A lock taken by a
    /// different pipeline is left in place.
    pub fn release(&self, epoch: &FrameEpoch) -> bool {
        let mut slot = self.slot();
        match slot.as_ref() {
            Some(lock) if lock.is_held_by(epoch) => {
                *slot = None;
                true
            }
            Some(lock) if !lock.is_live() => {
                *slot = None;
                false
            }
            _ => false,
        }
    }

    /// Whether a live lock is stored.
    pub fn is_locked(&self) -> bool {
        self.slot().as_ref().is_some_and(FrameLock::is_live)
    }

    /// Whether `epoch` holds a live lock on this slot.
    pub fn is_held_by(&self, epoch: &FrameEpoch) -> bool {
        self.slot().as_ref().is_some_and(|lock| lock.is_held_by(epoch))
    }
}
