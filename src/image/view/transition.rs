// ZoomView -- Zoom and layout engine for embeddable image viewports
//
// Copyright (c) 2024-2025 Martin van der Werff <github (at) newinnovations.nl>
//
// This file is part of ZoomView.
//
// ZoomView is free software: you can redistribute it and/or modify it under the terms of
// the GNU Affero General Public License as published by the Free Software Foundation, either
// version 3 of the License, or (at your option) any later version.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR
// IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND
// FITNESS FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
// LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR
// BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
// STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::time::Duration;

use super::zoom::ZoomState;

/// A state change the host has to apply to its scrollable surface.
///
/// Non-animated handles are settled as soon as they are returned; the observer
/// has already been told. For animated handles the host interpolates towards
/// [`TransitionHandle::target`] over [`TransitionHandle::duration`] and then
/// calls [`super::ZoomController::complete_transition`] with the handle id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionHandle {
    id: u64,
    target: ZoomState,
    animated: bool,
    duration: Duration,
}

impl TransitionHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn target(&self) -> &ZoomState {
        &self.target
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Animation length, zero for non-animated transitions
    pub fn duration(&self) -> Duration {
        if self.animated {
            self.duration
        } else {
            Duration::ZERO
        }
    }

    /// Value reported to the observer once the transition completes
    pub fn is_zooming(&self) -> bool {
        self.target.is_zooming
    }
}

/// Bookkeeping of in-flight transitions.
///
/// At most one transition is pending. Beginning a new one supersedes the
/// pending one, whose completion will then be ignored.
#[derive(Debug, Default)]
pub struct Transitions {
    next_id: u64,
    pending: Option<TransitionHandle>,
}

impl Transitions {
    pub fn begin(
        &mut self,
        target: ZoomState,
        animated: bool,
        duration: Duration,
    ) -> TransitionHandle {
        self.next_id += 1;
        let handle = TransitionHandle {
            id: self.next_id,
            target,
            animated,
            duration,
        };
        if let Some(superseded) = self.pending.take() {
            log::debug!("transition {} superseded by {}", superseded.id, handle.id);
        }
        if animated {
            self.pending = Some(handle);
        }
        handle
    }

    /// Removes and returns the pending transition if it has id `id`
    pub fn complete(&mut self, id: u64) -> Option<TransitionHandle> {
        match self.pending {
            Some(handle) if handle.id == id => self.pending.take(),
            _ => {
                log::warn!("ignoring completion of stale transition {id}");
                None
            }
        }
    }

    pub fn pending(&self) -> Option<&TransitionHandle> {
        self.pending.as_ref()
    }
}
