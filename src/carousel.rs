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

//! Keeps the viewers of a multi-image carousel in line with the page the
//! host is showing.

use std::cell::Cell;

use crate::image::view::{TransitionHandle, ZoomController, ZoomObserver};

/// Observer that remembers the last reported zooming state of a viewer.
#[derive(Debug, Default)]
pub struct ZoomingFlag(Cell<bool>);

impl ZoomingFlag {
    pub fn get(&self) -> bool {
        self.0.get()
    }
}

impl ZoomObserver for ZoomingFlag {
    fn zoom_state_changed(&self, is_zooming: bool) {
        self.0.set(is_zooming);
    }
}

/// Position of one viewer in a carousel, compared against the page the host
/// currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSync {
    index: usize,
    current_index: Option<usize>,
}

impl CarouselSync {
    /// Viewer at `index`; the host has not selected a page yet
    pub fn new(index: usize) -> Self {
        Self {
            index,
            current_index: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_current_index(&mut self, current_index: Option<usize>) {
        self.current_index = current_index;
    }

    pub fn is_current(&self) -> bool {
        self.current_index == Some(self.index)
    }

    /// Resets the viewer when it is out of sync with the carousel.
    ///
    /// A zoomed viewer that scrolled out of view snaps back without
    /// animation. The visible viewer is zoomed out with animation only when
    /// the host's `is_zooming` flag says it should not be zoomed, so a viewer
    /// the user is zooming right now is left alone.
    pub fn zoom_out_if_needed(
        &self,
        controller: &mut ZoomController,
        is_zooming: bool,
    ) -> Option<TransitionHandle> {
        if !controller.is_zoomed() {
            return None;
        }
        if !self.is_current() {
            log::debug!("viewer {} is off screen, resetting zoom", self.index);
            Some(controller.reset_zoom(false))
        } else if !is_zooming {
            Some(controller.reset_zoom(true))
        } else {
            None
        }
    }
}
