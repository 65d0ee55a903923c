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

use serde::{Deserialize, Serialize};

use crate::{
    config::{DEFAULT_MAX_ZOOM_FLOOR, DEFAULT_MIN_ZOOM_LEVEL},
    rect::{PointD, RectD, SizeD},
};

/// The allowed zoom range of a viewer.
///
/// `max_scale` is derived from the viewport and image (see
/// [`super::geometry::max_zoom_scale`]) and is never below the configured floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBounds {
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_ZOOM_LEVEL,
            max_scale: DEFAULT_MAX_ZOOM_FLOOR,
        }
    }
}

impl ZoomBounds {
    /// Constrains `scale` to `[min_scale, max_scale]`
    pub fn clamp(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.min_scale;
        }
        scale.max(self.min_scale).min(self.max_scale.max(self.min_scale))
    }

    /// True when `scale` is above the at-rest scale
    pub fn is_zoomed(&self, scale: f64) -> bool {
        scale > self.min_scale
    }
}

/// Coarse state of a viewer, derived from its zoom scale.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum ZoomPhase {
    /// At rest: scale equals the minimum scale
    Idle,
    /// Scale is above the minimum scale
    Zoomed,
}

/// Zoom and scroll configuration of one viewer.
///
/// This is what the host applies to its scrollable surface: the zoom scale,
/// the frame of the image view inside the scrollable content, the content
/// size and the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomState {
    pub scale: f64,
    pub image_frame: RectD,
    pub content_size: SizeD,
    pub content_offset: PointD,
    pub is_zooming: bool,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::at_rest(SizeD::default(), &ZoomBounds::default())
    }
}

impl ZoomState {
    /// At-rest configuration: the image view covers exactly the viewport and
    /// nothing is scrolled.
    pub fn at_rest(viewport: SizeD, bounds: &ZoomBounds) -> Self {
        Self {
            scale: bounds.min_scale,
            image_frame: RectD::new_from_size(viewport),
            content_size: viewport,
            content_offset: PointD::default(),
            is_zooming: false,
        }
    }

    pub fn phase(&self) -> ZoomPhase {
        if self.is_zooming {
            ZoomPhase::Zoomed
        } else {
            ZoomPhase::Idle
        }
    }
}
