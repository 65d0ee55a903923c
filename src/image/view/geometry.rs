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

//! Layout math for a zoomable image viewport.
//!
//! Everything in here is a pure function of its inputs. Sizes are in viewport
//! points; the fit rect is the placement of the image at the minimum zoom
//! scale.

use crate::{
    config::ViewerConfig,
    rect::{PointD, RectD, SizeD},
};

use super::zoom::ZoomBounds;

/// Result of a double-tap zoom-in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTarget {
    /// Zoom scale to apply
    pub scale: f64,
    /// Frame of the zoomed image, anchored at the content origin
    pub target_rect: RectD,
    /// Part of the zoomed image to scroll into view, always inside `target_rect`
    pub visible_rect: RectD,
}

/// Layout after a pinch gesture settled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recentered {
    pub frame: RectD,
    pub content_size: SizeD,
    pub offset: PointD,
}

/// Places the image inside the viewport, centered and aspect-ratio preserving,
/// touching the viewport on its constraining axis.
///
/// `image_size.height()` must not be zero; use [`crate::ImageSpec::layout_size`]
/// to get the 1x1 fallback for absent images.
pub fn fit_rect(viewport: SizeD, image_size: SizeD) -> RectD {
    let ratio = image_size.ratio();

    let fit_size = if viewport.width() / ratio <= viewport.height() {
        // Width constrained
        SizeD::new(viewport.width(), viewport.width() / ratio)
    } else {
        // Height constrained
        SizeD::new(viewport.height() * ratio, viewport.height())
    };

    RectD::centered_in(fit_size, viewport)
}

/// Multiplier that makes the fit size cover the viewport on the axis where it
/// currently leaves empty space.
fn cover_multiplier(viewport: SizeD, fit_size: SizeD) -> f64 {
    if fit_size.width() < viewport.width() {
        viewport.width() / fit_size.width()
    } else {
        viewport.height() / fit_size.height()
    }
}

/// Largest allowed zoom scale: at least enough to cover the viewport, and
/// never less than `floor`.
pub fn max_zoom_scale(viewport: SizeD, fit_size: SizeD, floor: f64) -> f64 {
    let multiplier = cover_multiplier(viewport, fit_size);
    log::trace!("cover multiplier {multiplier} for fit {fit_size:?} in {viewport:?}");
    // f64::max ignores NaN, so a degenerate viewport falls back to the floor
    multiplier.max(floor)
}

/// Zoom bounds for an image of `image_size` shown in `viewport`.
///
/// The maximum never drops below the minimum, even when the configured floor
/// is lower than the minimum zoom level.
pub fn zoom_bounds(viewport: SizeD, image_size: SizeD, config: &ViewerConfig) -> ZoomBounds {
    let fit = fit_rect(viewport, image_size);
    let floor = config.max_zoom_floor.max(config.min_zoom_level);
    ZoomBounds {
        min_scale: config.min_zoom_level,
        max_scale: max_zoom_scale(viewport, fit.size(), floor),
    }
}

/// Computes where a double tap at `tap` zooms to.
///
/// The tap position is mapped proportionally from the fit rect onto the zoomed
/// image, the viewport is centered on it and the result is clipped to the
/// zoomed image so it never extends past an edge. Returns `None` when the tap
/// hit the letterbox area outside the fit rect.
pub fn double_tap_zoom_target(
    viewport: SizeD,
    fit: &RectD,
    tap: PointD,
    floor: f64,
) -> Option<ZoomTarget> {
    if !fit.contains(tap) {
        log::trace!("double tap at {tap:?} outside fit rect {fit:?}");
        return None;
    }

    let fit_size = fit.size();
    let scale = max_zoom_scale(viewport, fit_size, floor);
    let zoomed_rect = RectD::new_from_size(fit_size * scale);

    let axis_ratio = (tap - fit.origin()).normalize_by_size(fit_size);
    let zoomed_center = axis_ratio.scale_by_size(zoomed_rect.size());
    let desired = RectD::from_origin_size(zoomed_center.offset_by_half(viewport), viewport);

    Some(ZoomTarget {
        scale,
        target_rect: zoomed_rect,
        visible_rect: desired.intersect(&zoomed_rect),
    })
}

/// Re-lays out the image once a pinch gesture settled at `scale`.
///
/// When the zoomed image is shorter than the viewport it is pinned to the top
/// and its frame stretched to the viewport height; narrower images are pinned
/// left the same way. Otherwise the frame is just the scaled fit size.
pub fn recenter_after_zoom_end(
    viewport: SizeD,
    fit: &RectD,
    scale: f64,
    content_size: SizeD,
    offset: PointD,
) -> Recentered {
    let fit_size = fit.size();

    let (frame_size, offset) = if fit_size.height() * scale < viewport.height() {
        (
            SizeD::new(content_size.width(), viewport.height()),
            offset.with_y(0.0),
        )
    } else if fit_size.width() * scale < viewport.width() {
        (
            SizeD::new(viewport.width(), content_size.height()),
            offset.with_x(0.0),
        )
    } else {
        (fit_size * scale, offset)
    };

    Recentered {
        frame: RectD::new_from_size(frame_size),
        content_size: frame_size,
        offset,
    }
}

/// Limits a scroll offset to what a scroll view of `viewport` over `content`
/// can actually show.
pub fn clamp_offset(offset: PointD, content: SizeD, viewport: SizeD) -> PointD {
    let max_x = (content.width() - viewport.width()).max(0.0);
    let max_y = (content.height() - viewport.height()).max(0.0);
    PointD::new(offset.x().clamp(0.0, max_x), offset.y().clamp(0.0, max_y))
}
