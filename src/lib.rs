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

//! Zoom and layout engine for an embeddable image viewport.
//!
//! [`image::view::geometry`] holds the pure layout math (fit rect, zoom
//! bounds, double-tap target, post-pinch recentering). [`ZoomController`]
//! sequences it for one viewer and reports state changes to a
//! [`ZoomObserver`]. Applying the results to an actual scroll view, and
//! animating them, is left to the host.

pub mod carousel;
pub mod config;
pub mod image;
pub mod rect;

pub use carousel::{CarouselSync, ZoomingFlag};
pub use config::ViewerConfig;
pub use image::view::{
    TransitionHandle, ZoomBounds, ZoomController, ZoomObserver, ZoomPhase, ZoomState,
};
pub use image::{ImageId, ImageSpec};
pub use rect::{PointD, RectD, SizeD};
