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

pub mod view;

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::rect::SizeD;

static IMAGE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a loaded image. Two specs with the same id are the same image,
/// even if the host reports a different size for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(u64);

impl ImageId {
    /// Allocates a fresh, process-unique id
    pub fn next() -> Self {
        Self(IMAGE_ID.fetch_add(1, Ordering::SeqCst))
    }

    /// Wraps a host-provided id, e.g. an index into the host's image store
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// The natural size of an image displayed by a viewer. The bitmap itself
/// stays with the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSpec {
    pub id: ImageId,
    pub size: SizeD,
}

impl ImageSpec {
    /// New image with a freshly allocated id
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_id(ImageId::next(), width, height)
    }

    pub fn with_id(id: ImageId, width: f64, height: f64) -> Self {
        Self {
            id,
            size: SizeD::new(width, height),
        }
    }

    /// Size used for layout. An absent image counts as a 1x1 unit image so
    /// ratio computations never divide by zero.
    pub fn layout_size(image: Option<&ImageSpec>) -> SizeD {
        image.map(|i| i.size).unwrap_or(SizeD::square(1.0))
    }
}
