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

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// A rectangle defined by two corner points (x0, y0) and (x1, y1).
/// The rectangle is valid when x0 <= x1 and y0 <= y1.
/// Empty rectangles have x0 >= x1 or y0 >= y1.
///
/// Generic over numeric types T that support basic arithmetic and comparison operations.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect<T> {
    pub x0: T,
    pub y0: T,
    pub x1: T,
    pub y1: T,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size<T> {
    width: T,
    height: T,
}

impl<T> Size<T>
where
    T: Copy,
{
    pub fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    /// Square size with both sides set to `side`
    pub fn square(side: T) -> Self {
        Self::new(side, side)
    }

    pub fn width(&self) -> T {
        self.width
    }

    pub fn height(&self) -> T {
        self.height
    }
}

impl<T> Size<T>
where
    T: Copy + PartialOrd,
{
    /// Returns true when `self` is larger than `other` along at least one axis.
    ///
    /// This is deliberately not an ordering: two sizes can each exceed the
    /// other (a wide one and a tall one). Used to detect content overflowing
    /// the viewport in any direction.
    pub fn exceeds_either_axis(&self, other: &Self) -> bool {
        other.width < self.width || other.height < self.height
    }

    /// Component-wise maximum of both sizes.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            if self.width >= other.width {
                self.width
            } else {
                other.width
            },
            if self.height >= other.height {
                self.height
            } else {
                other.height
            },
        )
    }
}

impl Size<f64> {
    /// Aspect ratio (width / height).
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl<T> std::ops::Mul<T> for Size<T>
where
    T: Copy + std::ops::Mul<Output = T>,
{
    type Output = Size<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Size::new(self.width * rhs, self.height * rhs)
    }
}

impl<T> std::ops::Div<T> for Size<T>
where
    T: Copy + std::ops::Div<Output = T>,
{
    type Output = Size<T>;

    fn div(self, rhs: T) -> Self::Output {
        Size::new(self.width / rhs, self.height / rhs)
    }
}

impl<T> std::ops::Sub for Size<T>
where
    T: Copy + std::ops::Sub<Output = T>,
{
    type Output = Size<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Size::new(self.width - rhs.width, self.height - rhs.height)
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorPoint<T> {
    x: T,
    y: T,
}

impl<T> VectorPoint<T>
where
    T: Default
        + Copy
        + std::ops::Add<Output = T>
        + std::ops::Sub<Output = T>
        + std::ops::Mul<Output = T>
        + std::ops::Div<Output = T>,
{
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    /// Returns a copy with the horizontal component replaced.
    pub fn with_x(&self, x: T) -> Self {
        Self::new(x, self.y)
    }

    /// Returns a copy with the vertical component replaced.
    pub fn with_y(&self, y: T) -> Self {
        Self::new(self.x, y)
    }

    /// Component-wise product with a size, e.g. mapping a normalized
    /// (0..1, 0..1) position onto a concrete extent.
    pub fn scale_by_size(&self, size: Size<T>) -> Self {
        Self::new(self.x * size.width(), self.y * size.height())
    }

    /// Component-wise division by a size, the inverse of [`Self::scale_by_size`].
    pub fn normalize_by_size(&self, size: Size<T>) -> Self {
        Self::new(self.x / size.width(), self.y / size.height())
    }
}

impl VectorPoint<f64> {
    /// Returns a new point moved up and left by half of `size`, i.e. the
    /// top-left corner of a `size` rect centered on this point.
    pub fn offset_by_half(&self, size: SizeD) -> Self {
        Self::new(self.x - size.width() / 2.0, self.y - size.height() / 2.0)
    }
}

impl<T> std::ops::Add for VectorPoint<T>
where
    T: Copy + std::ops::Add<Output = T>,
{
    type Output = VectorPoint<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Output {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T> std::ops::Sub for VectorPoint<T>
where
    T: Copy + std::ops::Sub<Output = T>,
{
    type Output = VectorPoint<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T> Rect<T>
where
    T: Copy
        + PartialOrd
        + std::ops::Add<Output = T>
        + std::ops::Sub<Output = T>
        + std::ops::Mul<Output = T>
        + std::ops::Div<Output = T>
        + Debug
        + Default,
{
    /// Creates a new rectangle with the given coordinates.
    /// No validation is performed - the rectangle may be invalid or empty.
    pub const fn new(x0: T, y0: T, x1: T, y1: T) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle anchored at the origin (0, 0) with the given size.
    pub fn new_from_size(size: Size<T>) -> Self {
        Self::new(T::default(), T::default(), size.width, size.height)
    }

    pub fn from_origin_size(origin: VectorPoint<T>, size: Size<T>) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }

    /// Returns true if the rectangle is empty (has zero or negative area).
    /// An empty rectangle has x0 >= x1 or y0 >= y1.
    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Returns true if the point is contained within the rectangle.
    /// Uses half-open intervals: [x0, x1) and [y0, y1).
    /// Returns false for empty rectangles.
    pub fn contains(&self, p: VectorPoint<T>) -> bool {
        if self.is_empty() {
            false
        } else {
            p.x >= self.x0 && p.x < self.x1 && p.y >= self.y0 && p.y < self.y1
        }
    }

    /// Returns true if `other` lies completely inside this rectangle.
    /// Edges may coincide.
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    /// Returns the width of the rectangle.
    /// Returns zero for empty rectangles.
    pub fn width(&self) -> T {
        if self.is_empty() {
            T::default()
        } else {
            self.x1 - self.x0
        }
    }

    /// Returns the height of the rectangle.
    /// Returns zero for empty rectangles.
    pub fn height(&self) -> T {
        if self.is_empty() {
            T::default()
        } else {
            self.y1 - self.y0
        }
    }

    /// Returns the size of the rectangle.
    /// Returns zero for empty rectangles.
    pub fn size(&self) -> Size<T> {
        if self.is_empty() {
            Size::default()
        } else {
            Size {
                width: self.x1 - self.x0,
                height: self.y1 - self.y0,
            }
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> VectorPoint<T> {
        VectorPoint {
            x: self.x0,
            y: self.y0,
        }
    }

    /// Returns the intersection of this rectangle with another rectangle.
    /// The intersection is the largest rectangle contained in both rectangles.
    /// Returns an empty rectangle if there is no intersection.
    pub fn intersect(&self, other: &Self) -> Self {
        let x0 = if self.x0 >= other.x0 {
            self.x0
        } else {
            other.x0
        };
        let y0 = if self.y0 >= other.y0 {
            self.y0
        } else {
            other.y0
        };
        let x1 = if self.x1 <= other.x1 {
            self.x1
        } else {
            other.x1
        };
        let y1 = if self.y1 <= other.y1 {
            self.y1
        } else {
            other.y1
        };

        Self::new(x0, y0, x1, y1)
    }
}

impl Rect<f64> {
    /// Rectangle of `size` centered inside `container`.
    pub fn centered_in(size: SizeD, container: SizeD) -> Self {
        let origin = (container - size) / 2.0;
        Self::from_origin_size(PointD::new(origin.width(), origin.height()), size)
    }
}

pub type RectD = Rect<f64>;
pub type SizeD = Size<f64>;
pub type PointD = VectorPoint<f64>;
