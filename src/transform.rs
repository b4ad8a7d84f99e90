/*
 * Copyright (c) the sensorframe developers, 3/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::FrameError;

/// Axis-aligned rectangle in one of the three pipeline coordinate spaces
/// (sensor frame, model input, display canvas).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    #[inline]
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// 2D affine transform over the six non-homogeneous coefficients:
///
/// ```text
/// x' = scale_x * x + skew_x * y + trans_x
/// y' = skew_y  * x + scale_y * y + trans_y
/// ```
///
/// Composition uses post-op semantics: each `post_*` call left-multiplies the
/// running transform, so operations apply in call order to already-mapped
/// points. Transforms are cheap to build and are expected to be rebuilt
/// whenever frame size, crop size or rotation changes rather than mutated
/// across frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AffineTransform {
    pub scale_x: f32,
    pub skew_x: f32,
    pub trans_x: f32,
    pub skew_y: f32,
    pub scale_y: f32,
    pub trans_y: f32,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Exact sine/cosine for quarter turns so that rectangles mapped through a
/// 90-degree-multiple rotation stay bit-clean axis-aligned; any other angle
/// goes through the float path.
#[inline]
fn rotation_sin_cos(degrees: f32) -> (f32, f32) {
    match degrees.rem_euclid(360.0) {
        d if d == 0.0 => (0.0, 1.0),
        d if d == 90.0 => (1.0, 0.0),
        d if d == 180.0 => (0.0, -1.0),
        d if d == 270.0 => (-1.0, 0.0),
        d => d.to_radians().sin_cos(),
    }
}

impl AffineTransform {
    #[inline]
    pub fn identity() -> Self {
        AffineTransform {
            scale_x: 1.0,
            skew_x: 0.0,
            trans_x: 0.0,
            skew_y: 0.0,
            scale_y: 1.0,
            trans_y: 0.0,
        }
    }

    /// self = other * self
    fn post_concat(&mut self, other: &AffineTransform) {
        *self = AffineTransform {
            scale_x: other.scale_x * self.scale_x + other.skew_x * self.skew_y,
            skew_x: other.scale_x * self.skew_x + other.skew_x * self.scale_y,
            trans_x: other.scale_x * self.trans_x + other.skew_x * self.trans_y + other.trans_x,
            skew_y: other.skew_y * self.scale_x + other.scale_y * self.skew_y,
            scale_y: other.skew_y * self.skew_x + other.scale_y * self.scale_y,
            trans_y: other.skew_y * self.trans_x + other.scale_y * self.trans_y + other.trans_y,
        };
    }

    /// Composes a translation applied after the current transform. Also the
    /// re-centering step used to place a scaled frame inside a larger canvas.
    pub fn post_translate(&mut self, dx: f32, dy: f32) {
        self.trans_x += dx;
        self.trans_y += dy;
    }

    /// Composes a rotation about the origin applied after the current
    /// transform, clockwise in the y-down raster convention.
    pub fn post_rotate(&mut self, degrees: f32) {
        let (sin, cos) = rotation_sin_cos(degrees);
        self.post_concat(&AffineTransform {
            scale_x: cos,
            skew_x: -sin,
            trans_x: 0.0,
            skew_y: sin,
            scale_y: cos,
            trans_y: 0.0,
        });
    }

    /// Composes an axis scale applied after the current transform.
    pub fn post_scale(&mut self, sx: f32, sy: f32) {
        self.post_concat(&AffineTransform {
            scale_x: sx,
            skew_x: 0.0,
            trans_x: 0.0,
            skew_y: 0.0,
            scale_y: sy,
            trans_y: 0.0,
        });
    }

    #[inline]
    pub fn map_point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.scale_x * x + self.skew_x * y + self.trans_x,
            self.skew_y * x + self.scale_y * y + self.trans_y,
        )
    }

    /// Maps all four corners and returns the axis-aligned bounding box of the
    /// result. For the quarter-turn/scale/translate transforms this pipeline
    /// builds the box is exact; for other rotations it is the loose hull of
    /// the rotated quadrilateral.
    pub fn map_rect(&self, rect: Rect) -> Rect {
        let corners = [
            self.map_point(rect.left, rect.top),
            self.map_point(rect.right, rect.top),
            self.map_point(rect.right, rect.bottom),
            self.map_point(rect.left, rect.bottom),
        ];
        let mut mapped = Rect::new(
            f32::INFINITY,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::NEG_INFINITY,
        );
        for (x, y) in corners {
            mapped.left = mapped.left.min(x);
            mapped.top = mapped.top.min(y);
            mapped.right = mapped.right.max(x);
            mapped.bottom = mapped.bottom.max(y);
        }
        mapped
    }

    /// Exact algebraic inverse.
    ///
    /// Succeeds for every transform built by [`build_frame_transform`], which
    /// rejects degenerate sizes before any scale is composed. Used to move
    /// detector rectangles from model-input space back to sensor-frame space.
    ///
    /// returns: Result<[AffineTransform], [FrameError]>
    ///
    pub fn invert(&self) -> Result<AffineTransform, FrameError> {
        let det = self.scale_x * self.scale_y - self.skew_x * self.skew_y;
        if det == 0.0 || !det.is_finite() {
            return Err(FrameError::NonInvertibleTransform);
        }
        Ok(AffineTransform {
            scale_x: self.scale_y / det,
            skew_x: -self.skew_x / det,
            trans_x: (self.skew_x * self.trans_y - self.scale_y * self.trans_x) / det,
            skew_y: -self.skew_y / det,
            scale_y: self.scale_x / det,
            trans_y: (self.skew_y * self.trans_x - self.scale_x * self.trans_y) / det,
        })
    }
}

/// Builds the transform mapping sensor-frame coordinates into destination
/// coordinates (model-input crop or display canvas), accounting for the
/// sensor rotation relative to the device's natural orientation.
///
/// # Arguments
///
/// * `src_width` / `src_height` - Captured frame extents.
/// * `dst_width` / `dst_height` - Destination extents.
/// * `rotation_degrees` - Rotation to apply first, normally a multiple of 90.
///   Other values are accepted best-effort with a warning, the result is not
///   axis-aligned and [`AffineTransform::map_rect`] boxes become loose.
/// * `maintain_aspect_ratio` - When true, scales uniformly by `max(sx, sy)`
///   so the destination is filled completely and the source may be cropped at
///   the edges; otherwise stretches each axis independently.
///
/// returns: Result<[AffineTransform], [FrameError]>
///
/// Zero extents on either side are rejected with [`FrameError::ZeroBaseSize`]
/// so the produced transform is always invertible.
pub fn build_frame_transform(
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
    rotation_degrees: i32,
    maintain_aspect_ratio: bool,
) -> Result<AffineTransform, FrameError> {
    if src_width == 0 || src_height == 0 || dst_width == 0 || dst_height == 0 {
        return Err(FrameError::ZeroBaseSize);
    }

    let mut transform = AffineTransform::identity();

    if rotation_degrees != 0 {
        if rotation_degrees % 90 != 0 {
            tracing::warn!(
                rotation_degrees,
                "rotation is not a multiple of 90, mapped rectangles will not stay axis-aligned"
            );
        }
        // Rotate about the source center.
        transform.post_translate(-(src_width as f32) / 2.0, -(src_height as f32) / 2.0);
        transform.post_rotate(rotation_degrees as f32);
    }

    // Quarter turns with an odd count swap the effective source axes.
    let transpose = (rotation_degrees.abs() + 90) % 180 == 0;
    let (in_width, in_height) = if transpose {
        (src_height, src_width)
    } else {
        (src_width, src_height)
    };

    if in_width != dst_width || in_height != dst_height {
        let scale_x = dst_width as f32 / in_width as f32;
        let scale_y = dst_height as f32 / in_height as f32;
        if maintain_aspect_ratio {
            let scale = scale_x.max(scale_y);
            transform.post_scale(scale, scale);
        } else {
            transform.post_scale(scale_x, scale_y);
        }
    }

    if rotation_degrees != 0 {
        // Back from the origin-centered reference into destination space.
        transform.post_translate(dst_width as f32 / 2.0, dst_height as f32 / 2.0);
    }

    Ok(transform)
}
