/*
 * Copyright (c) the sensorframe developers, 2/2025. All rights reserved.
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
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// All failures are detected before any per-pixel work begins; a failing call
/// never writes into the destination.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FrameError {
    /// Zero width or height, either on a frame or on a transform destination.
    ZeroBaseSize,
    /// Frame size overflows addressable memory.
    PointerOverflow,
    /// ARGB destination length differs from `width * height`.
    DestinationSizeMismatch(MismatchedSize),
    LumaPlaneMinimumSizeMismatch(MismatchedSize),
    ChromaPlaneMinimumSizeMismatch(MismatchedSize),
    /// A row stride smaller than the logical row width would silently wrap
    /// into the next row, so it is rejected up front.
    StrideSmallerThanWidth(MismatchedSize),
    /// Chroma pixel stride must be 1 (fully planar) or 2 (interleaved).
    UnsupportedChromaPixelStride(u32),
    /// Transform determinant is zero or non-finite. Never produced for
    /// transforms built by [`crate::build_frame_transform`].
    NonInvertibleTransform,
}

impl Display for FrameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::ZeroBaseSize => f.write_str("Zero sized frames are not supported"),
            FrameError::PointerOverflow => {
                f.write_str("Frame size overflow pointer capabilities")
            }
            FrameError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "ARGB destination must have exactly {} elements but it has {}",
                size.expected, size.received
            )),
            FrameError::LumaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane must have at least {} bytes but it has {}",
                size.expected, size.received
            )),
            FrameError::ChromaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane must have at least {} bytes but it has {}",
                size.expected, size.received
            )),
            FrameError::StrideSmallerThanWidth(size) => f.write_fmt(format_args!(
                "Row stride must be at least the row width {} but it is {}",
                size.expected, size.received
            )),
            FrameError::UnsupportedChromaPixelStride(stride) => f.write_fmt(format_args!(
                "Chroma pixel stride must be 1 or 2 but it is {stride}"
            )),
            FrameError::NonInvertibleTransform => {
                f.write_str("Transform determinant is zero or non-finite, cannot invert")
            }
        }
    }
}

impl Error for FrameError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), FrameError> {
    let (_, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(FrameError::PointerOverflow);
    }
    Ok(())
}

/// The packed ARGB destination must hold exactly one word per pixel.
#[inline]
pub(crate) fn check_argb_destination(
    arr: &[u32],
    width: u32,
    height: u32,
) -> Result<(), FrameError> {
    if width == 0 || height == 0 {
        return Err(FrameError::ZeroBaseSize);
    }
    check_overflow_v2(width as usize, height as usize)?;
    let expected = width as usize * height as usize;
    if arr.len() != expected {
        return Err(FrameError::DestinationSizeMismatch(MismatchedSize {
            expected,
            received: arr.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_y8_channel(
    data: &[u8],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), FrameError> {
    if width == 0 || height == 0 {
        return Err(FrameError::ZeroBaseSize);
    }
    if stride < width {
        return Err(FrameError::StrideSmallerThanWidth(MismatchedSize {
            expected: width as usize,
            received: stride as usize,
        }));
    }
    check_overflow_v2(stride as usize, height as usize)?;
    // The last row only needs `width` valid bytes, sensor padding after it is
    // allowed to be absent.
    let required = stride as usize * (height as usize - 1) + width as usize;
    if data.len() < required {
        return Err(FrameError::LumaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: required,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_chroma_420_channel(
    data: &[u8],
    stride: u32,
    pixel_stride: u32,
    image_width: u32,
    image_height: u32,
) -> Result<(), FrameError> {
    if image_width == 0 || image_height == 0 {
        return Err(FrameError::ZeroBaseSize);
    }
    if pixel_stride != 1 && pixel_stride != 2 {
        return Err(FrameError::UnsupportedChromaPixelStride(pixel_stride));
    }
    let chroma_width = image_width.div_ceil(2);
    let chroma_height = image_height.div_ceil(2);
    let min_row = (chroma_width - 1) as usize * pixel_stride as usize + 1;
    if (stride as usize) < min_row {
        return Err(FrameError::StrideSmallerThanWidth(MismatchedSize {
            expected: min_row,
            received: stride as usize,
        }));
    }
    check_overflow_v2(stride as usize, chroma_height as usize)?;
    let required = stride as usize * (chroma_height as usize - 1) + min_row;
    if data.len() < required {
        return Err(FrameError::ChromaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: required,
            received: data.len(),
        }));
    }
    Ok(())
}

/// Checks the single-buffer legacy layout: full resolution luma followed by
/// interleaved 2x2 subsampled chroma pairs.
#[inline]
pub(crate) fn check_interleaved_chroma(
    data: &[u8],
    width: u32,
    height: u32,
) -> Result<(), FrameError> {
    if width == 0 || height == 0 {
        return Err(FrameError::ZeroBaseSize);
    }
    check_overflow_v2(width as usize, height as usize)?;
    let required = crate::frame_support::yuv420_byte_size(width, height);
    if data.len() < required {
        return Err(FrameError::ChromaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: required,
            received: data.len(),
        }));
    }
    Ok(())
}
