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
use crate::frame_error::check_argb_destination;
use crate::frame_support::YuvNvOrder;
use crate::frames::{YuvPlanarFrame, YuvSemiPlanarFrame};
use crate::FrameError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// 2^18 - 1, clamps the fixed point RGB accumulators before their 18 bit
/// intermediates are narrowed to eight bits per channel.
const MAX_CHANNEL_VALUE: i32 = 262143;

/// Converts one YUV sample triple to a packed, fully opaque ARGB word.
///
/// Fixed point BT.601-style arithmetic with coefficients scaled by 1024. The
/// floating point equivalent is:
///
/// ```text
/// r = 1.164 * (y - 16) + 1.596 * (v - 128)
/// g = 1.164 * (y - 16) - 0.813 * (v - 128) - 0.391 * (u - 128)
/// b = 1.164 * (y - 16) + 2.018 * (u - 128)
/// ```
///
/// The integer shift and mask sequence is load bearing: both the detector
/// input and saved preview images depend on its exact rounding, so it must
/// not be replaced with an equivalent-looking normalization.
#[inline]
pub fn yuv_to_argb_word(y: u8, u: u8, v: u8) -> u32 {
    let y_value = (y as i32 - 16).max(0);
    let u_value = u as i32 - 128;
    let v_value = v as i32 - 128;

    let y1192 = 1192 * y_value;
    let r = (y1192 + 1634 * v_value).clamp(0, MAX_CHANNEL_VALUE);
    let g = (y1192 - 833 * v_value - 400 * u_value).clamp(0, MAX_CHANNEL_VALUE);
    let b = (y1192 + 2066 * u_value).clamp(0, MAX_CHANNEL_VALUE);

    0xff00_0000u32
        | ((r << 6) & 0xff_0000) as u32
        | ((g >> 2) & 0xff00) as u32
        | ((b >> 10) & 0xff) as u32
}

/// Convert a planar YUV 4:2:0 camera frame to packed ARGB.
///
/// Writes one ARGB word per pixel, row major, into `argb`. Handles both fully
/// planar chroma (`uv_pixel_stride == 1`) and the interleaved chroma layout
/// camera planes expose (`uv_pixel_stride == 2`), where the U and V views
/// alias the same buffer at adjacent offsets.
///
/// # Arguments
///
/// * `frame` - Source planar frame with per plane strides.
/// * `argb` - Destination, must hold exactly `width * height` words.
///
/// returns: Result<(), [FrameError]>
///
/// All preconditions are verified before any pixel is written; on error the
/// destination is untouched and the caller decides whether to drop the frame.
pub fn yuv420_to_argb(frame: &YuvPlanarFrame, argb: &mut [u32]) -> Result<(), FrameError> {
    check_argb_destination(argb, frame.width, frame.height)?;
    frame.check_constraints()?;

    let width = frame.width as usize;
    let y_stride = frame.y_stride as usize;
    let uv_stride = frame.uv_stride as usize;
    let uv_pixel_stride = frame.uv_pixel_stride as usize;
    let y_plane = frame.y_plane;
    let u_plane = frame.u_plane;
    let v_plane = frame.v_plane;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = argb.par_chunks_exact_mut(width);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = argb.chunks_exact_mut(width);
    }

    iter.enumerate().for_each(|(j, argb_row)| {
        let y_row = &y_plane[y_stride * j..][..width];
        let uv_row_offset = uv_stride * (j >> 1);
        for (i, (dst, &y_src)) in argb_row.iter_mut().zip(y_row.iter()).enumerate() {
            let uv_offset = uv_row_offset + (i >> 1) * uv_pixel_stride;
            *dst = yuv_to_argb_word(y_src, u_plane[uv_offset], v_plane[uv_offset]);
        }
    });

    Ok(())
}

fn yuv_nv_to_argb_impl<const NV_ORDER: u8>(
    frame: &YuvSemiPlanarFrame,
    argb: &mut [u32],
) -> Result<(), FrameError> {
    let order: YuvNvOrder = NV_ORDER.into();
    check_argb_destination(argb, frame.width, frame.height)?;
    frame.check_constraints()?;

    let width = frame.width as usize;
    let height = frame.height as usize;
    let chroma_stride = width.div_ceil(2) * 2;
    let (y_plane, chroma_plane) = frame.buffer.split_at(width * height);

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = argb.par_chunks_exact_mut(width);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = argb.chunks_exact_mut(width);
    }

    iter.enumerate().for_each(|(j, argb_row)| {
        let y_row = &y_plane[width * j..][..width];
        let chroma_row = &chroma_plane[chroma_stride * (j >> 1)..][..chroma_stride];

        for ((argb_pair, y_pair), chroma_pair) in argb_row
            .chunks_mut(2)
            .zip(y_row.chunks(2))
            .zip(chroma_row.chunks_exact(2))
        {
            let (u_value, v_value) = match order {
                YuvNvOrder::Uv => (chroma_pair[0], chroma_pair[1]),
                YuvNvOrder::Vu => (chroma_pair[1], chroma_pair[0]),
            };
            for (dst, &y_src) in argb_pair.iter_mut().zip(y_pair.iter()) {
                *dst = yuv_to_argb_word(y_src, u_value, v_value);
            }
        }
    });

    Ok(())
}

/// Convert a semi-planar NV21 frame to packed ARGB.
///
/// NV21 is the legacy camera preview layout: a full resolution luma plane
/// followed immediately by interleaved V,U pairs for every 2x2 block. The
/// V-before-U order matters, the swapped order inverts color.
///
/// # Arguments
///
/// * `frame` - Source semi-planar frame, sized per [`crate::yuv420_byte_size`].
/// * `argb` - Destination, must hold exactly `width * height` words.
///
/// returns: Result<(), [FrameError]>
///
pub fn yuv_nv21_to_argb(frame: &YuvSemiPlanarFrame, argb: &mut [u32]) -> Result<(), FrameError> {
    yuv_nv_to_argb_impl::<{ YuvNvOrder::Vu as u8 }>(frame, argb)
}

/// Convert a semi-planar NV12 frame (U,V chroma order) to packed ARGB.
///
/// Same contract as [`yuv_nv21_to_argb`].
pub fn yuv_nv12_to_argb(frame: &YuvSemiPlanarFrame, argb: &mut [u32]) -> Result<(), FrameError> {
    yuv_nv_to_argb_impl::<{ YuvNvOrder::Uv as u8 }>(frame, argb)
}
