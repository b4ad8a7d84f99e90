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
use crate::frame_error::{check_chroma_420_channel, check_interleaved_chroma, check_y8_channel};
use crate::FrameError;

/// Borrowed view of a planar YUV 4:2:0 camera frame.
///
/// The three planes are read-only and owned by the caller; they only need to
/// stay alive for the duration of a conversion call. Strides are in bytes per
/// row and may exceed the logical width because of sensor alignment padding.
#[derive(Debug, Clone)]
pub struct YuvPlanarFrame<'a> {
    pub y_plane: &'a [u8],
    /// Bytes per luma row.
    pub y_stride: u32,
    pub u_plane: &'a [u8],
    pub v_plane: &'a [u8],
    /// Bytes per chroma row, shared by the U and V planes.
    pub uv_stride: u32,
    /// Distance in bytes between two consecutive chroma samples of one row:
    /// 1 for fully planar data, 2 when the camera interleaves chroma and the
    /// U and V views alias the same underlying buffer at adjacent offsets.
    pub uv_pixel_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl YuvPlanarFrame<'_> {
    pub fn check_constraints(&self) -> Result<(), FrameError> {
        check_y8_channel(self.y_plane, self.y_stride, self.width, self.height)?;
        check_chroma_420_channel(
            self.u_plane,
            self.uv_stride,
            self.uv_pixel_stride,
            self.width,
            self.height,
        )?;
        check_chroma_420_channel(
            self.v_plane,
            self.uv_stride,
            self.uv_pixel_stride,
            self.width,
            self.height,
        )?;
        Ok(())
    }
}

/// Borrowed view of a semi-planar YUV 4:2:0 frame in a single buffer: a full
/// resolution luma plane followed immediately by interleaved chroma pairs for
/// every 2x2 pixel block, as produced by legacy camera preview callbacks.
#[derive(Debug, Clone)]
pub struct YuvSemiPlanarFrame<'a> {
    pub buffer: &'a [u8],
    pub width: u32,
    pub height: u32,
}

impl YuvSemiPlanarFrame<'_> {
    pub fn check_constraints(&self) -> Result<(), FrameError> {
        check_interleaved_chroma(self.buffer, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame_support::yuv420_byte_size;
    use crate::frame_error::MismatchedSize;

    #[test]
    fn test_planar_constraints_accept_padded_strides() {
        let width = 6u32;
        let height = 4u32;
        let y_stride = 8u32;
        let uv_stride = 5u32;
        let y_plane = vec![0u8; y_stride as usize * height as usize];
        let u_plane = vec![0u8; uv_stride as usize * 2];
        let v_plane = vec![0u8; uv_stride as usize * 2];
        let frame = YuvPlanarFrame {
            y_plane: &y_plane,
            y_stride,
            u_plane: &u_plane,
            v_plane: &v_plane,
            uv_stride,
            uv_pixel_stride: 1,
            width,
            height,
        };
        frame.check_constraints().unwrap();
    }

    #[test]
    fn test_planar_constraints_reject_thin_stride() {
        let y_plane = vec![0u8; 16];
        let chroma = vec![0u8; 16];
        let frame = YuvPlanarFrame {
            y_plane: &y_plane,
            y_stride: 3,
            u_plane: &chroma,
            v_plane: &chroma,
            uv_stride: 2,
            uv_pixel_stride: 1,
            width: 4,
            height: 4,
        };
        assert_eq!(
            frame.check_constraints(),
            Err(FrameError::StrideSmallerThanWidth(MismatchedSize {
                expected: 4,
                received: 3,
            }))
        );
    }

    #[test]
    fn test_planar_constraints_reject_bad_pixel_stride() {
        let y_plane = vec![0u8; 16];
        let chroma = vec![0u8; 16];
        let frame = YuvPlanarFrame {
            y_plane: &y_plane,
            y_stride: 4,
            u_plane: &chroma,
            v_plane: &chroma,
            uv_stride: 4,
            uv_pixel_stride: 3,
            width: 4,
            height: 4,
        };
        assert_eq!(
            frame.check_constraints(),
            Err(FrameError::UnsupportedChromaPixelStride(3))
        );
    }

    #[test]
    fn test_semi_planar_constraints_require_full_footprint() {
        let width = 6u32;
        let height = 4u32;
        let buffer = vec![0u8; yuv420_byte_size(width, height)];
        let frame = YuvSemiPlanarFrame {
            buffer: &buffer,
            width,
            height,
        };
        frame.check_constraints().unwrap();

        let short = YuvSemiPlanarFrame {
            buffer: &buffer[..buffer.len() - 1],
            width,
            height,
        };
        assert!(matches!(
            short.check_constraints(),
            Err(FrameError::ChromaPlaneMinimumSizeMismatch(_))
        ));
    }
}
