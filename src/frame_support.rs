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

/// Byte order of the interleaved chroma plane in a semi-planar frame.
///
/// Swapping the order inverts red and blue, so callers must match the layout
/// the camera stack actually delivers (legacy Android previews are `Vu`).
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum YuvNvOrder {
    Uv = 0,
    Vu = 1,
}

impl From<u8> for YuvNvOrder {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => YuvNvOrder::Uv,
            1 => YuvNvOrder::Vu,
            _ => {
                panic!("Unknown NV order {value}")
            }
        }
    }
}

/// Byte footprint of a semi-planar YUV 4:2:0 buffer of the given dimensions.
///
/// The luminance plane takes one byte per pixel. Chroma works on 2x2 blocks,
/// so odd dimensions round up, and each block takes two bytes, one for each
/// chroma channel. Used by callers to size capture buffers.
#[inline]
pub fn yuv420_byte_size(width: u32, height: u32) -> usize {
    let luma_size = width as usize * height as usize;
    let chroma_size =
        (width as usize).div_ceil(2) * (height as usize).div_ceil(2) * 2;
    luma_size + chroma_size
}
