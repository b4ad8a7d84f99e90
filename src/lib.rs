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
//! Per-frame camera pipeline utilities: converting raw YUV 4:2:0 sensor
//! planes into packed ARGB pixels, and building the affine transforms that
//! move detection rectangles between sensor-frame, model-input and display
//! coordinate spaces.
//!
//! Both halves are pure and stateless across calls. Conversions write into a
//! caller-provided buffer and never allocate, so a capture loop can reuse the
//! same destination for every frame. Transforms are cheap to build and are
//! meant to be rebuilt whenever frame size or orientation changes.
#![forbid(unsafe_code)]

mod detection;
mod frame_error;
mod frame_support;
mod frames;
mod transform;
mod yuv_to_argb;

pub use detection::{project_detections, Detection};
pub use frame_error::{FrameError, MismatchedSize};
pub use frame_support::{yuv420_byte_size, YuvNvOrder};
pub use frames::{YuvPlanarFrame, YuvSemiPlanarFrame};
pub use transform::{build_frame_transform, AffineTransform, Rect};
pub use yuv_to_argb::{yuv420_to_argb, yuv_nv12_to_argb, yuv_nv21_to_argb, yuv_to_argb_word};
