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

#![no_main]

use libfuzzer_sys::fuzz_target;
use sensorframe::{build_frame_transform, FrameError, Rect};

fuzz_target!(|data: (u16, u16, u16, u16, i16, bool)| {
    let (src_w, src_h, dst_w, dst_h, rotation, keep_aspect) = data;

    let result = build_frame_transform(
        src_w as u32,
        src_h as u32,
        dst_w as u32,
        dst_h as u32,
        rotation as i32,
        keep_aspect,
    );
    if src_w == 0 || src_h == 0 || dst_w == 0 || dst_h == 0 {
        assert_eq!(result, Err(FrameError::ZeroBaseSize));
        return;
    }

    let transform = result.unwrap();
    // Non-degenerate extents always produce an invertible transform.
    let inverse = transform.invert().unwrap();

    let rect = Rect::new(0.0, 0.0, src_w as f32, src_h as f32);
    let mapped = transform.map_rect(rect);
    let round_tripped = inverse.map_rect(mapped);
    assert!(
        round_tripped.left.is_finite()
            && round_tripped.top.is_finite()
            && round_tripped.right.is_finite()
            && round_tripped.bottom.is_finite()
    );
});
