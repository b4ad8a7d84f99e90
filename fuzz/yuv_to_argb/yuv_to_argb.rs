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
use sensorframe::{
    yuv420_byte_size, yuv420_to_argb, yuv_nv12_to_argb, yuv_nv21_to_argb, yuv_to_argb_word,
    YuvPlanarFrame, YuvSemiPlanarFrame,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8)| {
    fuzz_planar(data.0, data.1, data.2, data.3, data.4);
    fuzz_semi_planar(data.0, data.1, data.2, data.3, data.4);
});

fn fuzz_planar(i_width: u8, i_height: u8, y_value: u8, u_value: u8, v_value: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let width = i_width as u32;
    let height = i_height as u32;
    let chroma_size = (width as usize).div_ceil(2) * (height as usize).div_ceil(2);
    let y_plane = vec![y_value; width as usize * height as usize];
    let u_plane = vec![u_value; chroma_size];
    let v_plane = vec![v_value; chroma_size];

    let frame = YuvPlanarFrame {
        y_plane: &y_plane,
        y_stride: width,
        u_plane: &u_plane,
        v_plane: &v_plane,
        uv_stride: width.div_ceil(2),
        uv_pixel_stride: 1,
        width,
        height,
    };

    let mut argb = vec![0u32; width as usize * height as usize];
    yuv420_to_argb(&frame, &mut argb).unwrap();

    let expected = yuv_to_argb_word(y_value, u_value, v_value);
    assert!(argb.iter().all(|&px| px == expected));
}

fn fuzz_semi_planar(i_width: u8, i_height: u8, y_value: u8, u_value: u8, v_value: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let width = i_width as u32;
    let height = i_height as u32;
    let mut buffer = vec![y_value; width as usize * height as usize];
    let chroma_size = (width as usize).div_ceil(2) * (height as usize).div_ceil(2);
    for _ in 0..chroma_size {
        buffer.push(v_value);
        buffer.push(u_value);
    }
    assert_eq!(buffer.len(), yuv420_byte_size(width, height));

    let frame = YuvSemiPlanarFrame {
        buffer: &buffer,
        width,
        height,
    };
    let mut argb = vec![0u32; width as usize * height as usize];
    yuv_nv21_to_argb(&frame, &mut argb).unwrap();
    let expected = yuv_to_argb_word(y_value, u_value, v_value);
    assert!(argb.iter().all(|&px| px == expected));

    yuv_nv12_to_argb(&frame, &mut argb).unwrap();
    let expected = yuv_to_argb_word(y_value, v_value, u_value);
    assert!(argb.iter().all(|&px| px == expected));
}
