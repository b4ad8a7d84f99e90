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
use criterion::{criterion_group, criterion_main, Criterion};
use sensorframe::{
    yuv420_byte_size, yuv420_to_argb, yuv_nv21_to_argb, YuvPlanarFrame, YuvSemiPlanarFrame,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920u32;
    let height = 1080u32;
    let chroma_width = width.div_ceil(2) as usize;
    let chroma_height = height.div_ceil(2) as usize;

    let y_plane: Vec<u8> = (0..width as usize * height as usize)
        .map(|i| (i % 256) as u8)
        .collect();
    let u_plane: Vec<u8> = (0..chroma_width * chroma_height)
        .map(|i| ((i * 3) % 256) as u8)
        .collect();
    let v_plane: Vec<u8> = (0..chroma_width * chroma_height)
        .map(|i| ((i * 7) % 256) as u8)
        .collect();

    let mut interleaved = vec![0u8; chroma_width * chroma_height * 2];
    for i in 0..chroma_width * chroma_height {
        interleaved[i * 2] = u_plane[i];
        interleaved[i * 2 + 1] = v_plane[i];
    }

    let mut nv21 = Vec::with_capacity(yuv420_byte_size(width, height));
    nv21.extend_from_slice(&y_plane);
    for i in 0..chroma_width * chroma_height {
        nv21.push(v_plane[i]);
        nv21.push(u_plane[i]);
    }

    let mut argb = vec![0u32; width as usize * height as usize];

    c.bench_function("sensorframe: planar 1080p to argb", |b| {
        let frame = YuvPlanarFrame {
            y_plane: &y_plane,
            y_stride: width,
            u_plane: &u_plane,
            v_plane: &v_plane,
            uv_stride: chroma_width as u32,
            uv_pixel_stride: 1,
            width,
            height,
        };
        b.iter(|| {
            yuv420_to_argb(&frame, &mut argb).unwrap();
        })
    });

    c.bench_function("sensorframe: interleaved chroma 1080p to argb", |b| {
        let frame = YuvPlanarFrame {
            y_plane: &y_plane,
            y_stride: width,
            u_plane: &interleaved,
            v_plane: &interleaved[1..],
            uv_stride: chroma_width as u32 * 2,
            uv_pixel_stride: 2,
            width,
            height,
        };
        b.iter(|| {
            yuv420_to_argb(&frame, &mut argb).unwrap();
        })
    });

    c.bench_function("sensorframe: nv21 1080p to argb", |b| {
        let frame = YuvSemiPlanarFrame {
            buffer: &nv21,
            width,
            height,
        };
        b.iter(|| {
            yuv_nv21_to_argb(&frame, &mut argb).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
