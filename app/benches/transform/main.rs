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
use sensorframe::{build_frame_transform, Rect};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("sensorframe: build rotated transform", |b| {
        b.iter(|| build_frame_transform(1920, 1080, 300, 300, 90, true).unwrap())
    });

    let transform = build_frame_transform(1920, 1080, 300, 300, 90, true).unwrap();
    let inverse = transform.invert().unwrap();
    let boxes: Vec<Rect> = (0..100)
        .map(|i| {
            let offset = i as f32 * 2.0;
            Rect::new(offset, offset, offset + 48.0, offset + 32.0)
        })
        .collect();

    c.bench_function("sensorframe: map 100 detection boxes round trip", |b| {
        b.iter(|| {
            for rect in &boxes {
                let mapped = transform.map_rect(*rect);
                std::hint::black_box(inverse.map_rect(mapped));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
