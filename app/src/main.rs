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
use std::time::Instant;

use sensorframe::{
    build_frame_transform, project_detections, yuv420_byte_size, yuv420_to_argb,
    yuv_nv21_to_argb, Detection, Rect, YuvPlanarFrame, YuvSemiPlanarFrame,
};

/// Synthesizes a planar frame with a smooth gradient so the PNG dump is easy
/// to eyeball for channel swaps.
fn synthetic_planes(width: u32, height: u32) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let chroma_width = width.div_ceil(2) as usize;
    let chroma_height = height.div_ceil(2) as usize;
    let mut y_plane = vec![0u8; width as usize * height as usize];
    let mut u_plane = vec![0u8; chroma_width * chroma_height];
    let mut v_plane = vec![0u8; chroma_width * chroma_height];
    for j in 0..height as usize {
        for i in 0..width as usize {
            y_plane[j * width as usize + i] = ((i * 255) / width as usize) as u8;
        }
    }
    for j in 0..chroma_height {
        for i in 0..chroma_width {
            u_plane[j * chroma_width + i] = ((j * 255) / chroma_height) as u8;
            v_plane[j * chroma_width + i] = 255 - ((j * 255) / chroma_height) as u8;
        }
    }
    (y_plane, u_plane, v_plane)
}

fn argb_to_rgba_bytes(argb: &[u32]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(argb.len() * 4);
    for &px in argb {
        rgba.push(((px >> 16) & 0xff) as u8);
        rgba.push(((px >> 8) & 0xff) as u8);
        rgba.push((px & 0xff) as u8);
        rgba.push((px >> 24) as u8);
    }
    rgba
}

fn main() {
    let width = 1280u32;
    let height = 720u32;

    let (y_plane, u_plane, v_plane) = synthetic_planes(width, height);
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
    let start_time = Instant::now();
    yuv420_to_argb(&frame, &mut argb).unwrap();
    println!("planar conversion time: {:?}", start_time.elapsed());

    image::save_buffer(
        "converted_planar.png",
        &argb_to_rgba_bytes(&argb),
        width,
        height,
        image::ExtendedColorType::Rgba8,
    )
    .unwrap();

    // Same content through the legacy single-buffer path.
    let mut nv21 = Vec::with_capacity(yuv420_byte_size(width, height));
    nv21.extend_from_slice(&y_plane);
    for (u, v) in u_plane.iter().zip(v_plane.iter()) {
        nv21.push(*v);
        nv21.push(*u);
    }
    let semi_planar = YuvSemiPlanarFrame {
        buffer: &nv21,
        width,
        height,
    };
    let start_time = Instant::now();
    yuv_nv21_to_argb(&semi_planar, &mut argb).unwrap();
    println!("nv21 conversion time: {:?}", start_time.elapsed());

    // Transform chain: frame -> 300x300 model crop and back, then to a
    // portrait canvas.
    let frame_to_model = build_frame_transform(width, height, 300, 300, 0, true).unwrap();
    let model_to_frame = frame_to_model.invert().unwrap();
    let mut frame_to_screen = build_frame_transform(width, height, 1080, 1920, 90, true).unwrap();
    frame_to_screen.post_translate(0.0, 240.0);

    let detections = vec![Detection {
        id: "0".to_string(),
        label: "fish".to_string(),
        confidence: 0.87,
        rect: Rect::new(60.0, 90.0, 180.0, 150.0),
    }];
    let in_frame = project_detections(&detections, &model_to_frame, 0.5);
    let on_screen = project_detections(&in_frame, &frame_to_screen, 0.5);
    for (frame_det, screen_det) in in_frame.iter().zip(on_screen.iter()) {
        println!(
            "{} ({:.0}%): frame {:?} -> screen {:?}",
            frame_det.label,
            frame_det.confidence * 100.0,
            frame_det.rect,
            screen_det.rect
        );
    }
}
