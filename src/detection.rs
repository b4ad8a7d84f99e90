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
use crate::transform::{AffineTransform, Rect};

/// One labeled rectangle returned by the external object detector.
///
/// `rect` is expressed in model-input pixel space; pass it through the
/// inverse of the frame-to-model transform to get sensor-frame coordinates,
/// and through a frame-to-screen transform before drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub id: String,
    pub label: String,
    pub confidence: f32,
    pub rect: Rect,
}

impl Detection {
    /// Returns a copy with its rectangle mapped through `transform`.
    pub fn mapped(&self, transform: &AffineTransform) -> Detection {
        Detection {
            id: self.id.clone(),
            label: self.label.clone(),
            confidence: self.confidence,
            rect: transform.map_rect(self.rect),
        }
    }
}

/// Remaps a detector batch into another coordinate space, dropping anything
/// below the confidence floor.
///
/// # Arguments
///
/// * `detections` - Detector output, rectangles in the source space.
/// * `transform` - Source-to-destination space transform.
/// * `min_confidence` - Detections strictly below this are discarded.
///
pub fn project_detections(
    detections: &[Detection],
    transform: &AffineTransform,
    min_confidence: f32,
) -> Vec<Detection> {
    detections
        .iter()
        .filter(|detection| detection.confidence >= min_confidence)
        .map(|detection| detection.mapped(transform))
        .collect()
}
