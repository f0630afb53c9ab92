//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::{Rectf, Vec2f, rect};

/// Returns the overlap of `a` and `b`, or the all-zero rectangle when they are disjoint.
pub fn intersect_rect(a: Rectf, b: Rectf) -> Rectf { a.intersect(&b).unwrap_or_default() }

/// Half-open containment test: the right and bottom edges are outside, so two rectangles sharing an edge
/// never both claim the pointer and an empty rectangle contains nothing. `Rect::contains` includes both
/// edges, which is why it is not used for hit-testing.
pub fn rect_contains(r: Rectf, p: Vec2f) -> bool { p.x >= r.x && p.x < r.x + r.width && p.y >= r.y && p.y < r.y + r.height }

/// Returns `true` when the rectangle covers no area.
pub fn is_empty_rect(r: Rectf) -> bool { r.width <= 0.0 || r.height <= 0.0 }

/// Translates a rectangle by `d`.
pub fn offset_rect(r: Rectf, d: Vec2f) -> Rectf { rect(r.x + d.x, r.y + d.y, r.width, r.height) }

/// Clamps `v` to `[lo, hi]`. When `hi < lo` the result is `lo`.
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    let v = if v > hi { hi } else { v };
    if v < lo { lo } else { v }
}
