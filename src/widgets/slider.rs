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
use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SliderAxis {
    Horizontal,
    Vertical,
}

impl SliderAxis {
    fn length(self, r: Rectf) -> f32 {
        match self {
            Self::Horizontal => r.width,
            Self::Vertical => r.height,
        }
    }

    fn thickness(self, r: Rectf) -> f32 {
        match self {
            Self::Horizontal => r.height,
            Self::Vertical => r.width,
        }
    }

    fn along(self, v: Vec2f) -> f32 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    fn kind(self) -> &'static str {
        match self {
            Self::Horizontal => "HSlider",
            Self::Vertical => "VSlider",
        }
    }
}

/// Square handle inside `track` for `value`, inset by `pad` on every side.
fn slider_handle(axis: SliderAxis, track: Rectf, value: f32, min: f32, max: f32, pad: f32) -> Rectf {
    let range = max - min;
    let rel = if range == 0.0 { 0.0 } else { clamp((value - min) / range, 0.0, 1.0) };
    let side = axis.thickness(track) - 2.0 * pad;
    let pos = rel * (axis.length(track) - side - 2.0 * pad) + pad;
    match axis {
        SliderAxis::Horizontal => rect(track.x + pos, track.y + pad, side, side),
        SliderAxis::Vertical => rect(track.x + pad, track.y + pos, side, side),
    }
}

/// Applies a pointer movement to `value`, one track length mapping to the whole range.
fn slider_drag_value(axis: SliderAxis, value: f32, offset: Vec2f, min: f32, max: f32, track: Rectf) -> f32 {
    let range = max - min;
    let len = axis.length(track);
    if range == 0.0 || len <= 0.0 {
        return min;
    }
    clamp(value + axis.along(offset) * range / len, min, max)
}

impl<S: Surface> FrameState<S> {
    fn slider(&mut self, axis: SliderAxis, local: Rectf, value: f32, min: f32, max: f32) -> UiResult<f32> {
        let id = self.next_id(true)?;
        let (track, clip) = self.widget_rects(local)?;
        let pad = self.style().handle_padding;

        let mut value = value;
        let mut hovered = false;
        let mut down = false;
        if let Some(mouse) = self.hit_mouse() {
            if self.is_dragging(id) {
                if mouse.is_left_up() {
                    self.end_drag();
                } else {
                    hovered = true;
                    down = true;
                    let offset = self.drag_offset();
                    value = slider_drag_value(axis, value, offset, min, max, track);
                }
            } else if !self.is_dragging_any() {
                let handle = intersect_rect(slider_handle(axis, track, value, min, max, pad), clip);
                if rect_contains(handle, mouse.position) {
                    hovered = true;
                    if mouse.left_pressed() {
                        down = self.begin_drag(id);
                    }
                }
            }
        }
        if max - min == 0.0 {
            value = min;
        }

        let handle = slider_handle(axis, track, value, min, max, pad);
        let draw = self.draw_ctx()?;
        draw.draw_frame(intersect_rect(track, clip), ControlColor::Base);
        draw.draw_widget_frame(hovered, down, intersect_rect(handle, clip), ControlColor::Handle);
        draw.draw_debug_id(vec2(track.x, track.y), axis.kind(), id);
        Ok(value)
    }

    /// Horizontal slider over `[min, max]`. Returns the value after this frame's drag.
    pub fn horizontal_slider(&mut self, local: Rectf, value: f32, min: f32, max: f32) -> UiResult<f32> { self.slider(SliderAxis::Horizontal, local, value, min, max) }

    /// Vertical slider over `[min, max]`, `min` at the top.
    pub fn vertical_slider(&mut self, local: Rectf, value: f32, min: f32, max: f32) -> UiResult<f32> { self.slider(SliderAxis::Vertical, local, value, min, max) }

    /// Integer horizontal slider; the result is truncated toward zero.
    pub fn horizontal_slider_i32(&mut self, local: Rectf, value: i32, min: i32, max: i32) -> UiResult<i32> {
        Ok(self.horizontal_slider(local, value as f32, min as f32, max as f32)? as i32)
    }

    /// Integer vertical slider; the result is truncated toward zero.
    pub fn vertical_slider_i32(&mut self, local: Rectf, value: i32, min: i32, max: i32) -> UiResult<i32> {
        Ok(self.vertical_slider(local, value as f32, min as f32, max as f32)? as i32)
    }
}
