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

impl<S: Surface> FrameState<S> {
    /// Draws a push button and returns `true` while the left button is held over its visible part.
    pub fn button(&mut self, local: Rectf, text: &str) -> UiResult<bool> {
        let id = self.next_id(false)?;
        let (r, clip) = self.widget_rects(local)?;
        let visible = intersect_rect(r, clip);

        let mut hovered = false;
        let mut down = false;
        if let Some(mouse) = self.hit_mouse() {
            hovered = rect_contains(visible, mouse.position);
            down = hovered && mouse.is_left_down;
        }

        let draw = self.draw_ctx()?;
        draw.draw_widget_frame(hovered, down, visible, ControlColor::Base);
        draw.draw_text(r, clip, text, draw.style().font_size, HAlign::Center, VAlign::Center);
        draw.draw_debug_id(vec2(r.x, r.y), "Button", id);
        Ok(down)
    }

    /// Draws a check box followed by `text`, flipping `value` on the frame the box is clicked.
    pub fn toggle(&mut self, local: Rectf, text: &str, value: bool) -> UiResult<bool> {
        let id = self.next_id(false)?;
        let (r, clip) = self.widget_rects(local)?;
        let check = intersect_rect(rect(r.x, r.y, r.height, r.height), clip);

        let mut value = value;
        let mut hovered = false;
        let mut down = false;
        if let Some(mouse) = self.hit_mouse() {
            hovered = rect_contains(check, mouse.position);
            down = hovered && mouse.is_left_down;
            if hovered && mouse.left_pressed() {
                value = !value;
            }
        }

        let draw = self.draw_ctx()?;
        let pad = draw.style().handle_padding;
        draw.draw_widget_frame(hovered, down, check, ControlColor::Base);
        if value {
            let inner = rect(r.x + pad, r.y + pad, r.height - 2.0 * pad, r.height - 2.0 * pad);
            draw.draw_widget_frame(hovered, down, intersect_rect(inner, clip), ControlColor::Handle);
        }
        draw.draw_text(r, clip, text, draw.style().font_size, HAlign::Right, VAlign::Center);
        draw.draw_debug_id(vec2(r.x, r.y), "Toggle", id);
        Ok(value)
    }

    /// Draws `text` left-aligned and vertically centered in `local`.
    pub fn label(&mut self, local: Rectf, text: &str) -> UiResult<()> {
        let size = self.style().font_size;
        self.label_with(local, text, size, HAlign::Left, VAlign::Center)
    }

    /// Draws `text` at `size` with explicit alignment.
    pub fn label_with(&mut self, local: Rectf, text: &str, size: f32, halign: HAlign, valign: VAlign) -> UiResult<()> {
        let id = self.next_id(false)?;
        let (r, clip) = self.widget_rects(local)?;
        let draw = self.draw_ctx()?;
        draw.draw_text(r, clip, text, size, halign, valign);
        draw.draw_debug_rect(intersect_rect(r, clip));
        draw.draw_debug_id(vec2(r.x, r.y), "Label", id);
        Ok(())
    }
}
