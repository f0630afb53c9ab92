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
use crate::{Color, ControlColor, Id, Rectf, Style, Surface, SurfaceHandle, TextureId, Vec2f, intersect_rect, is_empty_rect, vec2};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Horizontal text placement inside a rectangle.
pub enum HAlign {
    /// Flush with the left edge.
    Left,
    /// Centered.
    Center,
    /// Flush with the right edge, minus a small margin.
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Vertical text placement inside a rectangle.
pub enum VAlign {
    /// Flush with the top edge.
    Top,
    /// Centered on the glyph box.
    Center,
    /// Flush with the bottom edge.
    Bottom,
}

pub(crate) struct DrawCtx<'a, S: Surface> {
    surface: &'a SurfaceHandle<S>,
    style: &'a Style,
    debug: bool,
}

impl<'a, S: Surface> DrawCtx<'a, S> {
    pub(crate) fn new(surface: &'a SurfaceHandle<S>, style: &'a Style, debug: bool) -> Self { Self { surface, style, debug } }

    pub(crate) fn style(&self) -> &Style { self.style }

    pub(crate) fn draw_rect(&self, rect: Rectf, color: Color) {
        if !is_empty_rect(rect) {
            self.surface.scope_mut(|s| s.draw_rectangle(rect, color));
        }
    }

    pub(crate) fn draw_frame(&self, rect: Rectf, colorid: ControlColor) { self.draw_rect(rect, self.style.color(colorid)); }

    pub(crate) fn draw_widget_frame(&self, hovered: bool, down: bool, rect: Rectf, mut colorid: ControlColor) {
        if down {
            colorid.focus()
        } else if hovered {
            colorid.hover()
        }
        self.draw_frame(rect, colorid);
    }

    /// Draws `text` aligned inside `rect` and clipped to `clip`. Nothing is drawn when `clip` is empty.
    pub(crate) fn draw_text(&self, rect: Rectf, clip: Rectf, text: &str, size: f32, halign: HAlign, valign: VAlign) {
        let clip = intersect_rect(rect, clip);
        if is_empty_rect(clip) || text.is_empty() {
            return;
        }
        let font = self.style.font.as_str();
        let extent = self.surface.scope(|s| s.measure_text(text, font, size));
        let x = match halign {
            HAlign::Left => rect.x,
            HAlign::Center => rect.x + rect.width * 0.5 - extent.width * 0.5,
            HAlign::Right => rect.x + rect.width - extent.width - 2.0,
        };
        let y = match valign {
            VAlign::Top => rect.y,
            VAlign::Center => rect.y + rect.height * 0.5 - extent.height * 0.8,
            VAlign::Bottom => rect.y + rect.height - extent.height * 1.6,
        };
        let color = self.style.color(ControlColor::Text);
        self.surface.scope_mut(|s| s.draw_text(text, font, size, vec2(x, y), color, Some(clip)));
    }

    pub(crate) fn draw_texture(&self, texture: TextureId, rect: Rectf) {
        self.surface.scope_mut(|s| s.draw_texture(texture, rect.x, rect.y, rect.width, rect.height));
    }

    /// Widget kind and id at `pos`, only while the debug overlay is active.
    pub(crate) fn draw_debug_id(&self, pos: Vec2f, kind: &str, id: Id) {
        if !self.debug {
            return;
        }
        let text = format!("{} {}", kind, id);
        let font = self.style.font.as_str();
        let size = self.style.debug_font_size;
        let color = self.style.color(ControlColor::DebugText);
        self.surface.scope_mut(|s| s.draw_text(&text, font, size, pos, color, None));
    }

    pub(crate) fn draw_debug_rect(&self, rect: Rectf) {
        if self.debug {
            self.draw_frame(rect, ControlColor::DebugOutline);
        }
    }
}
