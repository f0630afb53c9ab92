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
//! Recording surface and stub platform shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{Color, FrameState, Input, Platform, ProducerId, Rectf, Sizef, Surface, SurfaceHandle, TextureId, UiResult, Vec2f};

#[derive(Clone, Debug)]
pub enum DrawCall {
    Rect { rect: Rectf, color: Color },
    Text { text: String, position: Vec2f, size: f32, clip: Option<Rectf> },
    Texture { texture: TextureId, rect: Rectf },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn rects(&self) -> Vec<(Rectf, Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Rect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(String, Vec2f, f32, Option<Rectf>)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, position, size, clip } => Some((text.clone(), *position, *size, *clip)),
                _ => None,
            })
            .collect()
    }

    pub fn textures(&self) -> Vec<(TextureId, Rectf)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Texture { texture, rect } => Some((*texture, *rect)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_rectangle(&mut self, rect: Rectf, color: Color) { self.calls.push(DrawCall::Rect { rect, color }); }

    fn draw_text(&mut self, text: &str, _font: &str, size: f32, position: Vec2f, _color: Color, clip: Option<Rectf>) {
        self.calls.push(DrawCall::Text { text: text.to_string(), position, size, clip });
    }

    // every glyph is half as wide as it is tall
    fn measure_text(&self, text: &str, _font: &str, size: f32) -> Sizef { Sizef::new(text.chars().count() as f32 * size * 0.5, size) }

    fn draw_texture(&mut self, texture: TextureId, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(DrawCall::Texture { texture, rect: crate::rect(x, y, width, height) });
    }
}

pub struct TestPlatform {
    pub size: Sizef,
    pub disabled: Rc<Cell<u32>>,
}

impl Platform for TestPlatform {
    fn resolution(&self) -> Sizef { self.size }

    fn disable_control_actions(&mut self) { self.disabled.set(self.disabled.get() + 1); }
}

pub fn test_platform() -> (Box<dyn Platform>, Rc<Cell<u32>>) {
    let disabled = Rc::new(Cell::new(0));
    let platform = TestPlatform { size: Sizef::new(800.0, 600.0), disabled: disabled.clone() };
    (Box::new(platform), disabled)
}

/// A frame state wired to a recording surface, driven by hand one producer at a time.
pub struct Harness {
    pub state: FrameState<RecordingSurface>,
    pub surface: SurfaceHandle<RecordingSurface>,
    pub input: Rc<RefCell<Input>>,
    pub disabled: Rc<Cell<u32>>,
}

impl Harness {
    pub fn new() -> Self {
        let (platform, disabled) = test_platform();
        let input = Rc::new(RefCell::new(Input::default()));
        let state = FrameState::new(platform, input.clone());
        Self { state, surface: SurfaceHandle::new(RecordingSurface::default()), input, disabled }
    }

    pub fn begin(&mut self) {
        self.state.begin_frame(self.surface.clone());
        self.state.begin_producer(ProducerId::new(1)).unwrap();
    }

    pub fn end(&mut self) -> UiResult<()> {
        let res = self.state.end_producer();
        self.state.end_frame();
        self.input.borrow_mut().epilogue();
        res
    }

    /// Begins a frame with the mouse at `(x, y)` and the left button in the given state, then enables it.
    pub fn begin_with_mouse(&mut self, x: f32, y: f32, left_down: bool) {
        {
            let mut input = self.input.borrow_mut();
            if left_down {
                input.mousedown(x, y, crate::MouseButton::LEFT);
            } else {
                input.mouseup(x, y, crate::MouseButton::LEFT);
            }
        }
        self.begin();
        self.state.request_mouse().unwrap();
    }

    pub fn clear_calls(&self) { self.surface.scope_mut(|s| s.calls.clear()); }

    pub fn rects(&self) -> Vec<(Rectf, Color)> { self.surface.scope(|s| s.rects()) }

    pub fn texts(&self) -> Vec<(String, Vec2f, f32, Option<Rectf>)> { self.surface.scope(|s| s.texts()) }
}

#[track_caller]
pub fn assert_rect(r: Rectf, x: f32, y: f32, w: f32, h: f32) {
    let close = |a: f32, b: f32| (a - b).abs() < 1e-4;
    assert!(
        close(r.x, x) && close(r.y, y) && close(r.width, w) && close(r.height, h),
        "expected ({}, {}, {}, {}), got ({}, {}, {}, {})",
        x,
        y,
        w,
        h,
        r.x,
        r.y,
        r.width,
        r.height
    );
}
