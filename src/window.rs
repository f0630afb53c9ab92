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
    /// Draws a movable window at `position` (local to the current container) and pushes its body as the
    /// current container.
    ///
    /// Returns the position after this frame's title bar drag, clamped so the window stays inside its
    /// parent. The caller stores it for the next frame and must call [`FrameState::end_window`] once the
    /// content has been issued.
    pub fn begin_window(&mut self, position: Rectf, title: &str) -> UiResult<Rectf> {
        let id = self.next_id(true)?;
        let parent = self.containers.draw_area()?;
        let title_height = self.style().title_height;

        let mut position = position;
        if let Some(mouse) = self.hit_mouse() {
            if self.is_dragging(id) {
                if mouse.is_left_up() {
                    self.end_drag();
                } else {
                    let offset = self.drag_offset();
                    position.x = clamp(position.x + offset.x, 0.0, parent.width - position.width);
                    position.y = clamp(position.y + offset.y, 0.0, parent.height - position.height);
                }
            } else if !self.is_dragging_any() && mouse.left_pressed() {
                let (bar, clip) = self.widget_rects(rect(position.x, position.y, position.width, title_height))?;
                if rect_contains(intersect_rect(bar, clip), mouse.position) {
                    self.begin_drag(id);
                }
            }
        }

        let body = rect(position.x, position.y + title_height, position.width, position.height - title_height);
        let (title_rect, title_clip) = self.widget_rects(rect(position.x, position.y, position.width, title_height))?;
        let (body_rect, body_clip) = self.widget_rects(body)?;
        {
            let draw = self.draw_ctx()?;
            draw.draw_frame(intersect_rect(title_rect, title_clip), ControlColor::TitleBG);
            draw.draw_frame(intersect_rect(body_rect, body_clip), ControlColor::WindowBG);
            draw.draw_text(title_rect, title_clip, title, draw.style().title_font_size, HAlign::Center, VAlign::Center);
            draw.draw_debug_id(vec2(title_rect.x, title_rect.y), "Window", id);
        }
        self.push_container(body, vec2(0.0, 0.0))?;
        Ok(position)
    }

    /// Pops the body container pushed by [`FrameState::begin_window`].
    pub fn end_window(&mut self) -> UiResult<()> { self.pop_container() }

    /// Scoped window: updates `position`, runs `f` inside the body and always closes the window, even when
    /// `f` fails.
    pub fn window<F>(&mut self, position: &mut Rectf, title: &str, f: F) -> UiResult<()>
    where
        F: FnOnce(&mut Self) -> UiResult<()>,
    {
        let depth = self.container_depth();
        *position = self.begin_window(*position, title)?;
        let res = f(self);
        self.close_scope(depth, "window");
        res
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{Harness, assert_rect};
    use crate::*;

    const WINDOW: Rectf = Rectf { x: 10.0, y: 20.0, width: 200.0, height: 200.0 };

    #[test]
    fn window_draws_title_and_body_and_pushes_body() {
        let mut h = Harness::new();
        h.begin();
        let pos = h.state.begin_window(WINDOW, "hello").unwrap();
        assert_rect(pos, 10.0, 20.0, 200.0, 200.0);
        assert_eq!(h.state.container_depth(), 2);
        assert_rect(h.state.convert_to_root(rect(0.0, 0.0, 5.0, 5.0)).unwrap(), 10.0, 50.0, 5.0, 5.0);
        h.state.end_window().unwrap();
        h.end().unwrap();

        let rects = h.rects();
        let style = Style::default();
        assert_rect(rects[0].0, 10.0, 20.0, 200.0, 30.0);
        assert_eq!(rects[0].1, style.color(ControlColor::TitleBG));
        assert_rect(rects[1].0, 10.0, 50.0, 200.0, 170.0);
        assert_eq!(rects[1].1, style.color(ControlColor::WindowBG));
        let texts = h.texts();
        assert_eq!(texts[0].0, "hello");
        assert_eq!(texts[0].2, 20.0);
    }

    #[test]
    fn title_bar_drag_moves_window_and_content_same_frame() {
        let mut h = Harness::new();
        h.begin_with_mouse(50.0, 30.0, true);
        let pos = h.state.begin_window(WINDOW, "w").unwrap();
        h.state.end_window().unwrap();
        h.end().unwrap();
        assert!(h.state.is_dragging_any());

        h.clear_calls();
        h.begin_with_mouse(80.0, 60.0, true);
        let pos = h.state.begin_window(pos, "w").unwrap();
        assert_rect(pos, 40.0, 50.0, 200.0, 200.0);
        h.state.button(rect(0.0, 0.0, 20.0, 20.0), "").unwrap();
        h.state.end_window().unwrap();
        h.end().unwrap();

        let rects = h.rects();
        assert_rect(rects[0].0, 40.0, 50.0, 200.0, 30.0);
        assert_rect(rects[2].0, 40.0, 80.0, 20.0, 20.0);

        h.begin_with_mouse(80.0, 60.0, false);
        h.state.begin_window(pos, "w").unwrap();
        h.state.end_window().unwrap();
        h.end().unwrap();
        assert!(!h.state.is_dragging_any());
    }

    #[test]
    fn press_on_body_does_not_drag() {
        let mut h = Harness::new();
        h.begin_with_mouse(50.0, 100.0, true);
        h.state.begin_window(WINDOW, "w").unwrap();
        h.state.end_window().unwrap();
        h.end().unwrap();
        assert!(!h.state.is_dragging_any());
    }

    #[test]
    fn drag_is_clamped_to_parent() {
        let mut h = Harness::new();
        h.begin_with_mouse(50.0, 30.0, true);
        let pos = h.state.begin_window(WINDOW, "w").unwrap();
        h.state.end_window().unwrap();
        h.end().unwrap();

        h.begin_with_mouse(5000.0, -500.0, true);
        let pos = h.state.begin_window(pos, "w").unwrap();
        h.state.end_window().unwrap();
        h.end().unwrap();
        assert_rect(pos, 600.0, 0.0, 200.0, 200.0);
    }

    #[test]
    fn oversized_window_pins_to_parent_origin() {
        let wide = rect(10.0, 20.0, 1000.0, 200.0);
        let mut h = Harness::new();
        h.begin_with_mouse(50.0, 30.0, true);
        let pos = h.state.begin_window(wide, "w").unwrap();
        h.state.end_window().unwrap();
        h.end().unwrap();
        assert!(h.state.is_dragging_any());

        h.begin_with_mouse(60.0, 30.0, true);
        let pos = h.state.begin_window(pos, "w").unwrap();
        h.state.end_window().unwrap();
        h.end().unwrap();
        assert_rect(pos, 0.0, 20.0, 1000.0, 200.0);
    }

    #[test]
    fn nested_windows_balance() {
        let mut h = Harness::new();
        h.begin();
        h.state.begin_window(WINDOW, "outer").unwrap();
        h.state.begin_window(rect(0.0, 0.0, 50.0, 50.0), "inner").unwrap();
        assert_eq!(h.state.container_depth(), 3);
        assert_rect(h.state.convert_to_root(rect(0.0, 0.0, 1.0, 1.0)).unwrap(), 10.0, 80.0, 1.0, 1.0);
        h.state.end_window().unwrap();
        h.state.end_window().unwrap();
        assert_eq!(h.state.end_window().err(), Some(UiError::PopRoot));
        h.end().unwrap();
    }

    #[test]
    fn scoped_window_unwinds_on_error() {
        let mut h = Harness::new();
        h.begin();
        let mut pos = WINDOW;
        let res = h.state.window(&mut pos, "w", |ui| {
            ui.push_container(rect(0.0, 0.0, 10.0, 10.0), vec2(0.0, 0.0))?;
            ui.pop_container()?;
            ui.pop_container()?;
            ui.pop_container()
        });
        assert_eq!(res.err(), Some(UiError::PopRoot));
        assert_eq!(h.state.container_depth(), 1);
        h.end().unwrap();

        h.begin();
        let res = h.state.window(&mut pos, "w", |ui| {
            ui.push_container(rect(0.0, 0.0, 10.0, 10.0), vec2(0.0, 0.0))?;
            ui.label(rect(0.0, 0.0, 10.0, 10.0), "x")
        });
        assert!(res.is_ok());
        assert_eq!(h.state.container_depth(), 1);
        h.end().unwrap();
    }
}
