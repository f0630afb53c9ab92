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
    /// Draws a scroll view at `position` whose content measures `view`, with optional scrollbars along the
    /// bottom and right edges, and pushes the visible area as the current container.
    ///
    /// The content is shifted by the returned scroll position, which already includes this frame's
    /// scrollbar drags. Each bar ranges over `[0, view]` on its axis. Close with
    /// [`FrameState::end_scroll_view`].
    pub fn begin_scroll_view(&mut self, position: Rectf, scroll: Vec2f, view: Sizef, horizontal: bool, vertical: bool) -> UiResult<Vec2f> {
        let id = self.next_id(true)?;
        let bar = self.style().scrollbar_size;
        let visible_width = if vertical { position.width - bar } else { position.width };
        let visible_height = if horizontal { position.height - bar } else { position.height };
        let visible = rect(position.x, position.y, visible_width, visible_height);

        {
            let (r, clip) = self.widget_rects(visible)?;
            let draw = self.draw_ctx()?;
            draw.draw_frame(intersect_rect(r, clip), ControlColor::ScrollViewBG);
            draw.draw_debug_id(vec2(r.x, r.y), "ScrollView", id);
        }

        let mut scroll = scroll;
        if horizontal {
            let track = rect(position.x, position.y + visible_height, visible_width, bar);
            scroll.x = self.horizontal_slider(track, scroll.x, 0.0, view.width)?;
        }
        if vertical {
            let track = rect(position.x + visible_width, position.y, bar, visible_height);
            scroll.y = self.vertical_slider(track, scroll.y, 0.0, view.height)?;
        }

        self.push_container(visible, vec2(-scroll.x, -scroll.y))?;
        Ok(scroll)
    }

    /// Pops the content container pushed by [`FrameState::begin_scroll_view`].
    pub fn end_scroll_view(&mut self) -> UiResult<()> { self.pop_container() }

    /// Scoped scroll view: updates `scroll`, runs `f` against the content and always closes the view.
    pub fn scroll_view<F>(&mut self, position: Rectf, scroll: &mut Vec2f, view: Sizef, horizontal: bool, vertical: bool, f: F) -> UiResult<()>
    where
        F: FnOnce(&mut Self) -> UiResult<()>,
    {
        let depth = self.container_depth();
        *scroll = self.begin_scroll_view(position, *scroll, view, horizontal, vertical)?;
        let res = f(self);
        self.close_scope(depth, "scroll view");
        res
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{Harness, assert_rect};
    use crate::*;

    const AREA: Rectf = Rectf { x: 100.0, y: 100.0, width: 217.0, height: 117.0 };

    #[test]
    fn bars_shrink_the_visible_area() {
        let mut h = Harness::new();
        h.begin();
        h.state.begin_scroll_view(AREA, vec2(0.0, 0.0), size(400.0, 400.0), true, true).unwrap();
        assert_rect(h.state.clip_to_container(rect(0.0, 0.0, 1000.0, 1000.0)).unwrap(), 0.0, 0.0, 200.0, 100.0);
        h.state.end_scroll_view().unwrap();
        h.end().unwrap();

        let rects = h.rects();
        let style = Style::default();
        assert_rect(rects[0].0, 100.0, 100.0, 200.0, 100.0);
        assert_eq!(rects[0].1, style.color(ControlColor::ScrollViewBG));
        // horizontal track along the bottom, vertical track along the right
        assert_rect(rects[1].0, 100.0, 200.0, 200.0, 17.0);
        assert_rect(rects[3].0, 300.0, 100.0, 17.0, 100.0);
    }

    #[test]
    fn only_enabled_bars_take_space() {
        let mut h = Harness::new();
        h.begin();
        h.state.begin_scroll_view(AREA, vec2(0.0, 0.0), size(400.0, 400.0), false, true).unwrap();
        assert_rect(h.state.clip_to_container(rect(0.0, 0.0, 1000.0, 1000.0)).unwrap(), 0.0, 0.0, 200.0, 117.0);
        h.state.end_scroll_view().unwrap();
        h.end().unwrap();
        assert_eq!(h.rects().len(), 3);
    }

    #[test]
    fn content_is_offset_by_scroll() {
        let mut h = Harness::new();
        h.begin();
        let scroll = h.state.begin_scroll_view(AREA, vec2(30.0, 40.0), size(400.0, 400.0), true, true).unwrap();
        assert_eq!((scroll.x, scroll.y), (30.0, 40.0));
        assert_rect(h.state.convert_to_root(rect(30.0, 40.0, 10.0, 10.0)).unwrap(), 100.0, 100.0, 10.0, 10.0);
        h.state.label(rect(0.0, 0.0, 10.0, 10.0), "gone").unwrap();
        h.state.end_scroll_view().unwrap();
        h.end().unwrap();
        assert!(h.texts().is_empty());
    }

    #[test]
    fn dragging_a_bar_scrolls_the_same_frame() {
        // horizontal track (100, 200, 200, 17): handle side 11, at x 103 for scroll 0
        let mut h = Harness::new();
        let view = size(400.0, 400.0);
        h.begin_with_mouse(108.0, 208.0, true);
        let scroll = h.state.begin_scroll_view(AREA, vec2(0.0, 0.0), view, true, true).unwrap();
        h.state.end_scroll_view().unwrap();
        h.end().unwrap();
        assert!(h.state.is_dragging_any());

        h.begin_with_mouse(118.0, 208.0, true);
        let scroll = h.state.begin_scroll_view(AREA, scroll, view, true, true).unwrap();
        assert_eq!((scroll.x, scroll.y), (20.0, 0.0));
        assert_rect(h.state.convert_to_root(rect(20.0, 0.0, 1.0, 1.0)).unwrap(), 100.0, 100.0, 1.0, 1.0);
        h.state.end_scroll_view().unwrap();
        h.end().unwrap();
    }

    #[test]
    fn scoped_scroll_view_restores_depth() {
        let mut h = Harness::new();
        h.begin();
        let mut scroll = vec2(0.0, 0.0);
        let res = h.state.scroll_view(AREA, &mut scroll, size(400.0, 400.0), true, false, |ui| {
            assert_eq!(ui.container_depth(), 2);
            ui.begin_window(rect(0.0, 0.0, 50.0, 50.0), "inside")?;
            Err(UiError::PopRoot)
        });
        assert!(res.is_err());
        assert_eq!(h.state.container_depth(), 1);
        h.end().unwrap();
    }
}
