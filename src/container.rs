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
use crate::{Rectf, Sizef, UiError, UiResult, Vec2f, intersect_rect, rect, vec2};

#[derive(Copy, Clone, Debug)]
/// Maps a container's local coordinates to root (screen) coordinates: `root = local * scale + offset`.
///
/// Containers only ever translate, so `scale` stays 1 for every container the stack builds.
pub struct Transform {
    /// Root-space position of the local origin.
    pub offset: Vec2f,
    /// Uniform scale applied before the offset.
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self { Self { offset: Vec2f::default(), scale: 1.0 } }
}

impl Transform {
    /// Scales by `scale`, then translates by `offset`.
    pub fn new(offset: Vec2f, scale: f32) -> Self { Self { offset, scale } }

    /// Pure translation by `offset`.
    pub fn translation(offset: Vec2f) -> Self { Self { offset, scale: 1.0 } }

    /// Composes `self` (outer) with `inner`: the result applies `inner` first, then `self`.
    pub fn then(self, inner: Transform) -> Transform {
        Transform { offset: self.apply_point(inner.offset), scale: self.scale * inner.scale }
    }

    /// Maps a local point to the outer space.
    pub fn apply_point(self, p: Vec2f) -> Vec2f { vec2(p.x * self.scale + self.offset.x, p.y * self.scale + self.offset.y) }

    /// Maps a local rectangle to the outer space.
    pub fn apply_rect(self, r: Rectf) -> Rectf {
        let p = self.apply_point(vec2(r.x, r.y));
        rect(p.x, p.y, r.width * self.scale, r.height * self.scale)
    }

    /// Maps an outer rectangle back to local space.
    pub fn invert_rect(self, r: Rectf) -> Rectf {
        rect((r.x - self.offset.x) / self.scale, (r.y - self.offset.y) / self.scale, r.width / self.scale, r.height / self.scale)
    }
}

#[derive(Copy, Clone)]
/// A nested coordinate frame with its clip rectangle.
pub struct Container {
    parent_transform: Option<Transform>,
    transform: Transform,
    bounds: Rectf,
    origin: Vec2f,
    clip: Rectf,
}

impl Container {
    /// Root container covering the whole viewport with the identity transform.
    pub fn root(viewport: Sizef) -> Self {
        let bounds = rect(0.0, 0.0, viewport.width, viewport.height);
        Self {
            parent_transform: None,
            transform: Transform::default(),
            bounds,
            origin: Vec2f::default(),
            clip: bounds,
        }
    }

    /// Child of `parent` occupying `bounds` (parent-local) whose content is shifted by `origin`.
    pub fn child(parent: &Container, bounds: Rectf, origin: Vec2f) -> Self {
        let parent_transform = parent.transform;
        let transform = parent_transform.then(Transform::translation(vec2(bounds.x + origin.x, bounds.y + origin.y)));
        let clip = intersect_rect(parent.clip, parent_transform.apply_rect(bounds));
        Self {
            parent_transform: Some(parent_transform),
            transform,
            bounds,
            origin,
            clip,
        }
    }

    /// Accumulated transform of the ancestors, `None` for the root.
    pub fn parent_transform(&self) -> Option<Transform> { self.parent_transform }

    /// Local-to-root transform of this container.
    pub fn transform(&self) -> Transform { self.transform }

    /// Bounds in the parent's local coordinates.
    pub fn bounds(&self) -> Rectf { self.bounds }

    /// Content offset (negated scroll position).
    pub fn origin(&self) -> Vec2f { self.origin }

    /// Visible area in root coordinates, already clipped by every ancestor.
    pub fn clip_rect(&self) -> Rectf { self.clip }

    /// Size children are laid out against.
    pub fn draw_area(&self) -> Sizef { Sizef::new(self.bounds.width, self.bounds.height) }

    /// Converts a local rectangle to root coordinates.
    pub fn convert_to_root(&self, local: Rectf) -> Rectf { self.transform.apply_rect(local) }

    /// Converts a local point to root coordinates.
    pub fn convert_point_to_root(&self, local: Vec2f) -> Vec2f { self.transform.apply_point(local) }

    /// Restricts a local rectangle to the visible part of this container, in local coordinates.
    pub fn clip_local_rect(&self, local: Rectf) -> Rectf { intersect_rect(local, self.transform.invert_rect(self.clip)) }
}

/// Stack of nested containers for the running producer. Empty outside producer invocations.
#[derive(Default)]
pub struct ContainerStack {
    stack: Vec<Container>,
}

impl ContainerStack {
    /// Creates an empty stack.
    pub fn new() -> Self { Self { stack: Vec::new() } }

    /// Drops every container and pushes a fresh root covering `viewport`.
    pub fn reset(&mut self, viewport: Sizef) {
        self.stack.clear();
        self.stack.push(Container::root(viewport));
    }

    /// Drops every container including the root.
    pub fn clear(&mut self) { self.stack.clear(); }

    /// Returns `true` outside producer invocations.
    pub fn is_empty(&self) -> bool { self.stack.is_empty() }

    /// Number of containers, root included.
    pub fn depth(&self) -> usize { self.stack.len() }

    /// Innermost container.
    pub fn current(&self) -> Option<&Container> { self.stack.last() }

    fn top(&self) -> UiResult<&Container> { self.stack.last().ok_or(UiError::NoActiveProducer) }

    /// Pushes a child of the current container.
    pub fn push(&mut self, bounds: Rectf, origin: Vec2f) -> UiResult<()> {
        let child = Container::child(self.top()?, bounds, origin);
        self.stack.push(child);
        Ok(())
    }

    /// Pops the current container. The root cannot be popped.
    pub fn pop(&mut self) -> UiResult<Container> {
        match self.stack.len() {
            0 => Err(UiError::NoActiveProducer),
            1 => Err(UiError::PopRoot),
            _ => self.stack.pop().ok_or(UiError::NoActiveProducer),
        }
    }

    /// Pops until at most `depth` containers remain, never below the root. Returns the number popped.
    pub fn unwind_to(&mut self, depth: usize) -> usize {
        let target = depth.max(1).min(self.stack.len());
        let popped = self.stack.len() - target;
        self.stack.truncate(target);
        popped
    }

    /// Converts a rectangle local to the current container into root coordinates.
    pub fn convert_to_root(&self, local: Rectf) -> UiResult<Rectf> { Ok(self.top()?.convert_to_root(local)) }

    /// Clips a rectangle local to the current container against it and all its ancestors.
    pub fn clip_to_container(&self, local: Rectf) -> UiResult<Rectf> { Ok(self.top()?.clip_local_rect(local)) }

    /// Size of the current container.
    pub fn draw_area(&self) -> UiResult<Sizef> { Ok(self.top()?.draw_area()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_rect;
    use crate::size;
    use proptest::prelude::*;

    fn stack() -> ContainerStack {
        let mut s = ContainerStack::new();
        s.reset(size(800.0, 600.0));
        s
    }

    #[test]
    fn root_is_identity_over_viewport() {
        let s = stack();
        let root = s.current().unwrap();
        assert!(root.parent_transform().is_none());
        assert_rect(root.clip_rect(), 0.0, 0.0, 800.0, 600.0);
        assert_rect(s.convert_to_root(rect(5.0, 6.0, 7.0, 8.0)).unwrap(), 5.0, 6.0, 7.0, 8.0);
    }

    #[test]
    fn nested_containers_accumulate_offsets() {
        let mut s = stack();
        s.push(rect(100.0, 50.0, 300.0, 200.0), vec2(0.0, 0.0)).unwrap();
        s.push(rect(10.0, 20.0, 100.0, 100.0), vec2(0.0, 0.0)).unwrap();
        assert_rect(s.convert_to_root(rect(1.0, 2.0, 3.0, 4.0)).unwrap(), 111.0, 72.0, 3.0, 4.0);
        assert!(s.current().unwrap().parent_transform().is_some());
    }

    #[test]
    fn scroll_origin_shifts_content() {
        let mut s = stack();
        s.push(rect(100.0, 100.0, 200.0, 100.0), vec2(-30.0, -40.0)).unwrap();
        assert_rect(s.convert_to_root(rect(30.0, 40.0, 10.0, 10.0)).unwrap(), 100.0, 100.0, 10.0, 10.0);
        // the visible window in local space starts at the scroll position
        assert_rect(s.clip_to_container(rect(0.0, 0.0, 1000.0, 1000.0)).unwrap(), 30.0, 40.0, 200.0, 100.0);
    }

    #[test]
    fn clipping_respects_every_ancestor() {
        let mut s = stack();
        s.push(rect(0.0, 0.0, 100.0, 100.0), vec2(0.0, 0.0)).unwrap();
        // child sticks out of its parent on the right
        s.push(rect(50.0, 0.0, 100.0, 100.0), vec2(0.0, 0.0)).unwrap();
        assert_rect(s.clip_to_container(rect(0.0, 0.0, 100.0, 10.0)).unwrap(), 0.0, 0.0, 50.0, 10.0);
    }

    #[test]
    fn clip_outside_is_empty() {
        let s = stack();
        let clipped = s.clip_to_container(rect(900.0, 10.0, 10.0, 10.0)).unwrap();
        assert!(crate::is_empty_rect(clipped));
    }

    #[test]
    fn composed_transform_applies_inner_first() {
        let outer = Transform::new(vec2(10.0, 20.0), 2.0);
        let inner = Transform::new(vec2(3.0, 4.0), 0.5);
        let p = vec2(8.0, 6.0);
        let composed = outer.then(inner).apply_point(p);
        let manual = outer.apply_point(inner.apply_point(p));
        assert_eq!((composed.x, composed.y), (manual.x, manual.y));
        assert_eq!((composed.x, composed.y), (24.0, 34.0));
        assert_eq!(outer.then(inner).scale, 1.0);

        let r = outer.apply_rect(rect(1.0, 1.0, 5.0, 5.0));
        assert_rect(r, 12.0, 22.0, 10.0, 10.0);
        assert_rect(outer.invert_rect(r), 1.0, 1.0, 5.0, 5.0);
    }

    #[test]
    fn containers_never_scale() {
        let mut s = stack();
        assert_eq!(s.current().unwrap().transform().scale, 1.0);
        s.push(rect(10.0, 10.0, 100.0, 100.0), vec2(-5.0, 0.0)).unwrap();
        s.push(rect(1.0, 2.0, 10.0, 10.0), vec2(0.0, 0.0)).unwrap();
        assert_eq!(s.current().unwrap().transform().scale, 1.0);
        assert_rect(s.convert_to_root(rect(0.0, 0.0, 3.0, 3.0)).unwrap(), 6.0, 12.0, 3.0, 3.0);
    }

    #[test]
    fn popping_root_fails() {
        let mut s = stack();
        assert_eq!(s.pop().err(), Some(UiError::PopRoot));
        s.push(rect(0.0, 0.0, 10.0, 10.0), vec2(0.0, 0.0)).unwrap();
        assert!(s.pop().is_ok());
        assert_eq!(s.pop().err(), Some(UiError::PopRoot));
    }

    #[test]
    fn empty_stack_reports_missing_producer() {
        let mut s = ContainerStack::new();
        assert_eq!(s.push(rect(0.0, 0.0, 1.0, 1.0), vec2(0.0, 0.0)).err(), Some(UiError::NoActiveProducer));
        assert_eq!(s.pop().err(), Some(UiError::NoActiveProducer));
        assert_eq!(s.convert_to_root(rect(0.0, 0.0, 1.0, 1.0)).err(), Some(UiError::NoActiveProducer));
    }

    #[test]
    fn unwind_keeps_root() {
        let mut s = stack();
        for _ in 0..3 {
            s.push(rect(1.0, 1.0, 10.0, 10.0), vec2(0.0, 0.0)).unwrap();
        }
        assert_eq!(s.unwind_to(2), 2);
        assert_eq!(s.depth(), 2);
        assert_eq!(s.unwind_to(0), 1);
        assert_eq!(s.depth(), 1);
    }

    fn small() -> impl Strategy<Value = f32> { (-500i32..500).prop_map(|v| v as f32) }

    proptest! {
        #[test]
        fn balanced_push_pop_restores_conversion(
            frames in proptest::collection::vec((small(), small(), small(), small()), 1..8),
            x in small(),
            y in small(),
        ) {
            let mut s = stack();
            let probe = rect(x, y, 4.0, 4.0);
            let before = s.convert_to_root(probe).unwrap();
            for (bx, by, ox, oy) in &frames {
                s.push(rect(*bx, *by, 50.0, 50.0), vec2(*ox, *oy)).unwrap();
            }
            for _ in &frames {
                s.pop().unwrap();
            }
            let after = s.convert_to_root(probe).unwrap();
            prop_assert_eq!((before.x, before.y), (after.x, after.y));
            prop_assert!(s.pop().is_err());
        }

        #[test]
        fn nested_conversion_composes(
            ax in small(), ay in small(), bx in small(), by in small(), px in small(), py in small(),
        ) {
            let mut s = stack();
            s.push(rect(ax, ay, 100.0, 100.0), vec2(0.0, 0.0)).unwrap();
            let outer = s.current().unwrap().transform();
            s.push(rect(bx, by, 100.0, 100.0), vec2(0.0, 0.0)).unwrap();
            let nested = s.convert_to_root(rect(px, py, 1.0, 1.0)).unwrap();
            let inner = Transform::translation(vec2(bx, by));
            let manual = outer.apply_point(inner.apply_point(vec2(px, py)));
            prop_assert_eq!((nested.x, nested.y), (manual.x, manual.y));
        }
    }
}
