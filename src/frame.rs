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
use std::cell::RefCell;
use std::rc::Rc;

use crate::draw_context::DrawCtx;
use crate::{
    ContainerStack, ControlColor, DragState, DragTracker, Id, IdAllocator, Input, KeyMode, MouseSnapshot, MouseTracker, Options, Platform,
    ProducerId, Rectf, Style, Surface, SurfaceHandle, UiError, UiResult, Vec2f, rect,
};

/// Per-frame state shared by every producer: id allocation, the container stack, the mouse snapshot and
/// the drag tracker.
///
/// Widgets are methods on this type. They are only valid between [`FrameState::begin_producer`] and
/// [`FrameState::end_producer`] of a frame bracketed by [`FrameState::begin_frame`] and
/// [`FrameState::end_frame`]; anywhere else they fail with [`UiError::OutsideFrame`] or
/// [`UiError::NoActiveProducer`]. [`crate::Context::render`] drives this lifecycle.
pub struct FrameState<S: Surface> {
    surface: Option<SurfaceHandle<S>>,
    platform: Box<dyn Platform>,
    input: Rc<RefCell<Input>>,
    style: Rc<Style>,
    options: Options,

    ids: IdAllocator,
    pub(crate) containers: ContainerStack,
    mouse: MouseTracker,
    drag: DragTracker,

    mouse_requested: bool,
    mouse_captured: bool,
    frame: u64,
}

impl<S: Surface> FrameState<S> {
    /// Creates an idle frame state reading device state from `input`.
    pub fn new(platform: Box<dyn Platform>, input: Rc<RefCell<Input>>) -> Self {
        Self {
            surface: None,
            platform,
            input,
            style: Rc::new(Style::default()),
            options: Options::default(),
            ids: IdAllocator::new(),
            containers: ContainerStack::new(),
            mouse: MouseTracker::new(),
            drag: DragTracker::new(),
            mouse_requested: false,
            mouse_captured: false,
            frame: 0,
        }
    }

    /// Shared input state fed by the host.
    pub fn input(&self) -> Rc<RefCell<Input>> { self.input.clone() }

    /// Current style.
    pub fn style(&self) -> &Style { &self.style }

    /// Replaces the style used from the next widget call on.
    pub fn set_style(&mut self, style: &Style) { self.style = Rc::new(style.clone()) }

    /// Current options.
    pub fn options(&self) -> Options { self.options }

    /// Replaces the options.
    pub fn set_options(&mut self, options: Options) { self.options = options }

    /// Number of frames begun so far.
    pub fn frame_count(&self) -> u64 { self.frame }

    /// Returns `true` while a surface is bound.
    pub fn is_in_frame(&self) -> bool { self.surface.is_some() }

    /// Returns `true` while a producer is running.
    pub fn is_in_producer(&self) -> bool { self.surface.is_some() && !self.containers.is_empty() }

    /// Binds the surface for a new frame and forgets last frame's mouse capture.
    pub fn begin_frame(&mut self, surface: SurfaceHandle<S>) {
        self.surface = Some(surface);
        self.mouse_captured = false;
        self.mouse_requested = false;
        self.mouse.begin_frame();
        self.containers.clear();
        self.frame += 1;
    }

    /// Prepares the state for `producer`: ids restart at zero, the mouse is disabled until requested and a
    /// fresh root container covers the viewport.
    pub fn begin_producer(&mut self, producer: ProducerId) -> UiResult<()> {
        self.ensure_frame()?;
        self.ids.reset(producer);
        self.mouse_requested = false;
        let viewport = self.platform.resolution();
        self.containers.reset(viewport);
        Ok(())
    }

    /// Closes the running producer. Fails when it left containers pushed; the stack is reset either way.
    pub fn end_producer(&mut self) -> UiResult<()> {
        self.ensure_call()?;
        let open = self.containers.depth() - 1;
        log::trace!("producer issued {} ids ({} sticky)", self.ids.issued(), self.ids.sticky_issued());
        self.containers.clear();
        self.mouse_requested = false;
        if open > 0 {
            return Err(UiError::UnbalancedContainers { open });
        }
        Ok(())
    }

    /// Draws the cursor at the captured mouse position if any producer requested the mouse this frame.
    pub fn draw_cursor(&self) -> UiResult<()> {
        let surface = self.ensure_frame()?;
        if !self.mouse_captured {
            return Ok(());
        }
        let pos = self.mouse.position();
        let side = self.style.cursor_size;
        let draw = DrawCtx::new(surface, &self.style, false);
        match self.options.cursor {
            Some(texture) => draw.draw_texture(texture, rect(pos.x, pos.y, side, side)),
            None => draw.draw_frame(rect(pos.x, pos.y, side * 0.25, side * 0.25), ControlColor::Cursor),
        }
        Ok(())
    }

    /// Unbinds the surface. A drag whose owner never saw the button go up is dropped here.
    pub fn end_frame(&mut self) {
        if let (Some(drag), Some(snapshot)) = (self.drag.active(), self.mouse.snapshot()) {
            if snapshot.is_left_up() {
                log::warn!("dropping stale drag owned by {} (producer {})", drag.owner, drag.owner.producer());
                self.drag.end_drag();
            }
        }
        self.containers.clear();
        self.mouse_requested = false;
        self.surface = None;
    }

    pub(crate) fn ensure_frame(&self) -> UiResult<&SurfaceHandle<S>> { self.surface.as_ref().ok_or(UiError::OutsideFrame) }

    pub(crate) fn ensure_call(&self) -> UiResult<()> {
        self.ensure_frame()?;
        if self.containers.is_empty() {
            return Err(UiError::NoActiveProducer);
        }
        Ok(())
    }

    /// Allocates the next call-order id of the running producer.
    pub fn next_id(&mut self, sticky: bool) -> UiResult<Id> {
        self.ensure_call()?;
        Ok(self.ids.next_id(sticky))
    }

    /// Pushes a child of the current container at `bounds` whose content is shifted by `origin`.
    pub fn push_container(&mut self, bounds: Rectf, origin: Vec2f) -> UiResult<()> {
        self.ensure_call()?;
        self.containers.push(bounds, origin)
    }

    /// Pops the current container. Fails on the root.
    pub fn pop_container(&mut self) -> UiResult<()> {
        self.ensure_call()?;
        self.containers.pop().map(|_| ())
    }

    /// Number of containers of the running producer, root included.
    pub fn container_depth(&self) -> usize { self.containers.depth() }

    /// Converts a rectangle local to the current container into root coordinates.
    pub fn convert_to_root(&self, local: Rectf) -> UiResult<Rectf> {
        self.ensure_call()?;
        self.containers.convert_to_root(local)
    }

    /// Clips a rectangle local to the current container against it and its ancestors.
    pub fn clip_to_container(&self, local: Rectf) -> UiResult<Rectf> {
        self.ensure_call()?;
        self.containers.clip_to_container(local)
    }

    /// Root-space rectangle and root-space clip rectangle of a widget placed at `local`.
    pub(crate) fn widget_rects(&self, local: Rectf) -> UiResult<(Rectf, Rectf)> {
        let draw = self.convert_to_root(local)?;
        let clip = self.containers.convert_to_root(self.containers.clip_to_container(local)?)?;
        Ok((draw, clip))
    }

    /// Pops back to `depth` when a scoped helper finishes.
    pub(crate) fn close_scope(&mut self, depth: usize, kind: &str) {
        let popped = self.containers.unwind_to(depth);
        if popped != 1 {
            log::warn!("{} scope closed {} containers instead of 1", kind, popped);
        }
    }

    /// Enables mouse interaction for the running producer and returns the cursor position.
    ///
    /// Asks the host to stop routing input to its own controls when [`Options::disable_host_input`] is set.
    pub fn request_mouse(&mut self) -> UiResult<Vec2f> {
        let disable = self.options.disable_host_input;
        self.request_mouse_with(disable)
    }

    /// Same as [`FrameState::request_mouse`] with an explicit choice about host input.
    pub fn request_mouse_with(&mut self, disable_host_input: bool) -> UiResult<Vec2f> {
        self.ensure_call()?;
        self.mouse_requested = true;
        self.mouse_captured = true;
        let snapshot = self.mouse.capture(&self.input.borrow());
        if disable_host_input {
            self.platform.disable_control_actions();
        }
        Ok(snapshot.position)
    }

    /// Returns `true` once the running producer requested the mouse.
    pub fn is_mouse_enabled(&self) -> bool { self.mouse_requested }

    /// Returns `true` once any producer requested the mouse this frame.
    pub fn mouse_captured_this_frame(&self) -> bool { self.mouse_captured }

    /// This frame's mouse snapshot, if captured.
    pub fn mouse_snapshot(&self) -> Option<MouseSnapshot> { self.mouse.snapshot() }

    /// Snapshot used for hit-testing, only when the running producer enabled the mouse.
    pub(crate) fn hit_mouse(&self) -> Option<MouseSnapshot> {
        if self.mouse_requested { self.mouse.snapshot() } else { None }
    }

    /// Starts a drag owned by `id` at the current mouse position. Ignored if another widget drags.
    pub fn begin_drag(&mut self, id: Id) -> bool {
        let mouse = self.mouse.position();
        self.drag.begin_drag(id, mouse)
    }

    /// Returns `true` if `id` owns the active drag.
    pub fn is_dragging(&self, id: Id) -> bool { self.drag.is_dragging(id) }

    /// Returns `true` if any widget owns the drag.
    pub fn is_dragging_any(&self) -> bool { self.drag.is_dragging_any() }

    /// Pointer movement since the drag began or since the previous call.
    pub fn drag_offset(&mut self) -> Vec2f {
        let mouse = self.mouse.position();
        self.drag.drag_offset(mouse)
    }

    /// Ends the active drag.
    pub fn end_drag(&mut self) { self.drag.end_drag(); }

    /// The active drag, if any.
    pub fn drag_state(&self) -> Option<DragState> { self.drag.active() }

    pub(crate) fn draw_ctx(&self) -> UiResult<DrawCtx<'_, S>> {
        let surface = self.ensure_frame()?;
        let debug = self.options.debug_overlay && self.input.borrow().is_key_down(KeyMode::SHIFT);
        Ok(DrawCtx::new(surface, &self.style, debug))
    }
}
