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
use crate::{Id, Vec2f, vec2};

#[derive(Copy, Clone, Debug)]
/// The widget currently owning the drag and the pointer position offsets are measured from.
pub struct DragState {
    /// Widget that started the drag.
    pub owner: Id,
    /// Pointer position at the start of the drag, or at the last [`DragTracker::drag_offset`] call.
    pub origin: Vec2f,
}

/// Single engine-wide drag slot. At most one widget drags at any time.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    active: Option<DragState>,
}

impl DragTracker {
    /// Creates a tracker with no active drag.
    pub fn new() -> Self { Self::default() }

    /// Makes `id` the drag owner anchored at `mouse`. Ignored when another widget owns the drag.
    pub fn begin_drag(&mut self, id: Id, mouse: Vec2f) -> bool {
        match self.active {
            Some(state) if state.owner != id => {
                log::trace!("drag request from {} ignored, {} owns the drag", id, state.owner);
                false
            }
            _ => {
                log::debug!("drag started by {} (producer {})", id, id.producer());
                self.active = Some(DragState { owner: id, origin: mouse });
                true
            }
        }
    }

    /// Returns `true` if `id` owns the active drag.
    pub fn is_dragging(&self, id: Id) -> bool { matches!(self.active, Some(state) if state.owner == id) }

    /// Returns `true` if any widget owns the drag.
    pub fn is_dragging_any(&self) -> bool { self.active.is_some() }

    /// The active drag, if any.
    pub fn active(&self) -> Option<DragState> { self.active }

    /// Pointer movement since the drag started or since the previous call, then re-anchors at `mouse`.
    pub fn drag_offset(&mut self, mouse: Vec2f) -> Vec2f {
        match &mut self.active {
            Some(state) => {
                let offset = vec2(mouse.x - state.origin.x, mouse.y - state.origin.y);
                state.origin = mouse;
                offset
            }
            None => vec2(0.0, 0.0),
        }
    }

    /// Clears the active drag and returns it.
    pub fn end_drag(&mut self) -> Option<DragState> {
        let ended = self.active.take();
        if let Some(state) = ended {
            log::debug!("drag owned by {} ended", state.owner);
        }
        ended
    }
}
