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
use crate::{Input, Vec2f};

#[derive(Copy, Clone, Debug)]
/// Cursor state captured once per frame and shared by every widget of that frame.
pub struct MouseSnapshot {
    /// Cursor position in root coordinates.
    pub position: Vec2f,
    /// Left button held at capture time.
    pub is_left_down: bool,
    /// Left button held at the previous capture.
    pub was_left_down: bool,
}

impl MouseSnapshot {
    /// Returns `true` when the left button is not held.
    pub fn is_left_up(&self) -> bool { !self.is_left_down }

    /// Returns `true` on the frame the left button went down.
    pub fn left_pressed(&self) -> bool { self.is_left_down && !self.was_left_down }

    /// Returns `true` on the frame the left button went up.
    pub fn left_released(&self) -> bool { !self.is_left_down && self.was_left_down }
}

/// Captures the [`MouseSnapshot`] lazily, at most once per frame.
#[derive(Clone, Debug, Default)]
pub struct MouseTracker {
    current: Option<MouseSnapshot>,
    last_left_down: bool,
    last_position: Vec2f,
}

impl MouseTracker {
    /// Creates a tracker that has never captured.
    pub fn new() -> Self { Self::default() }

    /// Forgets the snapshot of the previous frame. The button state is kept to detect transitions.
    pub fn begin_frame(&mut self) { self.current = None; }

    /// Returns this frame's snapshot, reading `input` only on the first call of the frame.
    pub fn capture(&mut self, input: &Input) -> MouseSnapshot {
        if let Some(snapshot) = self.current {
            return snapshot;
        }
        let snapshot = MouseSnapshot {
            position: input.mouse_position(),
            is_left_down: input.mouse_buttons().is_left(),
            was_left_down: self.last_left_down,
        };
        log::trace!("mouse captured at ({}, {}) left={}", snapshot.position.x, snapshot.position.y, snapshot.is_left_down);
        self.last_left_down = snapshot.is_left_down;
        self.last_position = snapshot.position;
        self.current = Some(snapshot);
        snapshot
    }

    /// This frame's snapshot, if one was captured.
    pub fn snapshot(&self) -> Option<MouseSnapshot> { self.current }

    /// Returns `true` once a snapshot was captured this frame.
    pub fn is_captured(&self) -> bool { self.current.is_some() }

    /// Position of the most recent capture, from this frame or an earlier one.
    pub fn position(&self) -> Vec2f { self.last_position }
}
