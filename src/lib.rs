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
#![deny(missing_docs)]
//! `overlay-imgui` is an immediate-mode widget layer drawn on top of a host application's render pass.
//!
//! Any number of independent producers register a per-frame callback with a [`Context`]. Every frame the
//! context runs them one after the other against a single [`FrameState`], so widget ids, the container
//! stack, the mouse snapshot and the drag tracker stay consistent even though producers know nothing
//! about each other.
//!
//! Widget ids are derived from call order. A producer must issue the same sequence of widget calls every
//! frame for a widget that takes part in a drag, otherwise the drag silently attaches to whichever widget
//! now occupies that position in the sequence.

use std::sync::{Arc, RwLock};

mod container;
mod context;
mod drag;
mod draw_context;
mod error;
mod frame;
mod idmngr;
mod mouse;
mod scroll_view;
mod utils;
mod widgets;
mod window;

#[cfg(test)]
mod test_support;

pub use container::{Container, ContainerStack, Transform};
pub use context::{Context, Producer};
pub use drag::{DragState, DragTracker};
pub use draw_context::{HAlign, VAlign};
pub use error::{UiError, UiResult};
pub use frame::FrameState;
pub use idmngr::{Id, IdAllocator, ProducerId};
pub use mouse::{MouseSnapshot, MouseTracker};
pub use rs_math3d::*;
pub use utils::{clamp, intersect_rect, is_empty_rect, offset_rect, rect_contains};

use bitflags::*;

/// Rectangle in floating-point pixel coordinates.
pub type Rectf = Rect<f32>;

/// Width/height pair in floating-point pixels.
pub type Sizef = Dimension<f32>;

/// Convenience constructor for [`Vec2f`].
pub fn vec2(x: f32, y: f32) -> Vec2f { Vec2f::new(x, y) }

/// Convenience constructor for [`Rectf`].
pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Rectf { Rectf { x, y, width: w, height: h } }

/// Convenience constructor for [`Sizef`].
pub fn size(w: f32, h: f32) -> Sizef { Sizef::new(w, h) }

/// Convenience constructor for [`Color`].
pub fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
/// Simple RGBA color stored with 8-bit components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Handle referencing a texture owned by the host.
pub struct TextureId(u32);

impl TextureId {
    /// Wraps a host texture handle.
    pub fn new(raw: u32) -> Self { Self(raw) }

    /// Returns the raw numeric identifier stored inside the handle.
    pub fn raw(self) -> u32 { self.0 }
}

/// Drawing backend the widgets paint on. It is only reachable while a frame is being rendered.
pub trait Surface {
    /// Fills a rectangle given in screen coordinates.
    fn draw_rectangle(&mut self, rect: Rectf, color: Color);
    /// Draws a string with its top-left corner at `position`, optionally clipped to `clip`.
    fn draw_text(&mut self, text: &str, font: &str, size: f32, position: Vec2f, color: Color, clip: Option<Rectf>);
    /// Returns the extent `text` would occupy when drawn with `font` at `size`.
    fn measure_text(&self, text: &str, font: &str, size: f32) -> Sizef;
    /// Draws a host texture stretched over the given rectangle.
    fn draw_texture(&mut self, texture: TextureId, x: f32, y: f32, width: f32, height: f32);
}

/// Thread-safe handle that shares ownership of a [`Surface`].
pub struct SurfaceHandle<S: Surface> {
    handle: Arc<RwLock<S>>,
}

// seems there's a bug in #[derive(Clone)] as it's unable to induce that Arc is sufficient
impl<S: Surface> Clone for SurfaceHandle<S> {
    fn clone(&self) -> Self { Self { handle: self.handle.clone() } }
}

impl<S: Surface> SurfaceHandle<S> {
    /// Wraps a surface inside an [`Arc<RwLock<...>>`] so it can be shared with the host.
    pub fn new(surface: S) -> Self { Self { handle: Arc::new(RwLock::new(surface)) } }

    /// Executes the provided closure with a shared reference to the surface.
    pub fn scope<Res, F: FnOnce(&S) -> Res>(&self, f: F) -> Res {
        match self.handle.read() {
            Ok(guard) => f(&*guard),
            Err(poisoned) => f(&*poisoned.into_inner()),
        }
    }

    /// Executes the provided closure with a mutable reference to the surface.
    pub fn scope_mut<Res, F: FnOnce(&mut S) -> Res>(&self, f: F) -> Res {
        match self.handle.write() {
            Ok(mut guard) => f(&mut *guard),
            Err(poisoned) => f(&mut *poisoned.into_inner()),
        }
    }
}

/// Host services queried by the frame state.
pub trait Platform {
    /// Current viewport size; the root container of every producer covers it.
    fn resolution(&self) -> Sizef;
    /// Stops the host from routing input to its own controls for the rest of the frame.
    fn disable_control_actions(&mut self);
}

#[derive(PartialEq, Copy, Clone, Debug)]
#[repr(u32)]
/// Identifiers for each of the built-in style colors.
pub enum ControlColor {
    /// Number of color entries in [`Style::colors`].
    Max = 13,
    /// Fallback cursor drawn when no cursor texture is configured.
    Cursor = 12,
    /// Outline drawn around labels by the debug overlay.
    DebugOutline = 11,
    /// Text drawn by the debug overlay.
    DebugText = 10,
    /// Slider handle or toggle check while pressed.
    HandleFocus = 9,
    /// Slider handle or toggle check while hovered.
    HandleHover = 8,
    /// Default slider handle or toggle check.
    Handle = 7,
    /// Base color while the widget is pressed.
    BaseFocus = 6,
    /// Base color while the pointer hovers the widget.
    BaseHover = 5,
    /// Default base color of buttons, toggles and slider tracks.
    Base = 4,
    /// Scroll view background.
    ScrollViewBG = 3,
    /// Window body background.
    WindowBG = 2,
    /// Window title bar background.
    TitleBG = 1,
    /// Default text color.
    Text = 0,
}

impl ControlColor {
    /// Promotes the enum to the hover variant when relevant.
    pub fn hover(&mut self) {
        *self = match self {
            Self::Base => Self::BaseHover,
            Self::Handle => Self::HandleHover,
            _ => *self,
        }
    }

    /// Promotes the enum to the pressed variant when relevant.
    pub fn focus(&mut self) {
        *self = match self {
            Self::Base | Self::BaseHover => Self::BaseFocus,
            Self::Handle | Self::HandleHover => Self::HandleFocus,
            _ => *self,
        }
    }
}

#[derive(Clone, Debug)]
/// Collection of visual constants that drive widget appearance.
pub struct Style {
    /// Font family passed to the surface for all text.
    pub font: String,
    /// Size used by buttons, toggles and labels.
    pub font_size: f32,
    /// Size used by window titles.
    pub title_font_size: f32,
    /// Size used by the debug overlay.
    pub debug_font_size: f32,
    /// Height of window title bars.
    pub title_height: f32,
    /// Thickness of scroll view scrollbars.
    pub scrollbar_size: f32,
    /// Gap between a slider track and its handle, and between a toggle box and its check.
    pub handle_padding: f32,
    /// Edge length of the mouse cursor.
    pub cursor_size: f32,
    /// Palette of [`ControlColor`] entries.
    pub colors: [Color; ControlColor::Max as usize],
}

impl Style {
    /// Returns the palette entry for `id`.
    pub fn color(&self, id: ControlColor) -> Color { self.colors[id as usize] }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font: String::from("Consolas"),
            font_size: 15.0,
            title_font_size: 20.0,
            debug_font_size: 18.0,
            title_height: 30.0,
            scrollbar_size: 17.0,
            handle_padding: 3.0,
            cursor_size: 32.0,
            colors: [
                Color { r: 255, g: 255, b: 255, a: 255 },
                Color { r: 15, g: 15, b: 15, a: 215 },
                Color { r: 45, g: 45, b: 45, a: 150 },
                Color { r: 25, g: 25, b: 25, a: 180 },
                Color { r: 10, g: 10, b: 10, a: 230 },
                Color { r: 25, g: 25, b: 25, a: 240 },
                Color { r: 45, g: 45, b: 45, a: 245 },
                Color { r: 55, g: 55, b: 55, a: 240 },
                Color { r: 70, g: 70, b: 70, a: 240 },
                Color { r: 95, g: 95, b: 95, a: 240 },
                Color { r: 255, g: 0, b: 0, a: 255 },
                Color { r: 255, g: 0, b: 0, a: 50 },
                Color { r: 255, g: 255, b: 255, a: 230 },
            ],
        }
    }
}

#[derive(Copy, Clone, Debug)]
/// Behavioural switches that are not part of the visual style.
pub struct Options {
    /// Draws widget ids (and label bounds) while Shift is held.
    pub debug_overlay: bool,
    /// Whether [`FrameState::request_mouse`] asks the host to stop routing input to its own controls.
    pub disable_host_input: bool,
    /// Texture drawn as the mouse cursor; a plain square is drawn when unset.
    pub cursor: Option<TextureId>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            debug_overlay: cfg!(debug_assertions),
            disable_host_input: true,
            cursor: None,
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Mouse button state as reported by the input system.
    pub struct MouseButton : u32 {
        /// Middle mouse button.
        const MIDDLE = 4;
        /// Right mouse button.
        const RIGHT = 2;
        /// Left mouse button.
        const LEFT = 1;
        /// No buttons pressed.
        const NONE = 0;
    }
}

impl MouseButton {
    /// Returns `true` if the middle mouse button is pressed.
    pub fn is_middle(&self) -> bool { self.intersects(Self::MIDDLE) }
    /// Returns `true` if the right mouse button is pressed.
    pub fn is_right(&self) -> bool { self.intersects(Self::RIGHT) }
    /// Returns `true` if the left mouse button is pressed.
    pub fn is_left(&self) -> bool { self.intersects(Self::LEFT) }
    /// Returns `true` if no mouse buttons are pressed.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Modifier key state tracked by the input system.
    pub struct KeyMode : u32 {
        /// Alt key held.
        const ALT = 4;
        /// Control key held.
        const CTRL = 2;
        /// Shift key held.
        const SHIFT = 1;
        /// No modifiers active.
        const NONE = 0;
    }
}

impl KeyMode {
    /// Returns `true` if no modifiers are active.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
    /// Returns `true` if Alt is held.
    pub fn is_alt(&self) -> bool { self.intersects(Self::ALT) }
    /// Returns `true` if Control is held.
    pub fn is_ctrl(&self) -> bool { self.intersects(Self::CTRL) }
    /// Returns `true` if Shift is held.
    pub fn is_shift(&self) -> bool { self.intersects(Self::SHIFT) }
}

#[derive(Clone, Debug)]
/// Device state forwarded by the host application loop.
pub struct Input {
    mouse_pos: Vec2f,
    mouse_down: MouseButton,
    key_down: KeyMode,
    key_pressed: KeyMode,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            mouse_pos: Vec2f::default(),
            mouse_down: MouseButton::NONE,
            key_down: KeyMode::NONE,
            key_pressed: KeyMode::NONE,
        }
    }
}

impl Input {
    /// Updates the current mouse pointer position.
    pub fn mousemove(&mut self, x: f32, y: f32) { self.mouse_pos = vec2(x, y); }

    /// Returns the current mouse pointer position.
    pub fn mouse_position(&self) -> Vec2f { self.mouse_pos }

    /// Returns the currently held mouse buttons.
    pub fn mouse_buttons(&self) -> MouseButton { self.mouse_down }

    /// Records that the specified mouse button was pressed.
    pub fn mousedown(&mut self, x: f32, y: f32, btn: MouseButton) {
        self.mousemove(x, y);
        self.mouse_down |= btn;
    }

    /// Records that the specified mouse button was released.
    pub fn mouseup(&mut self, x: f32, y: f32, btn: MouseButton) {
        self.mousemove(x, y);
        self.mouse_down &= !btn;
    }

    /// Records that a modifier key was pressed.
    pub fn keydown(&mut self, key: KeyMode) {
        self.key_pressed |= key;
        self.key_down |= key;
    }

    /// Records that a modifier key was released.
    pub fn keyup(&mut self, key: KeyMode) { self.key_down &= !key; }

    /// Returns the state of all modifier keys.
    pub fn key_state(&self) -> KeyMode { self.key_down }

    /// Returns `true` while any of `key` is held.
    pub fn is_key_down(&self, key: KeyMode) -> bool { self.key_down.intersects(key) }

    /// Returns `true` if any of `key` went down since the last [`Input::epilogue`].
    pub fn was_key_just_pressed(&self, key: KeyMode) -> bool { self.key_pressed.intersects(key) }

    /// Forgets the key presses of the finished frame.
    pub fn epilogue(&mut self) { self.key_pressed = KeyMode::NONE; }
}
