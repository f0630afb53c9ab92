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

use crate::*;

/// Per-frame callback of one producer. It issues its widget calls against the shared [`FrameState`].
pub type Producer<S> = Box<dyn FnMut(&mut FrameState<S>) -> UiResult<()>>;

/// Entry point owned by the host: a registry of producers and the frame state they share.
pub struct Context<S: Surface> {
    state: FrameState<S>,
    producers: Vec<(ProducerId, Producer<S>)>,
    next_producer: u32,
    input: Rc<RefCell<Input>>,
}

impl<S: Surface> Context<S> {
    /// Creates a context with no producers, the default style and default options.
    pub fn new(platform: Box<dyn Platform>) -> Self {
        let input = Rc::new(RefCell::new(Input::default()));
        Self {
            state: FrameState::new(platform, input.clone()),
            producers: Vec::new(),
            next_producer: 1,
            input,
        }
    }

    /// Input state the host feeds between frames.
    pub fn input(&self) -> Rc<RefCell<Input>> { self.input.clone() }

    /// Frame state shared by the producers.
    pub fn state(&self) -> &FrameState<S> { &self.state }

    /// Replaces the style.
    pub fn set_style(&mut self, style: &Style) { self.state.set_style(style) }

    /// Replaces the options.
    pub fn set_options(&mut self, options: Options) { self.state.set_options(options) }

    /// Registers `producer`; it runs every frame after the producers registered before it.
    pub fn subscribe<F>(&mut self, producer: F) -> ProducerId
    where
        F: FnMut(&mut FrameState<S>) -> UiResult<()> + 'static,
    {
        let id = ProducerId::new(self.next_producer);
        self.next_producer += 1;
        self.producers.push((id, Box::new(producer)));
        log::debug!("producer {} subscribed ({} registered)", id, self.producers.len());
        id
    }

    /// Removes a producer registered with [`Context::subscribe`].
    pub fn unsubscribe(&mut self, id: ProducerId) -> UiResult<()> {
        let index = self.producers.iter().position(|(p, _)| *p == id).ok_or(UiError::UnknownProducer(id))?;
        self.producers.remove(index);
        log::debug!("producer {} unsubscribed ({} registered)", id, self.producers.len());
        Ok(())
    }

    /// Number of registered producers.
    pub fn producer_count(&self) -> usize { self.producers.len() }

    /// Renders one frame on `surface`: every producer in registration order, then the cursor.
    ///
    /// The first producer error aborts the frame; the remaining producers and the cursor are skipped, the
    /// surface is unbound and the error is returned.
    pub fn render(&mut self, surface: SurfaceHandle<S>) -> UiResult<()> {
        if self.producers.is_empty() {
            self.input.borrow_mut().epilogue();
            return Ok(());
        }

        self.state.begin_frame(surface);
        let res = self.run_producers().and_then(|_| self.state.draw_cursor());
        self.state.end_frame();
        self.input.borrow_mut().epilogue();

        if let Err(err) = &res {
            log::error!("frame {} aborted: {}", self.state.frame_count(), err);
        }
        res
    }

    fn run_producers(&mut self) -> UiResult<()> {
        for (id, producer) in self.producers.iter_mut() {
            self.state.begin_producer(*id)?;
            let res = producer(&mut self.state);
            let end = self.state.end_producer();
            res?;
            end?;
        }
        Ok(())
    }
}
