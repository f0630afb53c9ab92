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
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Identifies a registered producer. Never reused by a [`crate::Context`].
pub struct ProducerId(u32);

impl ProducerId {
    /// Wraps a raw producer number.
    pub fn new(raw: u32) -> Self { Self(raw) }

    /// Returns the raw producer number.
    pub fn raw(self) -> u32 { self.0 }
}

impl fmt::Display for ProducerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "#{}", self.0) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Widget identity: the producer that issued it and the call ordinal within that producer's invocation.
pub struct Id {
    producer: ProducerId,
    ordinal: u32,
    sticky: bool,
}

impl Id {
    /// Producer the widget belongs to.
    pub fn producer(self) -> ProducerId { self.producer }

    /// Position of the widget call within the producer's invocation, starting at zero.
    pub fn ordinal(self) -> u32 { self.ordinal }

    /// Whether the id was requested as a long-lived drag key.
    pub fn is_sticky(self) -> bool { self.sticky }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:08X}", self.ordinal) }
}

/// Hands out call-order ids for one producer invocation at a time.
pub struct IdAllocator {
    producer: ProducerId,
    counter: u32,
    sticky: u32,
}

impl Default for IdAllocator {
    fn default() -> Self { Self::new() }
}

impl IdAllocator {
    /// Creates an allocator that has not issued any id yet.
    pub fn new() -> Self { Self { producer: ProducerId(0), counter: 0, sticky: 0 } }

    /// Restarts numbering at zero for `producer`.
    pub fn reset(&mut self, producer: ProducerId) {
        self.producer = producer;
        self.counter = 0;
        self.sticky = 0;
    }

    /// Returns the current ordinal, then advances it.
    pub fn next_id(&mut self, sticky: bool) -> Id {
        let id = Id { producer: self.producer, ordinal: self.counter, sticky };
        self.counter += 1;
        if sticky {
            self.sticky += 1;
        }
        id
    }

    /// Number of ids issued since the last reset.
    pub fn issued(&self) -> u32 { self.counter }

    /// Number of sticky ids issued since the last reset.
    pub fn sticky_issued(&self) -> u32 { self.sticky }
}
