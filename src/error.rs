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
//! Error types for widget and frame-state calls.

use crate::ProducerId;
use thiserror::Error;

/// Precondition violations reported by the frame state and the widgets.
///
/// None of these are transient: each one means a producer broke the calling contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A call was made while no surface was bound.
    #[error("ui calls are only valid while a frame is being rendered")]
    OutsideFrame,

    /// A call was made inside a frame but outside a producer invocation.
    #[error("ui calls are only valid from inside a producer callback")]
    NoActiveProducer,

    /// A container pop was requested with only the root container left.
    #[error("cannot pop the root container")]
    PopRoot,

    /// A producer returned with containers it pushed but never popped.
    #[error("producer returned with {open} container(s) still pushed")]
    UnbalancedContainers {
        /// Number of containers left above the root.
        open: usize,
    },

    /// The producer id is not registered.
    #[error("producer {0} is not registered")]
    UnknownProducer(ProducerId),
}

/// A specialized Result type for ui operations.
pub type UiResult<T> = std::result::Result<T, UiError>;
