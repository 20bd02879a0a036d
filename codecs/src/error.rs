// This file is part of lumen-codecs.
// Copyright (C) 2025 Lumen Foundation
// SPDX-License-Identifier: Apache-2.0
// Licensed under the Apache License, Version 2.0 (the "License");
// You may not use this file except in compliance with the License.
// You may obtain a copy of the License at
// http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Failure surface shared by every encoder, decoder, and codec in this crate.
///
/// Every variant carries the context of the violation; combinators propagate
/// child failures unchanged rather than wrapping them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A tuple value did not provide one element per declared item codec.
    /// Raised before any byte is written.
    #[error("expected a tuple of {expected} items, got {actual}")]
    InvalidItemCount { expected: usize, actual: usize },

    /// A character of the input string is not part of the configured alphabet.
    #[error("invalid character '{character}' at position {position} for the configured alphabet")]
    InvalidBaseCharacter { character: char, position: usize },

    /// The buffer does not hold enough bytes at the given offset.
    #[error("{required} byte(s) required at offset {offset}, but only {available} available")]
    OutOfBounds {
        offset: usize,
        required: usize,
        available: usize,
    },

    /// A constant codec read bytes that differ from the constant it declares.
    #[error("expected constant bytes {expected:02x?}, got {actual:02x?}")]
    InvalidConstant { expected: Vec<u8>, actual: Vec<u8> },

    /// An alphabet was built from a string containing a repeated character.
    #[error("duplicate character '{character}' in alphabet")]
    DuplicateAlphabetCharacter { character: char },

    /// An alphabet's length falls outside the supported radix range.
    #[error("alphabet must contain between 2 and 256 characters, got {len}")]
    InvalidAlphabetSize { len: usize },

    /// A top-level decode left bytes unconsumed.
    #[error("{remaining} byte(s) left over after decoding")]
    TrailingBytes { remaining: usize },
}

/// Checks that `required` bytes are available in `bytes` starting at `offset`.
pub(crate) fn ensure_remaining(
    bytes: &[u8],
    offset: usize,
    required: usize,
) -> Result<(), CodecError> {
    match bytes.len().checked_sub(offset) {
        Some(available) if available >= required => Ok(()),
        Some(available) => Err(CodecError::OutOfBounds {
            offset,
            required,
            available,
        }),
        None => Err(CodecError::OutOfBounds {
            offset,
            required,
            available: 0,
        }),
    }
}
