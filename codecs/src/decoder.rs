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

use crate::error::CodecError;
use crate::size::CodecSize;
use std::marker::PhantomData;

/// Deserialization of `T` from a byte slice.
///
/// Decoders never mutate their input. `read` is the composable entry point:
/// it consumes exactly the bytes its value occupies and reports the new
/// offset, so combinators can thread it through their children. `decode` is
/// the top-level entry point and additionally rejects leftover bytes.
pub trait Decoder<T> {
    /// The size behaviour of this decoder, known without inspecting bytes.
    fn size(&self) -> CodecSize;

    /// Reads a value from `bytes` starting at `offset`, returning the value
    /// and the offset one past the last byte consumed.
    fn read(&self, bytes: &[u8], offset: usize) -> Result<(T, usize), CodecError>;

    /// Decodes a value from the whole of `bytes`, rejecting trailing bytes.
    fn decode(&self, bytes: &[u8]) -> Result<T, CodecError> {
        let (value, end) = self.read(bytes, 0)?;
        if end < bytes.len() {
            return Err(CodecError::TrailingBytes {
                remaining: bytes.len() - end,
            });
        }
        Ok(value)
    }
}

impl<'a, T, D: Decoder<T> + ?Sized> Decoder<T> for &'a D {
    fn size(&self) -> CodecSize {
        (**self).size()
    }
    fn read(&self, bytes: &[u8], offset: usize) -> Result<(T, usize), CodecError> {
        (**self).read(bytes, offset)
    }
}

impl<T, D: Decoder<T> + ?Sized> Decoder<T> for Box<D> {
    fn size(&self) -> CodecSize {
        (**self).size()
    }
    fn read(&self, bytes: &[u8], offset: usize) -> Result<(T, usize), CodecError> {
        (**self).read(bytes, offset)
    }
}

/// Adapts a `Decoder<T>` into a `Decoder<U>` by mapping the value after it is
/// read. See [`transform_decoder`].
pub struct TransformDecoder<D, F, T> {
    decoder: D,
    transform: F,
    marker: PhantomData<fn(T)>,
}

/// Adapts `decoder` to a different logical value type via a pure mapping
/// function applied after each read. Size behaviour is unchanged.
pub fn transform_decoder<T, U, D, F>(decoder: D, transform: F) -> TransformDecoder<D, F, T>
where
    D: Decoder<T>,
    F: Fn(T) -> U,
{
    TransformDecoder {
        decoder,
        transform,
        marker: PhantomData,
    }
}

impl<T, U, D, F> Decoder<U> for TransformDecoder<D, F, T>
where
    D: Decoder<T>,
    F: Fn(T) -> U,
{
    fn size(&self) -> CodecSize {
        self.decoder.size()
    }
    fn read(&self, bytes: &[u8], offset: usize) -> Result<(U, usize), CodecError> {
        let (value, end) = self.decoder.read(bytes, offset)?;
        Ok(((self.transform)(value), end))
    }
}
