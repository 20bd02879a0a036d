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

/// Serialization of `T` into a caller-supplied byte buffer.
///
/// Encoders are stateless descriptors: construction fixes their configuration,
/// after which `write` may be called any number of times, concurrently. The
/// only side effect is mutating the output buffer in place.
///
/// See [`crate::Decoder`] for the deserialization counterpart.
pub trait Encoder<T: ?Sized> {
    /// The size behaviour of this encoder, known without inspecting a value.
    fn size(&self) -> CodecSize;

    /// The number of bytes `value` occupies once encoded. For fixed-size
    /// encoders this is constant across values.
    fn encoded_size(&self, value: &T) -> usize;

    /// Writes `value` into `bytes` starting at `offset`, returning the offset
    /// one past the last byte written.
    fn write(&self, value: &T, bytes: &mut [u8], offset: usize) -> Result<usize, CodecError>;

    /// Encodes `value` into a freshly allocated buffer.
    fn encode(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        let mut bytes = vec![0u8; self.encoded_size(value)];
        let end = self.write(value, &mut bytes, 0)?;
        bytes.truncate(end);
        Ok(bytes)
    }
}

impl<'a, T: ?Sized, E: Encoder<T> + ?Sized> Encoder<T> for &'a E {
    fn size(&self) -> CodecSize {
        (**self).size()
    }
    fn encoded_size(&self, value: &T) -> usize {
        (**self).encoded_size(value)
    }
    fn write(&self, value: &T, bytes: &mut [u8], offset: usize) -> Result<usize, CodecError> {
        (**self).write(value, bytes, offset)
    }
}

impl<T: ?Sized, E: Encoder<T> + ?Sized> Encoder<T> for Box<E> {
    fn size(&self) -> CodecSize {
        (**self).size()
    }
    fn encoded_size(&self, value: &T) -> usize {
        (**self).encoded_size(value)
    }
    fn write(&self, value: &T, bytes: &mut [u8], offset: usize) -> Result<usize, CodecError> {
        (**self).write(value, bytes, offset)
    }
}

/// Adapts an `Encoder<T>` into an `Encoder<U>` by mapping the value before it
/// is written. See [`transform_encoder`].
pub struct TransformEncoder<E, F, T> {
    encoder: E,
    transform: F,
    marker: PhantomData<fn() -> T>,
}

/// Adapts `encoder` to a different logical value type via a pure mapping
/// function applied before each write. Size behaviour is unchanged.
pub fn transform_encoder<T, U, E, F>(encoder: E, transform: F) -> TransformEncoder<E, F, T>
where
    U: ?Sized,
    E: Encoder<T>,
    F: Fn(&U) -> T,
{
    TransformEncoder {
        encoder,
        transform,
        marker: PhantomData,
    }
}

impl<T, U, E, F> Encoder<U> for TransformEncoder<E, F, T>
where
    U: ?Sized,
    E: Encoder<T>,
    F: Fn(&U) -> T,
{
    fn size(&self) -> CodecSize {
        self.encoder.size()
    }
    fn encoded_size(&self, value: &U) -> usize {
        self.encoder.encoded_size(&(self.transform)(value))
    }
    fn write(&self, value: &U, bytes: &mut [u8], offset: usize) -> Result<usize, CodecError> {
        self.encoder.write(&(self.transform)(value), bytes, offset)
    }
}
