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

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{CodecError, ensure_remaining};
use crate::size::CodecSize;

/// A paired encoder and decoder.
///
/// The decoder's value type may refine the encoder's (decoding can be more
/// specific than encoding accepts), which is why the two halves keep separate
/// type parameters. A `Codec` implements [`Encoder`] and [`Decoder`] by
/// delegation, so it can be used anywhere either half is expected.
pub struct Codec<E, D> {
    encoder: E,
    decoder: D,
}

/// Pairs an encoder and a decoder into a [`Codec`].
pub fn combine_codec<E, D>(encoder: E, decoder: D) -> Codec<E, D> {
    Codec { encoder, decoder }
}

impl<E, D> Codec<E, D> {
    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }
}

impl<T: ?Sized, E: Encoder<T>, D> Encoder<T> for Codec<E, D> {
    fn size(&self) -> CodecSize {
        self.encoder.size()
    }
    fn encoded_size(&self, value: &T) -> usize {
        self.encoder.encoded_size(value)
    }
    fn write(&self, value: &T, bytes: &mut [u8], offset: usize) -> Result<usize, CodecError> {
        self.encoder.write(value, bytes, offset)
    }
}

impl<T, E, D: Decoder<T>> Decoder<T> for Codec<E, D> {
    fn size(&self) -> CodecSize {
        self.decoder.size()
    }
    fn read(&self, bytes: &[u8], offset: usize) -> Result<(T, usize), CodecError> {
        self.decoder.read(bytes, offset)
    }
}

/// An item usable on both sides of a paired combinator, as a trait object.
pub trait CodecItem<T>: Encoder<T> + Decoder<T> {}

impl<T, C: Encoder<T> + Decoder<T>> CodecItem<T> for C {}

/// The zero-byte codec for `()`. See [`unit_codec`].
pub struct UnitCodec;

/// A codec for `()` that writes and reads nothing. The identity element of
/// the hidden-prefix combinator.
pub fn unit_codec() -> UnitCodec {
    UnitCodec
}

impl Encoder<()> for UnitCodec {
    fn size(&self) -> CodecSize {
        CodecSize::Fixed(0)
    }
    fn encoded_size(&self, _value: &()) -> usize {
        0
    }
    fn write(&self, _value: &(), _bytes: &mut [u8], offset: usize) -> Result<usize, CodecError> {
        Ok(offset)
    }
}

impl Decoder<()> for UnitCodec {
    fn size(&self) -> CodecSize {
        CodecSize::Fixed(0)
    }
    fn read(&self, _bytes: &[u8], offset: usize) -> Result<((), usize), CodecError> {
        Ok(((), offset))
    }
}

/// A codec for `()` over a fixed byte string. See [`constant_codec`].
pub struct ConstantCodec {
    constant: Vec<u8>,
}

/// A codec for `()` that writes the given bytes verbatim and, on decode,
/// verifies they are present before skipping them. The usual building block
/// for hidden prefixes carrying protocol constants or format markers.
pub fn constant_codec(constant: impl Into<Vec<u8>>) -> ConstantCodec {
    ConstantCodec {
        constant: constant.into(),
    }
}

impl Encoder<()> for ConstantCodec {
    fn size(&self) -> CodecSize {
        CodecSize::Fixed(self.constant.len())
    }
    fn encoded_size(&self, _value: &()) -> usize {
        self.constant.len()
    }
    fn write(&self, _value: &(), bytes: &mut [u8], offset: usize) -> Result<usize, CodecError> {
        ensure_remaining(bytes, offset, self.constant.len())?;
        let end = offset + self.constant.len();
        bytes[offset..end].copy_from_slice(&self.constant);
        Ok(end)
    }
}

impl Decoder<()> for ConstantCodec {
    fn size(&self) -> CodecSize {
        CodecSize::Fixed(self.constant.len())
    }
    fn read(&self, bytes: &[u8], offset: usize) -> Result<((), usize), CodecError> {
        ensure_remaining(bytes, offset, self.constant.len())?;
        let end = offset + self.constant.len();
        let actual = &bytes[offset..end];
        if actual != self.constant {
            return Err(CodecError::InvalidConstant {
                expected: self.constant.clone(),
                actual: actual.to_vec(),
            });
        }
        Ok(((), end))
    }
}
