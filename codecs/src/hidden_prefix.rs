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

//! Transparently prepends unit-typed encodings (protocol constants, format
//! markers) ahead of a payload codec. The caller neither supplies nor
//! receives the prefix data: encoding writes it, decoding skips it.
//!
//! The encoded bytes are identical to a tuple of `[prefixes.., payload]`;
//! the combinator performs the same ordered walk over the same size algebra,
//! projecting out only the payload on the way back.
//!
//! Prefix *content* is not verified here: a prefix decoder is only trusted to
//! consume the right number of bytes. Use [`crate::constant_codec`] as a
//! prefix when the bytes themselves must be checked.

use crate::codec::CodecItem;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::size::{CodecSize, concat_sizes};

fn write_prefixes<E: Encoder<()> + ?Sized>(
    prefixes: &[Box<E>],
    bytes: &mut [u8],
    mut offset: usize,
) -> Result<usize, CodecError> {
    for prefix in prefixes {
        offset = prefix.write(&(), bytes, offset)?;
    }
    Ok(offset)
}

fn skip_prefixes<D: Decoder<()> + ?Sized>(
    prefixes: &[Box<D>],
    bytes: &[u8],
    mut offset: usize,
) -> Result<usize, CodecError> {
    for prefix in prefixes {
        let ((), next) = prefix.read(bytes, offset)?;
        offset = next;
    }
    Ok(offset)
}

fn prefixes_size<E: Encoder<()> + ?Sized>(prefixes: &[Box<E>]) -> usize {
    prefixes.iter().map(|prefix| prefix.encoded_size(&())).sum()
}

/// Writes hidden prefixes ahead of a payload encoder. See
/// [`hidden_prefix_encoder`].
pub struct HiddenPrefixEncoder<E> {
    prefixes: Vec<Box<dyn Encoder<()>>>,
    payload: E,
    size: CodecSize,
}

/// An encoder that writes each prefix in the supplied order, then the
/// payload. The prefixes never appear in the user-visible value.
pub fn hidden_prefix_encoder<T, E>(
    payload: E,
    prefixes: Vec<Box<dyn Encoder<()>>>,
) -> HiddenPrefixEncoder<E>
where
    T: ?Sized,
    E: Encoder<T>,
{
    let mut sizes: Vec<CodecSize> = prefixes.iter().map(|prefix| prefix.size()).collect();
    sizes.push(payload.size());
    HiddenPrefixEncoder {
        prefixes,
        payload,
        size: concat_sizes(&sizes),
    }
}

impl<T: ?Sized, E: Encoder<T>> Encoder<T> for HiddenPrefixEncoder<E> {
    fn size(&self) -> CodecSize {
        self.size
    }
    fn encoded_size(&self, value: &T) -> usize {
        prefixes_size(&self.prefixes) + self.payload.encoded_size(value)
    }
    fn write(&self, value: &T, bytes: &mut [u8], offset: usize) -> Result<usize, CodecError> {
        let offset = write_prefixes(&self.prefixes, bytes, offset)?;
        self.payload.write(value, bytes, offset)
    }
}

/// Skips hidden prefixes ahead of a payload decoder. See
/// [`hidden_prefix_decoder`].
pub struct HiddenPrefixDecoder<D> {
    prefixes: Vec<Box<dyn Decoder<()>>>,
    payload: D,
    size: CodecSize,
}

/// A decoder that runs each prefix decoder in the supplied order, discards
/// their unit values, and returns only the payload.
pub fn hidden_prefix_decoder<T, D>(
    payload: D,
    prefixes: Vec<Box<dyn Decoder<()>>>,
) -> HiddenPrefixDecoder<D>
where
    D: Decoder<T>,
{
    let mut sizes: Vec<CodecSize> = prefixes.iter().map(|prefix| prefix.size()).collect();
    sizes.push(payload.size());
    HiddenPrefixDecoder {
        prefixes,
        payload,
        size: concat_sizes(&sizes),
    }
}

impl<T, D: Decoder<T>> Decoder<T> for HiddenPrefixDecoder<D> {
    fn size(&self) -> CodecSize {
        self.size
    }
    fn read(&self, bytes: &[u8], offset: usize) -> Result<(T, usize), CodecError> {
        let offset = skip_prefixes(&self.prefixes, bytes, offset)?;
        self.payload.read(bytes, offset)
    }
}

/// Both hidden-prefix halves over a single prefix list. See
/// [`hidden_prefix_codec`].
pub struct HiddenPrefixCodec<C> {
    prefixes: Vec<Box<dyn CodecItem<()>>>,
    payload: C,
    size: CodecSize,
}

/// A codec that hides the given unit-typed prefixes around `payload`.
pub fn hidden_prefix_codec<TE, TD, C>(
    payload: C,
    prefixes: Vec<Box<dyn CodecItem<()>>>,
) -> HiddenPrefixCodec<C>
where
    TE: ?Sized,
    C: Encoder<TE> + Decoder<TD>,
{
    let mut sizes: Vec<CodecSize> = prefixes
        .iter()
        .map(|prefix| <dyn CodecItem<()> as Encoder<()>>::size(prefix.as_ref()))
        .collect();
    sizes.push(<C as Encoder<TE>>::size(&payload));
    HiddenPrefixCodec {
        prefixes,
        payload,
        size: concat_sizes(&sizes),
    }
}

impl<T: ?Sized, C: Encoder<T>> Encoder<T> for HiddenPrefixCodec<C> {
    fn size(&self) -> CodecSize {
        self.size
    }
    fn encoded_size(&self, value: &T) -> usize {
        prefixes_size(&self.prefixes) + self.payload.encoded_size(value)
    }
    fn write(&self, value: &T, bytes: &mut [u8], offset: usize) -> Result<usize, CodecError> {
        let offset = write_prefixes(&self.prefixes, bytes, offset)?;
        self.payload.write(value, bytes, offset)
    }
}

impl<T, C: Decoder<T>> Decoder<T> for HiddenPrefixCodec<C> {
    fn size(&self) -> CodecSize {
        self.size
    }
    fn read(&self, bytes: &[u8], offset: usize) -> Result<(T, usize), CodecError> {
        let offset = skip_prefixes(&self.prefixes, bytes, offset)?;
        self.payload.read(bytes, offset)
    }
}
