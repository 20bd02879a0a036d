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

use crate::codec::CodecItem;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{CodecError, ensure_remaining};
use crate::size::{CodecSize, concat_sizes};

// The shared walk of both tuple halves. Each item fully determines its own
// byte length; offsets are strictly increasing and ranges never overlap.

fn write_items<T, E: Encoder<T> + ?Sized>(
    items: &[Box<E>],
    value: &[T],
    bytes: &mut [u8],
    mut offset: usize,
) -> Result<usize, CodecError> {
    if value.len() != items.len() {
        return Err(CodecError::InvalidItemCount {
            expected: items.len(),
            actual: value.len(),
        });
    }
    for (item, element) in items.iter().zip(value) {
        offset = item.write(element, bytes, offset)?;
    }
    Ok(offset)
}

fn read_items<T, D: Decoder<T> + ?Sized>(
    items: &[Box<D>],
    bytes: &[u8],
    mut offset: usize,
) -> Result<(Vec<T>, usize), CodecError> {
    let mut values = Vec::with_capacity(items.len());
    for item in items {
        if let CodecSize::Fixed(size) = item.size() {
            ensure_remaining(bytes, offset, size)?;
        }
        let (value, next) = item.read(bytes, offset)?;
        values.push(value);
        offset = next;
    }
    Ok((values, offset))
}

fn items_size<T, E: Encoder<T> + ?Sized>(items: &[Box<E>], value: &[T]) -> usize {
    items
        .iter()
        .zip(value)
        .map(|(item, element)| item.encoded_size(element))
        .sum()
}

/// Encodes an ordered, fixed-length sequence of heterogeneous items. See
/// [`tuple_encoder`].
pub struct TupleEncoder<T> {
    items: Vec<Box<dyn Encoder<T>>>,
    size: CodecSize,
}

/// A positional encoder over the given item encoders.
///
/// The value is a slice with exactly one element per item; positional type
/// correspondence is the caller's construction-time contract (`T` is
/// typically an enum carrying the per-position variants). The only runtime
/// check is the element count, made before any byte is written.
pub fn tuple_encoder<T>(items: Vec<Box<dyn Encoder<T>>>) -> TupleEncoder<T> {
    let sizes: Vec<CodecSize> = items.iter().map(|item| item.size()).collect();
    TupleEncoder {
        items,
        size: concat_sizes(&sizes),
    }
}

impl<T> Encoder<[T]> for TupleEncoder<T> {
    fn size(&self) -> CodecSize {
        self.size
    }
    fn encoded_size(&self, value: &[T]) -> usize {
        items_size(&self.items, value)
    }
    fn write(&self, value: &[T], bytes: &mut [u8], offset: usize) -> Result<usize, CodecError> {
        write_items(&self.items, value, bytes, offset)
    }
}

/// Decodes an ordered, fixed-length sequence of heterogeneous items. See
/// [`tuple_decoder`].
pub struct TupleDecoder<T> {
    items: Vec<Box<dyn Decoder<T>>>,
    size: CodecSize,
}

/// A positional decoder over the given item decoders. Items are read in
/// declaration order, each consuming exactly the bytes its own size dictates.
pub fn tuple_decoder<T>(items: Vec<Box<dyn Decoder<T>>>) -> TupleDecoder<T> {
    let sizes: Vec<CodecSize> = items.iter().map(|item| item.size()).collect();
    TupleDecoder {
        items,
        size: concat_sizes(&sizes),
    }
}

impl<T> Decoder<Vec<T>> for TupleDecoder<T> {
    fn size(&self) -> CodecSize {
        self.size
    }
    fn read(&self, bytes: &[u8], offset: usize) -> Result<(Vec<T>, usize), CodecError> {
        read_items(&self.items, bytes, offset)
    }
}

/// Both tuple halves over a single item list. See [`tuple_codec`].
pub struct TupleCodec<T> {
    items: Vec<Box<dyn CodecItem<T>>>,
    size: CodecSize,
}

/// A positional codec over the given item codecs.
pub fn tuple_codec<T>(items: Vec<Box<dyn CodecItem<T>>>) -> TupleCodec<T> {
    let sizes: Vec<CodecSize> = items
        .iter()
        .map(|item| <dyn CodecItem<T> as Encoder<T>>::size(item.as_ref()))
        .collect();
    TupleCodec {
        items,
        size: concat_sizes(&sizes),
    }
}

impl<T> Encoder<[T]> for TupleCodec<T> {
    fn size(&self) -> CodecSize {
        self.size
    }
    fn encoded_size(&self, value: &[T]) -> usize {
        items_size(&self.items, value)
    }
    fn write(&self, value: &[T], bytes: &mut [u8], offset: usize) -> Result<usize, CodecError> {
        write_items(&self.items, value, bytes, offset)
    }
}

impl<T> Decoder<Vec<T>> for TupleCodec<T> {
    fn size(&self) -> CodecSize {
        self.size
    }
    fn read(&self, bytes: &[u8], offset: usize) -> Result<(Vec<T>, usize), CodecError> {
        read_items(&self.items, bytes, offset)
    }
}
