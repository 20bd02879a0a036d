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

/// Byte-size behaviour of an encoder or decoder.
///
/// A combinator computes its own `CodecSize` from its children's at
/// construction time; a `Fixed` result unlocks stronger guarantees downstream
/// (exact pre-allocation, remaining-byte checks before a read).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecSize {
    /// Every value occupies exactly this many bytes.
    Fixed(usize),
    /// The byte length depends on the value, optionally bounded by a maximum.
    Variable { max: Option<usize> },
}

impl CodecSize {
    /// The constant byte length, if there is one.
    pub fn fixed(&self) -> Option<usize> {
        match self {
            CodecSize::Fixed(size) => Some(*size),
            CodecSize::Variable { .. } => None,
        }
    }

    /// The largest byte length a value may occupy, if bounded.
    pub fn max(&self) -> Option<usize> {
        match self {
            CodecSize::Fixed(size) => Some(*size),
            CodecSize::Variable { max } => *max,
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, CodecSize::Fixed(_))
    }
}

/// Sums child sizes if every one of them is fixed; `None` as soon as any
/// child is variable.
pub fn sum_fixed_sizes(sizes: impl IntoIterator<Item = CodecSize>) -> Option<usize> {
    sizes
        .into_iter()
        .try_fold(0usize, |total, size| Some(total + size.fixed()?))
}

/// Sums child size bounds if every child reports one; `None` as soon as any
/// child is fully unbounded.
pub fn sum_max_sizes(sizes: impl IntoIterator<Item = CodecSize>) -> Option<usize> {
    sizes
        .into_iter()
        .try_fold(0usize, |total, size| Some(total + size.max()?))
}

/// The size of children laid out back to back: fixed when all children are
/// fixed, otherwise variable with the summed bound (if every child has one).
pub fn concat_sizes(sizes: &[CodecSize]) -> CodecSize {
    match sum_fixed_sizes(sizes.iter().copied()) {
        Some(total) => CodecSize::Fixed(total),
        None => CodecSize::Variable {
            max: sum_max_sizes(sizes.iter().copied()),
        },
    }
}
