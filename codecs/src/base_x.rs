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
use num_bigint::BigUint;
use std::collections::HashMap;

/// The base-58 alphabet shared by Bitcoin and Solana: digits and letters
/// excluding `0`, `O`, `I` and `l`.
const BASE_58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// An ordered set of unique characters defining a positional numeral system
/// of base equal to its length.
#[derive(Debug, Clone)]
pub struct Alphabet {
    characters: Vec<char>,
    digits: HashMap<char, u8>,
}

impl Alphabet {
    /// Builds an alphabet from its characters in digit order. The length must
    /// lie in `2..=256` (the radix range big-integer conversion supports) and
    /// every character must be unique.
    pub fn new(alphabet: &str) -> Result<Self, CodecError> {
        let characters: Vec<char> = alphabet.chars().collect();
        if characters.len() < 2 || characters.len() > 256 {
            return Err(CodecError::InvalidAlphabetSize {
                len: characters.len(),
            });
        }
        let mut digits = HashMap::with_capacity(characters.len());
        for (index, &character) in characters.iter().enumerate() {
            if digits.insert(character, index as u8).is_some() {
                return Err(CodecError::DuplicateAlphabetCharacter { character });
            }
        }
        Ok(Alphabet { characters, digits })
    }

    pub fn base(&self) -> u32 {
        self.characters.len() as u32
    }

    /// The character carrying no numeric weight, significant only in leading
    /// position.
    pub fn zero(&self) -> char {
        self.characters[0]
    }
}

/// Converts between strings over a fixed alphabet and their minimal
/// big-endian byte representation. See [`base_x_codec`].
#[derive(Debug, Clone)]
pub struct BaseXCodec {
    alphabet: Alphabet,
}

/// A codec between strings over `alphabet` and bytes.
///
/// The string is interpreted as a base-N numeral, most significant character
/// first. Base conversion alone cannot represent leading zero digits, so they
/// are carried across explicitly: one leading `0x00` byte per leading
/// zero-digit character, and back. Output length is data-dependent in both
/// directions, so both halves report an unbounded variable size.
pub fn base_x_codec(alphabet: &str) -> Result<BaseXCodec, CodecError> {
    Ok(BaseXCodec {
        alphabet: Alphabet::new(alphabet)?,
    })
}

/// [`base_x_codec`] over the fixed 58-character Bitcoin/Solana alphabet.
pub fn base_58_codec() -> BaseXCodec {
    BaseXCodec {
        alphabet: Alphabet::new(BASE_58_ALPHABET).expect("base-58 alphabet is well-formed"),
    }
}

impl BaseXCodec {
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn to_bytes(&self, value: &str) -> Result<Vec<u8>, CodecError> {
        let zero = self.alphabet.zero();
        let mut digits = Vec::new();
        let mut leading_zeroes = 0usize;
        let mut leading = true;
        for (position, character) in value.chars().enumerate() {
            let Some(&digit) = self.alphabet.digits.get(&character) else {
                return Err(CodecError::InvalidBaseCharacter {
                    character,
                    position,
                });
            };
            if leading && character == zero {
                leading_zeroes += 1;
                continue;
            }
            leading = false;
            digits.push(digit);
        }
        let mut bytes = vec![0u8; leading_zeroes];
        if !digits.is_empty() {
            // The first digit is non-zero, so the magnitude is non-zero and
            // its big-endian bytes carry no superfluous leading zeroes.
            let magnitude = BigUint::from_radix_be(&digits, self.alphabet.base())
                .expect("alphabet digits are below the radix");
            bytes.extend_from_slice(&magnitude.to_bytes_be());
        }
        Ok(bytes)
    }

    fn to_text(&self, bytes: &[u8]) -> String {
        let leading_zeroes = bytes.iter().take_while(|byte| **byte == 0).count();
        let rest = &bytes[leading_zeroes..];
        let mut text = String::with_capacity(bytes.len());
        for _ in 0..leading_zeroes {
            text.push(self.alphabet.zero());
        }
        if !rest.is_empty() {
            let digits = BigUint::from_bytes_be(rest).to_radix_be(self.alphabet.base());
            for digit in digits {
                text.push(self.alphabet.characters[digit as usize]);
            }
        }
        text
    }
}

impl Encoder<str> for BaseXCodec {
    fn size(&self) -> CodecSize {
        CodecSize::Variable { max: None }
    }
    fn encoded_size(&self, value: &str) -> usize {
        // An invalid character surfaces as an error from `write`; size zero
        // here only affects the allocation of a buffer that is never filled.
        self.to_bytes(value).map(|bytes| bytes.len()).unwrap_or(0)
    }
    fn write(&self, value: &str, bytes: &mut [u8], offset: usize) -> Result<usize, CodecError> {
        let encoded = self.to_bytes(value)?;
        ensure_remaining(bytes, offset, encoded.len())?;
        let end = offset + encoded.len();
        bytes[offset..end].copy_from_slice(&encoded);
        Ok(end)
    }
}

impl Decoder<String> for BaseXCodec {
    fn size(&self) -> CodecSize {
        CodecSize::Variable { max: None }
    }
    fn read(&self, bytes: &[u8], offset: usize) -> Result<(String, usize), CodecError> {
        ensure_remaining(bytes, offset, 0)?;
        Ok((self.to_text(&bytes[offset..]), bytes.len()))
    }
}
