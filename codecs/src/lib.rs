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

#![deny(unreachable_pub)]
#![deny(warnings)]

mod base_x;
mod codec;
mod decoder;
mod encoder;
mod error;
mod hidden_prefix;
mod size;
mod tuple;

pub use crate::base_x::{Alphabet, BaseXCodec, base_58_codec, base_x_codec};
pub use crate::codec::{
    Codec, CodecItem, ConstantCodec, UnitCodec, combine_codec, constant_codec, unit_codec,
};
pub use crate::decoder::{Decoder, TransformDecoder, transform_decoder};
pub use crate::encoder::{Encoder, TransformEncoder, transform_encoder};
pub use crate::error::CodecError;
pub use crate::hidden_prefix::{
    HiddenPrefixCodec, HiddenPrefixDecoder, HiddenPrefixEncoder, hidden_prefix_codec,
    hidden_prefix_decoder, hidden_prefix_encoder,
};
pub use crate::size::{CodecSize, concat_sizes, sum_fixed_sizes, sum_max_sizes};
pub use crate::tuple::{
    TupleCodec, TupleDecoder, TupleEncoder, tuple_codec, tuple_decoder, tuple_encoder,
};
