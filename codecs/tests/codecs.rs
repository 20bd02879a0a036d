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

#[cfg(test)]
mod tests {
    use lumen_codecs::*;

    // Leaf codecs standing in for the primitive codecs the SDK supplies.
    // Tuple items share one value type, so the leaves carry an enum.

    #[derive(Debug, Clone, PartialEq)]
    enum Field {
        Text(String),
        Byte(u8),
    }

    /// Fixed-width ASCII string, `len` bytes, no length prefix.
    struct AsciiCodec {
        len: usize,
    }

    impl Encoder<Field> for AsciiCodec {
        fn size(&self) -> CodecSize {
            CodecSize::Fixed(self.len)
        }
        fn encoded_size(&self, _value: &Field) -> usize {
            self.len
        }
        fn write(
            &self,
            value: &Field,
            bytes: &mut [u8],
            offset: usize,
        ) -> Result<usize, CodecError> {
            let Field::Text(text) = value else {
                panic!("ascii codec expects a text field")
            };
            assert_eq!(text.len(), self.len);
            let end = offset + self.len;
            bytes[offset..end].copy_from_slice(text.as_bytes());
            Ok(end)
        }
    }

    impl Decoder<Field> for AsciiCodec {
        fn size(&self) -> CodecSize {
            CodecSize::Fixed(self.len)
        }
        fn read(&self, bytes: &[u8], offset: usize) -> Result<(Field, usize), CodecError> {
            let end = offset + self.len;
            let text = std::str::from_utf8(&bytes[offset..end]).unwrap().to_string();
            Ok((Field::Text(text), end))
        }
    }

    /// A single unsigned byte.
    struct ByteCodec;

    impl Encoder<Field> for ByteCodec {
        fn size(&self) -> CodecSize {
            CodecSize::Fixed(1)
        }
        fn encoded_size(&self, _value: &Field) -> usize {
            1
        }
        fn write(
            &self,
            value: &Field,
            bytes: &mut [u8],
            offset: usize,
        ) -> Result<usize, CodecError> {
            let Field::Byte(byte) = value else {
                panic!("byte codec expects a byte field")
            };
            bytes[offset] = *byte;
            Ok(offset + 1)
        }
    }

    impl Decoder<Field> for ByteCodec {
        fn size(&self) -> CodecSize {
            CodecSize::Fixed(1)
        }
        fn read(&self, bytes: &[u8], offset: usize) -> Result<(Field, usize), CodecError> {
            Ok((Field::Byte(bytes[offset]), offset + 1))
        }
    }

    /// UTF-8 text consuming the rest of the buffer.
    struct Utf8Codec;

    impl Encoder<str> for Utf8Codec {
        fn size(&self) -> CodecSize {
            CodecSize::Variable { max: None }
        }
        fn encoded_size(&self, value: &str) -> usize {
            value.len()
        }
        fn write(&self, value: &str, bytes: &mut [u8], offset: usize) -> Result<usize, CodecError> {
            let end = offset + value.len();
            bytes[offset..end].copy_from_slice(value.as_bytes());
            Ok(end)
        }
    }

    impl Decoder<String> for Utf8Codec {
        fn size(&self) -> CodecSize {
            CodecSize::Variable { max: None }
        }
        fn read(&self, bytes: &[u8], offset: usize) -> Result<(String, usize), CodecError> {
            let text = String::from_utf8(bytes[offset..].to_vec()).unwrap();
            Ok((text, bytes.len()))
        }
    }

    /// Writes nothing; reports a variable size bounded by `max`.
    struct BoundedCodec {
        max: usize,
    }

    impl Encoder<Field> for BoundedCodec {
        fn size(&self) -> CodecSize {
            CodecSize::Variable {
                max: Some(self.max),
            }
        }
        fn encoded_size(&self, _value: &Field) -> usize {
            0
        }
        fn write(
            &self,
            _value: &Field,
            _bytes: &mut [u8],
            offset: usize,
        ) -> Result<usize, CodecError> {
            Ok(offset)
        }
    }

    /// Writes nothing; reports a fully unbounded variable size.
    struct UnboundedCodec;

    impl Encoder<Field> for UnboundedCodec {
        fn size(&self) -> CodecSize {
            CodecSize::Variable { max: None }
        }
        fn encoded_size(&self, _value: &Field) -> usize {
            0
        }
        fn write(
            &self,
            _value: &Field,
            _bytes: &mut [u8],
            offset: usize,
        ) -> Result<usize, CodecError> {
            Ok(offset)
        }
    }

    #[test]
    fn tuple_name_and_age_layout() {
        let codec = tuple_codec(vec![
            Box::new(AsciiCodec { len: 5 }) as Box<dyn CodecItem<Field>>,
            Box::new(ByteCodec),
        ]);
        let value = [Field::Text("Alice".into()), Field::Byte(42)];
        let bytes = codec.encode(&value[..]).unwrap();
        assert_eq!(bytes, vec![0x41, 0x6c, 0x69, 0x63, 0x65, 0x2a]);
        assert_eq!(codec.decode(&bytes).unwrap(), value.to_vec());
    }

    #[test]
    fn tuple_item_count_mismatch_writes_nothing() {
        let encoder = tuple_encoder(vec![
            Box::new(AsciiCodec { len: 5 }) as Box<dyn Encoder<Field>>,
            Box::new(ByteCodec),
        ]);
        let mut bytes = [0xffu8; 6];
        let err = encoder
            .write(&[Field::Byte(1)][..], &mut bytes, 0)
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidItemCount {
                expected: 2,
                actual: 1
            }
        );
        assert_eq!(bytes, [0xff; 6]);
        assert!(matches!(
            encoder.encode(&[Field::Byte(1)][..]),
            Err(CodecError::InvalidItemCount { .. })
        ));
    }

    #[test]
    fn hidden_prefix_wraps_payload() {
        let codec = hidden_prefix_codec(
            Utf8Codec,
            vec![
                Box::new(constant_codec([0x01, 0x02, 0x03])) as Box<dyn CodecItem<()>>,
                Box::new(constant_codec([0x04, 0x05, 0x06])),
            ],
        );
        let bytes = codec.encode("Hello").unwrap();
        assert_eq!(
            bytes,
            vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x48, 0x65, 0x6c, 0x6c, 0x6f]
        );
        assert_eq!(codec.decode(&bytes).unwrap(), "Hello");
    }

    #[test]
    fn hidden_prefix_bytes_equal_prefix_concatenation() {
        let first = constant_codec([0x01, 0x02, 0x03]);
        let second = constant_codec([0x04, 0x05, 0x06]);
        let codec = hidden_prefix_codec(
            Utf8Codec,
            vec![
                Box::new(constant_codec([0x01, 0x02, 0x03])) as Box<dyn CodecItem<()>>,
                Box::new(constant_codec([0x04, 0x05, 0x06])),
            ],
        );
        let mut expected = first.encode(&()).unwrap();
        expected.extend(second.encode(&()).unwrap());
        expected.extend(Utf8Codec.encode("Hello").unwrap());
        assert_eq!(codec.encode("Hello").unwrap(), expected);
    }

    #[test]
    fn unit_prefixes_add_no_bytes() {
        let encoder = hidden_prefix_encoder(
            Utf8Codec,
            vec![Box::new(unit_codec()) as Box<dyn Encoder<()>>],
        );
        assert_eq!(encoder.encode("hi").unwrap(), b"hi");

        let decoder = hidden_prefix_decoder(
            Utf8Codec,
            vec![Box::new(unit_codec()) as Box<dyn Decoder<()>>],
        );
        assert_eq!(decoder.decode(b"hi").unwrap(), "hi");
    }

    #[test]
    fn nested_combinators_round_trip() {
        let tuple = tuple_codec(vec![
            Box::new(AsciiCodec { len: 3 }) as Box<dyn CodecItem<Field>>,
            Box::new(ByteCodec),
        ]);
        let codec = hidden_prefix_codec(
            tuple,
            vec![Box::new(constant_codec([0x7f])) as Box<dyn CodecItem<()>>],
        );
        let value = [Field::Text("abc".into()), Field::Byte(9)];
        let bytes = codec.encode(&value[..]).unwrap();
        assert_eq!(bytes, vec![0x7f, b'a', b'b', b'c', 9]);
        assert_eq!(codec.decode(&bytes).unwrap(), value.to_vec());
    }

    #[test]
    fn fixed_items_produce_fixed_combinator() {
        let encoder = tuple_encoder(vec![
            Box::new(AsciiCodec { len: 5 }) as Box<dyn Encoder<Field>>,
            Box::new(ByteCodec),
        ]);
        assert_eq!(encoder.size(), CodecSize::Fixed(6));
    }

    #[test]
    fn bounded_items_produce_bounded_combinator() {
        let encoder = tuple_encoder(vec![
            Box::new(AsciiCodec { len: 4 }) as Box<dyn Encoder<Field>>,
            Box::new(BoundedCodec { max: 10 }),
        ]);
        assert_eq!(encoder.size(), CodecSize::Variable { max: Some(14) });
    }

    #[test]
    fn unbounded_item_clears_the_bound() {
        let encoder = tuple_encoder(vec![
            Box::new(AsciiCodec { len: 4 }) as Box<dyn Encoder<Field>>,
            Box::new(UnboundedCodec),
        ]);
        assert_eq!(encoder.size(), CodecSize::Variable { max: None });
    }

    #[test]
    fn hidden_prefix_size_includes_prefixes() {
        let encoder = hidden_prefix_encoder(
            ByteCodec,
            vec![Box::new(constant_codec([0x01, 0x02])) as Box<dyn Encoder<()>>],
        );
        assert_eq!(encoder.size(), CodecSize::Fixed(3));
    }

    #[test]
    fn transform_preserves_size_and_bytes() {
        let encoder = transform_encoder(ByteCodec, |value: &u8| Field::Byte(*value));
        assert_eq!(encoder.size(), CodecSize::Fixed(1));
        assert_eq!(encoder.encode(&42u8).unwrap(), vec![42]);

        let decoder = transform_decoder(ByteCodec, |field: Field| match field {
            Field::Byte(byte) => byte,
            Field::Text(_) => panic!("expected a byte"),
        });
        assert_eq!(decoder.size(), CodecSize::Fixed(1));
        assert_eq!(decoder.decode(&[42]).unwrap(), 42u8);
    }

    #[test]
    fn combined_codec_round_trips() {
        let codec = combine_codec(
            transform_encoder(ByteCodec, |value: &u8| Field::Byte(*value)),
            transform_decoder(ByteCodec, |field: Field| match field {
                Field::Byte(byte) => byte,
                Field::Text(_) => panic!("expected a byte"),
            }),
        );
        let bytes = codec.encode(&7u8).unwrap();
        assert_eq!(bytes, vec![7]);
        assert_eq!(codec.decode(&bytes).unwrap(), 7u8);
    }

    #[test]
    fn tuple_decode_reports_missing_bytes() {
        let decoder = tuple_decoder(vec![
            Box::new(AsciiCodec { len: 5 }) as Box<dyn Decoder<Field>>,
            Box::new(ByteCodec),
        ]);
        let err = decoder.decode(&[0x41]).unwrap_err();
        assert_eq!(
            err,
            CodecError::OutOfBounds {
                offset: 0,
                required: 5,
                available: 1
            }
        );
    }

    #[test]
    fn decode_rejects_trailing_bytes() {
        let err = ByteCodec.decode(&[1, 2]).unwrap_err();
        assert_eq!(err, CodecError::TrailingBytes { remaining: 1 });
    }

    #[test]
    fn constant_codec_verifies_bytes() {
        let codec = constant_codec([0xaa, 0xbb]);
        assert_eq!(codec.encode(&()).unwrap(), vec![0xaa, 0xbb]);
        codec.decode(&[0xaa, 0xbb]).unwrap();
        let err = codec.decode(&[0xaa, 0xcc]).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidConstant {
                expected: vec![0xaa, 0xbb],
                actual: vec![0xaa, 0xcc]
            }
        );
    }

    #[test]
    fn write_at_offset_leaves_earlier_bytes() {
        let encoder = tuple_encoder(vec![
            Box::new(ByteCodec) as Box<dyn Encoder<Field>>,
            Box::new(ByteCodec),
        ]);
        let mut bytes = [0u8; 4];
        let end = encoder
            .write(&[Field::Byte(1), Field::Byte(2)][..], &mut bytes, 1)
            .unwrap();
        assert_eq!(end, 3);
        assert_eq!(bytes, [0, 1, 2, 0]);
    }
}
