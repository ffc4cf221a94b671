//! Fuzz targets for PodStore.
//!
//! These targets can be driven by cargo-fuzz or any other fuzzer that
//! hands out byte slices.

use crate::fixtures::{memory_accessor, resource, write_bytes, write_quads};
use podstore_codec::{decode_set, decode_triple, encode_triple, Subject, Term};
use podstore_core::DataAccessor;

/// Fuzz target for triple decoding.
///
/// Arbitrary input either decodes or returns an error; it never panics.
pub fn fuzz_decode_triple(data: &[u8]) {
    let input = String::from_utf8_lossy(data);
    let _ = decode_triple(&input);
}

/// Fuzz target for term parsing.
pub fn fuzz_parse_term(data: &[u8]) {
    let input = String::from_utf8_lossy(data);
    let _ = input.parse::<Term>();
    let _ = input.parse::<Subject>();
}

/// Fuzz target for triple re-encoding.
///
/// Whatever decodes must encode back to a string that decodes to the same
/// statement.
pub fn fuzz_triple_roundtrip(data: &[u8]) {
    let input = String::from_utf8_lossy(data);
    if let Ok(quad) = decode_triple(&input) {
        if let Ok(encoded) = encode_triple(&quad) {
            let decoded = decode_triple(&encoded).expect("Re-encoded triple failed to decode");
            assert_eq!(quad, decoded, "Roundtrip mismatch");
        }
    }
}

/// Fuzz target for set decoding, one member per line.
pub fn fuzz_decode_set(data: &[u8]) {
    let input = String::from_utf8_lossy(data);
    let _ = decode_set(input.lines());
}

/// Operations that can be performed during fuzzing.
#[derive(Debug, Clone)]
pub enum FuzzOp {
    /// Write a binary document.
    WriteBytes {
        /// Document selector.
        document: u8,
        /// Payload.
        data: Vec<u8>,
    },
    /// Write a statement document holding one triple parsed from input.
    WriteTriple {
        /// Document selector.
        document: u8,
        /// Raw triple text.
        triple: String,
    },
    /// Read a document.
    Get {
        /// Document selector.
        document: u8,
    },
    /// Delete a document.
    Delete {
        /// Document selector.
        document: u8,
    },
    /// List the fuzz container.
    List,
}

impl FuzzOp {
    /// Parse operations from fuzzer input.
    pub fn parse_sequence(data: &[u8]) -> Vec<FuzzOp> {
        let mut ops = Vec::new();
        let mut offset = 0;

        while offset < data.len() {
            let op_type = data[offset];
            offset += 1;

            let op = match op_type % 5 {
                0 | 1 => {
                    if offset + 2 > data.len() {
                        break;
                    }
                    let document = data[offset];
                    let len = (data[offset + 1] as usize).min(data.len() - offset - 2);
                    let payload = data[offset + 2..offset + 2 + len].to_vec();
                    offset += 2 + len;
                    if op_type % 5 == 0 {
                        FuzzOp::WriteBytes {
                            document,
                            data: payload,
                        }
                    } else {
                        FuzzOp::WriteTriple {
                            document,
                            triple: String::from_utf8_lossy(&payload).into_owned(),
                        }
                    }
                }
                2 | 3 => {
                    if offset >= data.len() {
                        break;
                    }
                    let document = data[offset];
                    offset += 1;
                    if op_type % 5 == 2 {
                        FuzzOp::Get { document }
                    } else {
                        FuzzOp::Delete { document }
                    }
                }
                _ => FuzzOp::List,
            };
            ops.push(op);
        }

        ops
    }

    /// Executes a sequence of operations against a fresh accessor.
    ///
    /// Errors are allowed; panics are not.
    pub fn execute_sequence(ops: &[FuzzOp]) {
        let accessor = memory_accessor();
        let id = |document: &u8| resource(&format!("fuzz/{}", document % 16));

        for op in ops {
            match op {
                FuzzOp::WriteBytes { document, data } => {
                    let _ = write_bytes(&accessor, &id(document), data, "text/plain");
                }
                FuzzOp::WriteTriple { document, triple } => {
                    if let Ok(quad) = decode_triple(triple) {
                        let _ = write_quads(&accessor, &id(document), vec![quad]);
                    }
                }
                FuzzOp::Get { document } => {
                    let _ = accessor.get_data(&id(document));
                    let _ = accessor.get_metadata(&id(document));
                }
                FuzzOp::Delete { document } => {
                    let _ = accessor.delete_resource(&id(document));
                }
                FuzzOp::List => {
                    let _ = accessor.get_children(&resource("fuzz/")).map(Iterator::count);
                }
            }
        }
    }
}

/// Fuzz target for accessor operation sequences.
pub fn fuzz_accessor_operations(data: &[u8]) {
    FuzzOp::execute_sequence(&FuzzOp::parse_sequence(data));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::PropTestConfig;
    use proptest::prelude::*;

    #[test]
    fn decode_handles_edge_inputs() {
        for input in [
            &b""[..],
            b"|",
            b"||",
            b"a|b|",
            b"a|b|\"",
            b"a|\"b\"|c",
            b"_:|p|o",
            b"\xff\xfe|x|y",
        ] {
            fuzz_decode_triple(input);
            fuzz_parse_term(input);
            fuzz_triple_roundtrip(input);
        }
    }

    #[test]
    fn parse_sequence_handles_truncation() {
        assert!(FuzzOp::parse_sequence(&[]).is_empty());
        assert!(FuzzOp::parse_sequence(&[0]).is_empty());
        let ops = FuzzOp::parse_sequence(&[4, 2, 7, 0, 1, 3, b'a', b'b', b'c']);
        assert_eq!(ops.len(), 3);
        assert!(matches!(ops[0], FuzzOp::List));
        assert!(matches!(ops[1], FuzzOp::Get { document: 7 }));
        assert!(matches!(&ops[2], FuzzOp::WriteBytes { document: 1, data } if data == b"abc"));
    }

    #[test]
    fn execute_mixed_sequence() {
        FuzzOp::execute_sequence(&[
            FuzzOp::WriteTriple {
                document: 1,
                triple: "http://a|http://b|\"c\"".into(),
            },
            FuzzOp::WriteBytes {
                document: 2,
                data: vec![1, 2, 3],
            },
            FuzzOp::List,
            FuzzOp::Get { document: 1 },
            FuzzOp::Delete { document: 1 },
            FuzzOp::Get { document: 1 },
        ]);
    }

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..256)) {
            fuzz_decode_triple(&data);
            fuzz_parse_term(&data);
            fuzz_triple_roundtrip(&data);
            fuzz_decode_set(&data);
            fuzz_accessor_operations(&data);
        }
    }
}
