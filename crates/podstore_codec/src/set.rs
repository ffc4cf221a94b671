//! Encoding of quad lists as store sets.
//!
//! Redis-style stores cannot hold an empty set: removing the last member
//! deletes the key, and `SADD` with no members is an error. A set that must
//! exist but hold no quads therefore stores [`EMPTY_SET_MEMBER`] alone.

use crate::error::CodecResult;
use crate::quad::Quad;
use crate::triple::{decode_triple, encode_triple};

/// Placeholder member of a set that holds no quads.
///
/// It contains no delimiter, so it can never be an encoded triple.
pub const EMPTY_SET_MEMBER: &str = "podstore:empty-set";

/// Encodes quads as set members. An empty slice yields the placeholder.
///
/// # Errors
///
/// Propagates [`encode_triple`] errors.
pub fn encode_set(quads: &[Quad]) -> CodecResult<Vec<String>> {
    if quads.is_empty() {
        return Ok(vec![EMPTY_SET_MEMBER.to_string()]);
    }
    quads.iter().map(encode_triple).collect()
}

/// Decodes set members into quads, skipping the placeholder.
///
/// # Errors
///
/// Propagates [`decode_triple`] errors.
pub fn decode_set<I, S>(members: I) -> CodecResult<Vec<Quad>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    members
        .into_iter()
        .filter(|member| !is_empty_set_member(member.as_ref()))
        .map(|member| decode_triple(member.as_ref()))
        .collect()
}

/// Returns true if `member` is the empty-set placeholder.
pub fn is_empty_set_member(member: &str) -> bool {
    member == EMPTY_SET_MEMBER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{Literal, NamedNode};
    use crate::triple::{DELIMITER, encode_triple};

    fn sample() -> Quad {
        Quad::new(
            NamedNode::new("http://name"),
            "http://pred",
            Literal::simple("value"),
        )
    }

    #[test]
    fn placeholder_is_not_a_triple() {
        assert!(!EMPTY_SET_MEMBER.contains(DELIMITER));
        assert!(decode_triple(EMPTY_SET_MEMBER).is_err());
    }

    #[test]
    fn empty_list_writes_placeholder() {
        assert_eq!(encode_set(&[]).unwrap(), vec![EMPTY_SET_MEMBER.to_string()]);
    }

    #[test]
    fn placeholder_only_decodes_to_empty() {
        let decoded = decode_set(encode_set(&[]).unwrap()).unwrap();
        assert!(decoded.is_empty());

        let reencoded = encode_set(&decoded).unwrap();
        assert_eq!(reencoded, vec![EMPTY_SET_MEMBER.to_string()]);
    }

    #[test]
    fn non_empty_list_has_no_placeholder() {
        let members = encode_set(&[sample()]).unwrap();
        assert_eq!(members, vec![encode_triple(&sample()).unwrap()]);
    }

    #[test]
    fn placeholder_is_filtered_among_members() {
        let members = vec![
            EMPTY_SET_MEMBER.to_string(),
            encode_triple(&sample()).unwrap(),
        ];
        assert_eq!(decode_set(&members).unwrap(), vec![sample()]);
    }

    #[test]
    fn no_members_decodes_to_empty() {
        let members: Vec<String> = Vec::new();
        assert!(decode_set(members).unwrap().is_empty());
    }
}
