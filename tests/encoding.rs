use pretty_assertions::assert_eq;
use rstest::rstest;
use uricomp::{DecodeError, decode, decode_bytes, decode_lenient, encode, encode_component};

#[rstest]
#[case::bracketed_specials("[!'()*]", "%5B%21%27%28%29%2a%5D")]
#[case::sub_delims("!$&\\()*+,;=", "%21%24%26%5C%28%29%2a%2B%2C%3B%3D")]
#[case::unreserved("aAzZ09-._~", "aAzZ09-._~")]
#[case::empty("", "")]
#[case::spaces("a b", "a%20b")]
#[case::multi_byte("café", "caf%C3%A9")]
/// The strict encoder escapes the five specials with lowercase triplets and
/// everything else like the baseline.
fn strict_encoding(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(encode(input), expected);
}

#[rstest]
#[case::bracketed_specials("[!'()*]", "%5B!'()*%5D")]
#[case::sub_delims("!$&\\()*+,;=", "!%24%26%5C()*%2B%2C%3B%3D")]
#[case::unreserved("aAzZ09-._~", "aAzZ09-._~")]
/// The baseline pass reproduces encodeURIComponent, five specials included.
fn baseline_encoding(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(encode_component(input), expected);
}

#[test]
/// No ASCII input can smuggle a literal special through the strict encoder.
fn no_literal_specials_survive() {
    for byte in 0x20u8..0x7F {
        let input = format!("x{}y", byte as char);
        let output = encode(&input);
        for special in ['!', '\'', '(', ')', '*'] {
            assert!(
                !output.contains(special),
                "{:?} survived encoding of {:?} as {:?}",
                special,
                input,
                output
            );
        }
    }
}

#[test]
/// Decoding inverts both encoders, whatever mix of scripts goes in.
fn decode_inverts_encode() {
    let samples = [
        "",
        "[!'()*]",
        "!$&\\()*+,;=",
        "aAzZ09-._~",
        "100% pure (really!)",
        "käse & wein",
        "路地裏",
    ];
    for sample in samples {
        assert_eq!(decode(&encode(sample)).unwrap(), sample);
        assert_eq!(decode(&encode_component(sample)).unwrap(), sample);
    }
}

#[test]
/// Re-encoding is not a no-op, but decoding unwinds each layer exactly.
fn double_encoding_round_trips_twice() {
    let once = encode("a b");
    let twice = encode(&once);
    assert_eq!(once, "a%20b");
    assert_eq!(twice, "a%2520b");
    assert_eq!(decode(&twice).unwrap(), once);
    assert_eq!(decode(&once).unwrap(), "a b");
}

#[rstest]
#[case::truncated("abc%", DecodeError::UnexpectedEnd { position: 3 })]
#[case::one_digit("%4", DecodeError::UnexpectedEnd { position: 0 })]
#[case::bad_digit("%4x", DecodeError::InvalidHexDigit { position: 2, found: b'x' })]
#[case::bad_first_digit("a%g0", DecodeError::InvalidHexDigit { position: 2, found: b'g' })]
#[case::non_ascii("café", DecodeError::NonAsciiByte { position: 3, byte: 0xC3 })]
/// Malformed input names its error, and lenient decoding returns it as-is.
fn malformed_input(#[case] input: &str, #[case] expected: DecodeError) {
    assert_eq!(decode(input), Err(expected));
    assert_eq!(decode_lenient(input), input);
}

#[test]
/// Octets that are not UTF-8 only come out of the byte-level decoder.
fn binary_octets_need_the_byte_decoder() {
    assert!(matches!(decode("%FF%FE"), Err(DecodeError::InvalidUtf8(_))));
    assert_eq!(decode_lenient("%FF%FE"), "%FF%FE");
    assert_eq!(decode_bytes("%FF%FE").unwrap(), vec![0xFF, 0xFE]);
}
