//! Known-vector tests for the Bech32 codec.
//!
//! Test vectors sourced from:
//! - BIP-0173 "Test vectors": valid and invalid Bech32 strings
//! - BIP-0173 segwit example: P2WPKH address for a known 20-byte program

use bech32_codec::{decode, decode_checked, encode, from_base32, verify, Bech32Error, HrpAndDp};
use test_case::test_case;

// ===================================================================
// Valid strings
// ===================================================================

#[test_case("A12UEL5L", "a"; "uppercase minimal")]
#[test_case("a12uel5l", "a"; "lowercase minimal")]
#[test_case(
    "an83characterlonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1tt5tgs",
    "an83characterlonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio";
    "longest hrp"
)]
#[test_case("abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw", "abcdef"; "every symbol")]
#[test_case(
    "11qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqc8247j",
    "1";
    "separator as hrp"
)]
#[test_case("split1checkupstagehandshakeupstreamerranterredcaperred2y9e3w", "split"; "split")]
#[test_case("?1ezyfcl", "?"; "punctuation hrp")]
fn valid_string_decodes_and_reencodes(bstring: &str, expected_hrp: &str) {
    let pair = decode(bstring).expect("valid vector must decode");
    assert!(!pair.is_empty(), "valid vector must not yield the sentinel");
    assert_eq!(pair.hrp, expected_hrp);

    let reencoded = encode(&pair.hrp, &pair.dp).expect("decoded pair must encode");
    assert_eq!(reencoded, bstring.to_lowercase());
    assert_eq!(verify(bstring), Ok(true));
}

#[test]
fn every_symbol_vector_yields_all_values_in_order() {
    let pair = decode("abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw").unwrap();
    assert_eq!(pair.dp, (0..32).collect::<Vec<u8>>());
}

#[test]
fn longest_string_yields_82_zero_values() {
    let pair = decode(
        "11qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqc8247j",
    )
    .unwrap();
    assert_eq!(pair.dp, vec![0u8; 82]);
}

#[test]
fn minimal_vector_has_empty_data_part() {
    assert_eq!(decode("A12UEL5L").unwrap(), HrpAndDp::new("a", vec![]));
}

// ===================================================================
// Invalid strings: structural errors
// ===================================================================

#[test_case("", Bech32Error::StringTooShort { len: 0 }; "empty")]
#[test_case("A1b", Bech32Error::StringTooShort { len: 3 }; "short and mixed case")]
#[test_case("10a06t8", Bech32Error::StringTooShort { len: 7 }; "too short")]
#[test_case(&"1".repeat(91), Bech32Error::StringTooLong { len: 91 }; "91 separators")]
#[test_case(
    "an84characterslonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1569pvx",
    Bech32Error::StringTooLong { len: 91 };
    "overall max length exceeded"
)]
#[test_case("Ab1c2d3e", Bech32Error::MixedCase; "mixed case")]
#[test_case("\x201nwldj5", Bech32Error::CharOutOfRange { position: 0, byte: 0x20 }; "hrp space")]
#[test_case("\x7f1axkwrx", Bech32Error::CharOutOfRange { position: 0, byte: 0x7f }; "hrp delete")]
#[test_case("\u{80}1eym55h", Bech32Error::CharOutOfRange { position: 0, byte: 0xc2 }; "hrp non ascii")]
#[test_case("de1lg7wt\u{ff}", Bech32Error::CharOutOfRange { position: 8, byte: 0xc3 }; "data non ascii")]
#[test_case("pzry9x0s0muk", Bech32Error::MissingSeparator; "no separator")]
#[test_case("1pzry9x0s0muk", Bech32Error::HrpTooShort; "empty hrp")]
#[test_case("1qzzfhee", Bech32Error::HrpTooShort; "empty hrp minimal")]
#[test_case("li1dgmt3", Bech32Error::DataPartTooShort { len: 5 }; "too short checksum")]
#[test_case("x1b4n0q5v", Bech32Error::InvalidCharacter { position: 2, ch: 'b' }; "invalid data char")]
fn invalid_string_is_rejected(bstring: &str, expected: Bech32Error) {
    assert_eq!(decode(bstring), Err(expected.clone()));
    assert_eq!(decode_checked(bstring), Err(expected.clone()));
    assert_eq!(verify(bstring), Err(expected));
}

// ===================================================================
// Invalid strings: checksum mismatch (sentinel, not an error)
// ===================================================================

#[test_case("A1G7SGD8"; "checksum computed with uppercase hrp")]
#[test_case("a12xel5l"; "first data symbol flipped")]
#[test_case(
    "an83characterlonghumanreadablepartthatcontainsthetheexcludedcharactersbioandnumber11593945";
    "well formed but wrong checksum"
)]
fn corrupted_string_yields_sentinel(bstring: &str) {
    let pair = decode(bstring).expect("checksum mismatch is not an error");
    assert!(pair.is_empty());
    assert_eq!(pair, HrpAndDp::default());

    assert_eq!(decode_checked(bstring), Err(Bech32Error::ChecksumMismatch));
    assert_eq!(verify(bstring), Ok(false));
}

// ===================================================================
// Segwit example: bytes in, bytes out
// ===================================================================

#[test]
fn p2wpkh_example_round_trips_program_bytes() {
    let program: [u8; 20] = [
        0x75, 0x1e, 0x76, 0xe8, 0x19, 0x91, 0x96, 0xd4, 0x54, 0x94,
        0x1c, 0x45, 0xd1, 0xb3, 0xa3, 0x23, 0xf1, 0x43, 0x3b, 0xd6,
    ];

    let mut dp = vec![0u8];
    dp.extend(bech32_codec::to_base32(&program));
    let encoded = encode("bc", &dp).unwrap();
    assert_eq!(encoded, "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");

    let pair = decode("BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4").unwrap();
    assert_eq!(pair.hrp, "bc");
    assert_eq!(from_base32(&pair.dp[1..]).unwrap(), program.to_vec());
}

// ===================================================================
// Encode errors
// ===================================================================

#[test_case("", &[], Bech32Error::HrpTooShort; "empty hrp")]
#[test_case(&"a".repeat(84), &[], Bech32Error::HrpTooLong { len: 84 }; "hrp too long")]
#[test_case("a b", &[], Bech32Error::CharOutOfRange { position: 1, byte: 0x20 }; "hrp space")]
#[test_case("bc", &[0; 82], Bech32Error::CombinedTooLong { len: 91 }; "combined too long")]
#[test_case("bc", &[0, 1, 32], Bech32Error::DataValueOutOfRange { index: 2, value: 32 }; "wide value")]
fn invalid_encode_is_rejected(hrp: &str, dp: &[u8], expected: Bech32Error) {
    assert_eq!(encode(hrp, dp), Err(expected));
}

#[test]
fn longest_hrp_with_empty_data_encodes_to_90_chars() {
    let encoded = encode(&"a".repeat(83), &[]).unwrap();
    assert_eq!(encoded.len(), 90);
    assert!(!decode(&encoded).unwrap().is_empty());
}
