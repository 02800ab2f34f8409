//! # Cell Number Tests
//!
//! Decimal conversion, cell layout and ordering of `BigNumber`.

use bfcalc_core::common::ParseNumberError;
use bfcalc_core::BigNumber;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::num;

#[rstest]
#[case("0", &[0])]
#[case("1", &[1])]
#[case("255", &[255])]
#[case("256", &[0, 1])]
#[case("65535", &[255, 255])]
#[case("65536", &[0, 0, 1])]
fn test_decimal_to_cells(#[case] text: &str, #[case] cells: &[u8]) {
    let n = num(text);
    assert_eq!(n.cells(), cells);
    assert_eq!(n.to_string(), text);
}

#[test]
fn test_fifty_digit_round_trip() {
    let text = "12345678901234567890123456789012345678901234567890";
    assert_eq!(num(text).to_string(), text);
}

#[test]
fn test_round_trip_keeps_inner_zero_chunks() {
    for text in ["10000", "100000001", "1000000000000000000000000000000"] {
        assert_eq!(num(text).to_string(), text);
    }
}

#[test]
fn test_leading_zeros_are_dropped() {
    let n = num("000256");
    assert_eq!(n.cells(), &[0, 1]);
    assert_eq!(n.to_string(), "256");
    assert_eq!(num("0000"), BigNumber::zero());
}

#[test]
fn test_from_cells_trims() {
    let n = BigNumber::from_cells(vec![5, 0, 0]);
    assert_eq!(n.cells(), &[5]);
    assert_eq!(BigNumber::from_cells(Vec::new()), BigNumber::zero());
}

#[test]
fn test_parse_errors() {
    assert_eq!("".parse::<BigNumber>(), Err(ParseNumberError::Empty));
    assert_eq!(
        "12a4".parse::<BigNumber>(),
        Err(ParseNumberError::InvalidDigit { digit: 'a', index: 2 })
    );
    assert!("-5".parse::<BigNumber>().is_err());
}

#[test]
fn test_from_integers() {
    assert_eq!(BigNumber::from(0u8), BigNumber::zero());
    assert_eq!(BigNumber::from(1u64), BigNumber::one());
    assert_eq!(BigNumber::from(0x0102_0304u32).cells(), &[4, 3, 2, 1]);
    assert_eq!(BigNumber::from(u128::MAX).len(), 16);
}

#[test]
fn test_conversions_back() {
    assert_eq!(num("18446744073709551615").to_u64(), Some(u64::MAX));
    assert_eq!(num("18446744073709551616").to_u64(), None);
    assert_eq!(num("18446744073709551616").to_u128(), Some(1u128 << 64));
    assert_eq!(BigNumber::from_cells(vec![1; 17]).to_u128(), None);
}

#[test]
fn test_queries() {
    assert!(BigNumber::zero().is_zero());
    assert!(BigNumber::one().is_one());
    assert_eq!(num("513").low_cell(), 1);
    assert_eq!(BigNumber::zero().bit_len(), 0);
    assert_eq!(num("255").bit_len(), 8);
    assert_eq!(num("256").bit_len(), 9);
}

#[test]
fn test_ordering() {
    assert!(num("255") < num("256"));
    assert!(num("65536") > num("65535"));
    assert!(num("512") > num("257"));
    assert_eq!(num("300").cmp(&num("300")), std::cmp::Ordering::Equal);
}

#[test]
fn test_display_padding() {
    assert_eq!(format!("{:>6}", num("42")), "    42");
    assert_eq!(format!("{:06}", num("42")), "000042");
}
