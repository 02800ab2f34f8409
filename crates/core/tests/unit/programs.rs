//! # Built-in Program Tests
//!
//! Addition and subtraction are checked over every operand pair. The other
//! programs loop proportionally to their operands, so they get property tests
//! over bounded ranges plus fixed edge cases.

use bfcalc_core::programs::{self, builtin_program, builtin_source};
use bfcalc_core::Operator;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::harness::TestContext;

// ═══════════════════════════════════════════════════════════════════════════
//  Shape
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_every_builtin_parses() {
    for op in Operator::ALL {
        let program = builtin_program(op).unwrap();
        assert!(!program.is_empty(), "{} is empty", op.name());
    }
}

#[test]
fn test_builtin_sources_match_constants() {
    assert_eq!(builtin_source(Operator::Add), programs::ADDITION);
    assert_eq!(builtin_source(Operator::Sub), programs::SUBTRACTION);
    assert_eq!(builtin_source(Operator::Mul), programs::MULTIPLICATION);
    assert_eq!(builtin_source(Operator::Div), programs::DIVISION);
    assert_eq!(builtin_source(Operator::Pow), programs::POWER);
}

#[test]
fn test_addition_canonical_text() {
    assert_eq!(builtin_program(Operator::Add).unwrap().to_string(), ",>,[-<+>]<.");
    assert_eq!(builtin_program(Operator::Sub).unwrap().to_string(), ",>,[-<->]<.");
}

// ═══════════════════════════════════════════════════════════════════════════
//  Exhaustive
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_addition_all_pairs() {
    let ctx = TestContext::new();
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            assert_eq!(ctx.run_program(Operator::Add, a, b), a.wrapping_add(b), "{a} + {b}");
        }
    }
}

#[test]
fn test_subtraction_all_pairs() {
    let ctx = TestContext::new();
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            assert_eq!(ctx.run_program(Operator::Sub, a, b), a.wrapping_sub(b), "{a} - {b}");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Edge cases
// ═══════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(Operator::Add, 255, 1, 0)]
#[case(Operator::Sub, 200, 100, 100)]
#[case(Operator::Sub, 0, 1, 255)]
#[case(Operator::Mul, 16, 16, 0)]
#[case(Operator::Mul, 15, 17, 255)]
#[case(Operator::Mul, 0, 255, 0)]
#[case(Operator::Mul, 255, 255, 1)]
#[case(Operator::Div, 255, 1, 255)]
#[case(Operator::Div, 255, 255, 1)]
#[case(Operator::Div, 1, 255, 0)]
#[case(Operator::Div, 200, 7, 28)]
#[case(Operator::Div, 9, 0, 0)]
#[case(Operator::Div, 0, 0, 0)]
#[case(Operator::Pow, 2, 7, 128)]
#[case(Operator::Pow, 2, 8, 0)]
#[case(Operator::Pow, 3, 5, 243)]
#[case(Operator::Pow, 0, 0, 1)]
#[case(Operator::Pow, 0, 5, 0)]
#[case(Operator::Pow, 200, 0, 1)]
#[case(Operator::Pow, 255, 7, 255)]
fn test_program_edge_cases(#[case] op: Operator, #[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    let ctx = TestContext::new();
    assert_eq!(ctx.run_program(op, a, b), expected, "{a} {op} {b}");
}

// ═══════════════════════════════════════════════════════════════════════════
//  Properties
// ═══════════════════════════════════════════════════════════════════════════

fn pow_mod_256(base: u8, exponent: u8) -> u8 {
    (0..exponent).fold(1u8, |acc, _| acc.wrapping_mul(base))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_multiplication_wraps(a in any::<u8>(), b in any::<u8>()) {
        let ctx = TestContext::new();
        prop_assert_eq!(ctx.run_program(Operator::Mul, a, b), a.wrapping_mul(b));
    }

    #[test]
    fn prop_division_floors(a in any::<u8>(), b in 1u8..) {
        let ctx = TestContext::new();
        prop_assert_eq!(ctx.run_program(Operator::Div, a, b), a / b);
    }

    #[test]
    fn prop_power_wraps(base in 0u8..16, exponent in 0u8..6) {
        let ctx = TestContext::new();
        prop_assert_eq!(ctx.run_program(Operator::Pow, base, exponent), pow_mod_256(base, exponent));
    }
}
