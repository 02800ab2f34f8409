//! # Dispatcher Tests
//!
//! Expression parsing, both evaluation modes, custom programs and batches.

use bfcalc_core::calc::Expression;
use bfcalc_core::common::{CalcError, MachineError};
use bfcalc_core::config::{Config, MachineConfig, Mode};
use bfcalc_core::programs::ProgramLibrary;
use bfcalc_core::{Calculator, Operator, Value};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::{num, program, TestContext};

// ═══════════════════════════════════════════════════════════════════════════
//  Parsing
// ═══════════════════════════════════════════════════════════════════════════

#[rstest]
#[case("999+999", Operator::Add, "999", "999")]
#[case(" 10 - 4 ", Operator::Sub, "10", "4")]
#[case("6*7", Operator::Mul, "6", "7")]
#[case("15 / 3", Operator::Div, "15", "3")]
#[case("2^10", Operator::Pow, "2", "10")]
#[case("123456789012345678901234567890*2", Operator::Mul, "123456789012345678901234567890", "2")]
fn test_parse_expression(#[case] text: &str, #[case] op: Operator, #[case] lhs: &str, #[case] rhs: &str) {
    let expr: Expression = text.parse().unwrap();
    assert_eq!(expr, Expression { op, lhs: num(lhs), rhs: num(rhs) });
}

#[rstest]
#[case("abc")]
#[case("5")]
#[case("5+")]
#[case("+5")]
#[case("5*-3")]
#[case("2^3^2")]
#[case("5%3")]
#[case("")]
fn test_parse_expression_rejects(#[case] text: &str) {
    let err = text.parse::<Expression>().unwrap_err();
    assert!(matches!(err, CalcError::Parse { .. }), "{text:?} gave {err:?}");
}

#[test]
fn test_parse_error_reports_compact_text() {
    let err = "a b c".parse::<Expression>().unwrap_err();
    assert_eq!(err.to_string(), "cannot parse expression: 'abc'");
}

#[test]
fn test_expression_display() {
    let expr: Expression = " 12 ^ 3 ".parse().unwrap();
    assert_eq!(expr.to_string(), "12^3");
}

#[test]
fn test_operator_symbols() {
    for op in Operator::ALL {
        assert_eq!(Operator::from_symbol(op.symbol()).unwrap(), op);
    }
    assert!(matches!(
        Operator::from_symbol('%'),
        Err(CalcError::UnsupportedOperator('%'))
    ));
}

// ═══════════════════════════════════════════════════════════════════════════
//  Big-number mode
// ═══════════════════════════════════════════════════════════════════════════

#[rstest]
#[case("999+999", "1998")]
#[case("1000*500", "500000")]
#[case("999^2", "998001")]
#[case("123456789*10", "1234567890")]
#[case("100/7", "14")]
#[case("7/0", "inf")]
#[case("3-10", "0")]
#[case("2^64", "18446744073709551616")]
fn test_big_number_scenarios(#[case] expr: &str, #[case] expected: &str) {
    assert_eq!(TestContext::new().big(expr), expected);
}

#[test]
fn test_evaluate_takes_operands_directly() {
    let ctx = TestContext::new();
    let a = num("123456789012345678901234567890");
    let b = num("10");
    let value = ctx.calc.evaluate(Operator::Mul, &a, &b, Mode::BigNumber).unwrap();
    assert_eq!(value.to_string(), "1234567890123456789012345678900");

    // 8-bit mode only sees the low cells: 210 * 10 mod 256.
    assert_eq!(a.low_cell(), 210);
    let low = ctx.calc.evaluate(Operator::Mul, &a, &b, Mode::EightBit).unwrap();
    assert_eq!(low, Value::from(num("52")));
}

#[test]
fn test_big_number_mode_has_no_stats() {
    let ctx = TestContext::new();
    let eval = ctx.calc.calculate_detailed("2+2", Mode::BigNumber).unwrap();
    assert!(eval.stats.is_none());
}

#[test]
fn test_big_number_power_limit() {
    let ctx = TestContext::new();
    let err = ctx.calc.calculate_big("2^5000").unwrap_err();
    assert!(matches!(err, CalcError::Arith(_)), "{err:?}");
}

// ═══════════════════════════════════════════════════════════════════════════
//  8-bit mode
// ═══════════════════════════════════════════════════════════════════════════

#[rstest]
#[case("255+1", "0")]
#[case("200-100", "100")]
#[case("5-10", "251")]
#[case("16*16", "0")]
#[case("100/7", "14")]
#[case("2^7", "128")]
#[case("300+1", "45")]
#[case("7/0", "inf")]
fn test_eight_bit_scenarios(#[case] expr: &str, #[case] expected: &str) {
    assert_eq!(TestContext::new().eight_bit(expr), expected);
}

#[test]
fn test_eight_bit_division_by_zero_skips_program() {
    let ctx = TestContext::new();
    let eval = ctx.calc.calculate_detailed("7/0", Mode::EightBit).unwrap();
    assert_eq!(eval.value, Value::Infinity);
    assert!(eval.stats.is_none());
}

#[test]
fn test_eight_bit_reports_stats() {
    let ctx = TestContext::new();
    let eval = ctx.calc.calculate_detailed("2+3", Mode::EightBit).unwrap();
    let stats = eval.stats.unwrap();
    assert_eq!(stats.input_consumed, 2);
    assert_eq!(stats.output_produced, 1);
}

#[test]
fn test_configured_mode_drives_calculate() {
    let mut config = Config::default();
    config.general.mode = Mode::EightBit;
    let calc = Calculator::new(&config).unwrap();
    assert_eq!(calc.mode(), Mode::EightBit);
    assert_eq!(calc.calculate("255+1").unwrap().to_string(), "0");
    assert_eq!(calc.calculate_big("255+1").unwrap().to_string(), "256");
}

#[test]
fn test_step_limit_surfaces_as_machine_error() {
    let config = Config {
        machine: MachineConfig {
            step_limit: Some(50),
            ..MachineConfig::default()
        },
        ..Config::default()
    };
    let calc = Calculator::new(&config).unwrap();
    let err = calc.calculate_8bit("15*17").unwrap_err();
    assert!(
        matches!(err, CalcError::Machine(MachineError::StepLimitExceeded { limit: 50 })),
        "{err:?}"
    );
}

// ═══════════════════════════════════════════════════════════════════════════
//  Custom programs
// ═══════════════════════════════════════════════════════════════════════════

fn with_add_program(src: &str) -> Calculator {
    let library = ProgramLibrary::builtin()
        .unwrap()
        .with_program(Operator::Add, program(src));
    Calculator::with_library(&Config::default(), library)
}

#[test]
fn test_silent_program_is_an_error() {
    let calc = with_add_program(",>,");
    let err = calc.calculate_8bit("1+2").unwrap_err();
    assert!(matches!(err, CalcError::NoOutput { op: Operator::Add }), "{err:?}");
}

#[test]
fn test_greedy_program_exhausts_input() {
    let calc = with_add_program(",>,>,.");
    let err = calc.calculate_8bit("1+2").unwrap_err();
    assert!(matches!(
        err,
        CalcError::Machine(MachineError::InputExhausted { position: 4 })
    ));
}

#[test]
fn test_only_first_output_byte_counts() {
    // Writes a + b, then b.
    let calc = with_add_program(",>,[-<+>>+<]<.>>.");
    assert_eq!(calc.calculate_8bit("4+3").unwrap().to_string(), "7");
}

// ═══════════════════════════════════════════════════════════════════════════
//  Batches
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_batch_keeps_going_after_failure() {
    let ctx = TestContext::new();
    let results = ctx.calc.batch(&["999+999", "oops", "1000*500", "1/0"]);

    let rendered: Vec<(String, String)> = results
        .into_iter()
        .map(|(expr, res)| {
            let shown = res.map_or_else(|e| format!("ERROR - {e}"), |v| v.to_string());
            (expr, shown)
        })
        .collect();

    assert_eq!(
        rendered,
        vec![
            ("999+999".to_owned(), "1998".to_owned()),
            ("oops".to_owned(), "ERROR - cannot parse expression: 'oops'".to_owned()),
            ("1000*500".to_owned(), "500000".to_owned()),
            ("1/0".to_owned(), "inf".to_owned()),
        ]
    );
}
