use laboratory::{SpecContext, expect};
use serde_json::{Value, json};

use site_monitor_corelib::strings;

use crate::TestState;

/// Test [`strings::format_number`].
pub fn format_number(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    expect(strings::format_number("3.00")).to_equal("3".to_string())?;
    expect(strings::format_number("3.10")).to_equal("3.1".to_string())?;
    expect(strings::format_number("abc")).to_equal("0".to_string())?;
    expect(strings::format_number("0")).to_equal("0".to_string())?;
    expect(strings::format_number("-0")).to_equal("0".to_string())?;
    expect(strings::format_number("-0.00")).to_equal("0".to_string())?;
    expect(strings::format_number("")).to_equal("0".to_string())?;
    expect(strings::format_number("100")).to_equal("100".to_string())?;
    expect(strings::format_number("10.50")).to_equal("10.5".to_string())?;
    expect(strings::format_number("-2.70")).to_equal("-2.7".to_string())?;
    expect(strings::format_number("1e3")).to_equal("1000".to_string())
}

/// Test [`strings::format_number`] with partial numeric inputs.
pub fn format_number_prefix(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    expect(strings::format_number("  12.5 m")).to_equal("12.5".to_string())?;
    expect(strings::format_number("12.345abc")).to_equal("12.35".to_string())?;
    expect(strings::format_number(".5")).to_equal("0.5".to_string())?;
    expect(strings::format_number("5.")).to_equal("5".to_string())?;
    expect(strings::format_number("+7")).to_equal("7".to_string())?;
    expect(strings::format_number("2e")).to_equal("2".to_string())?;
    expect(strings::format_number("-")).to_equal("0".to_string())?;
    expect(strings::format_number(".")).to_equal("0".to_string())?;
    expect(strings::format_number("Infinity")).to_equal("Infinity".to_string())?;
    expect(strings::format_number("-Infinity")).to_equal("-Infinity".to_string())
}

/// Test [`strings::format_number`] rounding to two decimals.
pub fn format_number_rounding(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    expect(strings::format_number("1.234")).to_equal("1.23".to_string())?;
    expect(strings::format_number("1.236")).to_equal("1.24".to_string())?;
    expect(strings::format_number("0.125")).to_equal("0.13".to_string())?;
    expect(strings::format_number("-0.125")).to_equal("-0.13".to_string())?;
    expect(strings::format_number("-2.375")).to_equal("-2.38".to_string())?;
    expect(strings::format_number("2.625")).to_equal("2.63".to_string())?;
    expect(strings::format_number("-1.5")).to_equal("-1.5".to_string())?;
    expect(strings::format_number("100000000000000.125"))
        .to_equal("100000000000000.13".to_string())?;
    expect(strings::format_number("2.999")).to_equal("3".to_string())?;
    expect(strings::format_number("0.001")).to_equal("0".to_string())
}

/// Test [`strings::format_value`].
pub fn format_value(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    expect(strings::format_value(Some(&json!("45.60")))).to_equal("45.6".to_string())?;
    expect(strings::format_value(Some(&json!(45.678)))).to_equal("45.68".to_string())?;
    expect(strings::format_value(Some(&json!(12)))).to_equal("12".to_string())?;
    expect(strings::format_value(Some(&Value::Null))).to_equal("0".to_string())?;
    expect(strings::format_value(Some(&json!(true)))).to_equal("0".to_string())?;
    expect(strings::format_value(Some(&json!({"v": 1})))).to_equal("0".to_string())?;
    expect(strings::format_value(None)).to_equal("0".to_string())
}
