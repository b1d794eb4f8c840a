//! Typed sample constants and the small routines that print them.
#![allow(clippy::approx_constant)]

use log::info;

pub const SAMPLE_BOOLEAN: bool = true;
pub const SAMPLE_CHAR: char = 'X';
pub const SAMPLE_BYTE: i8 = 123;
pub const SAMPLE_SHORT: i16 = 350;
pub const SAMPLE_INT: i32 = 32768;
pub const SAMPLE_LONG: i64 = 2_000_000_000;
pub const SAMPLE_FLOAT: f32 = 3.14;
pub const SAMPLE_DOUBLE: f64 = 2.718281828;
pub const SAMPLE_STRING: &str = "bace4d19-beef-cafe-coo1-9129474bcd81";

/// Byte, short, int and long added together in 64 bits.
pub fn integral_sum() -> i64 {
    i64::from(SAMPLE_BYTE) + i64::from(SAMPLE_SHORT) + i64::from(SAMPLE_INT) + SAMPLE_LONG
}

pub fn floating_sum() -> f64 {
    f64::from(SAMPLE_FLOAT) + SAMPLE_DOUBLE
}

/// One line per logged value, in the order they are logged.
pub fn summary() -> Vec<String> {
    vec![
        SAMPLE_BOOLEAN.to_string(),
        SAMPLE_CHAR.to_string(),
        SAMPLE_STRING.to_string(),
        integral_sum().to_string(),
        floating_sum().to_string(),
    ]
}

pub fn log_constants() {
    for line in summary() {
        info!("{}", line);
    }
}

/// A zero-argument callable; calling it logs and returns `"run"`.
pub fn runnable() -> impl Fn() -> &'static str {
    || {
        info!("run");
        "run"
    }
}

pub fn run() -> &'static str {
    let r = runnable();
    r()
}
