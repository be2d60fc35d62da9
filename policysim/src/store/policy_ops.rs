//! field normalization for the policy list.
use super::Table;

/// column holding the project duration, stored as free text such as `18개월`.
pub const DURATION_COLUMN: &str = "duration_months";

/// unit suffixes accepted after the number, matched case-insensitively.
/// longer forms come first.
const MONTH_SUFFIXES: [&str; 3] = ["개월", "months", "month"];

/// reads a free-text duration such as `18개월` or `18 months` as a whole
/// number of months. only a month unit is stripped; any other trailing text
/// (`1년`, `3주`, `18개월 (예정)`) makes the value unparseable. the number is
/// truncated to an integer. blank or unparseable values read as zero.
///
/// applying this to its own output returns the same value.
pub fn normalize_duration(raw: &str) -> i64 {
    let lowered = raw.trim().to_lowercase();
    let number = MONTH_SUFFIXES
        .iter()
        .find_map(|suffix| lowered.strip_suffix(suffix))
        .unwrap_or(&lowered)
        .trim();
    if number.is_empty() {
        return 0;
    }
    match number.parse::<i64>() {
        Ok(months) => months,
        Err(_) => match number.parse::<f64>() {
            Ok(months) if months.is_finite() => months.trunc() as i64,
            _ => 0,
        },
    }
}

/// rewrites every value of the [`DURATION_COLUMN`] in place as an integer.
///
/// # Returns
///
/// `false` if the table has no duration column, in which case it is left
/// untouched.
pub fn normalize_durations(table: &mut Table) -> bool {
    let Some(col) = table.column_index(DURATION_COLUMN) else {
        return false;
    };
    for row in table.rows_mut().iter_mut() {
        if let Some(value) = row.get_mut(col) {
            *value = normalize_duration(value).to_string();
        }
    }
    true
}
