use crate::core::table::Cell;

/// Whether a cell registered a clock event or a flagged condition.
///
/// Null/NaN collapse to the empty string; after trimming, `""` and the
/// literal `"00:00"` do not count. Everything else does, including numeric
/// zeros written any other way.
pub fn is_valid_value(cell: &Cell) -> bool {
    let v = cell.as_trimmed();
    !(v.is_empty() || v == "00:00")
}
