//! Month-boundary search over a row of month-start markers.

/// Finds the month whose span contains `probe`.
///
/// `starts` must be strictly increasing. Returns the position of the greatest
/// start that is `<= probe`, so a probe equal to a start belongs to the month
/// that begins there. A probe at or past the last start resolves to the last
/// month, which runs on into the next Gregorian year.
///
/// Returns `None` when `probe` precedes the first start; the date then belongs
/// to the final month of the previous row.
pub(crate) fn locate_month(starts: &[u16], probe: u16) -> Option<usize> {
    starts.partition_point(|&start| start <= probe).checked_sub(1)
}
