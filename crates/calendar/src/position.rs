//! Mapping between row positions and lunar month numbers.
//!
//! A row lists its months in calendar order. When a year has leap month `L`,
//! the leap month sits directly after ordinary month `L`, so every month past
//! it appears one position later than its number suggests:
//!
//! ```text
//! L = 0:  pos 0 1 2 3 ... 11
//!         mon 1 2 3 4 ... 12
//!
//! L = 2:  pos 0 1 2  3 4 ... 12
//!         mon 1 2 2* 3 4 ... 12      (* leap)
//! ```

/// Returns `(month, leap)` for the month at `position` of a row whose leap
/// month is `leap_month` (0 for none).
pub(crate) fn month_at(leap_month: u8, position: usize) -> (u8, bool) {
    let pos = position as u8;
    if leap_month == 0 || pos < leap_month {
        (pos + 1, false)
    } else if pos == leap_month {
        (leap_month, true)
    } else {
        (pos, false)
    }
}

/// Returns the row position of `(month, leap)` for a row whose leap month is
/// `leap_month` (0 for none).
///
/// The caller guarantees `month` is in 1..=12 and that `leap` is only set when
/// `month == leap_month`.
pub(crate) fn position_of(leap_month: u8, month: u8, leap: bool) -> usize {
    let shifted = leap_month > 0 && (leap || month > leap_month);
    if shifted {
        usize::from(month)
    } else {
        usize::from(month) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_leap_month_positions() {
        for pos in 0..12 {
            assert_eq!(month_at(0, pos), (pos as u8 + 1, false));
        }
    }

    #[test]
    fn leap_month_two() {
        assert_eq!(month_at(2, 0), (1, false));
        assert_eq!(month_at(2, 1), (2, false));
        assert_eq!(month_at(2, 2), (2, true));
        assert_eq!(month_at(2, 3), (3, false));
        assert_eq!(month_at(2, 12), (12, false));
    }

    #[test]
    fn leap_month_twelve() {
        assert_eq!(month_at(12, 11), (12, false));
        assert_eq!(month_at(12, 12), (12, true));
    }

    #[test]
    fn every_leap_month_every_position() {
        for leap_month in 1..=12u8 {
            let months: Vec<(u8, bool)> = (0..13).map(|pos| month_at(leap_month, pos)).collect();

            let leaps: Vec<_> = months.iter().filter(|(_, leap)| *leap).collect();
            assert_eq!(leaps, vec![&(leap_month, true)], "leap_month {leap_month}");

            let ordinary: Vec<u8> = months
                .iter()
                .filter(|(_, leap)| !leap)
                .map(|(m, _)| *m)
                .collect();
            assert_eq!(ordinary, (1..=12).collect::<Vec<u8>>(), "leap_month {leap_month}");

            // The leap month directly follows its ordinary namesake.
            let leap_pos = months.iter().position(|m| m.1).unwrap();
            assert_eq!(months[leap_pos - 1], (leap_month, false));
        }
    }

    #[test]
    fn position_of_inverts_month_at() {
        for leap_month in 0..=12u8 {
            let count = if leap_month == 0 { 12 } else { 13 };
            for pos in 0..count {
                let (month, leap) = month_at(leap_month, pos);
                assert_eq!(
                    position_of(leap_month, month, leap),
                    pos,
                    "leap_month {leap_month}, pos {pos}"
                );
            }
        }
    }

    #[test]
    fn position_of_examples() {
        assert_eq!(position_of(0, 1, false), 0);
        assert_eq!(position_of(0, 12, false), 11);
        assert_eq!(position_of(2, 2, false), 1);
        assert_eq!(position_of(2, 2, true), 2);
        assert_eq!(position_of(2, 3, false), 3);
        assert_eq!(position_of(8, 7, false), 6);
        assert_eq!(position_of(8, 12, false), 12);
    }
}
