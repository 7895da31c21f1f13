use chrono::Days;
use lunisolar_calendar::{
    CalendarError, MAX_YEAR, MIN_YEAR, days_in_month, days_in_year, leap_month, months_in_year,
    new_year, year_months,
};

#[test]
fn month_lengths_sum_to_year_length() {
    for year in MIN_YEAR..MAX_YEAR {
        let leap = leap_month(year).unwrap();
        let mut total: u16 = (1..=12u8)
            .map(|m| u16::from(days_in_month(year, false, m).unwrap()))
            .sum();
        if let Some(m) = leap {
            total += u16::from(days_in_month(year, true, m).unwrap());
        }

        let span = (new_year(year + 1).unwrap() - new_year(year).unwrap()).num_days();
        assert_eq!(i64::from(total), span, "year {year}");
        assert_eq!(days_in_year(year).unwrap(), total, "year {year}");
    }
}

#[test]
fn every_month_has_29_or_30_days() {
    for year in MIN_YEAR..MAX_YEAR {
        for month in year_months(year).unwrap() {
            assert!(
                matches!(month.days(), 29 | 30),
                "{year} month {} (leap {}) has {} days",
                month.month(),
                month.is_leap(),
                month.days()
            );
        }
    }
}

#[test]
fn year_lengths_are_plausible() {
    for year in MIN_YEAR..MAX_YEAR {
        let days = days_in_year(year).unwrap();
        if leap_month(year).unwrap().is_some() {
            assert!((383..=385).contains(&days), "leap year {year}: {days}");
        } else {
            assert!((353..=355).contains(&days), "common year {year}: {days}");
        }
    }
}

#[test]
fn leap_requests_succeed_only_on_the_leap_month() {
    for year in MIN_YEAR..MAX_YEAR {
        let leap = leap_month(year).unwrap();
        for month in 1..=12u8 {
            let result = days_in_month(year, true, month);
            if leap == Some(month) {
                assert!(result.is_ok(), "{year} leap {month}");
            } else {
                assert_eq!(
                    result.unwrap_err(),
                    CalendarError::InvalidLeapMonth {
                        year,
                        month,
                        leap_month: leap,
                    },
                    "{year} leap {month}"
                );
            }
        }
    }
}

#[test]
fn leap_year_examples() {
    assert_eq!(leap_month(2023).unwrap(), Some(2));
    assert!(days_in_month(2023, true, 2).is_ok());
    assert!(matches!(
        days_in_month(2023, true, 3),
        Err(CalendarError::InvalidLeapMonth { .. })
    ));

    assert_eq!(leap_month(1851).unwrap(), Some(8));
    assert!(days_in_month(1851, true, 8).is_ok());
    assert!(matches!(
        days_in_month(1851, true, 2),
        Err(CalendarError::InvalidLeapMonth { .. })
    ));
}

#[test]
fn months_in_year_follows_leap_month() {
    for year in MIN_YEAR..=MAX_YEAR {
        let expected = if leap_month(year).unwrap().is_some() { 13 } else { 12 };
        assert_eq!(months_in_year(year).unwrap(), expected, "year {year}");
    }
}

#[test]
fn year_months_chain_into_next_year() {
    for year in MIN_YEAR..MAX_YEAR {
        let months = year_months(year).unwrap();
        assert_eq!(months[0].start(), new_year(year).unwrap());
        let last = months.last().unwrap();
        assert_eq!(
            last.end() + Days::new(1),
            new_year(year + 1).unwrap(),
            "year {year}"
        );
    }
}

#[test]
fn final_year_last_month_is_unsupported() {
    assert!(matches!(
        days_in_month(MAX_YEAR, false, 12),
        Err(CalendarError::YearOutOfRange { year: 2151, .. })
    ));
    assert!(days_in_year(MAX_YEAR).is_err());
    assert!(year_months(MAX_YEAR).is_err());
}

#[test]
fn out_of_range_years() {
    for year in [MIN_YEAR - 1, MAX_YEAR + 1, 0, i32::MIN, i32::MAX] {
        assert!(matches!(
            leap_month(year),
            Err(CalendarError::YearOutOfRange { .. })
        ));
        assert!(matches!(
            days_in_month(year, false, 1),
            Err(CalendarError::YearOutOfRange { .. })
        ));
    }
}
