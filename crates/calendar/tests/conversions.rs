use chrono::{Days, NaiveDate};
use lunisolar_calendar::{
    CalendarError, LunarDate, MAX_YEAR, MIN_YEAR, days_in_month, lunar_to_solar, new_year,
    solar_to_lunar, year_months,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn solar_round_trip_every_supported_day() {
    let first = new_year(MIN_YEAR).unwrap();
    // Last day of MAX_YEAR's eleventh month, the final month of known length.
    let last = ymd(MAX_YEAR + 1, 1, 17);
    let mut date = first;
    let mut previous: Option<LunarDate> = None;
    while date <= last {
        let lunar = solar_to_lunar(date).unwrap();
        assert_eq!(
            lunar_to_solar(lunar),
            date,
            "round trip failed for {date}: lunar {lunar}"
        );
        if let Some(prev) = previous {
            assert!(prev < lunar, "{prev} should precede {lunar} ({date})");
        }
        previous = Some(lunar);
        date = date + Days::new(1);
    }
}

#[test]
fn lunar_round_trip_every_valid_date() {
    for year in MIN_YEAR..MAX_YEAR {
        for month in year_months(year).unwrap() {
            for day in 1..=month.days() {
                let lunar = LunarDate::new(year, month.is_leap(), month.month(), day).unwrap();
                let solar = lunar_to_solar(lunar);
                assert_eq!(
                    solar_to_lunar(solar).unwrap(),
                    lunar,
                    "round trip failed for {lunar}: solar {solar}"
                );
            }
        }
    }
}

#[test]
fn lunar_round_trip_final_year() {
    // Every month of MAX_YEAR except the last has a known length.
    for month in 1..=11u8 {
        let days = days_in_month(MAX_YEAR, false, month).unwrap();
        for day in 1..=days {
            let lunar = LunarDate::new(MAX_YEAR, false, month, day).unwrap();
            assert_eq!(solar_to_lunar(lunar.to_solar()).unwrap(), lunar);
        }
    }
    let days = days_in_month(MAX_YEAR, true, 6).unwrap();
    for day in 1..=days {
        let lunar = LunarDate::new(MAX_YEAR, true, 6, day).unwrap();
        assert_eq!(solar_to_lunar(lunar.to_solar()).unwrap(), lunar);
    }
}

#[test]
fn known_fixed_points() {
    let cases: &[((i32, u32, u32), (i32, bool, u8, u8))] = &[
        ((2023, 1, 22), (2023, false, 1, 1)), // lunar new year
        ((2023, 3, 22), (2023, true, 2, 1)),  // leap second month
        ((2024, 2, 10), (2024, false, 1, 1)), // lunar new year
        ((2000, 1, 1), (1999, false, 11, 25)),
        ((1850, 2, 12), (1850, false, 1, 1)), // first supported day
        ((2150, 12, 31), (2150, false, 11, 13)),
        ((2151, 1, 1), (2150, false, 11, 14)),
        ((2151, 1, 17), (2150, false, 11, 30)), // last supported day
    ];
    for &((y, m, d), (ly, leap, lm, ld)) in cases {
        let lunar = solar_to_lunar(ymd(y, m, d)).unwrap();
        assert_eq!(
            (lunar.year(), lunar.is_leap(), lunar.month(), lunar.day()),
            (ly, leap, lm, ld),
            "solar_to_lunar({y}-{m}-{d})"
        );
        let back = LunarDate::new(ly, leap, lm, ld).unwrap();
        assert_eq!(back.to_solar(), ymd(y, m, d));
    }
}

#[test]
fn days_before_new_year_belong_to_previous_year() {
    for year in MIN_YEAR + 1..=MAX_YEAR {
        let first = new_year(year).unwrap();
        let eve = first.pred_opt().unwrap();
        let lunar = solar_to_lunar(eve).unwrap();
        assert_eq!(lunar.year(), year - 1, "eve of {year}: {eve}");
        assert_eq!(lunar.month(), 12, "eve of {year}: {eve}");
        assert_eq!(lunar.day(), lunar.month_days(), "eve of {year}: {eve}");

        let day_one = solar_to_lunar(first).unwrap();
        assert_eq!(day_one, LunarDate::new(year, false, 1, 1).unwrap());
    }
}

#[test]
fn out_of_range_dates() {
    for date in [
        ymd(1849, 12, 31),
        ymd(1850, 1, 1),
        ymd(1850, 2, 11),
        ymd(2151, 1, 18),
        ymd(2152, 1, 1),
    ] {
        assert_eq!(
            solar_to_lunar(date).unwrap_err(),
            CalendarError::DateOutOfRange { date },
        );
    }
}
