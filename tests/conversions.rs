use jiff::civil::{Date, date};
use sambat::{BsDate, CalendarError, EPOCH_AD, MAX_YEAR, MIN_YEAR, Year};

#[test]
fn epoch_identity_both_directions() {
    let bs = sambat::from_ad(EPOCH_AD).unwrap();
    assert_eq!(bs, BsDate::new(MIN_YEAR, 1, 1).unwrap());
    assert_eq!(sambat::to_ad(bs).unwrap(), EPOCH_AD);
}

#[test]
fn reference_scenarios() {
    assert_eq!(
        sambat::from_gregorian(1913, 4, 13).unwrap().to_tuple(),
        (1970, 1, 1)
    );
    assert_eq!(
        sambat::from_gregorian(2023, 4, 14).unwrap().to_tuple(),
        (2080, 1, 1)
    );
    assert_eq!(BsDate::new(2082, 10, 9).unwrap().format(), "Magh 09, 2082");
}

#[test]
fn new_year_anchors() {
    let cases: &[(u16, Date)] = &[
        (1975, date(1918, 4, 13)),
        (2000, date(1943, 4, 14)),
        (2050, date(1993, 4, 13)),
        (2070, date(2013, 4, 14)),
        (2077, date(2020, 4, 13)),
        (2081, date(2024, 4, 13)),
        (2082, date(2025, 4, 14)),
        (2083, date(2026, 4, 14)),
    ];
    for &(year, ad) in cases {
        let first = BsDate::first_of_year(year).unwrap();
        assert_eq!(first.to_ad().unwrap(), ad, "BS {year}-01-01");
        assert_eq!(BsDate::from_ad(ad).unwrap(), first, "AD {ad}");
    }
}

#[test]
fn round_trip_ad_first_every_day_for_a_decade() {
    let mut ad = date(2020, 1, 1);
    let end = date(2030, 12, 31);
    while ad <= end {
        let bs = sambat::from_ad(ad).unwrap();
        assert_eq!(sambat::to_ad(bs).unwrap(), ad, "round trip failed for {ad}");
        ad = ad.tomorrow().unwrap();
    }
}

#[test]
fn round_trip_bs_first_every_day_of_table() {
    let mut bs = BsDate::first_of_year(MIN_YEAR).unwrap();
    let mut expected_ad = EPOCH_AD;
    loop {
        let ad = sambat::to_ad(bs).unwrap();
        assert_eq!(ad, expected_ad, "BS {bs} is not contiguous");
        assert_eq!(sambat::from_ad(ad).unwrap(), bs, "round trip failed for BS {bs}");

        let Some(next) = bs.next_day() else { break };
        bs = next;
        expected_ad = expected_ad.tomorrow().unwrap();
    }
    assert_eq!(bs, BsDate::last_of_year(MAX_YEAR).unwrap());
}

#[test]
fn round_trip_sample_dates() {
    for (y, m, d) in [(2020, 1, 1), (2023, 4, 14), (2025, 12, 25), (2026, 2, 15), (2030, 7, 4)] {
        let bs = sambat::from_gregorian(y, m, d).unwrap();
        let ad = sambat::to_gregorian(bs.year(), bs.month(), bs.day()).unwrap();
        assert_eq!(ad, date(y, m, d), "round trip failed for {y}-{m}-{d}");
    }
}

#[test]
fn year_starts_line_up_with_year_lengths() {
    for year in Year::all() {
        let Some(next) = year.next() else { continue };
        let start = BsDate::first_of_year(year.get()).unwrap().to_ad().unwrap();
        let next_start = BsDate::first_of_year(next.get()).unwrap().to_ad().unwrap();
        let span = start.until(next_start).unwrap();
        assert_eq!(span.get_days(), i32::from(year.days()), "BS {year}");
    }
}

#[test]
fn domain_rejection() {
    assert!(matches!(
        sambat::days_in_month(MIN_YEAR - 1, 1),
        Err(CalendarError::YearOutOfRange { .. })
    ));
    assert!(matches!(
        sambat::days_in_month(MAX_YEAR + 1, 1),
        Err(CalendarError::YearOutOfRange { .. })
    ));
    assert!(matches!(
        sambat::from_gregorian(1913, 4, 12),
        Err(CalendarError::BeforeEpoch { .. })
    ));
    assert!(matches!(
        sambat::from_gregorian(2050, 1, 1),
        Err(CalendarError::BeyondTable { .. })
    ));
    assert!(matches!(
        sambat::from_gregorian(2023, 4, 31),
        Err(CalendarError::InvalidDate { .. })
    ));
}

#[test]
fn today_round_trips() {
    let bs = sambat::today().unwrap();
    let ad = bs.to_ad().unwrap();
    assert_eq!(BsDate::from_ad(ad).unwrap(), bs);
}
