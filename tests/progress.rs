use sambat::{BsDate, DayState, MAX_YEAR, MIN_YEAR, YearProgress};

fn each_day_of_year(year: u16) -> impl Iterator<Item = BsDate> {
    let first = BsDate::first_of_year(year).ok();
    std::iter::successors(first, move |d| d.next_day().filter(|n| n.year() == year))
}

#[test]
fn day_count_conservation_across_table() {
    for year in MIN_YEAR..=MAX_YEAR {
        let total = sambat::days_in_year(year).unwrap();
        let mut count = 0;
        for date in each_day_of_year(year) {
            assert_eq!(
                date.day_of_year() + date.days_remaining(),
                total,
                "BS {date}"
            );
            count += 1;
        }
        assert_eq!(count, total, "BS {year} day count");
    }
}

#[test]
fn boundaries() {
    for year in [MIN_YEAR, 2081, 2082, MAX_YEAR] {
        let total = sambat::days_in_year(year).unwrap();

        let first = BsDate::first_of_year(year).unwrap();
        assert_eq!(sambat::day_of_year(&first), 1);
        assert_eq!(sambat::days_remaining(&first), total - 1);

        let last = BsDate::last_of_year(year).unwrap();
        assert_eq!(sambat::day_of_year(&last), total);
        assert_eq!(sambat::days_remaining(&last), 0);
        assert_eq!(sambat::year_progress(&last), 100);
    }
}

#[test]
fn progress_is_monotonic() {
    for year in [MIN_YEAR, 2080, 2081, 2082] {
        let mut previous = 0;
        for date in each_day_of_year(year) {
            let pct = sambat::year_progress(&date);
            assert!(pct >= previous, "progress went backwards at BS {date}");
            assert!(pct <= 100);
            previous = pct;
        }
        assert_eq!(previous, 100, "BS {year} should end at 100%");
    }
}

#[test]
fn progress_uses_integer_division() {
    let total = u32::from(sambat::days_in_year(2082).unwrap());
    for date in each_day_of_year(2082) {
        let expected = u32::from(date.day_of_year()) * 100 / total;
        assert_eq!(u32::from(date.year_progress()), expected, "BS {date}");
    }
}

#[test]
fn progress_text_matches_components() {
    let date = sambat::from_gregorian(2026, 2, 15).unwrap();
    assert_eq!(date.to_tuple(), (2082, 11, 3));
    assert_eq!(date.progress_text(), "57d left / 84%");
    assert_eq!(
        date.progress_text(),
        format!("{}d left / {}%", date.days_remaining(), date.year_progress())
    );
}

#[test]
fn day_states_partition_the_year() {
    let date = BsDate::new(2082, 10, 9).unwrap();
    let progress = YearProgress::of(&date);
    let states: Vec<DayState> = progress.day_states().collect();

    let elapsed = states.iter().filter(|s| **s == DayState::Elapsed).count();
    let today = states.iter().filter(|s| **s == DayState::Today).count();
    let remaining = states.iter().filter(|s| **s == DayState::Remaining).count();

    assert_eq!(elapsed, 283);
    assert_eq!(today, 1);
    assert_eq!(remaining, usize::from(progress.days_remaining));
}

#[test]
fn month_lengths_feed_day_of_year() {
    let lengths = sambat::month_lengths(2082).unwrap();
    let mut day_of_year = 0u16;
    for (i, &days) in lengths.iter().enumerate() {
        let month = u8::try_from(i + 1).unwrap();
        let first = BsDate::new(2082, month, 1).unwrap();
        assert_eq!(first.day_of_year(), day_of_year + 1);
        day_of_year += u16::from(days);
    }
    assert_eq!(day_of_year, 365);
}
