#[cfg(test)]
mod tests {
    use crate::calendar::{days_in_month, first_weekday_index, next_month, previous_month, project, WEEKDAY_LABELS};
    use crate::models::Booking;
    use chrono::{Datelike, NaiveDate};
    use proptest::prelude::*;

    fn booking_on(date: NaiveDate) -> Booking {
        Booking {
            date,
            name: "Guest".to_string(),
            mobile: "9876543210".to_string(),
            description: None,
        }
    }

    proptest! {
        // Padding plus one cell per day, nothing more
        #[test]
        fn test_cell_count_matches_month_length(year in 1900..2200i32, month in 0..12u32) {
            let today = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
            let cells = project(year, month, &[], today).unwrap();
            let days = days_in_month(year, month).unwrap();
            let leading = first_weekday_index(year, month).unwrap();

            prop_assert_eq!(cells.len() as u32, leading + days);
            prop_assert_eq!(cells.iter().filter(|c| c.day_number.is_some()).count() as u32, days);
            prop_assert!(cells.iter().take(leading as usize).all(|c| c.day_number.is_none()));
        }

        // Labels agree with chrono's own weekday for every day
        #[test]
        fn test_weekday_labels_match_dates(year in 1900..2200i32, month in 0..12u32) {
            let today = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
            let cells = project(year, month, &[], today).unwrap();
            for (i, cell) in cells.iter().enumerate() {
                prop_assert_eq!(cell.weekday_label, WEEKDAY_LABELS[i % 7]);
                if let Some(day) = cell.day_number {
                    let date = NaiveDate::from_ymd_opt(year, month + 1, day).unwrap();
                    prop_assert_eq!(
                        cell.weekday_label,
                        WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize]
                    );
                }
            }
        }

        // Exactly the booked days are marked
        #[test]
        fn test_booked_markers(year in 2000..2100i32, month in 0..12u32, days in proptest::collection::btree_set(1..=28u32, 0..10)) {
            let bookings: Vec<Booking> = days
                .iter()
                .map(|d| booking_on(NaiveDate::from_ymd_opt(year, month + 1, *d).unwrap()))
                .collect();
            let today = NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap();
            let cells = project(year, month, &bookings, today).unwrap();

            let marked: Vec<u32> = cells.iter().filter(|c| c.is_booked).filter_map(|c| c.day_number).collect();
            let expected: Vec<u32> = days.iter().copied().collect();
            prop_assert_eq!(marked, expected);
            prop_assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
        }

        // Navigation stays in range and round-trips
        #[test]
        fn test_month_navigation_round_trip(year in 1900..2200i32, month in 0..12u32) {
            let next = next_month(year, month);
            prop_assert!(next.month < 12);
            let back = previous_month(next.year, next.month);
            prop_assert_eq!((back.year, back.month), (year, month));
        }
    }
}
