use crate::calendar::{
    days_in_month, first_weekday_index, month_view, next_month, previous_month, project,
    CalendarError, MonthRef, WEEKDAY_LABELS,
};
use crate::models::{demo_bookings, Booking};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn day_cells(cells: &[crate::calendar::CalendarCell]) -> usize {
    cells.iter().filter(|c| c.day_number.is_some()).count()
}

#[test]
fn leap_february_has_29_day_cells() {
    let cells = project(2024, 1, &[], date(2000, 1, 1)).unwrap();
    assert_eq!(day_cells(&cells), 29);
    let cells = project(2023, 1, &[], date(2000, 1, 1)).unwrap();
    assert_eq!(day_cells(&cells), 28);
}

#[test]
fn february_2026_starts_on_sunday() {
    // 2026-02-01 is a Sunday: no padding.
    assert_eq!(first_weekday_index(2026, 1).unwrap(), 0);
    let cells = project(2026, 1, &demo_bookings(), date(2026, 2, 14)).unwrap();
    assert_eq!(cells.len(), 28);
    assert_eq!(cells[0].day_number, Some(1));
    assert_eq!(cells[0].weekday_label, "Sun");

    let booked: Vec<u32> = cells
        .iter()
        .filter(|c| c.is_booked)
        .filter_map(|c| c.day_number)
        .collect();
    assert_eq!(booked, vec![10, 14, 20]);

    let today: Vec<&crate::calendar::CalendarCell> = cells.iter().filter(|c| c.is_today).collect();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].day_number, Some(14));
    assert_eq!(today[0].weekday_label, "Sat");
}

#[test]
fn padding_cells_carry_their_column_label() {
    // 2026-01-01 is a Thursday.
    let leading = first_weekday_index(2026, 0).unwrap();
    assert_eq!(leading, 4);
    let cells = project(2026, 0, &[], date(2026, 1, 1)).unwrap();
    assert_eq!(cells.len(), leading as usize + 31);
    for (i, cell) in cells.iter().take(4).enumerate() {
        assert_eq!(cell.day_number, None);
        assert_eq!(cell.weekday_label, WEEKDAY_LABELS[i]);
        assert!(!cell.is_today && !cell.is_booked);
    }
    assert_eq!(cells[4].day_number, Some(1));
    assert_eq!(cells[4].weekday_label, "Thu");
    assert!(cells[4].is_today);
}

#[test]
fn bookings_outside_the_month_are_not_marked() {
    let bookings = vec![Booking {
        date: date(2026, 3, 1),
        name: "March Guest".to_string(),
        mobile: "9876543210".to_string(),
        description: None,
    }];
    let cells = project(2026, 1, &bookings, date(2000, 1, 1)).unwrap();
    assert!(cells.iter().all(|c| !c.is_booked));
}

#[test]
fn out_of_range_month_is_an_error() {
    assert_eq!(
        project(2026, 12, &[], date(2026, 1, 1)),
        Err(CalendarError::InvalidMonth(12))
    );
    assert_eq!(days_in_month(2026, 13), Err(CalendarError::InvalidMonth(13)));
}

#[test]
fn december_and_january_roll_over() {
    assert_eq!(next_month(2025, 11), MonthRef { year: 2026, month: 0 });
    assert_eq!(previous_month(2026, 0), MonthRef { year: 2025, month: 11 });
    assert_eq!(next_month(2026, 1), MonthRef { year: 2026, month: 2 });
    assert_eq!(previous_month(2026, 1), MonthRef { year: 2026, month: 0 });
    assert_eq!(days_in_month(2025, 11).unwrap(), 31);
}

#[test]
fn month_view_sorts_the_month_bookings() {
    let mut bookings = demo_bookings();
    bookings.reverse();
    bookings.push(Booking {
        date: date(2026, 3, 1),
        name: "March Guest".to_string(),
        mobile: "9876543210".to_string(),
        description: None,
    });
    let view = month_view(2026, 1, &bookings, date(2026, 2, 1)).unwrap();
    assert_eq!(view.month_name, "February");
    assert_eq!(view.previous, MonthRef { year: 2026, month: 0 });
    assert_eq!(view.next, MonthRef { year: 2026, month: 2 });
    let names: Vec<&str> = view.bookings.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["John Doe", "Jane Smith", "Robert Wilson"]);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["monthName"], "February");
    assert_eq!(json["cells"][0]["dayNumber"], 1);
    assert_eq!(json["cells"][0]["isToday"], true);
}
