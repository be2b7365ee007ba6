// --- File: crates/staybook_bookings/src/models.rs ---
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use staybook_common::{Row, DATE_KEY_FORMAT};
use thiserror::Error;

/// Calendar dates travel as `YYYY-MM-DD` everywhere.
/// Same rule the row store uses to match date keys.
pub const DATE_FORMAT: &str = DATE_KEY_FORMAT;

/// Column headers of the bookings sheet, in sheet order.
pub const BOOKING_HEADERS: [&str; 4] = ["date", "name", "mobile", "description"];

/// A reservation for a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Booking {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date", example = "2026-02-10"))]
    pub date: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = "9876543210"))]
    pub mobile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "Family vacation"))]
    pub description: Option<String>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RowDecodeError {
    #[error("missing column '{0}'")]
    MissingColumn(&'static str),
    #[error("invalid date '{0}'")]
    InvalidDate(String),
}

impl Booking {
    pub fn date_key(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn to_row(&self) -> Row {
        let mut row = Row::new();
        row.insert("date".to_string(), self.date_key());
        row.insert("name".to_string(), self.name.clone());
        row.insert("mobile".to_string(), self.mobile.clone());
        row.insert(
            "description".to_string(),
            self.description.clone().unwrap_or_default(),
        );
        row
    }

    pub fn from_row(row: &Row) -> Result<Self, RowDecodeError> {
        let date_text = row
            .get("date")
            .ok_or(RowDecodeError::MissingColumn("date"))?
            .trim();
        let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
            .map_err(|_| RowDecodeError::InvalidDate(date_text.to_string()))?;
        let text = |key: &str| row.get(key).map(|v| v.trim().to_string()).unwrap_or_default();
        let description = text("description");
        Ok(Self {
            date,
            name: text("name"),
            mobile: text("mobile"),
            description: (!description.is_empty()).then_some(description),
        })
    }
}

/// Body of `POST /bookings`. Fields stay raw text until validated.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewBookingRequest {
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-02-10"))]
    pub date: String,
    #[serde(default, alias = "guestName")]
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "9876543210"))]
    pub mobile: String,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Family vacation"))]
    pub description: Option<String>,
}

/// Body of `DELETE /bookings`; the date may come as a query parameter instead.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema, utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct CancelBookingRequest {
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-02-10"))]
    pub date: Option<String>,
}

/// Month filter. `month` is zero-based (0 = January).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Sample bookings loaded into the in-memory store for local runs.
pub fn demo_bookings() -> Vec<Booking> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        Booking {
            date: date(2026, 2, 10),
            name: "John Doe".to_string(),
            mobile: "9876543210".to_string(),
            description: Some("Family vacation".to_string()),
        },
        Booking {
            date: date(2026, 2, 14),
            name: "Jane Smith".to_string(),
            mobile: "9123456789".to_string(),
            description: Some("Anniversary stay".to_string()),
        },
        Booking {
            date: date(2026, 2, 20),
            name: "Robert Wilson".to_string(),
            mobile: "9988776655".to_string(),
            description: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_survives_a_row_trip_with_blank_description() {
        let booking = Booking {
            date: NaiveDate::from_ymd_opt(2026, 2, 20).unwrap(),
            name: "Robert Wilson".to_string(),
            mobile: "9988776655".to_string(),
            description: None,
        };
        let row = booking.to_row();
        assert_eq!(row["description"], "");
        assert_eq!(Booking::from_row(&row).unwrap(), booking);
    }

    #[test]
    fn malformed_date_rows_are_rejected() {
        let mut row = demo_bookings()[0].to_row();
        row.insert("date".to_string(), "10/02/2026".to_string());
        assert_eq!(
            Booking::from_row(&row),
            Err(RowDecodeError::InvalidDate("10/02/2026".to_string()))
        );
        row.remove("date");
        assert_eq!(
            Booking::from_row(&row),
            Err(RowDecodeError::MissingColumn("date"))
        );
    }

    #[test]
    fn guest_name_alias_is_accepted() {
        let req: NewBookingRequest = serde_json::from_str(
            r#"{"date":"2026-02-10","guestName":"John Doe","mobile":"9876543210"}"#,
        )
        .unwrap();
        assert_eq!(req.name, "John Doe");
        assert_eq!(req.description, None);
    }

    #[test]
    fn booking_json_uses_plain_dates() {
        let json = serde_json::to_value(&demo_bookings()[2]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "date": "2026-02-20",
                "name": "Robert Wilson",
                "mobile": "9988776655"
            })
        );
    }
}
