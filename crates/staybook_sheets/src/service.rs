// --- File: crates/staybook_sheets/src/service.rs ---
//! Google Sheets implementation of [`RowStore`].
//!
//! Row 1 of every sheet holds the headers; each following row is one record.
//! Cells are written with `RAW` input so dates and phone numbers stay text.

use google_sheets4::api::{
    AddSheetRequest, BatchUpdateSpreadsheetRequest, DeleteDimensionRequest, DimensionRange,
    Request, Scope, SheetProperties, Spreadsheet, ValueRange,
};
use serde_json::Value;
use staybook_common::services::{BackendStatus, BoxFuture, Row, RowMatch, RowStore, RowStoreError};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::auth::SheetsHub;
use crate::error::SheetsError;

/// Quotes a sheet name for use in an A1 range.
pub fn a1_sheet(sheet: &str) -> String {
    format!("'{}'", sheet.replace('\'', "''"))
}

/// Text of a single cell as the API returns it.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn header_row(values: &[Vec<Value>]) -> Vec<String> {
    values
        .first()
        .map(|cells| cells.iter().map(|c| cell_text(c).trim().to_string()).collect())
        .unwrap_or_default()
}

/// Maps every data row under the header row into a [`Row`]. Short rows get
/// empty strings for the missing trailing cells; fully blank rows are skipped.
pub fn rows_from_values(values: &[Vec<Value>]) -> Vec<Row> {
    let headers = header_row(values);
    values
        .iter()
        .skip(1)
        .filter(|cells| cells.iter().any(|c| !cell_text(c).trim().is_empty()))
        .map(|cells| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| !h.is_empty())
                .map(|(i, h)| (h.clone(), cells.get(i).map(cell_text).unwrap_or_default()))
                .collect()
        })
        .collect()
}

/// Orders the cells of `row` by `headers`. Fields without a column are dropped.
pub fn values_for_row(headers: &[String], row: &Row) -> Vec<Value> {
    for field in row.keys() {
        if !headers.iter().any(|h| h == field) {
            warn!("Dropping field '{}' with no matching column", field);
        }
    }
    headers
        .iter()
        .map(|h| Value::String(row.get(h).cloned().unwrap_or_default()))
        .collect()
}

/// Zero-based sheet row indexes of the data rows `matcher` selects, highest
/// first so they can be deleted one after another without shifting.
pub fn matching_sheet_rows(values: &[Vec<Value>], matcher: &RowMatch) -> Vec<usize> {
    let headers = header_row(values);
    let mut indexes: Vec<usize> = values
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, cells)| {
            let row: Row = headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), cells.get(i).map(cell_text).unwrap_or_default()))
                .collect();
            matcher.matches(&row)
        })
        .map(|(i, _)| i)
        .collect();
    indexes.sort_unstable_by(|a, b| b.cmp(a));
    indexes
}

fn find_sheet_id(spreadsheet: &Spreadsheet, sheet: &str) -> Option<i32> {
    spreadsheet
        .sheets
        .as_ref()?
        .iter()
        .filter_map(|s| s.properties.as_ref())
        .find(|p| p.title.as_deref() == Some(sheet))
        .and_then(|p| p.sheet_id)
}

fn sheet_titles(spreadsheet: &Spreadsheet) -> Vec<String> {
    spreadsheet
        .sheets
        .iter()
        .flatten()
        .filter_map(|s| s.properties.as_ref().and_then(|p| p.title.clone()))
        .collect()
}

fn to_api_index(index: usize) -> Result<i32, SheetsError> {
    i32::try_from(index).map_err(|_| SheetsError::IndexOverflow(index))
}

/// Row store over one spreadsheet document.
pub struct GoogleSheetsRowStore {
    hub: Arc<SheetsHub>,
    spreadsheet_id: String,
}

impl GoogleSheetsRowStore {
    pub fn new(hub: Arc<SheetsHub>, spreadsheet_id: impl Into<String>) -> Self {
        Self {
            hub,
            spreadsheet_id: spreadsheet_id.into(),
        }
    }

    async fn read_values(&self, range: &str) -> Result<Vec<Vec<Value>>, SheetsError> {
        let (_resp, value_range) = self
            .hub
            .spreadsheets()
            .values_get(&self.spreadsheet_id, range)
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await?;
        Ok(value_range.values.unwrap_or_default())
    }

    async fn read_headers(&self, sheet: &str) -> Result<Vec<String>, SheetsError> {
        let values = self.read_values(&format!("{}!1:1", a1_sheet(sheet))).await?;
        Ok(header_row(&values))
    }

    async fn write_headers(&self, sheet: &str, headers: &[&str]) -> Result<(), SheetsError> {
        let body = ValueRange {
            values: Some(vec![headers
                .iter()
                .map(|h| Value::String(h.to_string()))
                .collect()]),
            ..Default::default()
        };
        self.hub
            .spreadsheets()
            .values_update(body, &self.spreadsheet_id, &format!("{}!A1", a1_sheet(sheet)))
            .value_input_option("RAW")
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await?;
        Ok(())
    }

    async fn spreadsheet(&self) -> Result<Spreadsheet, SheetsError> {
        let (_resp, spreadsheet) = self
            .hub
            .spreadsheets()
            .get(&self.spreadsheet_id)
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await?;
        Ok(spreadsheet)
    }

    async fn batch_update(&self, requests: Vec<Request>) -> Result<(), SheetsError> {
        let req = BatchUpdateSpreadsheetRequest {
            requests: Some(requests),
            ..Default::default()
        };
        self.hub
            .spreadsheets()
            .batch_update(req, &self.spreadsheet_id)
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await?;
        Ok(())
    }

    async fn sheet_id(&self, sheet: &str) -> Result<i32, RowStoreError> {
        let spreadsheet = self.spreadsheet().await?;
        find_sheet_id(&spreadsheet, sheet)
            .ok_or_else(|| RowStoreError::SheetNotFound(sheet.to_string()))
    }
}

impl RowStore for GoogleSheetsRowStore {
    fn list_rows(&self, sheet: &str) -> BoxFuture<'_, Vec<Row>, RowStoreError> {
        let sheet = sheet.to_string();
        Box::pin(async move {
            let values = self.read_values(&a1_sheet(&sheet)).await?;
            let rows = rows_from_values(&values);
            debug!("Read {} rows from sheet {}", rows.len(), sheet);
            Ok(rows)
        })
    }

    fn append_row(&self, sheet: &str, row: Row) -> BoxFuture<'_, (), RowStoreError> {
        let sheet = sheet.to_string();
        Box::pin(async move {
            let headers = self.read_headers(&sheet).await?;
            if headers.is_empty() {
                return Err(SheetsError::MissingHeader(sheet).into());
            }
            let body = ValueRange {
                values: Some(vec![values_for_row(&headers, &row)]),
                ..Default::default()
            };
            self.hub
                .spreadsheets()
                .values_append(body, &self.spreadsheet_id, &format!("{}!A1", a1_sheet(&sheet)))
                .value_input_option("RAW")
                .insert_data_option("INSERT_ROWS")
                .add_scope(Scope::Spreadsheet)
                .doit()
                .await
                .map_err(SheetsError::from)?;
            debug!("Appended row to sheet {}", sheet);
            Ok(())
        })
    }

    fn delete_rows(&self, sheet: &str, matcher: RowMatch) -> BoxFuture<'_, usize, RowStoreError> {
        let sheet = sheet.to_string();
        Box::pin(async move {
            let values = self.read_values(&a1_sheet(&sheet)).await?;
            let indexes = matching_sheet_rows(&values, &matcher);
            if indexes.is_empty() {
                return Ok(0);
            }

            let sheet_id = self.sheet_id(&sheet).await?;
            let mut requests = Vec::with_capacity(indexes.len());
            for index in &indexes {
                requests.push(Request {
                    delete_dimension: Some(DeleteDimensionRequest {
                        range: Some(DimensionRange {
                            sheet_id: Some(sheet_id),
                            dimension: Some("ROWS".to_string()),
                            start_index: Some(to_api_index(*index)?),
                            end_index: Some(to_api_index(index + 1)?),
                        }),
                    }),
                    ..Default::default()
                });
            }
            self.batch_update(requests).await?;
            info!("Deleted {} rows from sheet {}", indexes.len(), sheet);
            Ok(indexes.len())
        })
    }

    fn ensure_sheet(&self, sheet: &str, headers: &[&str]) -> BoxFuture<'_, (), RowStoreError> {
        let sheet = sheet.to_string();
        let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        Box::pin(async move {
            let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
            let spreadsheet = self.spreadsheet().await?;
            if find_sheet_id(&spreadsheet, &sheet).is_none() {
                info!("Creating sheet {}", sheet);
                self.batch_update(vec![Request {
                    add_sheet: Some(AddSheetRequest {
                        properties: Some(SheetProperties {
                            title: Some(sheet.clone()),
                            ..Default::default()
                        }),
                    }),
                    ..Default::default()
                }])
                .await?;
                self.write_headers(&sheet, &header_refs).await?;
                return Ok(());
            }

            if self.read_headers(&sheet).await?.is_empty() {
                info!("Writing header row to sheet {}", sheet);
                self.write_headers(&sheet, &header_refs).await?;
            }
            Ok(())
        })
    }

    fn status(&self) -> BoxFuture<'_, BackendStatus, RowStoreError> {
        Box::pin(async move {
            let spreadsheet = self.spreadsheet().await?;
            let title = spreadsheet
                .properties
                .as_ref()
                .and_then(|p| p.title.clone())
                .unwrap_or_default();
            Ok(BackendStatus {
                title,
                sheets: sheet_titles(&spreadsheet),
            })
        })
    }
}
