use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type, UInt32Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{DatasetError, LaunchDataset, LaunchRecord};

pub const COL_FLIGHT_NUMBER: &str = "Flight Number";
pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_CLASS: &str = "class";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";

/// Columns every input format must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_LAUNCH_SITE, COL_PAYLOAD, COL_CLASS, COL_BOOSTER_CATEGORY];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with at least [`REQUIRED_COLUMNS`]
/// * `.json`    – `[{ "Launch Site": "...", "class": 1, ... }, ...]`
/// * `.parquet` – same column names as the CSV
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV file")?;
            read_csv(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_json(&text)
        }
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Row shape shared by CSV and JSON
// ---------------------------------------------------------------------------

/// One input row as it appears on disk. Unknown columns (the unnamed pandas
/// index, `Mission Outcome`, ...) are ignored.
#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl RawLaunchRow {
    fn into_record(self, row: usize) -> Result<LaunchRecord, DatasetError> {
        let mut record = LaunchRecord::from_parts(
            row,
            self.launch_site,
            self.payload_mass_kg,
            self.class,
            self.booster_category,
        )?;
        record.flight_number = self.flight_number;
        record.booster_version = self.booster_version.filter(|v| !v.is_empty());
        Ok(record)
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse CSV text from any reader. Headers are matched exactly after trimming.
pub fn read_csv<R: Read>(input: R) -> Result<LaunchDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(DatasetError::MissingColumn(required.to_string()).into());
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawLaunchRow>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(raw.into_record(row_no)?);
    }

    log::debug!("parsed {} CSV rows", records.len());
    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')` shape.
pub fn parse_json(text: &str) -> Result<LaunchDataset> {
    let rows: Vec<RawLaunchRow> = serde_json::from_str(text).context("parsing JSON records")?;
    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, raw)| raw.into_record(i))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with the same column names as the CSV.
///
/// Numeric columns may be stored as integers or floats; string columns as
/// `Utf8` or `LargeUtf8`. Works with files written by Pandas and Polars.
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        append_batch(&batch, &mut records)?;
    }

    Ok(LaunchDataset::from_records(records))
}

fn append_batch(batch: &RecordBatch, records: &mut Vec<LaunchRecord>) -> Result<()> {
    let site_col = required_column(batch, COL_LAUNCH_SITE)?;
    let payload_col = required_column(batch, COL_PAYLOAD)?;
    let class_col = required_column(batch, COL_CLASS)?;
    let category_col = required_column(batch, COL_BOOSTER_CATEGORY)?;
    let flight_col = batch.column_by_name(COL_FLIGHT_NUMBER);
    let version_col = batch.column_by_name(COL_BOOSTER_VERSION);

    let offset = records.len();
    for i in 0..batch.num_rows() {
        let row = offset + i;
        let site = string_at(site_col, i)
            .with_context(|| format!("Row {row}: '{COL_LAUNCH_SITE}'"))?
            .unwrap_or_default();
        let payload = f64_at(payload_col, i)
            .with_context(|| format!("Row {row}: '{COL_PAYLOAD}'"))?
            .ok_or(DatasetError::MissingValue { row, column: COL_PAYLOAD })?;
        let class = i64_at(class_col, i)
            .with_context(|| format!("Row {row}: '{COL_CLASS}'"))?
            .ok_or(DatasetError::MissingValue { row, column: COL_CLASS })?;
        let category = string_at(category_col, i)
            .with_context(|| format!("Row {row}: '{COL_BOOSTER_CATEGORY}'"))?
            .ok_or(DatasetError::MissingValue { row, column: COL_BOOSTER_CATEGORY })?;

        let mut record = LaunchRecord::from_parts(row, site, payload, class, category)?;
        if let Some(col) = flight_col {
            record.flight_number = i64_at(col, i)?.and_then(|n| u32::try_from(n).ok());
        }
        if let Some(col) = version_col {
            record.booster_version = string_at(col, i)?;
        }
        records.push(record);
    }
    Ok(())
}

// -- Parquet / Arrow helpers --

fn required_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    batch
        .column_by_name(name)
        .ok_or_else(|| DatasetError::MissingColumn(name.to_string()).into())
}

fn string_at(col: &ArrayRef, row: usize) -> Result<Option<String>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Utf8 => col.as_string::<i32>().value(row),
        DataType::LargeUtf8 => col.as_string::<i64>().value(row),
        other => bail!("expected a string column, got {other:?}"),
    };
    Ok(Some(value.to_string()))
}

fn f64_at(col: &ArrayRef, row: usize) -> Result<Option<f64>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Float64 => col.as_primitive::<Float64Type>().value(row),
        DataType::Float32 => col.as_primitive::<Float32Type>().value(row) as f64,
        DataType::Int64 => col.as_primitive::<Int64Type>().value(row) as f64,
        DataType::Int32 => col.as_primitive::<Int32Type>().value(row) as f64,
        other => bail!("expected a numeric column, got {other:?}"),
    };
    Ok(Some(value))
}

fn i64_at(col: &ArrayRef, row: usize) -> Result<Option<i64>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Int64 => col.as_primitive::<Int64Type>().value(row),
        DataType::Int32 => col.as_primitive::<Int32Type>().value(row) as i64,
        DataType::UInt32 => col.as_primitive::<UInt32Type>().value(row) as i64,
        DataType::Float64 => {
            let v = col.as_primitive::<Float64Type>().value(row);
            if v.fract() != 0.0 {
                bail!("expected an integer, got {v}");
            }
            v as i64
        }
        other => bail!("expected an integer column, got {other:?}"),
    };
    Ok(Some(value))
}
