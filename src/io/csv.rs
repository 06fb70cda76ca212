use crate::config::{REPORT_MIME_TYPE, ReportColumns};
use crate::io::report::Report;
use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

// Header line followed by exactly one data row
pub fn serialize_csv(report: &Report) -> Result<String> {
    let columns = ReportColumns::new();
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(columns.headers())?;
    wtr.serialize(report)
        .context("Failed to serialize report row")?;

    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {}", e))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

// Parse an exported report back; header must match and exactly one row must follow
pub fn parse_csv(text: &str) -> Result<Report> {
    let columns = ReportColumns::new();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.clone();
    let expected = columns.headers();
    if headers.len() != expected.len() || headers.iter().zip(expected).any(|(h, e)| h != e) {
        bail!("Unexpected report header: {:?}", headers);
    }

    let mut rows = rdr.records();
    let record = match rows.next() {
        Some(record) => record.context("Failed to read report row")?,
        None => bail!("Report has no data row"),
    };
    if rows.next().is_some() {
        bail!("Report has more than one data row");
    }

    record
        .deserialize::<Report>(None)
        .context("Failed to parse report row")
}

// One-shot export of a single report to `path`
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    let text = serialize_csv(report)?;
    let mut file =
        File::create(path).with_context(|| format!("Failed to create report: {:?}", path))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("Failed to write report: {:?}", path))?;
    drop(file);

    // Read the export back so a truncated or mangled file is caught here
    let written = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to re-read report: {:?}", path))?;
    if parse_csv(&written)? != *report {
        bail!("Report at {:?} does not match the computed scenario", path);
    }

    println!("Report saved to {} ({})", path.display(), REPORT_MIME_TYPE);
    Ok(())
}
