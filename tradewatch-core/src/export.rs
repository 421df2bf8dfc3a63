//! CSV and JSON export of chart tables.

use std::io::Write;

use serde::Serialize;

use crate::charts::{ChartKind, EvidenceCharts, Tabular};
use crate::error::ExportError;

/// Output format for exported tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Write rows as CSV with a header row taken from the column names.
pub fn write_csv<W: Write, T: Tabular>(writer: W, rows: &[T]) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(T::COLUMNS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write rows as a pretty-printed JSON array of objects.
pub fn write_json<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, rows)?;
    Ok(())
}

fn write_rows<W: Write, T: Tabular>(
    writer: W,
    rows: &[T],
    format: ExportFormat,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => write_csv(writer, rows),
        ExportFormat::Json => write_json(writer, rows),
    }
}

/// Write one table of a chart set.
pub fn write_table<W: Write>(
    writer: W,
    charts: &EvidenceCharts,
    kind: ChartKind,
    format: ExportFormat,
) -> Result<(), ExportError> {
    match kind {
        ChartKind::Price => write_rows(writer, &charts.price, format),
        ChartKind::Volume => write_rows(writer, &charts.volume, format),
        ChartKind::Liquidity => write_rows(writer, &charts.liquidity, format),
        ChartKind::Alerts => write_rows(writer, &charts.alerts, format),
        ChartKind::Pattern => write_rows(writer, &charts.pattern, format),
        ChartKind::Activity => write_rows(writer, &charts.activity, format),
    }
}

/// Write every table. JSON is one object keyed by table name; CSV is one
/// section per table, each headed by a `# <name>` line.
pub fn write_all<W: Write>(
    mut writer: W,
    charts: &EvidenceCharts,
    format: ExportFormat,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, charts)?;
            writeln!(writer)?;
        }
        ExportFormat::Csv => {
            for (i, kind) in ChartKind::ALL.into_iter().enumerate() {
                if i > 0 {
                    writeln!(writer)?;
                }
                writeln!(writer, "# {}", kind.name())?;
                write_table(&mut writer, charts, kind, format)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ChartSeeds;

    fn charts() -> EvidenceCharts {
        EvidenceCharts::generate(&ChartSeeds::new(3), 0)
    }

    #[test]
    fn csv_header_matches_columns() {
        let mut buf = Vec::new();
        write_table(&mut buf, &charts(), ChartKind::Alerts, ExportFormat::Csv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, "Severity,Frequency,Alert Type,Volume Impact");
        assert_eq!(text.lines().count(), 1 + ChartKind::Alerts.row_count());
    }

    #[test]
    fn json_rows_use_column_names() {
        let mut buf = Vec::new();
        write_table(&mut buf, &charts(), ChartKind::Liquidity, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0]["Metric"], "Bid-Ask Spread");
        assert!(rows[0]["Value"].is_f64());
    }

    #[test]
    fn csv_alert_type_uses_display_name() {
        let mut buf = Vec::new();
        write_table(&mut buf, &charts(), ChartKind::Alerts, ExportFormat::Csv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let known = ["Insider Trading", "Spoofing", "Wash Trading", "Market Manipulation"];
        for line in text.lines().skip(1) {
            assert!(known.iter().any(|k| line.contains(k)), "{line}");
        }
    }

    #[test]
    fn csv_export_of_all_tables_has_one_section_each() {
        let mut buf = Vec::new();
        write_all(&mut buf, &charts(), ExportFormat::Csv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let sections: Vec<&str> = text.lines().filter(|l| l.starts_with("# ")).collect();
        assert_eq!(sections.len(), ChartKind::ALL.len());
        assert_eq!(sections[0], "# price");
    }

    #[test]
    fn json_export_of_all_tables_is_keyed_by_name() {
        let mut buf = Vec::new();
        write_all(&mut buf, &charts(), ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        for kind in ChartKind::ALL {
            let rows = value[kind.name()].as_array().unwrap();
            assert_eq!(rows.len(), kind.row_count());
        }
    }
}
