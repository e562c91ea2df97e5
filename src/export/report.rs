//! CSV report writers

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use chrono::NaiveDate;
use crate::config::ExportConfig;
use crate::models::{Event, EventParticipant, Maintenance};
use crate::utils::errors::{CourtDeskError, Result};
use crate::utils::helpers::{date_part, format_money, sanitize_filename};
use crate::utils::logging;
use super::summary::SummaryRows;

/// A record that has a row in a report
pub trait ReportRow {
    /// Report name, also the default file prefix
    const REPORT: &'static str;
    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn money(value: Option<f64>) -> String {
    value.map(format_money).unwrap_or_default()
}

/// `HH:MM` from a clock time that may carry seconds
fn clock(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(|time| time.chars().take(5).collect())
        .unwrap_or_default()
}

fn day(value: &str) -> String {
    date_part(value).unwrap_or(value).to_string()
}

impl ReportRow for Event {
    const REPORT: &'static str = "events";
    const HEADERS: &'static [&'static str] = &[
        "ID", "Title", "Type", "Status", "Start date", "End date", "Start time", "End time",
        "Venue", "Court", "Organizer", "Participants", "Capacity", "Fee", "Public", "Featured",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.event_type.as_str().to_string(),
            self.status.as_str().to_string(),
            day(&self.start_date),
            day(self.last_day()),
            clock(&self.start_time),
            clock(&self.end_time),
            text(&self.venue_name),
            text(&self.court_name),
            text(&self.organizer_name),
            self.current_participants.to_string(),
            self.max_participants.map(|max| max.to_string()).unwrap_or_default(),
            money(self.registration_fee),
            if self.is_public { "yes" } else { "no" }.to_string(),
            if self.is_featured { "yes" } else { "no" }.to_string(),
        ]
    }
}

impl ReportRow for Maintenance {
    const REPORT: &'static str = "maintenance";
    const HEADERS: &'static [&'static str] = &[
        "ID", "Title", "Type", "Priority", "Status", "Scheduled", "Started", "Completed",
        "Venue", "Court", "Equipment", "Assigned to", "Estimated cost", "Actual cost", "Variance",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.maintenance_type.as_str().to_string(),
            self.priority.as_str().to_string(),
            self.status.as_str().to_string(),
            day(&self.scheduled_date),
            self.started_date.as_deref().map(day).unwrap_or_default(),
            self.completed_date.as_deref().map(day).unwrap_or_default(),
            text(&self.venue_name),
            text(&self.court_name),
            text(&self.equipment_name),
            text(&self.assigned_to_name),
            money(self.estimated_cost),
            money(self.actual_cost),
            money(self.cost_variance()),
        ]
    }
}

impl ReportRow for EventParticipant {
    const REPORT: &'static str = "participants";
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Email", "Status", "Registered", "Notes"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            text(&self.user_name),
            text(&self.user_email),
            self.status.as_str().to_string(),
            day(&self.registered_at),
            text(&self.notes),
        ]
    }
}

/// `<dir>/<prefix>_<YYYYMMDD>.csv`
pub fn report_path(dir: &Path, prefix: &str, date: NaiveDate) -> PathBuf {
    dir.join(format!("{}_{}.csv", sanitize_filename(prefix), date.format("%Y%m%d")))
}

/// Writes reports with the configured delimiter
#[derive(Debug, Clone)]
pub struct ReportWriter {
    directory: PathBuf,
    delimiter: u8,
}

impl ReportWriter {
    pub fn new(config: &ExportConfig) -> Result<Self> {
        let delimiter = u8::try_from(config.delimiter).map_err(|_| {
            CourtDeskError::Config(format!("Invalid export delimiter: {:?}", config.delimiter))
        })?;
        Ok(Self {
            directory: PathBuf::from(&config.directory),
            delimiter,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn csv_writer<W: Write>(&self, out: W) -> csv::Writer<W> {
        csv::WriterBuilder::new().delimiter(self.delimiter).from_writer(out)
    }

    /// Write a header plus one row per record, returning the row count
    pub fn write_report<'a, R, I, W>(&self, out: W, records: I) -> Result<usize>
    where
        R: ReportRow + 'a,
        I: IntoIterator<Item = &'a R>,
        W: Write,
    {
        let mut wtr = self.csv_writer(out);
        wtr.write_record(R::HEADERS)?;

        let mut rows = 0;
        for record in records {
            wtr.write_record(record.row())?;
            rows += 1;
        }
        wtr.flush()?;
        Ok(rows)
    }

    /// Write statistics as `Metric,Value` rows
    pub fn write_summary<W: Write>(&self, out: W, stats: &dyn SummaryRows) -> Result<usize> {
        let mut wtr = self.csv_writer(out);
        wtr.write_record(["Metric", "Value"])?;

        let rows = stats.summary_rows();
        for (label, value) in &rows {
            wtr.write_record([label, value])?;
        }
        wtr.flush()?;
        Ok(rows.len())
    }

    /// Write a report into the export directory, named for `date`
    pub fn export<'a, R, I>(&self, records: I, date: NaiveDate) -> Result<PathBuf>
    where
        R: ReportRow + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let path = self.create_file_path(R::REPORT, date)?;
        let rows = self.write_report(File::create(&path)?, records)?;
        logging::log_export(R::REPORT, rows, &path.display().to_string());
        Ok(path)
    }

    /// Write a summary sheet next to the reports
    pub fn export_summary(&self, report: &str, stats: &dyn SummaryRows, date: NaiveDate) -> Result<PathBuf> {
        let path = self.create_file_path(&format!("{}_summary", report), date)?;
        let rows = self.write_summary(File::create(&path)?, stats)?;
        logging::log_export(report, rows, &path.display().to_string());
        Ok(path)
    }

    fn create_file_path(&self, prefix: &str, date: NaiveDate) -> Result<PathBuf> {
        fs::create_dir_all(&self.directory)?;
        Ok(report_path(&self.directory, prefix, date))
    }
}
