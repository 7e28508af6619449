// src/csv_handler.rs
use std::fs;
use std::path::PathBuf;

use csv::ReaderBuilder;
use tokio::task;
use tracing::warn;

use crate::data_types::{Record, RecordSet};
use crate::error::LoadError;

pub struct CsvHandler {}

impl CsvHandler {
    pub fn new() -> Self {
        CsvHandler {}
    }

    // Fixed parse configuration: comma delimiter, first row is the
    // header, blank rows skipped, ragged rows tolerated.
    pub fn parse_text(&self, text: &str) -> Result<RecordSet, LoadError> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|err| LoadError::Parse(err.to_string()))?
            .iter()
            .map(String::from)
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            match result {
                Ok(record) => {
                    // Skip rows with nothing in them
                    if record.iter().all(|field| field.trim().is_empty()) {
                        continue;
                    }
                    records.push(Record {
                        values: record.iter().map(String::from).collect(),
                    });
                }
                Err(err) => {
                    warn!("skipping unreadable CSV row: {err}");
                    continue;
                }
            }
        }

        Ok(RecordSet { headers, records })
    }

    pub async fn read_file(&self, path: PathBuf) -> Result<RecordSet, LoadError> {
        task::spawn_blocking(move || {
            let text =
                fs::read_to_string(&path).map_err(|err| LoadError::Io(err.to_string()))?;
            CsvHandler::new().parse_text(&text)
        })
        .await
        .map_err(|err| LoadError::Io(err.to_string()))?
    }
}
