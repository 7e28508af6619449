// src/data_types.rs

#[derive(Debug, Clone, PartialEq)]
pub enum SourceKind {
    // A snapshot CSV served by the static endpoint
    Remote(String),
    // An uploaded file; it cannot be re-read later, so the parsed
    // form is retained for re-selection
    Loaded(RecordSet),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceOption {
    pub label: String,
    pub kind: SourceKind,
}

impl SourceOption {
    pub fn remote(label: impl Into<String>, url: impl Into<String>) -> Self {
        SourceOption {
            label: label.into(),
            kind: SourceKind::Remote(url.into()),
        }
    }

    pub fn loaded(label: impl Into<String>, data: RecordSet) -> Self {
        SourceOption {
            label: label.into(),
            kind: SourceKind::Loaded(data),
        }
    }
}

// One parsed CSV row. Values are aligned with the header row of the
// owning RecordSet; short rows read as empty for the trailing fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn empty() -> Self {
        RecordSet::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // Field name/value pairs for one record, in header order
    pub fn fields(&self, index: usize) -> impl Iterator<Item = (&str, &str)> + '_ {
        let record = self.records.get(index);
        self.headers.iter().enumerate().map(move |(i, header)| {
            let value = record
                .and_then(|r| r.values.get(i))
                .map(String::as_str)
                .unwrap_or("");
            (header.as_str(), value)
        })
    }
}
