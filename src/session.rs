// src/session.rs
use crate::data_types::{RecordSet, SourceKind, SourceOption};

// What the caller has to do after a source becomes active: install the
// retained data directly, or go fetch it.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceAction {
    Load(RecordSet),
    Fetch(String),
}

// Session-lived state container: the selectable sources, the current
// record set and the row picked from it. Owned by the application shell;
// everything else goes through these accessors.
#[derive(Debug)]
pub struct SessionState {
    sources: Vec<SourceOption>,
    active_source: Option<usize>,
    records: RecordSet,
    selection: Option<usize>,
}

impl SessionState {
    pub fn new(sources: Vec<SourceOption>) -> Self {
        SessionState {
            sources,
            active_source: None,
            records: RecordSet::empty(),
            selection: None,
        }
    }

    pub fn sources(&self) -> &[SourceOption] {
        &self.sources
    }

    pub fn active_source(&self) -> Option<usize> {
        self.active_source
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    // Wholesale replacement; a selection into the old set must not survive.
    pub fn load_records(&mut self, records: RecordSet) {
        self.records = records;
        self.selection = None;
    }

    // Marks the source active and clears the selection. Out-of-range
    // indices are a no-op.
    pub fn select_source(&mut self, index: usize) -> Option<SourceAction> {
        if index >= self.sources.len() {
            return None;
        }
        self.active_source = Some(index);
        self.selection = None;
        match &self.sources[index].kind {
            SourceKind::Remote(url) => Some(SourceAction::Fetch(url.clone())),
            SourceKind::Loaded(data) => Some(SourceAction::Load(data.clone())),
        }
    }

    // A bad index leaves the selection unset rather than failing
    pub fn select_row(&mut self, index: usize) {
        self.selection = if index < self.records.len() {
            Some(index)
        } else {
            None
        };
    }

    pub fn selected_fields(&self) -> Option<impl Iterator<Item = (&str, &str)> + '_> {
        self.selection.map(|index| self.records.fields(index))
    }

    // Uploads are kept for the whole session so they can be re-selected
    // without re-reading the file
    pub fn add_loaded_source(&mut self, label: impl Into<String>, data: RecordSet) -> usize {
        self.sources.push(SourceOption::loaded(label, data));
        self.sources.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::Record;

    fn three_rows() -> RecordSet {
        RecordSet {
            headers: vec!["name".into(), "result".into()],
            records: (1..=3)
                .map(|i| Record {
                    values: vec![format!("athlete {i}"), format!("{i}0.0")],
                })
                .collect(),
        }
    }

    fn remote_session() -> SessionState {
        SessionState::new(vec![SourceOption::remote(
            "Default",
            "http://localhost:9000/default.csv",
        )])
    }

    #[test]
    fn loading_clears_the_selection() {
        let mut session = remote_session();
        session.load_records(three_rows());
        session.select_row(1);
        assert_eq!(session.selection(), Some(1));

        session.load_records(three_rows());
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn select_row_in_bounds_picks_that_record() {
        let mut session = remote_session();
        session.load_records(three_rows());
        session.select_row(2);

        let fields: Vec<_> = session.selected_fields().expect("selection").collect();
        assert_eq!(fields, vec![("name", "athlete 3"), ("result", "30.0")]);
    }

    #[test]
    fn select_row_out_of_bounds_leaves_selection_unset() {
        let mut session = remote_session();
        session.load_records(three_rows());
        session.select_row(1);
        session.select_row(7);
        assert_eq!(session.selection(), None);
        assert!(session.selected_fields().is_none());
    }

    #[test]
    fn selecting_a_remote_source_asks_for_a_fetch_and_clears_selection() {
        let mut session = remote_session();
        session.load_records(three_rows());
        session.select_row(0);

        let action = session.select_source(0);
        assert_eq!(
            action,
            Some(SourceAction::Fetch(
                "http://localhost:9000/default.csv".into()
            ))
        );
        assert_eq!(session.active_source(), Some(0));
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn selecting_a_loaded_source_hands_back_the_retained_data() {
        let mut session = remote_session();
        let data = three_rows();
        let index = session.add_loaded_source("upload.csv", data.clone());
        assert_eq!(index, 1);

        let action = session.select_source(index);
        assert_eq!(action, Some(SourceAction::Load(data)));
    }

    #[test]
    fn selecting_an_unknown_source_changes_nothing() {
        let mut session = remote_session();
        session.load_records(three_rows());
        session.select_row(0);

        assert_eq!(session.select_source(9), None);
        assert_eq!(session.active_source(), None);
        assert_eq!(session.selection(), Some(0));
    }

    #[test]
    fn uploads_accumulate_for_the_whole_session() {
        let mut session = remote_session();
        session.add_loaded_source("first.csv", three_rows());
        session.add_loaded_source("second.csv", three_rows());
        assert_eq!(session.sources().len(), 3);
        assert_eq!(session.sources()[2].label, "second.csv");
    }
}
