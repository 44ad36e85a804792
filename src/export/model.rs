// src/export/model.rs

/// A named table of string cells: one worksheet in XLSX, one file in CSV,
/// one key in JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub name: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn from_rows<R: TableRow>(name: &str, rows: &[R]) -> Self {
        Self {
            name: name.to_string(),
            headers: R::headers().to_vec(),
            rows: rows.iter().map(TableRow::cells).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at (`row`, column named `header`).
    pub fn cell(&self, row: usize, header: &str) -> Option<&str> {
        let col = self.headers.iter().position(|h| *h == header)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Rows as JSON objects keyed by header.
    pub fn to_json(&self) -> serde_json::Value {
        let records: Vec<serde_json::Value> = self
            .rows
            .iter()
            .map(|row| {
                let map: serde_json::Map<String, serde_json::Value> = self
                    .headers
                    .iter()
                    .zip(row.iter())
                    .map(|(h, v)| (h.to_string(), serde_json::Value::String(v.clone())))
                    .collect();
                serde_json::Value::Object(map)
            })
            .collect();
        serde_json::Value::Array(records)
    }
}

pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// Snapshot of the timer at export time.
#[derive(Clone, Debug)]
pub struct CurrentRow {
    pub company: String,
    pub date: String,
    pub timer: String,
    pub mode: String,
    pub paused: String,
}

impl TableRow for CurrentRow {
    fn headers() -> &'static [&'static str] {
        &["Company", "Date", "Timer", "Mode", "Paused"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.company.clone(),
            self.date.clone(),
            self.timer.clone(),
            self.mode.clone(),
            self.paused.clone(),
        ]
    }
}

/// One continuous log entry.
#[derive(Clone, Debug)]
pub struct HistoryRow {
    pub date: String,
    pub log: String,
    pub start: String,
    pub stop: String,
    pub mode: String,
    pub paused: String,
}

impl TableRow for HistoryRow {
    fn headers() -> &'static [&'static str] {
        &["Date", "Log", "Start", "Stop", "Mode", "Paused"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.log.clone(),
            self.start.clone(),
            self.stop.clone(),
            self.mode.clone(),
            self.paused.clone(),
        ]
    }
}

/// One session inside its date group.
#[derive(Clone, Debug)]
pub struct GroupedRow {
    pub date: String,
    pub total_duration: String,
    pub log_number: usize,
    pub start_time: String,
    pub pause_time: String,
    pub resume_time: String,
    pub duration: String,
}

impl TableRow for GroupedRow {
    fn headers() -> &'static [&'static str] {
        &[
            "Date",
            "Total Duration",
            "Log Number",
            "Start Time",
            "Pause Time",
            "Resume Time",
            "Duration",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.total_duration.clone(),
            self.log_number.to_string(),
            self.start_time.clone(),
            self.pause_time.clone(),
            self.resume_time.clone(),
            self.duration.clone(),
        ]
    }
}
