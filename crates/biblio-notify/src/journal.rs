use std::fs::File;
use std::fs::OpenOptions;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use biblio_core::session::DownloadSink;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRecord {
    pub seq: u64,
    pub ts_ms: i64,
    pub code: String,
    pub name: String,
}

/// Append-only JSONL journal of download requests. One delivery target for
/// the core's notification contract; reopening resumes the sequence from
/// the existing records.
#[derive(Debug)]
pub struct DownloadJournal {
    path: PathBuf,
    next_seq: u64,
}

impl DownloadJournal {
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let existing = load_records(path.as_path())?;
        let next_seq = existing
            .iter()
            .map(|record| record.seq)
            .max()
            .map_or(1, |seq| seq.saturating_add(1));
        Ok(Self { path, next_seq })
    }

    pub fn append(&mut self, code: &str, name: &str) -> std::io::Result<u64> {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.saturating_add(1);
        let record = DownloadRecord {
            seq,
            ts_ms: chrono::Utc::now().timestamp_millis(),
            code: code.to_string(),
            name: name.to_string(),
        };
        let line = serde_json::to_string(&record)
            .map_err(|err| std::io::Error::other(format!("serialize: {err}")))?;
        append_line(self.path.as_path(), line.as_str())?;
        Ok(seq)
    }

    pub fn load(&self) -> std::io::Result<Vec<DownloadRecord>> {
        load_records(self.path.as_path())
    }
}

impl DownloadSink for DownloadJournal {
    fn download_requested(&mut self, code: &str, name: &str) {
        // Fire-and-forget delivery: a journaling failure must never
        // interrupt the browsing session.
        if let Err(err) = self.append(code, name) {
            tracing::warn!(%code, %err, "failed to journal download request");
        }
    }
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}

fn load_records(path: &Path) -> std::io::Result<Vec<DownloadRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str::<DownloadRecord>(&line)
            .map_err(|err| std::io::Error::other(format!("parse journal line: {err}")))?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn append_assigns_increasing_sequence_numbers() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut journal = DownloadJournal::open(dir.path().join("downloads.jsonl")).expect("open");

        let first = journal.append("CS301", "Data Structures").expect("append");
        let second = journal.append("CS302", "Database Systems").expect("append");
        assert_eq!((first, second), (1, 2));

        let records = journal.load().expect("load");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, "CS301");
        assert_eq!(records[1].name, "Database Systems");
    }

    #[test]
    fn reopening_resumes_the_sequence() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("downloads.jsonl");

        let mut journal = DownloadJournal::open(&path).expect("open");
        journal.append("CS301", "Data Structures").expect("append");
        drop(journal);

        let mut journal = DownloadJournal::open(&path).expect("reopen");
        let seq = journal.append("PH301", "Thermodynamics").expect("append");
        assert_eq!(seq, 2);
    }

    #[test]
    fn sink_delivery_matches_direct_append() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut journal = DownloadJournal::open(dir.path().join("downloads.jsonl")).expect("open");

        journal.download_requested("MBA301", "Strategic Management");
        let records = journal.load().expect("load");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].seq, 1);
        assert_eq!(records[0].code, "MBA301");
    }
}
