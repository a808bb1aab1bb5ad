//! # Record Store
//!
//! Holds an ordered sequence of [`Record`]s and an ordered sequence of [`Resource`]s,
//! answers lookups by linear scan, sorts records in place, and persists both
//! sequences in the line format described in [`crate::codec`].
//!
//! The store is single-threaded. For shared access wrap it in a
//! [`StoreActor`](crate::actor::StoreActor), which owns it on one task.

pub mod access;
pub mod error;

pub use access::*;
pub use error::*;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::codec::{self, Decoded, Entry, ParseError, ParseMode};
use crate::model::{Record, Resource};

/// Field used by [`RecordStore::sort_by_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    PrivilegeLevel,
    Id,
}

/// A record together with the position it was inserted at.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StoredRecord {
    seq: u64,
    record: Record,
}

/// Owned copy of the store contents, in current order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot {
    pub records: Vec<Record>,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<StoredRecord>,
    resources: Vec<Resource>,
    next_seq: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Ids are not checked for uniqueness; lookups by id return
    /// the first match.
    pub fn add_record(&mut self, record: Record) {
        info!(
            kind = record.tag(),
            id = record.id(),
            size = self.records.len() + 1,
            "Record added"
        );
        let seq = self.next_seq;
        self.next_seq += 1;
        self.records.push(StoredRecord { seq, record });
    }

    pub fn add_resource(&mut self, resource: Resource) {
        info!(
            name = resource.name(),
            required_level = resource.required_level(),
            size = self.resources.len() + 1,
            "Resource added"
        );
        self.resources.push(resource);
    }

    /// Records in current sequence order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter().map(|stored| &stored.record)
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Number of records; resources are not counted.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// True when there are neither records nor resources.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.resources.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.resources.clear();
        self.next_seq = 0;
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            records: self.records().cloned().collect(),
            resources: self.resources.clone(),
        }
    }

    /// First record with `id`, in current sequence order.
    pub fn find_by_id(&self, id: u32) -> Option<&Record> {
        let found = self.records().find(|record| record.id() == id);
        debug!(id, found = found.is_some(), "find_by_id");
        found
    }

    pub fn find_resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|resource| resource.name() == name)
    }

    /// All records whose name equals `name`, in current sequence order (which is
    /// sort order after a sort).
    pub fn find_by_name(&self, name: &str) -> Vec<&Record> {
        self.records().filter(|record| record.name() == name).collect()
    }

    /// Same matches as [`find_by_name`](Self::find_by_name), in the order the records
    /// were inserted regardless of any sort applied since.
    pub fn find_by_name_in_insertion_order(&self, name: &str) -> Vec<&Record> {
        let mut matches: Vec<&StoredRecord> = self
            .records
            .iter()
            .filter(|stored| stored.record.name() == name)
            .collect();
        matches.sort_by_key(|stored| stored.seq);
        matches.into_iter().map(|stored| &stored.record).collect()
    }

    /// Records whose name contains `fragment`, in current sequence order.
    pub fn search_by_name(&self, fragment: &str) -> Vec<&Record> {
        self.records()
            .filter(|record| record.name().contains(fragment))
            .collect()
    }

    /// Resolves both targets and compares levels. A missing user is reported before a
    /// missing resource.
    pub fn access_decision(&self, user_id: u32, resource_name: &str) -> AccessDecision {
        let user = self.find_by_id(user_id);
        let resource = self.find_resource(resource_name);
        let decision = match (user, resource) {
            (None, _) => AccessDecision::NotFound(MissingTarget::User(user_id)),
            (Some(_), None) => {
                AccessDecision::NotFound(MissingTarget::Resource(resource_name.to_string()))
            }
            (Some(user), Some(resource)) if resource.admits(user.privilege_level()) => {
                AccessDecision::Granted
            }
            (Some(_), Some(_)) => AccessDecision::Denied,
        };
        debug!(user_id, resource = resource_name, ?decision, "access_decision");
        decision
    }

    /// `Ok(true)` if the user's privilege level reaches the resource's required level.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if either the user or the resource is unknown.
    pub fn check_access(&self, user_id: u32, resource_name: &str) -> Result<bool, StoreError> {
        self.access_decision(user_id, resource_name).into_result()
    }

    /// Stable ascending sort; equal keys keep their previous relative order.
    pub fn sort_by_field(&mut self, field: SortField) {
        match field {
            SortField::PrivilegeLevel => self
                .records
                .sort_by_key(|stored| stored.record.privilege_level()),
            SortField::Id => self.records.sort_by_key(|stored| stored.record.id()),
        }
        debug!(?field, size = self.records.len(), "Sorted");
    }

    /// Writes every record and then every resource, one per line.
    pub fn serialize<W: Write>(&self, mut sink: W) -> Result<(), StoreError> {
        for record in self.records() {
            writeln!(sink, "{}", codec::encode_record(record)).map_err(StoreError::io)?;
        }
        for resource in &self.resources {
            writeln!(sink, "{}", codec::encode_resource(resource)).map_err(StoreError::io)?;
        }
        sink.flush().map_err(StoreError::io)
    }

    /// Replaces the store contents with what `source` holds.
    ///
    /// The whole source is parsed before anything is replaced, so on error the store
    /// is left as it was.
    pub fn deserialize<R: BufRead>(&mut self, source: R, mode: ParseMode) -> Result<(), StoreError> {
        let mut loaded = RecordStore::new();
        let mut skipped = 0usize;
        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => StoreError::Parse(ParseError::InvalidUtf8 { line: line_no }),
                _ => StoreError::io(e),
            })?;
            match codec::decode_line(line_no, &line, mode)? {
                Decoded::Entry(Entry::Record(record)) => loaded.push_quiet(record),
                Decoded::Entry(Entry::Resource(resource)) => loaded.resources.push(resource),
                Decoded::Blank => {}
                Decoded::Skipped { tag } => {
                    warn!(line = line_no, %tag, "Skipping line with unknown tag");
                    skipped += 1;
                }
            }
        }
        info!(
            records = loaded.records.len(),
            resources = loaded.resources.len(),
            skipped,
            %mode,
            "Store loaded"
        );
        *self = loaded;
        Ok(())
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| StoreError::io_at(path, e))?;
        self.serialize(BufWriter::new(file))
            .map_err(|e| e.with_path(path))?;
        info!(path = %path.display(), "Store saved");
        Ok(())
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>, mode: ParseMode) -> Result<(), StoreError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| StoreError::io_at(path, e))?;
        self.deserialize(BufReader::new(file), mode).map_err(|e| e.with_path(path))
    }

    fn push_quiet(&mut self, record: Record) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.records.push(StoredRecord { seq, record });
    }
}
