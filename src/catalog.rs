//! Catalog facade: load, list, lookup

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument, trace};

use crate::course::Course;
use crate::errors::{CatalogError, CatalogResult};
use crate::tree::CourseTree;

/// In-memory course catalog backed by a binary search tree.
///
/// Created empty and populated by repeated inserts during a load pass.
/// An empty catalog is a valid, queryable state: `list` yields an empty
/// sequence and `lookup` misses. There is no explicit "loaded" flag;
/// callers that need one check `is_empty`.
#[derive(Debug, Default)]
pub struct Catalog {
    tree: CourseTree,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records inserted so far (duplicates counted).
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Insert a single record, unconditionally (see [`CourseTree::insert`]).
    pub fn insert(&mut self, course: Course) {
        self.tree.insert(course);
    }

    /// Load records from a file, one per line.
    ///
    /// Returns the number of records inserted. Individual malformed
    /// lines are skipped and never abort the load; only I/O failures
    /// surface.
    #[instrument(level = "debug", skip(self))]
    pub fn load_file(&mut self, path: &Path, delimiter: char) -> CatalogResult<usize> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound(path.to_path_buf()));
        }
        let reader = BufReader::new(File::open(path)?);
        self.load_from(reader, delimiter)
    }

    /// Load records from any line-based reader.
    ///
    /// On a mid-stream read error the load aborts, keeping whatever was
    /// inserted before the failure (no rollback).
    #[instrument(level = "debug", skip(self, reader))]
    pub fn load_from(&mut self, reader: impl BufRead, delimiter: char) -> CatalogResult<usize> {
        let mut inserted = 0;
        for line in reader.lines() {
            let line = line?;
            match Course::parse_line(&line, delimiter) {
                Some(course) => {
                    self.tree.insert(course);
                    inserted += 1;
                }
                None => trace!("skipping malformed line: {:?}", line),
            }
        }
        debug!("loaded {} course records", inserted);
        Ok(inserted)
    }

    /// All records in ascending course-number order.
    ///
    /// Returned records are independent clones; callers never hold
    /// references into the tree.
    #[instrument(level = "debug", skip(self))]
    pub fn list(&self) -> Vec<Course> {
        self.tree.iter().cloned().collect()
    }

    /// Exact-match lookup by course number.
    #[instrument(level = "debug", skip(self))]
    pub fn lookup(&self, number: &str) -> Option<Course> {
        self.tree.find(number).cloned()
    }
}
