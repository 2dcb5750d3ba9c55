//! Facilities for tracking and persisting the shell's command history.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::error;

/// Maximum number of entries retained by default.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Represents a single numbered history entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Item {
    /// The entry's sequence number within the session.
    pub id: usize,
    /// The literal command line that was read.
    pub command_line: String,
}

/// Append-only, capacity-bounded log of executed command lines.
///
/// Sequence numbers are assigned contiguously starting at 1. When the
/// capacity is exceeded the oldest entry is evicted; remaining numbers stay
/// monotonic and gapless. Importing from a file renumbers from 1.
#[derive(Clone, Debug)]
pub struct History {
    items: VecDeque<Item>,
    next_id: usize,
    capacity: usize,
}

impl History {
    /// Returns a new, empty history with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::new(),
            next_id: 1,
            capacity,
        }
    }

    /// Constructs a new `History` instance, with its contents initialized
    /// from the given saved history file. Lines are read in file order,
    /// truncated to the capacity (keeping the newest), and renumbered from 1.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the history file.
    /// * `capacity` - The maximum number of entries to retain.
    pub fn import(path: impl AsRef<Path>, capacity: usize) -> Result<Self, error::Error> {
        let file = std::fs::File::open(path.as_ref())?;
        let reader = std::io::BufReader::new(file);

        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }

        if lines.len() > capacity {
            lines.drain(..lines.len() - capacity);
        }

        let mut history = Self::new(capacity);
        for line in lines {
            history.add(line);
        }

        Ok(history)
    }

    /// Appends a new entry, assigning it the next sequence number. The oldest
    /// entry is evicted if the capacity is exceeded. Returns the new entry's
    /// sequence number.
    ///
    /// # Arguments
    ///
    /// * `command_line` - The literal line to record.
    pub fn add(&mut self, command_line: impl Into<String>) -> usize {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push_back(Item {
            id,
            command_line: command_line.into(),
        });

        while self.items.len() > self.capacity {
            self.items.pop_front();
        }

        id
    }

    /// Writes the full in-memory list back to the given file, one literal
    /// command line per row, replacing any previous contents.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the history file.
    pub fn flush(&self, path: impl AsRef<Path>) -> Result<(), error::Error> {
        let mut file = std::fs::File::create(path.as_ref())?;

        for item in &self.items {
            writeln!(file, "{}", item.command_line)?;
        }

        file.flush()?;
        Ok(())
    }

    /// Returns an iterator over the entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Returns the number of entries currently held.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the history's capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
