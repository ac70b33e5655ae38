//-
// Copyright (c) 2026, Jason Lingle
//
// This file is part of Feedtab.
//
// Feedtab is free software: you can redistribute it and/or modify it under the
// terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// Feedtab is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// Feedtab. If not, see <http://www.gnu.org/licenses/>.

use chrono::{DateTime, Utc};
use log::debug;

use super::FeedEntry;
use crate::support::error::Error;
use crate::support::recent_window::RecentWindow;

/// The state behind one feed card: a display name and a bounded window of
/// the feed's most recent entries.
///
/// The card holds no reference to whatever produced the entries. The host
/// rebuilds it when it (re)scans a feed and delivers single entries as
/// they arrive; reads are non-destructive, so the host may re-render from
/// the same card any number of times.
#[derive(Clone, Debug)]
pub struct FeedCard {
    name: String,
    window: RecentWindow<FeedEntry>,
}

impl FeedCard {
    /// Create a card titled `name` retaining at most `capacity` entries.
    pub fn new(name: impl Into<String>, capacity: usize) -> Result<Self, Error> {
        Ok(FeedCard {
            name: name.into(),
            window: RecentWindow::new(capacity)?,
        })
    }

    /// The display name of the feed.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.window.capacity()
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Replace the card contents from a full scan of the feed.
    ///
    /// `entries` may be unordered; only the most recent `capacity()`
    /// entries are retained.
    pub fn rebuild(&mut self, entries: impl IntoIterator<Item = FeedEntry>) {
        self.window.rebuild(entries);
        debug!(
            "Rebuilt card '{}', retaining {} entries ({} unread)",
            self.name,
            self.window.len(),
            self.unread()
        );
    }

    /// Take delivery of a single newly arrived entry.
    ///
    /// Returns whether the entry made it into the window. Late deliveries
    /// older than everything a full card already shows are dropped.
    pub fn deliver(&mut self, entry: FeedEntry) -> bool {
        self.window.offer(entry)
    }

    /// The current entries, oldest first.
    pub fn entries(&self) -> &[FeedEntry] {
        self.window.as_slice()
    }

    /// The current entries in display order, newest at the top.
    pub fn newest_first(&self) -> impl Iterator<Item = &FeedEntry> + '_ {
        self.window.newest_first()
    }

    /// The number of unread entries currently on the card.
    pub fn unread(&self) -> usize {
        self.window.iter().filter(|e| !e.read).count()
    }

    /// Mark every entry dated `date` as read, typically in response to the
    /// host opening the entry.
    ///
    /// Returns whether any entry changed state.
    pub fn mark_read(&mut self, date: DateTime<Utc>) -> bool {
        let mut changed = false;
        for entry in self.window.iter_mut() {
            if entry.date == date && !entry.read {
                entry.read = true;
                changed = true;
            }
        }
        changed
    }
}
