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

pub mod card;
pub mod dashboard;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::support::recent_window::Timestamped;

/// The number of entries a feed card retains unless the caller asks for
/// something else.
pub const DEFAULT_CARD_CAPACITY: usize = 5;

/// Uniquely identifies a feed within a dashboard.
///
/// The content is opaque to this crate. A mail-backed host would typically
/// use the backing folder's URI; any string that is stable for the lifetime
/// of the feed works.
#[derive(
    Deserialize,
    Serialize,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(transparent)]
pub struct FeedId(pub String);

impl FeedId {
    pub fn new(id: impl Into<String>) -> Self {
        FeedId(id.into())
    }
}

impl fmt::Display for FeedId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single feed entry as the dashboard sees it.
///
/// `date` is the recency key for window placement; entries with equal
/// dates are kept in the order they were supplied.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FeedEntry {
    /// When the entry was published.
    pub date: DateTime<Utc>,
    /// The decoded title or subject line.
    pub title: String,
    /// Whether the entry has been read.
    pub read: bool,
}

impl FeedEntry {
    /// A fresh, unread entry.
    pub fn new(date: DateTime<Utc>, title: impl Into<String>) -> Self {
        FeedEntry {
            date,
            title: title.into(),
            read: false,
        }
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }
}

impl Timestamped for FeedEntry {
    fn timestamp(&self) -> i64 {
        self.date.timestamp_millis()
    }
}
