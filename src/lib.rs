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

//! Core state for a feed dashboard.
//!
//! A dashboard shows one card per feed, each card listing the newest few
//! entries of that feed with unread entries highlighted. This crate keeps
//! that state — bounded most-recent windows, unread bookkeeping, the
//! feed-to-card registry — without rendering anything or talking to any
//! message store itself. The host enumerates feeds and entries through the
//! [`feed::dashboard::FeedSource`] trait and translates its new-message
//! notifications into [`feed::dashboard::Dashboard::deliver`] calls; how
//! the resulting card contents reach the screen is the host's business.

#[cfg(test)]
macro_rules! assert_matches {
    ($expected:pat, $actual:expr) => {
        match $actual {
            $expected => (),
            unexpected => panic!(
                "Expected {} matches {}, got {:?}",
                stringify!($expected),
                stringify!($actual),
                unexpected
            ),
        }
    };
}

pub mod feed;
pub mod support;

pub use crate::feed::card::FeedCard;
pub use crate::feed::dashboard::{Dashboard, FeedSource};
pub use crate::feed::{FeedEntry, FeedId, DEFAULT_CARD_CAPACITY};
pub use crate::support::error::Error;
pub use crate::support::recent_window::{RecentWindow, Timestamped};
