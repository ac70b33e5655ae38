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

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use super::card::FeedCard;
use super::{FeedEntry, FeedId};
use crate::support::error::Error;

/// The host's view of where feeds and their entries come from.
///
/// In a mail client this walks the feed accounts' folder trees and reads
/// each folder's message database; in tests it is a canned list. Sources
/// decide themselves which feeds are worth showing (the usual mail-client
/// policy is to skip trash folders, for instance); the dashboard displays
/// whatever the source lists.
pub trait FeedSource {
    /// The feeds to display, as (id, display name) pairs, in the order the
    /// source wants them considered.
    fn feeds(&mut self) -> Vec<(FeedId, String)>;

    /// All entries currently available for `id`, in any order.
    fn entries(&mut self, id: &FeedId) -> Vec<FeedEntry>;
}

/// A set of feed cards keyed by feed id.
///
/// This is the model behind a whole dashboard tab. It is populated in bulk
/// from a `FeedSource` and then kept current through `deliver`, which is
/// where the host's new-message notification callback lands after the host
/// maps the notification to a feed id. Iteration order of `cards` is
/// stable (ordered by id), so repeated renders lay the cards out the same
/// way.
#[derive(Clone, Debug)]
pub struct Dashboard {
    capacity: usize,
    cards: BTreeMap<FeedId, FeedCard>,
}

impl Dashboard {
    /// Create an empty dashboard whose cards each retain at most
    /// `capacity` entries.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        if 0 == capacity {
            return Err(Error::ZeroCapacity);
        }

        Ok(Dashboard {
            capacity,
            cards: BTreeMap::new(),
        })
    }

    /// The per-card window capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of feeds currently registered.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Register a feed with an empty card.
    pub fn add_feed(
        &mut self,
        id: FeedId,
        name: impl Into<String>,
    ) -> Result<(), Error> {
        if self.cards.contains_key(&id) {
            return Err(Error::DuplicateFeed);
        }

        self.cards.insert(id, FeedCard::new(name, self.capacity)?);
        Ok(())
    }

    /// Drop a feed and its card.
    ///
    /// Returns whether the feed was registered.
    pub fn remove_feed(&mut self, id: &FeedId) -> bool {
        self.cards.remove(id).is_some()
    }

    /// Sweep `source` and (re)build a card for every feed it lists.
    ///
    /// Feeds not yet registered are added; feeds already registered have
    /// their cards rebuilt in place. Feeds the source no longer lists are
    /// left alone, since the host may be populating from more than one
    /// source.
    pub fn populate(
        &mut self,
        source: &mut impl FeedSource,
    ) -> Result<(), Error> {
        for (id, name) in source.feeds() {
            let entries = source.entries(&id);

            if !self.cards.contains_key(&id) {
                self.add_feed(id.clone(), name)?;
            }

            debug!("Populating feed {} ({} entries)", id, entries.len());
            // Registered just above if absent.
            if let Some(card) = self.cards.get_mut(&id) {
                card.rebuild(entries);
            }
        }

        Ok(())
    }

    /// Route a newly arrived entry to the card for `id`.
    ///
    /// Returns whether the entry made it into the card's window, or
    /// `Error::UnknownFeed` if no such feed is registered.
    pub fn deliver(
        &mut self,
        id: &FeedId,
        entry: FeedEntry,
    ) -> Result<bool, Error> {
        match self.cards.get_mut(id) {
            Some(card) => Ok(card.deliver(entry)),
            None => {
                warn!("Dropping entry for unregistered feed {}", id);
                Err(Error::UnknownFeed)
            },
        }
    }

    /// Mark entries dated `date` on feed `id` as read.
    pub fn mark_read(
        &mut self,
        id: &FeedId,
        date: DateTime<Utc>,
    ) -> Result<bool, Error> {
        self.cards
            .get_mut(id)
            .ok_or(Error::UnknownFeed)
            .map(|card| card.mark_read(date))
    }

    /// The card for `id`, if registered.
    pub fn card(&self, id: &FeedId) -> Option<&FeedCard> {
        self.cards.get(id)
    }

    /// All cards, ordered by feed id.
    pub fn cards(&self) -> impl Iterator<Item = (&FeedId, &FeedCard)> + '_ {
        self.cards.iter()
    }

    /// Unread entries across every card, e.g. for a tab badge.
    pub fn total_unread(&self) -> usize {
        self.cards.values().map(FeedCard::unread).sum()
    }
}
