// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.

use iced::advanced::subscription::{into_recipes, Hasher, Recipe};
use iced::Subscription;
use std::hash::Hasher as _;

/// Identity hash of every recipe in `subscription`, in batch order.
///
/// Iced restarts a subscription exactly when its hash changes, so equal
/// hashes mean "the same running timer".
pub fn recipe_hashes<T: 'static>(subscription: Subscription<T>) -> Vec<u64> {
    into_recipes(subscription)
        .iter()
        .map(|recipe| {
            let mut hasher = Hasher::default();
            recipe.hash(&mut hasher);
            hasher.finish()
        })
        .collect()
}
