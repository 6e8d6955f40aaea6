// SPDX-License-Identifier: MPL-2.0
//! Timer and window subscriptions for the gallery.
//!
//! Each widget's timers are keyed by its gallery index, so two widgets that
//! happen to hold the same timer generation still get independent timers.

use super::{Entry, Message};
use iced::{window, Subscription};

pub(super) fn subscription(entries: &[Entry]) -> Subscription<Message> {
    let widgets = entries.iter().enumerate().map(|(index, entry)| {
        entry
            .zoom
            .subscription()
            .with(index)
            .map(|(index, message)| Message::Zoom(index, message))
    });

    Subscription::batch(widgets.chain(std::iter::once(
        window::close_requests().map(Message::CloseRequested),
    )))
}
