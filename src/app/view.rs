// SPDX-License-Identifier: MPL-2.0
//! View rendering for the gallery.

use super::{Entry, Message};
use crate::i18n::I18n;
use iced::widget::{column, scrollable, text, Column, Container, Row};
use iced::{Alignment, Element, Length};

const GALLERY_SPACING: f32 = 16.0;
const GALLERY_PADDING: f32 = 24.0;

/// Context required to render the application view.
pub(super) struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub entries: &'a [Entry],
}

/// Renders every constructed widget with its container identifier below,
/// wrapping onto new rows as the window narrows.
pub(super) fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.entries.is_empty() {
        return Container::new(text(ctx.i18n.tr("gallery-empty")))
            .center(Length::Fill)
            .padding(GALLERY_PADDING)
            .into();
    }

    let tiles = ctx
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| tile(index, entry));

    let gallery = Row::with_children(tiles)
        .spacing(GALLERY_SPACING)
        .wrap()
        .vertical_spacing(GALLERY_SPACING);

    scrollable(
        Container::new(gallery)
            .padding(GALLERY_PADDING)
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

fn tile(index: usize, entry: &Entry) -> Element<'_, Message> {
    let widget = entry
        .zoom
        .view()
        .map(move |message| Message::Zoom(index, message));
    let caption = text(entry.zoom.container_id().unwrap_or_default()).size(12);

    let tile: Column<'_, Message> = column![widget, caption]
        .spacing(4)
        .align_x(Alignment::Center);
    tile.into()
}
