use std::collections::HashMap;

use iced::widget::{column, container, image, mouse_area, row, text};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::api::models::Hit;
use crate::Message;

/// Card footprint in the grid. The load-more scroll step is two card heights,
/// so keep these in sync with the layout below.
pub const CARD_WIDTH: f32 = 280.0;
pub const CARD_HEIGHT: f32 = 268.0;

/// Height of the image area inside a card.
const IMAGE_HEIGHT: f32 = 180.0;

/// Spacing between cards, both within and between rows.
const GRID_SPACING: f32 = 16.0;

/// Build the gallery grid, one card per hit in arrival order.
///
/// Pure view construction: no hits means an empty grid, and the caller owns
/// all state changes.
pub fn view<'a>(
    hits: &'a [Hit],
    thumbnails: &'a HashMap<u64, image::Handle>,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = hits
        .iter()
        .map(|hit| card(hit, thumbnails.get(&hit.id)))
        .collect();

    Wrap::with_elements(cards)
        .spacing(GRID_SPACING)
        .line_spacing(GRID_SPACING)
        .into()
}

/// One gallery card: thumbnail on top, tag string and engagement counters
/// below. Clicking anywhere on the card opens the lightbox for its hit.
fn card<'a>(hit: &'a Hit, thumbnail: Option<&image::Handle>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(CARD_WIDTH))
            .height(Length::Fixed(IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        // Shown until the thumbnail download task delivers the bytes.
        None => container(text("Loading...").size(13))
            .center_x(Length::Fixed(CARD_WIDTH))
            .center_y(Length::Fixed(IMAGE_HEIGHT))
            .into(),
    };

    let stats = row![
        stat("Likes", hit.likes),
        stat("Views", hit.views),
        stat("Comments", hit.comments),
        stat("Downloads", hit.downloads),
    ]
    .spacing(14);

    let body = column![picture, text(hit.tags.as_str()).size(13), stats]
        .spacing(8)
        .padding(8)
        .width(Length::Fixed(CARD_WIDTH))
        .align_x(Alignment::Center);

    mouse_area(
        container(body)
            .height(Length::Fixed(CARD_HEIGHT))
            .style(container::rounded_box),
    )
    .on_press(Message::OpenLightbox(hit.id))
    .into()
}

/// A labeled engagement counter.
fn stat<'a>(label: &'a str, value: u32) -> Element<'a, Message> {
    column![text(label).size(11), text(value.to_string()).size(13)]
        .align_x(Alignment::Center)
        .into()
}
