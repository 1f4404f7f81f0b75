use iced::widget::{center, column, container, image, mouse_area, opaque, text};
use iced::{Alignment, Background, Color, ContentFit, Element, Length, Theme};

use crate::api::models::Hit;
use crate::Message;

/// Largest footprint the full-size image may take inside the overlay.
const PANEL_WIDTH: f32 = 960.0;
const PANEL_HEIGHT: f32 = 620.0;

const BACKDROP: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.85,
};

/// Overlay viewer for one hit's full-size image.
///
/// The image arrives from a download task after the overlay opens; until
/// then a placeholder is shown.
#[derive(Debug, Clone)]
pub struct Lightbox {
    /// The hit being viewed
    pub hit: Hit,
    /// Full-size image, present once the download finishes
    pub image: Option<image::Handle>,
}

impl Lightbox {
    pub fn new(hit: Hit) -> Self {
        Lightbox { hit, image: None }
    }
}

/// Dimmed backdrop with the full-size image centered on top.
///
/// Clicking the backdrop closes the viewer; the panel itself swallows
/// clicks so an accidental press on the image does not dismiss it.
pub fn view(lightbox: &Lightbox) -> Element<'_, Message> {
    let body: Element<Message> = match &lightbox.image {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(PANEL_WIDTH))
            .height(Length::Fixed(PANEL_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        None => container(text("Loading full-size image...").size(16))
            .center_x(Length::Fixed(PANEL_WIDTH))
            .center_y(Length::Fixed(PANEL_HEIGHT))
            .into(),
    };

    let panel = container(
        column![body, text(lightbox.hit.tags.as_str()).size(14)]
            .spacing(10)
            .align_x(Alignment::Center),
    )
    .padding(16)
    .style(container::rounded_box);

    opaque(
        mouse_area(
            center(opaque(panel)).style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(BACKDROP)),
                ..container::Style::default()
            }),
        )
        .on_press(Message::CloseLightbox),
    )
}
