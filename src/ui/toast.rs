use std::time::Duration;

use iced::widget::{container, mouse_area, text, Column};
use iced::{alignment, Background, Color, Element, Length, Theme};

use crate::Message;

/// How long a toast stays on screen before auto-dismissing.
pub const DISMISS_AFTER: Duration = Duration::from_secs(4);

/// Notification severity; picks the accent color of the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Info,
    Error,
}

impl Severity {
    fn color(self) -> Color {
        match self {
            Severity::Warning => Color::from_rgb8(0xf3, 0x9c, 0x12),
            Severity::Info => Color::from_rgb8(0x34, 0x98, 0xdb),
            Severity::Error => Color::from_rgb8(0xe7, 0x4c, 0x3c),
        }
    }
}

/// One transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
}

impl Toast {
    pub fn new(id: u64, severity: Severity, message: &str) -> Self {
        Toast {
            id,
            severity,
            message: message.to_string(),
        }
    }
}

/// Top-right overlay stack of active toasts, newest last.
///
/// Only the toast entries themselves capture mouse events, so the rest of
/// the layer stays click-through for the gallery underneath.
pub fn view(toasts: &[Toast]) -> Element<'_, Message> {
    let entries: Vec<Element<Message>> = toasts.iter().map(entry).collect();

    container(Column::with_children(entries).spacing(8))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(16)
        .into()
}

/// One toast pill. Clicking it dismisses immediately; a timer task does the
/// same a few seconds after it was pushed.
fn entry(toast: &Toast) -> Element<'_, Message> {
    let accent = toast.severity.color();

    mouse_area(
        container(text(toast.message.as_str()).size(14))
            .padding([10.0, 14.0])
            .max_width(380.0)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(accent)),
                text_color: Some(Color::WHITE),
                border: iced::border::rounded(6.0),
                ..container::Style::default()
            }),
    )
    .on_press(Message::ToastDismissed(toast.id))
    .into()
}
