// SPDX-License-Identifier: MPL-2.0
//! Iced renderer for toasts.
//!
//! Toasts are drawn from [`ToastSnapshot`]s: the phase picks the opacity, the
//! variant picks the colors. Pressing the close control produces
//! [`Message::Dismiss`], which [`update`] forwards to the toast itself.

use super::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use super::markup::CLOSE_GLYPH;
use crate::toast::{Host, Phase, ToastId, ToastSnapshot, Variant};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The close control of a toast was pressed.
    Dismiss(ToastId),
}

/// Routes a toast message to the toast it concerns.
///
/// Unknown ids are ignored; the toast may already be gone. Must be called
/// from within a Tokio runtime.
pub fn update(host: &Host, message: &Message) {
    match message {
        Message::Dismiss(id) => {
            if let Some(toast) = host.find(*id) {
                toast.request_dismiss();
            }
        }
    }
}

/// Toast widget configuration.
pub struct ToastView;

impl ToastView {
    /// Renders a single toast.
    pub fn view(snapshot: &ToastSnapshot) -> Element<'_, Message> {
        let variant = snapshot.variant;
        let alpha = phase_opacity(snapshot.phase);

        let message_widget = Text::new(snapshot.message.as_str())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(faded(foreground(theme, variant), alpha)),
            });

        let dismiss_button = button(text(CLOSE_GLYPH).size(typography::CLOSE_GLYPH))
            .on_press(Message::Dismiss(snapshot.id))
            .width(Length::Fixed(sizing::CLOSE_TARGET))
            .height(Length::Fixed(sizing::CLOSE_TARGET))
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, variant));

        // Layout: [message] [close]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, variant, alpha))
            .into()
    }

    /// Renders every toast stacked in the bottom-right corner, oldest first.
    pub fn view_overlay(snapshots: &[ToastSnapshot]) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = snapshots
            .iter()
            .filter(|snapshot| snapshot.phase != Phase::Removed)
            .map(Self::view)
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Opacity of a toast in `phase`.
#[must_use]
pub fn phase_opacity(phase: Phase) -> f32 {
    match phase {
        Phase::Created | Phase::Removed => opacity::HIDDEN,
        Phase::Visible => opacity::OPAQUE,
        Phase::Dismissing => opacity::LEAVING,
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn foreground(theme: &Theme, variant: Variant) -> Color {
    match variant {
        Variant::Zen => theme.palette().text,
        Variant::Soft => palette::GRAY_900,
        Variant::Solid => palette::WHITE,
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, variant: Variant, alpha: f32) -> container::Style {
    let (background, border_color, border_width) = match variant {
        Variant::Zen => (
            theme.extended_palette().background.base.color,
            palette::ACCENT_500,
            border::WIDTH_SM,
        ),
        Variant::Soft => (palette::ACCENT_100, palette::ACCENT_100, 0.0),
        Variant::Solid => (palette::ACCENT_700, palette::ACCENT_700, 0.0),
    };

    container::Style {
        background: Some(iced::Background::Color(faded(background, alpha))),
        border: iced::Border {
            color: faded(border_color, alpha),
            width: border_width,
            radius: radius::MD.into(),
        },
        shadow: if alpha > opacity::HIDDEN {
            shadow::MD
        } else {
            shadow::NONE
        },
        text_color: Some(faded(foreground(theme, variant), alpha)),
        ..Default::default()
    }
}

/// Style function for the close control.
fn dismiss_button_style(theme: &Theme, status: button::Status, variant: Variant) -> button::Style {
    let text_color = foreground(theme, variant);
    let hover_background = |a: f32| {
        Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, text_color),
        button::Status::Hovered => (hover_background(opacity::OVERLAY_SUBTLE), text_color),
        button::Status::Pressed => (hover_background(opacity::OVERLAY_MEDIUM), text_color),
        button::Status::Disabled => (None, faded(text_color, opacity::OVERLAY_MEDIUM)),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
