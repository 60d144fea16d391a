// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::dropdown::OptionHighlight;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

const FOCUS_RING_WIDTH: f32 = 2.0;

fn focus_border(focused: bool, fallback: Color) -> Border {
    Border {
        color: if focused { palette::PRIMARY_400 } else { fallback },
        width: if focused { FOCUS_RING_WIDTH } else { 1.0 },
        radius: radius::SM.into(),
    }
}

fn disabled_style(theme: &Theme) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;
    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_100
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Primary action; draws a focus ring while keyboard focus is on it.
pub fn primary(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: focus_border(focused, palette::PRIMARY_600),
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: focus_border(focused, palette::PRIMARY_500),
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Selector trigger. The border turns brand-colored while the menu is open.
pub fn selector_trigger(
    focused: bool,
    open: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();
        let background = match status {
            button::Status::Hovered => extended.background.weak.color,
            _ => extended.background.base.color,
        };
        let idle_border = if open {
            palette::PRIMARY_500
        } else {
            palette::GRAY_400
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: extended.background.base.text,
            border: focus_border(focused, idle_border),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Menu option row, one distinct look per highlight.
pub fn menu_option(highlight: OptionHighlight) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();
        let (background, text_color) = match highlight {
            OptionHighlight::Focused => (Some(palette::PRIMARY_500), WHITE),
            OptionHighlight::Selected => (
                Some(if extended.is_dark {
                    palette::PRIMARY_600
                } else {
                    palette::PRIMARY_100
                }),
                extended.background.base.text,
            ),
            OptionHighlight::Plain => match status {
                button::Status::Hovered => {
                    (Some(extended.background.weak.color), extended.background.base.text)
                }
                _ => (None, extended.background.base.text),
            },
        };

        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Toolbar button inside the preview modal.
pub fn overlay(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (alpha, text_color) = match status {
            button::Status::Hovered => (opacity::OVERLAY_HOVER, text_color),
            button::Status::Pressed => (opacity::OVERLAY_PRESSED, text_color),
            button::Status::Disabled => (opacity::OVERLAY_SUBTLE, palette::GRAY_400),
            button::Status::Active => (opacity::OVERLAY_STRONG, text_color),
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
