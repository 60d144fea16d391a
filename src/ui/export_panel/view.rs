// SPDX-License-Identifier: MPL-2.0
//! Export panel layout: one row per setting, the preview row and the CLI hint.
//!
//! Layers, bottom to top: the panel card, the open menu pinned below its
//! trigger, and the preview overlay.

use super::component::{Message, State};
use super::focus::{FocusTarget, SettingId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::dropdown::{self, SelectOption};
use crate::ui::preview;
use crate::ui::styles;
use iced::widget::{button, center, container, pin, rule, text, Column, Row, Stack};
use iced::{alignment::Vertical, Border, Element, Font, Length, Point, Rectangle};

pub struct ViewContext<'a> {
    pub state: &'a State,
    pub i18n: &'a I18n,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let state = ctx.state;
    let options = state.options();

    let rows = Column::new()
        .spacing(spacing::MD)
        .push(view_header(ctx.i18n))
        .push(rule::horizontal(1))
        .push(setting_row(
            &ctx,
            SettingId::Format,
            &options.format,
            state.format(),
        ))
        .push(setting_row(
            &ctx,
            SettingId::Resolution,
            &options.resolution,
            state.resolution(),
        ))
        .push(setting_row(
            &ctx,
            SettingId::Compression,
            &options.compression,
            state.compression(),
        ))
        .push(preview_row(&ctx))
        .push(cli_row(ctx.i18n));

    let card = container(rows)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .style(styles::container::panel);

    let base: Element<'_, Message> = center(card).padding(spacing::LG).into();

    let menu = state
        .menu_anchor()
        .and_then(|(setting, trigger)| menu_layer(&ctx, setting, trigger));
    let overlay = state.preview().map(|overlay| {
        preview::view(preview::ViewContext {
            state: overlay,
            i18n: ctx.i18n,
        })
        .map(Message::Preview)
    });

    if menu.is_none() && overlay.is_none() {
        return base;
    }

    let mut layers = Stack::new().push(base);
    if let Some(menu) = menu {
        layers = layers.push(menu);
    }
    if let Some(overlay) = overlay {
        layers = layers.push(overlay);
    }
    layers.into()
}

fn selector_context<'a, V>(
    ctx: &ViewContext<'a>,
    setting: SettingId,
    options: &'a [SelectOption<V>],
    selected: V,
) -> dropdown::ViewContext<'a, V> {
    dropdown::ViewContext {
        state: ctx.state.menu(setting),
        options,
        selected: Some(selected),
        placeholder: "",
        has_focus: ctx.state.focus() == Some(FocusTarget::Setting(setting)),
    }
}

/// Open option list pinned just below its trigger.
fn menu_layer<'a>(
    ctx: &ViewContext<'a>,
    setting: SettingId,
    trigger: Rectangle,
) -> Option<Element<'a, Message>> {
    let state = ctx.state;
    let options = state.options();
    let menu = match setting {
        SettingId::Format => dropdown::view_menu(&selector_context(
            ctx,
            setting,
            &options.format,
            state.format(),
        )),
        SettingId::Resolution => dropdown::view_menu(&selector_context(
            ctx,
            setting,
            &options.resolution,
            state.resolution(),
        )),
        SettingId::Compression => dropdown::view_menu(&selector_context(
            ctx,
            setting,
            &options.compression,
            state.compression(),
        )),
    }?;

    let position = Point::new(trigger.x, trigger.y + trigger.height + spacing::XXS);
    Some(
        pin(menu.map(move |message| Message::Selector(setting, message)))
            .position(position)
            .into(),
    )
}

fn view_header<'a>(i18n: &I18n) -> Element<'a, Message> {
    text(i18n.tr("panel-title"))
        .size(typography::TITLE_MD)
        .into()
}

fn describe<'a>(i18n: &I18n, label_key: &str, description_key: &str) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(text(i18n.tr(label_key)).size(typography::BODY_LG))
        .push(text(i18n.tr(description_key)).size(typography::CAPTION))
}

fn setting_row<'a, V: PartialEq>(
    ctx: &ViewContext<'a>,
    setting: SettingId,
    options: &'a [SelectOption<V>],
    selected: V,
) -> Element<'a, Message> {
    let trigger = dropdown::view_trigger(&selector_context(ctx, setting, options, selected))
        .map(move |message| Message::Selector(setting, message));
    let selector = container(trigger).id(FocusTarget::Setting(setting).widget_id());

    Row::new()
        .spacing(spacing::MD)
        .push(describe(ctx.i18n, setting.label_key(), setting.description_key()))
        .push(selector)
        .into()
}

fn preview_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let focused = state.focus() == Some(FocusTarget::PreviewButton);

    let control = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(text("◉").size(typography::BODY))
            .push(text(ctx.i18n.tr("preview-button")).size(typography::BODY)),
    )
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([spacing::XXS, spacing::MD])
    .on_press_maybe(state.preview_enabled().then_some(Message::PreviewPressed))
    .style(styles::button::primary(focused));
    let control = container(control).id(FocusTarget::PreviewButton.widget_id());

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(describe(
            ctx.i18n,
            "setting-preview-label",
            "setting-preview-description",
        ))
        .push(control)
        .into()
}

fn cli_row<'a>(i18n: &I18n) -> Element<'a, Message> {
    let flag = container(text("--headless").font(Font::MONOSPACE).size(typography::CAPTION))
        .padding([0.0, spacing::XXS])
        .style(|theme: &iced::Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let hint = Row::new()
        .align_y(Vertical::Center)
        .push(text(i18n.tr("setting-cli-description-before")).size(typography::CAPTION))
        .push(flag)
        .push(text(i18n.tr("setting-cli-description-after")).size(typography::CAPTION));

    Column::new()
        .spacing(spacing::XXS)
        .push(text(i18n.tr("setting-cli-label")).size(typography::BODY_LG))
        .push(hint)
        .into()
}
