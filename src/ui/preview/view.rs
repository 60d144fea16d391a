// SPDX-License-Identifier: MPL-2.0
//! Preview overlay rendering: backdrop, animated modal, page stage and controls.

use super::component::{DocumentStatus, Message, PageView, State};
use super::geometry;
use crate::error::DocumentError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette::WHITE, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, center, container, image, mouse_area, opaque, responsive, scrollable, text, tooltip,
    Column, Row, Space,
};
use iced::{alignment::Vertical, Element, Length, Padding, Size};

pub struct ViewContext<'a> {
    pub state: &'a State,
    pub i18n: &'a I18n,
}

/// Full-window layer meant to be stacked above the panel.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let reveal = ctx.state.reveal();

    let layer = responsive(move |size: Size| {
        let modal = geometry::modal_bounds(size);
        let origin = ctx
            .state
            .origin()
            .unwrap_or_else(|| geometry::transform_origin(None, modal));
        let bounds = geometry::revealed_bounds(modal, origin, reveal);

        let body = container(
            Column::new()
                .push(view_header(&ctx))
                .push(view_stage(&ctx))
                .push(view_footer(&ctx)),
        )
        .width(Length::Fixed(bounds.width))
        .height(Length::Fixed(bounds.height))
        .clip(true)
        .style(styles::container::modal);

        container(opaque(body))
            .padding(Padding {
                top: bounds.y.max(0.0),
                left: bounds.x.max(0.0),
                ..Padding::ZERO
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    });

    let backdrop = container(layer)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop(reveal));

    opaque(mouse_area(backdrop).on_press(Message::BackdropPressed))
}

fn control<'a>(
    glyph: &'a str,
    label: String,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let control = button(text(glyph).size(typography::BODY_LG).center())
        .width(Length::Fixed(sizing::BUTTON_HEIGHT))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press_maybe(on_press)
        .style(styles::button::overlay(WHITE));

    tooltip(
        control,
        container(text(label).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::container::menu),
        tooltip::Position::Top,
    )
    .into()
}

fn bar<'a>(content: Row<'a, Message>) -> Element<'a, Message> {
    container(content.align_y(Vertical::Center).spacing(spacing::XS))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MODAL_BAR_HEIGHT))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::modal_bar)
        .into()
}

fn view_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("preview-title"))
        .size(typography::TITLE_SM)
        .width(Length::Fill);
    let close = control(
        "✕",
        ctx.i18n.tr("preview-close"),
        ctx.state.phase().is_open().then_some(Message::CloseRequested),
    );
    bar(Row::new().push(title).push(close))
}

fn view_stage<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.state.document() {
        DocumentStatus::Loading => status_text(ctx.i18n.tr("preview-loading")),
        DocumentStatus::Failed(err) => error_text(ctx.i18n, err),
        DocumentStatus::Ready(_) => match ctx.state.page_view() {
            PageView::Pending => status_text(ctx.i18n.tr("preview-loading-page")),
            PageView::Failed(err) => error_text(ctx.i18n, err),
            PageView::Ready(page) => {
                let zoom = ctx.state.zoom().value();
                let page_image = image(page.handle.clone())
                    .width(Length::Fixed(page.width as f32 * zoom))
                    .height(Length::Fixed(page.height as f32 * zoom));

                return scrollable(container(page_image).padding(spacing::MD))
                    .direction(scrollable::Direction::Both {
                        vertical: scrollable::Scrollbar::default(),
                        horizontal: scrollable::Scrollbar::default(),
                    })
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into();
            }
        },
    };

    center(content).into()
}

fn status_text<'a>(message: String) -> Element<'a, Message> {
    text(message).size(typography::BODY).into()
}

fn error_text<'a>(i18n: &I18n, err: &DocumentError) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .align_x(iced::Alignment::Center)
        .push(
            text(i18n.tr("preview-error-title"))
                .size(typography::BODY_LG)
                .color(styles::container::error_text()),
        )
        .push(text(i18n.tr(err.i18n_key())).size(typography::BODY))
        .into()
}

fn view_footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let total = state
        .page_count()
        .map_or_else(|| ctx.i18n.tr("preview-page-unknown"), |count| count.to_string());
    let indicator = ctx.i18n.tr_with_args(
        "preview-page-indicator",
        &[("page", &state.page().to_string()), ("total", &total)],
    );
    let zoom = ctx.i18n.tr_with_args(
        "preview-zoom-indicator",
        &[("percent", &state.zoom().percent().to_string())],
    );

    let row = Row::new()
        .push(control(
            "‹",
            ctx.i18n.tr("preview-previous-page"),
            state.can_retreat().then_some(Message::PreviousPage),
        ))
        .push(text(indicator).size(typography::BODY))
        .push(control(
            "›",
            ctx.i18n.tr("preview-next-page"),
            state.can_advance().then_some(Message::NextPage),
        ))
        .push(Space::new().width(Length::Fill))
        .push(control(
            "−",
            ctx.i18n.tr("preview-zoom-out"),
            state.can_zoom_out().then_some(Message::ZoomOut),
        ))
        .push(text(zoom).size(typography::BODY))
        .push(control(
            "+",
            ctx.i18n.tr("preview-zoom-in"),
            state.can_zoom_in().then_some(Message::ZoomIn),
        ));

    bar(row)
}
