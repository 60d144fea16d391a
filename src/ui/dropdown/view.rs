// SPDX-License-Identifier: MPL-2.0
//! Rendering of a selector.
//!
//! The trigger and the option list are separate elements: the owner lays the
//! trigger out in place and floats the list above its own content so opening
//! a menu never reflows the rows around it.

use super::state::{selected_index, Message, SelectOption, State};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, opaque, text, Column, Row};
use iced::{alignment::Vertical, Element, Length};

/// Everything needed to draw one selector.
pub struct ViewContext<'a, V> {
    pub state: &'a State,
    pub options: &'a [SelectOption<V>],
    pub selected: Option<V>,
    /// Shown on the trigger when nothing is selected.
    pub placeholder: &'a str,
    /// Whether the panel's keyboard focus sits on this trigger.
    pub has_focus: bool,
}

/// Trigger button showing the selected label and an open/closed caret.
pub fn view_trigger<'a, V: PartialEq>(ctx: &ViewContext<'a, V>) -> Element<'a, Message> {
    let semantics = ctx.state.trigger_semantics();
    let current = selected_index(ctx.options, ctx.selected.as_ref())
        .and_then(|index| ctx.options.get(index))
        .map_or(ctx.placeholder, |option| option.label.as_str());
    let caret = if semantics.expanded { "▴" } else { "▾" };

    let content = Row::new()
        .align_y(Vertical::Center)
        .push(text(current).size(typography::BODY).width(Length::Fill))
        .push(text(caret).size(typography::BODY));

    button(content)
        .width(Length::Fixed(sizing::SELECTOR_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XXS, spacing::XS])
        .on_press(Message::TriggerPressed)
        .style(styles::button::selector_trigger(ctx.has_focus, semantics.expanded))
        .into()
}

/// Option list, or `None` while the menu is closed.
pub fn view_menu<'a, V: PartialEq>(ctx: &ViewContext<'a, V>) -> Option<Element<'a, Message>> {
    if !ctx.state.is_open() {
        return None;
    }

    let rows = ctx.options.iter().enumerate().map(|(index, option)| {
        let is_selected = ctx.selected.as_ref() == Some(&option.value);
        let highlight = ctx.state.option_highlight(index, is_selected);
        button(
            text(option.label.as_str())
                .size(typography::BODY)
                .align_y(Vertical::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::OPTION_HEIGHT))
        .padding([spacing::XXS, spacing::XS])
        .on_press(Message::OptionPressed(index))
        .style(styles::button::menu_option(highlight))
        .into()
    });

    let list = container(Column::with_children(rows).spacing(2.0))
        .padding(spacing::XXS)
        .width(Length::Fixed(sizing::SELECTOR_WIDTH))
        .style(styles::container::menu);

    // Presses on the list padding must not count as outside activity.
    Some(opaque(list))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption<u8>> {
        vec![SelectOption::new(1, "One"), SelectOption::new(2, "Two")]
    }

    fn context<'a>(state: &'a State, options: &'a [SelectOption<u8>]) -> ViewContext<'a, u8> {
        ViewContext {
            state,
            options,
            selected: Some(2),
            placeholder: "",
            has_focus: true,
        }
    }

    #[test]
    fn closed_selector_draws_only_trigger() {
        let state = State::new();
        let options = options();
        let ctx = context(&state, &options);
        let _element = view_trigger(&ctx);
        assert!(view_menu(&ctx).is_none());
    }

    #[test]
    fn open_selector_draws_menu_separately() {
        let mut state = State::new();
        let options = options();
        let _ = state.update(Message::TriggerPressed, &options, Some(&2));
        assert!(state.is_open());

        let ctx = context(&state, &options);
        let _trigger = view_trigger(&ctx);
        assert!(view_menu(&ctx).is_some());
    }
}
