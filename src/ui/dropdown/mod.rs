// SPDX-License-Identifier: MPL-2.0
//! Single-choice selector with a keyboard-navigable option list.
//!
//! The selector never owns the chosen value. Its owner passes the current
//! value in and receives [`Event::Selected`] when the user confirms a new one.
//! Keyboard focus is tracked by the owner too; [`Event::Closed`] tells it
//! whether focus should return to the trigger.

mod state;
mod view;

pub use state::{
    selected_index, Event, Message, OptionHighlight, Phase, PopupRole, SelectOption, State,
    TriggerSemantics,
};
pub use view::{view_menu, view_trigger, ViewContext};
