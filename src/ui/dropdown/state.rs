// SPDX-License-Identifier: MPL-2.0
//! Selection menu state machine.
//!
//! The menu moves through `Closed → Open → Closing → Closed`. `Closing` exists
//! so exit paths share one transition, but it never outlives the update that
//! entered it: any exit animation is purely visual.

use crate::ui::keys::NavKey;

/// One selectable value/label pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<V> {
    pub value: V,
    pub label: String,
}

impl<V> SelectOption<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Lifecycle phase of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    /// The menu is visible; `focused` is the keyboard-highlighted option.
    Open { focused: usize },
    Closing,
}

/// Messages handled by a selection menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Pointer press on the trigger.
    TriggerPressed,
    /// Pointer press on the option at the given index.
    OptionPressed(usize),
    /// Key pressed while the trigger owns keyboard focus.
    Key(NavKey),
    /// Keyboard focus moved to another control.
    FocusLost,
    /// Pointer press landed outside both trigger and menu.
    PointerOutside,
}

/// Outcome reported to the owner of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<V> {
    None,
    Opened,
    /// The menu closed without a selection.
    Closed {
        /// Whether keyboard focus should return to the trigger.
        refocus: bool,
    },
    /// An option was confirmed. Focus returns to the trigger.
    Selected(V),
}

/// Popup role announced by the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupRole {
    Listbox,
}

/// Accessibility description of the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerSemantics {
    pub expanded: bool,
    pub popup: PopupRole,
}

/// Visual emphasis of a menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionHighlight {
    /// Keyboard-highlighted, whether selected or not.
    Focused,
    /// Current value, not keyboard-highlighted.
    Selected,
    Plain,
}

/// Returns the index of `selected` within `options`.
pub fn selected_index<V: PartialEq>(options: &[SelectOption<V>], selected: Option<&V>) -> Option<usize> {
    let selected = selected?;
    options.iter().position(|option| &option.value == selected)
}

#[derive(Debug, Clone, Default)]
pub struct State {
    phase: Phase,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open { .. })
    }

    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Open { focused } => Some(focused),
            Phase::Closed | Phase::Closing => None,
        }
    }

    #[must_use]
    pub fn trigger_semantics(&self) -> TriggerSemantics {
        TriggerSemantics {
            expanded: self.is_open(),
            popup: PopupRole::Listbox,
        }
    }

    #[must_use]
    pub fn option_highlight(&self, index: usize, is_selected: bool) -> OptionHighlight {
        if self.focused_index() == Some(index) {
            OptionHighlight::Focused
        } else if is_selected {
            OptionHighlight::Selected
        } else {
            OptionHighlight::Plain
        }
    }

    /// Applies `message` and reports what the owner must do.
    ///
    /// `selected` is the owner's current value; `None` means nothing is
    /// selected and keyboard focus starts on the first option.
    pub fn update<V: Clone + PartialEq>(
        &mut self,
        message: Message,
        options: &[SelectOption<V>],
        selected: Option<&V>,
    ) -> Event<V> {
        let event = match self.phase {
            Phase::Closed => self.update_closed(message, options, selected),
            Phase::Open { focused } => self.update_open(focused, message, options),
            Phase::Closing => Event::None,
        };
        self.settle();
        event
    }

    fn update_closed<V: PartialEq>(
        &mut self,
        message: Message,
        options: &[SelectOption<V>],
        selected: Option<&V>,
    ) -> Event<V> {
        let opens = match message {
            Message::TriggerPressed => true,
            Message::Key(key) => matches!(
                key,
                NavKey::Down | NavKey::Up | NavKey::Enter | NavKey::Space
            ),
            Message::OptionPressed(_) | Message::FocusLost | Message::PointerOutside => false,
        };

        if opens {
            let focused = selected_index(options, selected).unwrap_or(0);
            self.phase = Phase::Open { focused };
            Event::Opened
        } else {
            Event::None
        }
    }

    fn update_open<V: Clone>(
        &mut self,
        focused: usize,
        message: Message,
        options: &[SelectOption<V>],
    ) -> Event<V> {
        match message {
            Message::TriggerPressed => self.begin_close(true),
            Message::OptionPressed(index) => self.confirm(index, options),
            Message::FocusLost | Message::PointerOutside => self.begin_close(false),
            Message::Key(key) => match key {
                NavKey::Down => {
                    let last = options.len().saturating_sub(1);
                    self.phase = Phase::Open {
                        focused: (focused + 1).min(last),
                    };
                    Event::None
                }
                NavKey::Up => {
                    self.phase = Phase::Open {
                        focused: focused.saturating_sub(1),
                    };
                    Event::None
                }
                NavKey::Enter | NavKey::Space => self.confirm(focused, options),
                NavKey::Escape => self.begin_close(true),
                NavKey::Tab | NavKey::BackTab => self.begin_close(false),
                NavKey::Left | NavKey::Right => Event::None,
            },
        }
    }

    fn confirm<V: Clone>(&mut self, index: usize, options: &[SelectOption<V>]) -> Event<V> {
        match options.get(index) {
            Some(option) => {
                self.phase = Phase::Closing;
                Event::Selected(option.value.clone())
            }
            None => self.begin_close(true),
        }
    }

    fn begin_close<V>(&mut self, refocus: bool) -> Event<V> {
        self.phase = Phase::Closing;
        Event::Closed { refocus }
    }

    fn settle(&mut self) {
        if self.phase == Phase::Closing {
            self.phase = Phase::Closed;
        }
    }
}
