//! The terminal list widget.
//!
//! [`TerminalPicker`] implements [`ListWidget`] on top of [`Tui`]. The
//! terminal is entered lazily on the first render, so a session that is
//! never shown leaves the terminal alone. It is restored on
//! [`ListWidget::dispose`], or when the picker is dropped.

use std::collections::VecDeque;

use snip_core::ListItem;
use snip_picker::{ListWidget, RenderFrame, WidgetEvent};
use tracing::{debug, warn};

use crate::action::map_key;
use crate::error::TuiError;
use crate::event::Event;
use crate::theme::Theme;
use crate::tui::Tui;
use crate::ui;
use crate::view::PickerView;

/// A [`ListWidget`] drawing on the terminal.
#[derive(Debug)]
pub struct TerminalPicker {
    tui: Option<Tui>,
    view: PickerView,
    theme: Theme,
    pending: VecDeque<WidgetEvent>,
    disposed: bool,
}

impl TerminalPicker {
    /// Creates a picker. The terminal is untouched until the first render.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            tui: None,
            view: PickerView::new(),
            theme,
            pending: VecDeque::new(),
            disposed: false,
        }
    }

    /// The current view state.
    #[must_use]
    pub const fn view(&self) -> &PickerView {
        &self.view
    }

    /// Returns `true` while the terminal is in picker mode.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.tui.as_ref().is_some_and(Tui::is_entered)
    }

    fn ensure_entered(&mut self) -> Result<(), TuiError> {
        if self.tui.is_none() {
            let mut tui = Tui::new()?;
            tui.enter()?;
            self.tui = Some(tui);
        }
        Ok(())
    }

    fn redraw(&mut self) -> Result<(), TuiError> {
        let Some(tui) = self.tui.as_mut() else {
            return Ok(());
        };
        let view = &mut self.view;
        let theme = &self.theme;
        tui.draw(|frame| ui::render(view, frame, theme))
    }

    fn handle_terminal_event(&mut self, event: Event) -> Option<WidgetEvent> {
        match event {
            Event::Key(key) => self.view.handle_action(map_key(key)),
            Event::Paste(text) => self.view.paste(&text),
            Event::Resize { width, height } => {
                debug!(width, height, "Terminal resized");
                None
            }
        }
    }
}

impl ListWidget for TerminalPicker {
    type Error = TuiError;

    fn render(&mut self, frame: RenderFrame<'_>) -> Result<(), TuiError> {
        if self.disposed {
            return Ok(());
        }
        self.ensure_entered()?;

        if let Some(event) = self.view.apply(frame) {
            self.pending.push_back(event);
        }
        self.redraw()
    }

    async fn next_event(&mut self) -> Option<WidgetEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }

            let event = self.tui.as_mut()?.next_event().await?;
            let widget_event = self.handle_terminal_event(event);
            if let Err(e) = self.redraw() {
                warn!(error = %e, "Failed to redraw picker");
            }
            if widget_event.is_some() {
                return widget_event;
            }
        }
    }

    fn selected_item(&self) -> Option<ListItem> {
        self.view.highlighted().cloned()
    }

    fn dispose(&mut self) {
        self.disposed = true;
        self.pending.clear();
        if let Some(mut tui) = self.tui.take() {
            if let Err(e) = tui.exit() {
                warn!(error = %e, "Failed to restore terminal");
            }
        }
    }
}
