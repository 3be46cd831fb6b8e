//! Searchable subdistrict combobox.
//!
//! The state only stores what the user did: the typed query, whether the
//! dropdown is open, the highlighted row and the confirmed selection. The
//! candidate list is never stored; it is recomputed from `(query, catalog)`
//! through [`ComboboxState::filtered_view`] every time it is needed, and the
//! highlighted index is clamped against that view whenever it is read or moved.
//!
//! Invalid operations (confirming with nothing to confirm, moving past either
//! end of the list) are silent no-ops.

use tracing::{debug, trace};

use crate::catalog::LocationCatalog;

/// Direction of a highlight move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

/// Keys the combobox reacts to. Printable keys reach the state through
/// [`ComboboxState::set_query`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// What the host should do with the key event after the state handled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// Suppress the browser default (form submission on Enter).
    pub prevent_default: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboboxState {
    query: String,
    is_open: bool,
    highlighted: usize,
    selected: Option<String>,
}

impl ComboboxState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Candidates for the current query, in catalog order.
    pub fn filtered_view<'a>(&self, catalog: &'a LocationCatalog) -> Vec<&'a str> {
        catalog.filtered_view(&self.query)
    }

    /// Highlighted row, always a valid index into the current view, or `0`
    /// when the view is empty.
    pub fn highlighted_index(&self, catalog: &LocationCatalog) -> usize {
        clamp_index(self.highlighted, self.filtered_view(catalog).len())
    }

    /// Replaces the query and reopens the dropdown with the first row
    /// highlighted. A confirmed selection survives only if the new text is
    /// exactly that selection.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.selected.as_deref() != Some(text.as_str()) {
            if let Some(stale) = self.selected.take() {
                debug!(stale = %stale, "Query edited, dropping selection");
            }
        }
        self.query = text;
        self.is_open = true;
        self.highlighted = 0;
    }

    pub fn focus(&mut self) {
        self.is_open = true;
    }

    pub fn move_highlight(&mut self, direction: Direction, catalog: &LocationCatalog) {
        let count = self.filtered_view(catalog).len();
        if count == 0 {
            return;
        }
        let current = clamp_index(self.highlighted, count);
        self.highlighted = match direction {
            Direction::Down => (current + 1).min(count - 1),
            Direction::Up => current.saturating_sub(1),
        };
        trace!(index = self.highlighted, count, "Highlight moved");
    }

    /// Highlights a row directly (pointer hover). Out-of-range rows clamp.
    pub fn highlight(&mut self, index: usize, catalog: &LocationCatalog) {
        self.highlighted = clamp_index(index, self.filtered_view(catalog).len());
    }

    /// Confirms the highlighted candidate. Returns the confirmed value, or
    /// `None` when the dropdown is closed or has no candidates.
    pub fn confirm_selection(&mut self, catalog: &LocationCatalog) -> Option<String> {
        if !self.is_open {
            return None;
        }
        let view = self.filtered_view(catalog);
        let value = view.get(clamp_index(self.highlighted, view.len()))?.to_string();
        debug!(selected = %value, "Subdistrict confirmed");
        self.commit(value.clone());
        Some(value)
    }

    /// Selects a value without going through the highlight (pointer click).
    pub fn select_explicit(&mut self, value: impl Into<String>) {
        let value = value.into();
        debug!(selected = %value, "Subdistrict picked");
        self.commit(value);
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.selected = None;
        self.is_open = false;
        self.highlighted = 0;
    }

    /// Closes the dropdown, leaving query and selection untouched. Used for
    /// Escape and for pointer-down outside the component.
    pub fn dismiss(&mut self) {
        self.is_open = false;
    }

    pub fn handle_key(&mut self, key: Key, catalog: &LocationCatalog) -> KeyOutcome {
        match key {
            Key::ArrowDown => {
                self.is_open = true;
                self.move_highlight(Direction::Down, catalog);
                KeyOutcome::default()
            }
            Key::ArrowUp => {
                self.move_highlight(Direction::Up, catalog);
                KeyOutcome::default()
            }
            Key::Enter => KeyOutcome {
                prevent_default: self.confirm_selection(catalog).is_some(),
            },
            Key::Escape => {
                self.dismiss();
                KeyOutcome::default()
            }
            Key::Other => KeyOutcome::default(),
        }
    }

    fn commit(&mut self, value: String) {
        self.query = value.clone();
        self.selected = Some(value);
        self.is_open = false;
    }
}

fn clamp_index(index: usize, count: usize) -> usize {
    if count == 0 { 0 } else { index.min(count - 1) }
}
