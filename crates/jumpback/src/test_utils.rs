use crate::host::EditorHost;
use crate::model::{Cursor, DocId};

/// Scriptable stand-in for a host editor.
///
/// Fields are public so tests can set up a view and then inspect what the engine
/// did to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FakeEditor {
    pub document: Option<DocId>,
    pub selection: Option<Cursor>,
    pub scroll: Option<f64>,
    pub navigation_intent: bool,
    pub scrolled_into_view: Vec<Cursor>,
    pub scroll_sets: usize,
    pub focused: bool,
}

impl FakeEditor {
    /// An editor showing `id` with the caret at the top.
    pub fn open(id: &str) -> Self {
        Self {
            document: Some(DocId::from(id)),
            selection: Some(Cursor::caret(0, 0)),
            scroll: Some(0.0),
            ..Default::default()
        }
    }

    pub fn without_cursor(mut self) -> Self {
        self.selection = None;
        self
    }

    pub fn without_scroll(mut self) -> Self {
        self.scroll = None;
        self
    }

    pub fn with_navigation_intent(mut self) -> Self {
        self.navigation_intent = true;
        self
    }

    /// Switch the active document, resetting the view.
    pub fn switch_to(&mut self, id: &str) {
        self.document = Some(DocId::from(id));
        self.selection = Some(Cursor::caret(0, 0));
        self.scroll = Some(0.0);
        self.navigation_intent = false;
    }
}

impl EditorHost for FakeEditor {
    fn active_document(&self) -> Option<DocId> {
        self.document.clone()
    }

    fn selection(&self) -> Option<Cursor> {
        self.selection
    }

    fn scroll(&self) -> Option<f64> {
        self.scroll
    }

    fn set_selection(&mut self, cursor: &Cursor) {
        self.selection = Some(*cursor);
    }

    fn scroll_into_view(&mut self, cursor: &Cursor, _center: bool) {
        self.scrolled_into_view.push(*cursor);
    }

    fn set_scroll(&mut self, offset: f64) {
        self.scroll = Some(offset);
        self.scroll_sets += 1;
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn has_navigation_intent(&self) -> bool {
        self.navigation_intent
    }
}
