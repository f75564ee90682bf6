//! # Host Editor Interface
//!
//! Jumpback does not know what an editor is. It talks to the host application
//! through [`EditorHost`], which exposes just enough of the *currently active*
//! document and view to read and apply a position.
//!
//! Every getter is optional: no active document, a view without a text cursor
//! (reading mode, a canvas) or a view that cannot report its scroll are all
//! normal situations, not errors.
//!
//! ## Navigation Intent
//!
//! Hosts sometimes open a document *at* a place: following a heading link, a
//! search hit, a block reference. In that case offering to jump elsewhere would
//! fight the user. [`EditorHost::has_navigation_intent`] reports whether the most
//! recent open carried such a target; what counts as one is up to the host.

use crate::model::{Cursor, DocId};

pub trait EditorHost {
    /// Identity of the document in the active editable view.
    fn active_document(&self) -> Option<DocId>;

    /// Current selection (anchor, head), if the active view has a text cursor.
    fn selection(&self) -> Option<Cursor>;

    /// Current vertical scroll offset, if the active view exposes one.
    fn scroll(&self) -> Option<f64>;

    fn set_selection(&mut self, cursor: &Cursor);

    /// Scroll so that `cursor` is visible, centered when `center` is set.
    fn scroll_into_view(&mut self, cursor: &Cursor, center: bool);

    fn set_scroll(&mut self, offset: f64);

    /// Give keyboard focus to the active editor.
    fn focus(&mut self) {}

    /// Whether the last document open targeted an explicit location.
    fn has_navigation_intent(&self) -> bool;
}
