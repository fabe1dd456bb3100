//! Element lookup capability used by every panel binder.
//!
//! Binders never reach for a global document. They receive an
//! [`ElementRegistry`] and ask it for elements by id; a missing element is
//! `None` and the binder moves on. [`Document`] is the in-memory mirror the
//! WASM bridge keeps for the page, recording each change as a [`Patch`] for
//! the JS side to apply.

pub mod document;
pub mod state;

pub use document::{Document, Element, ElementSpec, Patch};

/// Class marking the affinity panel as shown.
pub const VISIBLE: &str = "visible";
/// Class marking the side panel and its backdrop as open.
pub const OPEN: &str = "open";
/// Class marking a character sprite as present in the scene.
pub const ACTIVE: &str = "active";

/// Mutable view of a single element located by id.
pub trait ElementHandle {
    fn set_style(&mut self, property: &str, value: &str);
    fn style(&self, property: &str) -> Option<&str>;

    /// Replace all content with plain text.
    fn set_text_content(&mut self, text: &str);
    fn text_content(&self) -> &str;

    /// Replace all content with markup.
    fn set_inner_html(&mut self, html: &str);

    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    /// Add `class` when `force` is true, remove it otherwise.
    fn toggle_class(&mut self, class: &str, force: bool) {
        if force {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// Name-keyed, optional element lookup.
pub trait ElementRegistry {
    type Handle<'a>: ElementHandle
    where
        Self: 'a;

    fn get_element_by_id(&mut self, id: &str) -> Option<Self::Handle<'_>>;
}
