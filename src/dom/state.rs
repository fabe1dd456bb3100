//! Worker-lifetime document mirror.
//!
//! Uses `thread_local!` + `RefCell` for safe mutable access in single-threaded
//! WASM. The Web Worker keeps the module alive, so the mirror persists across
//! `handle_request` calls until the page mounts again.

use std::cell::RefCell;

use super::{Document, Patch};

thread_local! {
    static DOCUMENT: RefCell<Document> = RefCell::new(Document::new());
}

/// Execute a closure with read access to the document.
pub fn with_document<F, R>(f: F) -> R
where
    F: FnOnce(&Document) -> R,
{
    DOCUMENT.with(|d| f(&d.borrow()))
}

/// Execute a closure with mutable access to the document.
pub fn with_document_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Document) -> R,
{
    DOCUMENT.with(|d| f(&mut d.borrow_mut()))
}

/// Replace the whole document (used by tests and remounts).
pub fn replace_document(doc: Document) {
    DOCUMENT.with(|d| {
        *d.borrow_mut() = doc;
    });
}

/// Run a binder against the document and drain the patches it produced.
pub fn apply<F>(f: F) -> Vec<Patch>
where
    F: FnOnce(&mut Document),
{
    with_document_mut(|doc| {
        doc.take_patches();
        f(doc);
        doc.take_patches()
    })
}
