//! In-memory mirror of the page elements the panel binders touch.
//!
//! The page mounts the elements its markup actually contains; lookups for
//! anything else return `None`. Every write that changes an element is
//! journaled as a [`Patch`] so the worker can hand the JS bridge exactly the
//! DOM operations to replay.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{ElementHandle, ElementRegistry};

/// Mirror of one element's observable state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Inline style properties (e.g. `width`, `display`).
    #[serde(default)]
    pub style: BTreeMap<String, String>,
    /// Plain text content. Empty once markup has been set.
    #[serde(default)]
    pub text: String,
    /// Markup content, when the element was last written with `innerHTML`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default)]
    pub classes: BTreeSet<String>,
}

/// How the page describes an element at mount time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementSpec {
    pub id: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub style: BTreeMap<String, String>,
}

impl ElementSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }
}

/// A single DOM operation for the JS bridge to replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Patch {
    SetStyle {
        id: String,
        property: String,
        value: String,
    },
    SetText {
        id: String,
        text: String,
    },
    SetHtml {
        id: String,
        html: String,
    },
    AddClass {
        id: String,
        class: String,
    },
    RemoveClass {
        id: String,
        class: String,
    },
}

impl Patch {
    pub fn id(&self) -> &str {
        match self {
            Patch::SetStyle { id, .. }
            | Patch::SetText { id, .. }
            | Patch::SetHtml { id, .. }
            | Patch::AddClass { id, .. }
            | Patch::RemoveClass { id, .. } => id,
        }
    }
}

/// Id-keyed element mirror plus the journal of pending patches.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
    patches: Vec<Patch>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document containing bare elements with the given ids.
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut doc = Self::new();
        doc.mount(ids.into_iter().map(ElementSpec::new));
        doc
    }

    /// Replace the mirrored element set with what the page reports.
    /// Pending patches are discarded; the page is the source of truth here.
    /// Returns the number of distinct elements mounted.
    pub fn mount<I>(&mut self, specs: I) -> usize
    where
        I: IntoIterator<Item = ElementSpec>,
    {
        self.elements.clear();
        self.patches.clear();
        for spec in specs {
            let element = Element {
                style: spec.style,
                text: spec.text.unwrap_or_default(),
                html: None,
                classes: spec.classes.into_iter().collect(),
            };
            self.elements.insert(spec.id, element);
        }
        self.elements.len()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Patches recorded since the last drain.
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    pub fn take_patches(&mut self) -> Vec<Patch> {
        std::mem::take(&mut self.patches)
    }

    /// Serialize the mirrored elements as a JSON object keyed by id.
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.elements).unwrap_or_else(|_| "{}".to_string())
    }
}

impl ElementRegistry for Document {
    type Handle<'a> = ElementMut<'a>;

    fn get_element_by_id(&mut self, id: &str) -> Option<ElementMut<'_>> {
        let element = self.elements.get_mut(id)?;
        Some(ElementMut {
            id: id.to_string(),
            element,
            patches: &mut self.patches,
        })
    }
}

/// Handle into a [`Document`] element; writes are journaled.
pub struct ElementMut<'a> {
    id: String,
    element: &'a mut Element,
    patches: &'a mut Vec<Patch>,
}

impl ElementHandle for ElementMut<'_> {
    fn set_style(&mut self, property: &str, value: &str) {
        if self.element.style.get(property).map(String::as_str) == Some(value) {
            return;
        }
        self.element
            .style
            .insert(property.to_string(), value.to_string());
        self.patches.push(Patch::SetStyle {
            id: self.id.clone(),
            property: property.to_string(),
            value: value.to_string(),
        });
    }

    fn style(&self, property: &str) -> Option<&str> {
        self.element.style.get(property).map(String::as_str)
    }

    fn set_text_content(&mut self, text: &str) {
        if self.element.html.is_none() && self.element.text == text {
            return;
        }
        self.element.html = None;
        self.element.text = text.to_string();
        self.patches.push(Patch::SetText {
            id: self.id.clone(),
            text: text.to_string(),
        });
    }

    fn text_content(&self) -> &str {
        &self.element.text
    }

    fn set_inner_html(&mut self, html: &str) {
        if self.element.html.as_deref() == Some(html) {
            return;
        }
        self.element.text.clear();
        self.element.html = Some(html.to_string());
        self.patches.push(Patch::SetHtml {
            id: self.id.clone(),
            html: html.to_string(),
        });
    }

    fn add_class(&mut self, class: &str) {
        if self.element.classes.insert(class.to_string()) {
            self.patches.push(Patch::AddClass {
                id: self.id.clone(),
                class: class.to_string(),
            });
        }
    }

    fn remove_class(&mut self, class: &str) {
        if self.element.classes.remove(class) {
            self.patches.push(Patch::RemoveClass {
                id: self.id.clone(),
                class: class.to_string(),
            });
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.classes.contains(class)
    }
}
