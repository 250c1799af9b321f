//! Inert markup.
//!
//! Components produce an [`Element`] tree: a tag, an optional `data-slot`, a
//! class string, inline styles, pass-through attributes and children. Nothing
//! here has behavior; the tree is handed to whatever renders it. `Display`
//! serializes to HTML, which is what server-side rendering and the tests use.
//!
//! ```rust
//! use scaffold::Element;
//!
//! let link = Element::new("a")
//!     .with_class("underline")
//!     .with_attr("href", "/docs?a=1&b=2")
//!     .with_child("Docs");
//! assert_eq!(link.to_string(), r#"<a class="underline" href="/docs?a=1&amp;b=2">Docs</a>"#);
//! ```

use std::fmt::{self, Write};

use stylekit::StyleMap;

use crate::primitive::Primitive;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["area", "br", "col", "hr", "img", "input", "link", "meta", "source"];

/// What an element renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// A plain HTML element.
    Html(&'static str),
    /// A part of an accessible primitive.
    Primitive(Primitive),
}

impl Tag {
    /// The HTML element name this tag serializes to.
    pub fn html_name(&self) -> &'static str {
        match self {
            Tag::Html(name) => *name,
            Tag::Primitive(primitive) => primitive.html_tag(),
        }
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.html_name())
    }
}

impl From<&'static str> for Tag {
    fn from(name: &'static str) -> Self {
        Tag::Html(name)
    }
}

impl From<Primitive> for Tag {
    fn from(primitive: Primitive) -> Self {
        Tag::Primitive(primitive)
    }
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => write!(f, "{element}"),
            Node::Text(text) => write_escaped(f, text, false),
        }
    }
}

/// A rendered element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) tag: Tag,
    pub(crate) slot: Option<String>,
    pub(crate) class: Option<String>,
    pub(crate) style: StyleMap,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            slot: None,
            class: None,
            style: StyleMap::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the `data-slot` attribute.
    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }

    /// Set the class string. An empty string clears it.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.class = (!class.is_empty()).then_some(class);
        self
    }

    /// Layer inline styles on top of the current ones.
    pub fn with_style(mut self, style: &StyleMap) -> Self {
        self.style.merge(style);
        self
    }

    /// Set an attribute, replacing an earlier value in place.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name.into(), value.into());
        self
    }

    pub fn with_attributes<I>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, value) in attributes {
            self.set_attr(name, value);
        }
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Class tokens, in order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class.iter().flat_map(|class| class.split_whitespace())
    }

    pub fn style(&self) -> &StyleMap {
        &self.style
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Remove and return the class string.
    pub fn take_class(&mut self) -> Option<String> {
        self.class.take()
    }

    pub(crate) fn set_attr(&mut self, name: String, value: String) {
        set_attr(&mut self.attributes, name, value);
    }
}

pub(crate) fn set_attr(attributes: &mut Vec<(String, String)>, name: String, value: String) {
    match attributes.iter_mut().find(|(key, _)| *key == name) {
        Some(entry) => entry.1 = value,
        None => attributes.push((name, value)),
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.tag.html_name();
        write!(f, "<{name}")?;

        if let Tag::Primitive(primitive) = self.tag {
            write_attr(f, "data-primitive", primitive.name())?;
        }
        if let Some(slot) = &self.slot {
            write_attr(f, "data-slot", slot)?;
        }
        if let Some(class) = &self.class {
            write_attr(f, "class", class)?;
        }
        if !self.style.is_empty() {
            write_attr(f, "style", &self.style.to_string())?;
        }
        for (key, value) in &self.attributes {
            write_attr(f, key, value)?;
        }

        if self.tag.is_void() {
            return f.write_str(">");
        }

        f.write_char('>')?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{name}>")
    }
}

fn write_attr(f: &mut fmt::Formatter<'_>, name: &str, value: &str) -> fmt::Result {
    write!(f, " {name}=\"")?;
    write_escaped(f, value, true)?;
    f.write_char('"')
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str, in_attribute: bool) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' if in_attribute => f.write_str("&quot;")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}
