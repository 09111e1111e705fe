use super::RawXmlEvent;

/// A single node of the document tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text content, stored in its escaped (on-disk) form
    Text(String),
    CData(String),
    Comment(String),
    /// Anything else (processing instructions, entity refs, ...) passed through as-is
    Other(RawXmlEvent),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

/// An element with its attributes (in document order) and children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element name without any namespace prefix
    pub fn local_name(&self) -> &str {
        self.name
            .rsplit_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Number of elements in this subtree, including this one.
    pub fn element_count(&self) -> usize {
        1 + self
            .child_elements()
            .map(Element::element_count)
            .sum::<usize>()
    }

    /// Return a copy with `key` set to `value`. An existing attribute keeps
    /// its position; a new one is appended.
    pub fn with_attr(&self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut attrs = self.attrs.clone();
        if let Some(slot) = attrs.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            attrs.push((key.to_string(), value));
        }
        Self {
            attrs,
            ..self.clone()
        }
    }

    /// Return a copy with the given children in place of the current ones.
    pub fn with_children(&self, children: Vec<Node>) -> Self {
        Self {
            name: self.name.clone(),
            attrs: self.attrs.clone(),
            children,
        }
    }

    /// Return a copy whose content is the single (pre-escaped) text node `text`.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        self.with_children(vec![Node::Text(text.into())])
    }

    /// Concatenated text and CDATA content of direct children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) | Node::CData(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub(super) fn from_parts(name: String, attrs: Vec<(String, String)>) -> Self {
        Self {
            name,
            attrs,
            children: Vec::new(),
        }
    }

    pub(super) fn push(&mut self, node: Node) {
        self.children.push(node);
    }
}

impl std::fmt::Display for Element {
    /// Short `name k="v" ...` form for log and error messages.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        for (k, v) in &self.attrs {
            write!(f, r#" {k}="{v}""#)?;
        }
        Ok(())
    }
}
