use crate::{class_list::ClassList, error::Error, html_parser::parse_fragment, serializer};
use serde::Serialize;

const CLASS_ATTRIBUTE: &str = "class";

/// A node in an element tree.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// An element.
    Element(Element),
    /// A text.
    Text(String),
    /// A comment.
    Comment(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// A detached element.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub(crate) const fn new(
        name: String,
        attributes: Vec<(String, String)>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            name,
            attributes,
            children,
        }
    }

    /// Returns a local name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns attributes in their order of insertion.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if an attribute is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Removes an attribute and returns its value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(key, _)| key == name)?;

        Some(self.attributes.remove(index).1)
    }

    /// Returns child nodes.
    pub fn children(&self) -> impl ExactSizeIterator<Item = &Node> {
        self.children.iter()
    }

    /// Returns class tokens.
    pub fn class_list(&self) -> ClassList {
        ClassList::parse(self.attribute(CLASS_ATTRIBUTE).unwrap_or_default())
    }

    /// Adds a class token.
    ///
    /// The class attribute is rewritten in its normalized form even if the
    /// token is already present.
    pub fn add_class(&mut self, token: &str) -> Result<(), Error> {
        if token.is_empty() {
            return Err(Error::Syntax("class token must not be empty".into()));
        } else if token.contains(|character: char| character.is_ascii_whitespace()) {
            return Err(Error::InvalidCharacter(token.into()));
        }

        let mut list = self.class_list();
        list.insert(token);
        self.set_attribute_unchecked(CLASS_ATTRIBUTE, &list.to_string());

        Ok(())
    }

    /// Replaces child nodes with markup parsed in the context of this element.
    ///
    /// The markup is not sanitized.
    pub fn set_inner_html(&mut self, markup: &str) {
        self.children = parse_fragment(&self.name, markup);
    }

    /// Replaces child nodes with a text where line breaks become `<br>`
    /// elements.
    pub fn set_inner_text(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut children = vec![];

        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                children.push(Self::new("br".into(), vec![], vec![]).into());
            }

            if !line.is_empty() {
                children.push(Node::Text(line.into()));
            }
        }

        self.children = children;
    }

    /// Returns a concatenation of descendant texts.
    pub fn text_content(&self) -> String {
        let mut content = String::new();
        self.write_text_content(&mut content);
        content
    }

    fn write_text_content(&self, content: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_text_content(content),
                Node::Text(text) => content.push_str(text),
                Node::Comment(_) => {}
            }
        }
    }

    /// Serializes child nodes as HTML.
    pub fn inner_html(&self) -> String {
        let mut output = String::new();
        serializer::serialize_children(self, &mut output);
        output
    }

    /// Serializes this element as HTML.
    pub fn outer_html(&self) -> String {
        let mut output = String::new();
        serializer::serialize_element(self, &mut output);
        output
    }

    pub(crate) fn set_attribute_unchecked(&mut self, name: &str, value: &str) {
        if let Some((_, old)) = self.attributes.iter_mut().find(|(key, _)| key == name) {
            value.clone_into(old);
        } else {
            self.attributes.push((name.into(), value.into()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn div() -> Element {
        Element::new("div".into(), vec![], vec![])
    }

    #[test]
    fn add_classes() {
        let mut element = div();

        element.add_class("foo").unwrap();
        element.add_class("bar").unwrap();
        element.add_class("foo").unwrap();

        assert_eq!(element.attribute("class"), Some("foo bar"));
        assert_eq!(element.class_list().len(), 2);
    }

    #[test]
    fn normalize_class_attribute() {
        let mut element = div();
        element.set_attribute_unchecked("class", "  a a  b ");

        element.add_class("a").unwrap();

        assert_eq!(element.attribute("class"), Some("a b"));
    }

    #[test]
    fn fail_to_add_empty_class() {
        let mut element = div();

        assert!(matches!(element.add_class(""), Err(Error::Syntax(_))));
        assert!(!element.has_attribute("class"));
    }

    #[test]
    fn fail_to_add_class_with_whitespace() {
        let mut element = div();

        assert!(matches!(
            element.add_class("foo bar"),
            Err(Error::InvalidCharacter(token)) if token == "foo bar"
        ));
    }

    #[test]
    fn keep_attribute_position_on_update() {
        let mut element = div();

        element.set_attribute_unchecked("id", "x");
        element.set_attribute_unchecked("title", "y");
        element.set_attribute_unchecked("id", "z");

        assert_eq!(
            element.attributes().collect::<Vec<_>>(),
            [("id", "z"), ("title", "y")]
        );
    }

    #[test]
    fn remove_attribute() {
        let mut element = div();
        element.set_attribute_unchecked("id", "x");

        assert_eq!(element.remove_attribute("id"), Some("x".into()));
        assert_eq!(element.remove_attribute("id"), None);
        assert_eq!(element.attributes().len(), 0);
    }

    #[test]
    fn set_inner_text() {
        let mut element = div();

        element.set_inner_text("<b>hi</b>");

        assert_eq!(
            element.children().collect::<Vec<_>>(),
            [&Node::Text("<b>hi</b>".into())]
        );
    }

    #[test]
    fn set_inner_text_with_line_breaks() {
        let mut element = div();

        element.set_inner_text("foo\nbar\r\nbaz\r\n");

        assert_eq!(element.inner_html(), "foo<br>bar<br>baz<br>");
        assert_eq!(element.text_content(), "foobarbaz");
    }

    #[test]
    fn set_empty_inner_text() {
        let mut element = div();
        element.set_inner_text("foo");

        element.set_inner_text("");

        assert_eq!(element.children().len(), 0);
    }

    #[test]
    fn set_inner_html() {
        let mut element = div();

        element.set_inner_html("<b>hi</b>");

        assert_eq!(
            element.children().collect::<Vec<_>>(),
            [&Node::Element(Element::new(
                "b".into(),
                vec![],
                vec![Node::Text("hi".into())]
            ))]
        );
        assert_eq!(element.text_content(), "hi");
    }

    #[test]
    fn replace_children_with_inner_html() {
        let mut element = div();
        element.set_inner_text("foo");

        element.set_inner_html("bar");

        assert_eq!(element.inner_html(), "bar");
    }
}
