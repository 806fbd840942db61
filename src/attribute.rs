/// A key setting an element's markup content.
pub const INNER_HTML: &str = "innerHTML";
/// A key setting an element's text content.
pub const INNER_TEXT: &str = "innerText";

/// An attribute directive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Attribute {
    /// Replaces children with parsed markup.
    InnerHtml(String),
    /// Replaces children with a text.
    InnerText(String),
    /// Sets a generic attribute.
    Plain {
        /// A name.
        name: String,
        /// A value.
        value: String,
    },
}

impl Attribute {
    /// Creates a directive, classifying the reserved keys `innerHTML` and
    /// `innerText` as content directives.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();

        match name.as_str() {
            INNER_HTML => Self::InnerHtml(value),
            INNER_TEXT => Self::InnerText(value),
            _ => Self::Plain { name, value },
        }
    }
}

/// An ordered attribute specification.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Attributes {
    attributes: Vec<Attribute>,
}

impl Attributes {
    /// Creates an empty attribute specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute.
    pub fn add(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Returns directives in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Returns `true` if there is no directive.
    pub const fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iterator: I) -> Self {
        Self {
            attributes: iterator.into_iter().collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .map(|(name, value)| Attribute::new(name, value))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for Attributes {
    fn from(attributes: Vec<(K, V)>) -> Self {
        attributes.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(attributes: [(K, V); N]) -> Self {
        attributes.into_iter().collect()
    }
}

impl From<Option<Self>> for Attributes {
    fn from(attributes: Option<Self>) -> Self {
        attributes.unwrap_or_default()
    }
}
