use crate::{
    attribute::{Attribute, Attributes},
    classes::Classes,
    document::Document,
    element::Element,
    error::Error,
    value,
};
use serde_json::Value;

const NON_STRING_CLASS: &str = "Classes must be a string";
const INVALID_CLASSES: &str = "Classes must be an array or a string";
const INVALID_ATTRIBUTES: &str = "Attributes must be an object";

/// Creates an element in an HTML document.
///
/// # Examples
///
/// ```
/// let element = aztools::create_element("div", "foo", [("id", "bar")])?;
///
/// assert_eq!(element.outer_html(), r#"<div class="foo" id="bar"></div>"#);
/// # Ok::<(), aztools::Error>(())
/// ```
pub fn create_element(
    tag: &str,
    classes: impl Into<Classes>,
    attributes: impl Into<Attributes>,
) -> Result<Element, Error> {
    ElementBuilder::default().build(tag, &classes.into(), &attributes.into())
}

/// An element builder.
///
/// Markup given with the `innerHTML` key is injected as is. Callers must
/// sanitize untrusted input themselves.
///
/// Building emits `trace`-level log records only.
#[derive(Clone, Copy, Debug, Default)]
pub struct ElementBuilder {
    document: Document,
}

impl ElementBuilder {
    /// Creates an element builder.
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    /// Builds an element.
    pub fn build(
        &self,
        tag: &str,
        classes: &Classes,
        attributes: &Attributes,
    ) -> Result<Element, Error> {
        let mut element = self.document.create_element(tag)?;

        Self::apply_classes(&mut element, classes)?;
        self.apply_attributes(&mut element, attributes)?;

        Ok(element)
    }

    /// Builds an element from loosely typed classes and attributes.
    ///
    /// Falsy values skip their application.
    pub fn build_value(
        &self,
        tag: &str,
        classes: &Value,
        attributes: &Value,
    ) -> Result<Element, Error> {
        let mut element = self.document.create_element(tag)?;

        Self::apply_class_value(&mut element, classes)?;
        self.apply_attribute_value(&mut element, attributes)?;

        Ok(element)
    }

    /// Adds classes to an element.
    ///
    /// Classes added before a failure stay on the element.
    pub fn apply_classes(element: &mut Element, classes: &Classes) -> Result<(), Error> {
        for class in classes.iter() {
            element.add_class(class)?;
        }

        Ok(())
    }

    /// Applies attribute directives to an element in order.
    pub fn apply_attributes(
        &self,
        element: &mut Element,
        attributes: &Attributes,
    ) -> Result<(), Error> {
        for attribute in attributes.iter() {
            self.apply_attribute(element, attribute)?;
        }

        Ok(())
    }

    /// Adds loosely typed classes to an element.
    ///
    /// Classes added before a failure stay on the element.
    pub fn apply_class_value(element: &mut Element, classes: &Value) -> Result<(), Error> {
        if !value::is_truthy(classes) {
            return Ok(());
        }

        match classes {
            Value::Array(classes) => {
                for class in classes {
                    let Value::String(class) = class else {
                        return Err(Error::InvalidArgument(NON_STRING_CLASS));
                    };

                    element.add_class(class)?;
                }

                Ok(())
            }
            Value::String(class) => element.add_class(class),
            _ => Err(Error::InvalidArgument(INVALID_CLASSES)),
        }
    }

    /// Applies loosely typed attributes to an element in enumeration order.
    pub fn apply_attribute_value(
        &self,
        element: &mut Element,
        attributes: &Value,
    ) -> Result<(), Error> {
        if !value::is_truthy(attributes) {
            return Ok(());
        }

        let Some(entries) = value::entries(attributes) else {
            return Err(Error::InvalidArgument(INVALID_ATTRIBUTES));
        };

        for (name, attribute) in entries {
            self.apply_attribute(element, &value::attribute(name, attribute))?;
        }

        Ok(())
    }

    fn apply_attribute(&self, element: &mut Element, attribute: &Attribute) -> Result<(), Error> {
        match attribute {
            Attribute::InnerHtml(markup) => element.set_inner_html(markup),
            Attribute::InnerText(text) => element.set_inner_text(text),
            Attribute::Plain { name, value } => {
                self.document.set_attribute(element, name, value)?
            }
        }

        Ok(())
    }
}
