use crate::{element::Element, error::Error};
use log::trace;

/// An HTML document creating detached elements.
///
/// Element and attribute names are lowercased.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Document;

impl Document {
    /// Creates a document.
    pub const fn new() -> Self {
        Self
    }

    /// Creates an element.
    pub fn create_element(&self, name: &str) -> Result<Element, Error> {
        let name = normalize_name(name)?;

        trace!("creating <{name}>");

        Ok(Element::new(name, vec![], vec![]))
    }

    /// Sets an attribute on an element.
    pub fn set_attribute(
        &self,
        element: &mut Element,
        name: &str,
        value: &str,
    ) -> Result<(), Error> {
        element.set_attribute_unchecked(&normalize_name(name)?, value);

        Ok(())
    }
}

fn normalize_name(name: &str) -> Result<String, Error> {
    if !is_valid_name(name) {
        return Err(Error::InvalidCharacter(name.into()));
    }

    Ok(name.to_ascii_lowercase())
}

fn is_valid_name(name: &str) -> bool {
    let mut characters = name.chars();

    characters.next().is_some_and(|character| {
        character.is_ascii_alphabetic() || matches!(character, '_' | ':') || !character.is_ascii()
    }) && characters.all(|character| {
        character.is_ascii_alphanumeric()
            || matches!(character, '-' | '.' | '_' | ':')
            || !character.is_ascii()
    })
}
