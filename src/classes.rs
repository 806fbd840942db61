/// A class specification.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Classes {
    /// No class.
    #[default]
    None,
    /// A class.
    Single(String),
    /// Classes.
    Many(Vec<String>),
}

impl Classes {
    /// Returns class names in order.
    ///
    /// An empty single class is skipped.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let classes: &[String] = match self {
            Self::None => &[],
            Self::Single(class) if class.is_empty() => &[],
            Self::Single(class) => core::slice::from_ref(class),
            Self::Many(classes) => classes,
        };

        classes.iter().map(String::as_str)
    }
}

impl From<&str> for Classes {
    fn from(class: &str) -> Self {
        Self::Single(class.into())
    }
}

impl From<String> for Classes {
    fn from(class: String) -> Self {
        Self::Single(class)
    }
}

impl<T: Into<String>> From<Vec<T>> for Classes {
    fn from(classes: Vec<T>) -> Self {
        Self::Many(classes.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<String>, const N: usize> From<[T; N]> for Classes {
    fn from(classes: [T; N]) -> Self {
        Self::Many(classes.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Classes {
    fn from(classes: Option<T>) -> Self {
        classes.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn iterate_none() {
        assert_eq!(Classes::None.iter().count(), 0);
    }

    #[test]
    fn iterate_single() {
        assert_eq!(Classes::from("foo").iter().collect::<Vec<_>>(), ["foo"]);
    }

    #[test]
    fn skip_empty_single() {
        assert_eq!(Classes::from("").iter().count(), 0);
    }

    #[test]
    fn iterate_many() {
        assert_eq!(
            Classes::from(["foo", "bar"]).iter().collect::<Vec<_>>(),
            ["foo", "bar"]
        );
        assert_eq!(
            Classes::from(vec!["foo".to_owned()]),
            Classes::Many(vec!["foo".into()])
        );
    }

    #[test]
    fn convert_option() {
        assert_eq!(Classes::from(None::<&str>), Classes::None);
        assert_eq!(Classes::from(Some("foo")), Classes::Single("foo".into()));
    }
}
