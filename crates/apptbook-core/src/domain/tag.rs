use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, case-sensitive tag name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagName(String);

impl TagName {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if !is_valid_tag_name(trimmed) {
            return Err(CoreError::InvalidTagName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TagName {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TagName::new(&value)
    }
}

impl From<TagName> for String {
    fn from(value: TagName) -> Self {
        value.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_valid_tag_name(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphanumeric)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    #[default]
    Plain,
    Child,
}

/// Tags are identified by kind and name together: `Child("math")` and
/// `Plain("math")` are different tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub kind: TagKind,
    pub name: TagName,
}

impl Tag {
    pub fn plain(name: TagName) -> Self {
        Self {
            kind: TagKind::Plain,
            name,
        }
    }

    pub fn child(name: TagName) -> Self {
        Self {
            kind: TagKind::Child,
            name,
        }
    }

    pub fn is_child(&self) -> bool {
        self.kind == TagKind::Child
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::{Tag, TagKind, TagName};
    use crate::error::CoreError;

    #[test]
    fn tag_name_trims_and_keeps_case() {
        let name = TagName::new("  Math ").unwrap();
        assert_eq!(name.as_str(), "Math");
    }

    #[test]
    fn tag_name_rejects_non_alphanumeric() {
        assert_eq!(TagName::new("high school"), Err(CoreError::InvalidTagName));
        assert_eq!(TagName::new("math!"), Err(CoreError::InvalidTagName));
        assert_eq!(TagName::new("   "), Err(CoreError::InvalidTagName));
    }

    #[test]
    fn tag_identity_includes_kind() {
        let name = TagName::new("math").unwrap();
        assert_ne!(Tag::plain(name.clone()), Tag::child(name));
    }

    #[test]
    fn tag_deserializes_with_default_kind() {
        let tag: Tag = serde_json::from_str(r#"{"name":"math"}"#).unwrap();
        assert_eq!(tag.kind, TagKind::Plain);

        let child: Tag = serde_json::from_str(r#"{"kind":"child","name":"algebra"}"#).unwrap();
        assert!(child.is_child());

        assert!(serde_json::from_str::<Tag>(r#"{"name":"bad tag"}"#).is_err());
    }
}
