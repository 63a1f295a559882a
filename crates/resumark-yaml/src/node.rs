//! YAML nodes annotated with source ranges.

use resumark_source_map::Range;
use yaml_rust2::Yaml;

/// A YAML node together with the source range it was parsed from.
///
/// The `yaml` field holds the plain parsed value; `content` mirrors the
/// node's structure with ranges preserved for every child.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlNode {
    /// The parsed YAML value.
    pub yaml: Yaml,
    /// The source range covering this node.
    pub range: Range,
    /// Structured view of the node with ranges for children.
    pub content: NodeContent,
}

/// Structural content of a [`YamlNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    /// A scalar value (string, number, boolean, null).
    Scalar,
    /// A sequence of nodes.
    Sequence(Vec<YamlNode>),
    /// A mapping of key/value entries in declaration order.
    Mapping(Vec<MappingEntry>),
}

/// One key/value entry of a YAML mapping, with ranges for the key, the
/// value, and the entry as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingEntry {
    pub key: YamlNode,
    pub value: YamlNode,
    /// Range from the start of the key to the end of the value.
    pub range: Range,
}

impl YamlNode {
    /// Create a scalar node.
    pub fn scalar(yaml: Yaml, range: Range) -> Self {
        Self {
            yaml,
            range,
            content: NodeContent::Scalar,
        }
    }

    /// Create a sequence node.
    pub fn sequence(yaml: Yaml, range: Range, items: Vec<YamlNode>) -> Self {
        Self {
            yaml,
            range,
            content: NodeContent::Sequence(items),
        }
    }

    /// Create a mapping node.
    pub fn mapping(yaml: Yaml, range: Range, entries: Vec<MappingEntry>) -> Self {
        Self {
            yaml,
            range,
            content: NodeContent::Mapping(entries),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.content, NodeContent::Scalar)
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self.content, NodeContent::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self.content, NodeContent::Mapping(_))
    }

    /// The string value of this node, if it is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        self.yaml.as_str()
    }

    /// The integer value of this node, if it is an integer scalar.
    pub fn as_i64(&self) -> Option<i64> {
        self.yaml.as_i64()
    }

    /// The boolean value of this node, if it is a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        self.yaml.as_bool()
    }

    /// Whether this node is a null scalar (an empty value).
    pub fn is_null(&self) -> bool {
        matches!(self.yaml, Yaml::Null)
    }

    /// Render any scalar (string, integer, real, boolean) as text.
    ///
    /// Typed decoders use this for fields like a table year, which users
    /// write unquoted and the scanner types as an integer.
    pub fn scalar_to_string(&self) -> Option<String> {
        match &self.yaml {
            Yaml::String(s) => Some(s.clone()),
            Yaml::Integer(i) => Some(i.to_string()),
            Yaml::Real(r) => Some(r.clone()),
            Yaml::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// The items of this node, if it is a sequence.
    pub fn as_sequence(&self) -> Option<&[YamlNode]> {
        match &self.content {
            NodeContent::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The entries of this node, if it is a mapping.
    pub fn as_mapping(&self) -> Option<&[MappingEntry]> {
        match &self.content {
            NodeContent::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a mapping value by string key.
    pub fn get(&self, key: &str) -> Option<&YamlNode> {
        self.get_entry(key).map(|entry| &entry.value)
    }

    /// Look up a whole mapping entry by string key.
    pub fn get_entry(&self, key: &str) -> Option<&MappingEntry> {
        self.as_mapping()?
            .iter()
            .find(|entry| entry.key.as_str() == Some(key))
    }

    /// Number of children (sequence items or mapping entries).
    pub fn len(&self) -> usize {
        match &self.content {
            NodeContent::Scalar => 0,
            NodeContent::Sequence(items) => items.len(),
            NodeContent::Mapping(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumark_source_map::Range;

    #[test]
    fn scalar_to_string_covers_primitive_types() {
        let range = Range::default();
        assert_eq!(
            YamlNode::scalar(Yaml::Integer(2014), range).scalar_to_string(),
            Some("2014".to_string())
        );
        assert_eq!(
            YamlNode::scalar(Yaml::String("abc".into()), range).scalar_to_string(),
            Some("abc".to_string())
        );
        assert_eq!(
            YamlNode::scalar(Yaml::Boolean(true), range).scalar_to_string(),
            Some("true".to_string())
        );
        assert_eq!(YamlNode::scalar(Yaml::Null, range).scalar_to_string(), None);
    }
}
