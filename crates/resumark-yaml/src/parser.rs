//! YAML parser that builds [`YamlNode`] trees with source ranges.

use crate::node::{MappingEntry, YamlNode};
use crate::{Error, Result};
use resumark_source_map::{Position, Range, offset_to_position};
use yaml_rust2::Yaml;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::Marker;

/// Parse YAML from a string, producing a [`YamlNode`] tree.
///
/// Parses a single document; if the input contains multiple documents,
/// only the first one is read.
///
/// # Errors
///
/// Returns an error if the YAML is syntactically invalid or the input
/// contains no document.
pub fn parse(content: &str) -> Result<YamlNode> {
    parse_with_origin(content, 0)
}

/// Parse embedded YAML whose first line sits at `origin_line` of the
/// enclosing document.
///
/// All ranges in the returned tree are reported in the enclosing
/// document's coordinates. The embedded content must start at column
/// zero of its lines (frontmatter bodies and fenced-block interiors do).
///
/// # Errors
///
/// Returns an error if the YAML is syntactically invalid or the input
/// contains no document.
pub fn parse_with_origin(content: &str, origin_line: u32) -> Result<YamlNode> {
    let mut parser = Parser::new_from_str(content);
    let mut builder = NodeBuilder::new(content, origin_line);

    parser
        .load(&mut builder, false) // false = single document only
        .map_err(Error::from)?;

    builder.result()
}

/// Builder that implements `MarkedEventReceiver` to construct the tree.
struct NodeBuilder<'a> {
    /// The source text being parsed.
    source: &'a str,

    /// Line of the enclosing document at which `source` begins.
    origin_line: u32,

    /// Stack of collections being constructed.
    stack: Vec<BuildNode>,

    /// The completed root node.
    root: Option<YamlNode>,
}

/// A collection node being constructed during parsing.
enum BuildNode {
    Sequence {
        start_offset: usize,
        items: Vec<YamlNode>,
    },
    Mapping {
        start_offset: usize,
        entries: Vec<(YamlNode, Option<YamlNode>)>,
    },
}

impl<'a> NodeBuilder<'a> {
    fn new(source: &'a str, origin_line: u32) -> Self {
        Self {
            source,
            origin_line,
            stack: Vec::new(),
            root: None,
        }
    }

    fn result(self) -> Result<YamlNode> {
        self.root.ok_or(Error::EmptyDocument)
    }

    fn push_complete(&mut self, node: YamlNode) {
        let Some(parent) = self.stack.last_mut() else {
            self.root = Some(node);
            return;
        };

        match parent {
            BuildNode::Sequence { items, .. } => {
                items.push(node);
            }
            BuildNode::Mapping { entries, .. } => {
                match entries.last_mut() {
                    Some((_, value @ None)) => *value = Some(node),
                    // Previous entry complete (or no entry yet): this is a new key.
                    _ => entries.push((node, None)),
                }
            }
        }
    }

    fn position_at(&self, offset: usize) -> Position {
        let clamped = offset.min(self.source.len());
        let mut pos = offset_to_position(self.source, clamped)
            .expect("offset clamped to source bounds");
        pos.line += self.origin_line;
        pos
    }

    fn range_between(&self, start_offset: usize, end_offset: usize) -> Range {
        Range::new(self.position_at(start_offset), self.position_at(end_offset))
    }

    /// Approximate the source length of a scalar from its parsed value.
    ///
    /// Quoting and escapes make the raw span longer than the value; the
    /// approximation errs short, which keeps ranges inside the document.
    fn scalar_len(value: &str) -> usize {
        value.len()
    }
}

impl MarkedEventReceiver for NodeBuilder<'_> {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        match ev {
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::DocumentEnd => {}

            Event::Scalar(value, _style, _anchor_id, _tag) => {
                let start = marker.index();
                let range = self.range_between(start, start + Self::scalar_len(&value));
                let yaml = parse_scalar_value(&value);
                self.push_complete(YamlNode::scalar(yaml, range));
            }

            Event::SequenceStart(_anchor_id, _tag) => {
                self.stack.push(BuildNode::Sequence {
                    start_offset: marker.index(),
                    items: Vec::new(),
                });
            }

            Event::SequenceEnd => {
                let build_node = self.stack.pop().expect("SequenceEnd without SequenceStart");

                if let BuildNode::Sequence {
                    start_offset,
                    items,
                } = build_node
                {
                    let range = self.range_between(start_offset, marker.index());
                    let yaml_items: Vec<Yaml> = items.iter().map(|n| n.yaml.clone()).collect();
                    let node = YamlNode::sequence(Yaml::Array(yaml_items), range, items);
                    self.push_complete(node);
                } else {
                    panic!("expected sequence build node");
                }
            }

            Event::MappingStart(_anchor_id, _tag) => {
                self.stack.push(BuildNode::Mapping {
                    start_offset: marker.index(),
                    entries: Vec::new(),
                });
            }

            Event::MappingEnd => {
                let build_node = self.stack.pop().expect("MappingEnd without MappingStart");

                if let BuildNode::Mapping {
                    start_offset,
                    entries,
                } = build_node
                {
                    let range = self.range_between(start_offset, marker.index());

                    let mut mapping_entries = Vec::new();
                    let mut yaml_pairs = Vec::new();

                    for (key, value) in entries {
                        let value = value.expect("mapping entry without value");
                        let entry_range = key.range.cover(value.range);
                        yaml_pairs.push((key.yaml.clone(), value.yaml.clone()));
                        mapping_entries.push(MappingEntry {
                            key,
                            value,
                            range: entry_range,
                        });
                    }

                    let yaml = Yaml::Hash(yaml_pairs.into_iter().collect());
                    let node = YamlNode::mapping(yaml, range, mapping_entries);
                    self.push_complete(node);
                } else {
                    panic!("expected mapping build node");
                }
            }

            Event::Alias(_anchor_id) => {
                // Aliases are not part of the CV dialect; decode as null.
                let range = Range::point(self.position_at(marker.index()));
                self.push_complete(YamlNode::scalar(Yaml::Null, range));
            }
        }
    }
}

/// Parse a scalar string value into the appropriate Yaml type.
///
/// Handles type inference: integers, floats, booleans, null, and strings.
fn parse_scalar_value(value: &str) -> Yaml {
    if let Ok(i) = value.parse::<i64>() {
        return Yaml::Integer(i);
    }

    if value.parse::<f64>().is_ok() {
        return Yaml::Real(value.to_string());
    }

    match value {
        "true" | "True" | "TRUE" => return Yaml::Boolean(true),
        "false" | "False" | "FALSE" => return Yaml::Boolean(false),
        "null" | "Null" | "NULL" | "~" | "" => return Yaml::Null,
        _ => {}
    }

    Yaml::String(value.to_string())
}
