//! ESTree JSON to arena tree conversion.
//!
//! Any JSON object with a string `type` property is a node. Its children are
//! the property values that are nodes, or arrays of nodes, in the order the
//! properties appear in the document; `null` holes (e.g. elided array
//! elements) are skipped and non-node objects such as `loc` or `regex` are
//! ignored.

use mergewalk_ast::{AstArena, Node, NodeData, NodeType, Span};
use serde_json::{Map, Value};
use tracing::debug;

use crate::EstreeError;

/// Properties that describe the node itself rather than a child.
const RESERVED_KEYS: &[&str] = &["type", "start", "end", "range", "loc"];

/// Parses an ESTree JSON document and converts its root node.
pub fn parse_estree_json<'a>(arena: &'a AstArena, json: &str) -> Result<&'a Node<'a>, EstreeError> {
    let value: Value = serde_json::from_str(json)?;
    let root = convert_value(arena, &value)?;
    debug!(
        "Loaded ESTree {} ({} bytes allocated)",
        root.node_type,
        arena.allocated_bytes()
    );
    Ok(root)
}

/// Converts an already parsed ESTree node into the arena.
pub fn convert_value<'a>(arena: &'a AstArena, value: &Value) -> Result<&'a Node<'a>, EstreeError> {
    let object = value.as_object().ok_or(EstreeError::NotANode)?;
    let type_name = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or(EstreeError::MissingType)?;
    let node_type = parse_node_type(type_name)?;

    let mut children = Vec::new();
    for (key, property) in object {
        if RESERVED_KEYS.contains(&key.as_str()) {
            continue;
        }
        match property {
            Value::Object(_) if is_node(property) => children.push(convert_value(arena, property)?),
            Value::Array(items) => {
                for item in items.iter().filter(|item| is_node(item)) {
                    children.push(convert_value(arena, item)?);
                }
            }
            _ => {}
        }
    }

    let node = Node::new_parent(node_type, span_of(object), arena.alloc_children(&children))
        .with_data(data_of(arena, node_type, object));
    Ok(arena.alloc_node(node))
}

fn parse_node_type(type_name: &str) -> Result<NodeType, EstreeError> {
    serde_json::from_value(Value::String(type_name.to_owned()))
        .map_err(|_| EstreeError::unknown_node_type(type_name))
}

fn is_node(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|object| object.get("type"))
        .is_some_and(Value::is_string)
}

fn span_of(object: &Map<String, Value>) -> Span {
    let offset = |value: Option<&Value>| {
        value
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    };

    if let (Some(start), Some(end)) = (offset(object.get("start")), offset(object.get("end"))) {
        return Span::new(start, end);
    }
    if let Some([start, end]) = object
        .get("range")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        && let (Some(start), Some(end)) = (offset(Some(start)), offset(Some(end)))
    {
        return Span::new(start, end);
    }
    Span::default()
}

fn data_of<'a>(arena: &'a AstArena, node_type: NodeType, object: &Map<String, Value>) -> NodeData<'a> {
    let text = |key: &str| object.get(key).and_then(Value::as_str).map(|s| arena.alloc_str(s));

    if let Some(name) = text("name") {
        return NodeData::Name(name);
    }
    if node_type == NodeType::Literal
        && let Some(raw) = text("raw")
    {
        return NodeData::Raw(raw);
    }
    if let Some(operator) = text("operator") {
        return NodeData::Operator(operator);
    }
    if matches!(
        node_type,
        NodeType::VariableDeclaration | NodeType::Property | NodeType::MethodDefinition
    ) && let Some(kind) = text("kind")
    {
        return NodeData::Kind(kind);
    }
    NodeData::None
}
