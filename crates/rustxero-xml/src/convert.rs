//! The tree-to-record converter: tagged trees to semantically-typed records.

use rustxero_record::{Mapping, Record, ResourceDescriptor, Scalar, TaggedNode, coerce};

/// Convert a tagged tree into a [`Record`].
///
/// The shape of the result is decided by the node's element children:
///
/// - no children: the node is a leaf and its (uncoerced) text is the value;
/// - one child: a mapping with that single field;
/// - two or more children: each `(tag, subtree)` pair becomes either a
///   coerced scalar field (leaf subtree), a collection item (the tag is a
///   multi-instance element or the descriptor's singular name), or a nested
///   record.
///
/// Collection handling is all-or-nothing per call: the first collection item
/// turns the result for this node into a sequence, and any ordinary fields
/// accumulated before it are discarded. The service always groups repeated
/// elements contiguously, so in practice nothing is lost; the behavior is
/// kept as-is for wire compatibility rather than silently merged. A repeated
/// key that is *not* a collection key overwrites the previous value
/// (last-write-wins).
///
/// Output is a pure function of the tree and the descriptor.
#[must_use]
pub fn to_record(node: &TaggedNode, descriptor: &ResourceDescriptor) -> Record {
    match node.children.len() {
        0 => Record::Scalar(Scalar::Str(
            node.text.clone().unwrap_or_default(),
        )),
        1 => {
            let child = &node.children[0];
            let mut mapping = Mapping::new();
            mapping.insert(child.tag.clone(), convert_subtree(child, descriptor));
            Record::Mapping(mapping)
        }
        _ => convert_group(&node.children, descriptor),
    }
}

/// Convert one `(key, subtree)` pair: leaves are coerced scalars, everything
/// else recurses.
fn convert_subtree(child: &TaggedNode, descriptor: &ResourceDescriptor) -> Record {
    if child.is_leaf() {
        Record::Scalar(coerce(
            &child.tag,
            child.text.as_deref().unwrap_or_default(),
        ))
    } else {
        to_record(child, descriptor)
    }
}

/// Convert a group of two or more sibling elements.
fn convert_group(children: &[TaggedNode], descriptor: &ResourceDescriptor) -> Record {
    let mut mapping = Mapping::new();
    let mut sequence: Option<Vec<Record>> = None;

    for child in children {
        let key = child.tag.as_str();

        if !child.is_leaf() && descriptor.is_collection_key(key) {
            let item = to_record(child, descriptor);
            match &mut sequence {
                Some(items) => items.push(item),
                None => {
                    if !mapping.is_empty() {
                        tracing::debug!(
                            key,
                            discarded = mapping.len(),
                            "collection takeover discards previously accumulated fields"
                        );
                    }
                    sequence = Some(vec![item]);
                }
            }
            continue;
        }

        let value = convert_subtree(child, descriptor);
        match &mut sequence {
            Some(_) => {
                tracing::debug!(key, "field after collection takeover is dropped");
            }
            None => {
                mapping.insert(key.to_owned(), value);
            }
        }
    }

    match sequence {
        Some(items) => Record::Sequence(items),
        None => Record::Mapping(mapping),
    }
}
