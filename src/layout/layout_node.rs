use hashlink::LinkedHashMap;

/// A directory in a project layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutNode {
    /// Named subdirectories, kept in insertion order
    Mapping {
        children: LinkedHashMap<String, LayoutNode>,
    },
    /// Leaf entries, never recursed into
    Sequence { entries: Vec<String> },
}

impl LayoutNode {
    pub fn mapping<K>(children: impl IntoIterator<Item = (K, LayoutNode)>) -> Self
    where
        K: Into<String>,
    {
        LayoutNode::Mapping {
            children: children
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }

    pub fn sequence<S>(entries: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        LayoutNode::Sequence {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of lines a tree printer emits for this node and its descendants.
    pub fn line_count(&self) -> usize {
        match self {
            LayoutNode::Mapping { children } => children
                .values()
                .map(|child| 1 + child.line_count())
                .sum(),
            LayoutNode::Sequence { entries } => entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_preserves_insertion_order() {
        let node = LayoutNode::mapping([
            ("zeta", LayoutNode::sequence::<&str>([])),
            ("alpha", LayoutNode::sequence::<&str>([])),
            ("mid", LayoutNode::sequence::<&str>([])),
        ]);

        let LayoutNode::Mapping { children } = node else {
            panic!("expected a mapping");
        };
        let keys = children.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn sequence_line_count_is_number_of_entries() {
        let node = LayoutNode::sequence(["a", "b", "c"]);
        assert_eq!(node.line_count(), 3);
    }

    #[test]
    fn empty_sequence_has_no_lines() {
        assert_eq!(LayoutNode::sequence::<&str>([]).line_count(), 0);
    }

    #[test]
    fn mapping_line_count_includes_keys_and_descendants() {
        let node = LayoutNode::mapping([
            (
                "A",
                LayoutNode::mapping([("B", LayoutNode::sequence(["x", "y"]))]),
            ),
            ("C", LayoutNode::sequence::<&str>([])),
        ]);
        // A, B, x, y, C
        assert_eq!(node.line_count(), 5);
    }
}
