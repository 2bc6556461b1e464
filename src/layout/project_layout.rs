use std::borrow::Cow;

use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::layout::LayoutNode;

const BUILTIN_LAYOUT: &str = include_str!("project_layout.yaml");

/// A titled layout whose root is always a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    title: String,
    root: LayoutNode,
}

impl ProjectLayout {
    pub fn new(title: impl Into<String>, root: LinkedHashMap<String, LayoutNode>) -> Self {
        Self {
            title: title.into(),
            root: LayoutNode::Mapping { children: root },
        }
    }

    /// Decodes the layout compiled into the binary.
    pub fn builtin() -> Result<Self, LayoutError> {
        BUILTIN_LAYOUT.try_into()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn root(&self) -> &LayoutNode {
        &self.root
    }

    fn decode_node(value: &Yaml, path: &str) -> Result<LayoutNode, LayoutError> {
        if let Some(mapping) = value.as_mapping() {
            return Ok(LayoutNode::mapping(Self::decode_mapping(mapping, path)?));
        }

        let sequence = value
            .as_sequence()
            .context(UnsupportedNodeSnafu { path })?;
        let entries = sequence
            .iter()
            .map(|item| {
                item.as_str()
                    .map(|label| label.to_string())
                    .context(InvalidEntrySnafu { path })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LayoutNode::sequence(entries))
    }

    fn decode_mapping(
        mapping: &LinkedHashMap<Yaml, Yaml>,
        path: &str,
    ) -> Result<LinkedHashMap<String, LayoutNode>, LayoutError> {
        mapping
            .iter()
            .map(|(key, value)| {
                let name = key.as_str().context(InvalidKeySnafu { path })?;
                let child = Self::decode_node(value, &join_path(path, name))?;
                Ok((name.to_string(), child))
            })
            .collect()
    }
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

impl TryFrom<&str> for ProjectLayout {
    type Error = LayoutError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let top_level = documents
            .first()
            .context(MalformedLayoutSnafu)?
            .as_mapping()
            .context(TopLevelNotMapSnafu)?;

        let title = top_level
            .get(&Yaml::Value(Scalar::String(Cow::Borrowed("title"))))
            .and_then(|value| value.as_str())
            .context(MissingTitleSnafu)?
            .to_string();

        let root = top_level
            .get(&Yaml::Value(Scalar::String(Cow::Borrowed("structure"))))
            .context(MissingStructureSnafu)?
            .as_mapping()
            .context(RootNotMappingSnafu)?;
        let root = Self::decode_mapping(root, "")?;

        let layout = ProjectLayout::new(title, root);
        debug!(
            "Decoded layout '{}' with {} lines",
            layout.title,
            layout.root.line_count()
        );
        Ok(layout)
    }
}

#[derive(Debug, Snafu)]
pub enum LayoutError {
    #[snafu(display("Failed to parse the layout document"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Layout document is empty"))]
    MalformedLayout,
    #[snafu(display("Top level of the layout should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Layout is missing a string 'title'"))]
    MissingTitle,
    #[snafu(display("Layout is missing the 'structure' section"))]
    MissingStructure,
    #[snafu(display("The 'structure' section should be a map"))]
    RootNotMapping,
    #[snafu(display("Directory names under '{}' must be strings", path))]
    InvalidKey { path: String },
    #[snafu(display("'{}' should be a map or a list", path))]
    UnsupportedNode { path: String },
    #[snafu(display("Entries of '{}' must be strings", path))]
    InvalidEntry { path: String },
}
