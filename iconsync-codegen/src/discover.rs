//! Component-node discovery over the Figma document tree.

use crate::name;
use iconsync_figma::Node;

/// Marker the design tool uses for reusable component nodes.
const COMPONENT_TYPE: &str = "COMPONENT";

/// A qualifying component node collected from the icon container subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconNode {
    /// Opaque node identifier, unique within the source file.
    pub id: String,
    /// Raw design label, lightly escaped.
    pub original_name: String,
    /// Derived PascalCase identifier, unique within one run.
    pub component_name: String,
}

/// An [`IconNode`] whose rendered markup has been downloaded.
#[derive(Debug, Clone)]
pub struct IconAsset {
    pub node: IconNode,
    pub svg: String,
}

/// Collect every qualifying icon node from the container subtree.
///
/// Traversal is depth-first in document order; the output order is the order
/// every generated artifact uses. Colliding derived names are disambiguated
/// before returning, so the result always carries unique `component_name`s.
/// An empty result is not an error.
pub fn extract_icons(root: &Node) -> Vec<IconNode> {
    let mut icons = Vec::new();
    collect(root, &mut icons);
    name::resolve_collisions(&mut icons);
    icons
}

fn collect(node: &Node, icons: &mut Vec<IconNode>) {
    if node.node_type == COMPONENT_TYPE && !node.name.is_empty() {
        icons.push(IconNode {
            id: node.id.clone(),
            original_name: name::escape_label(&node.name),
            component_name: name::component_name(&node.name),
        });
    }
    for child in &node.children {
        collect(child, icons);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Node {
        serde_json::from_value(serde_json::json!({
            "id": "0:1",
            "name": "Icons",
            "type": "FRAME",
            "children": [
                { "id": "1:1", "name": "Icon / Download", "type": "COMPONENT" },
                {
                    "id": "1:2",
                    "name": "Group",
                    "type": "GROUP",
                    "children": [
                        { "id": "1:3", "name": "2Home", "type": "COMPONENT" },
                        { "id": "1:4", "name": "", "type": "COMPONENT" }
                    ]
                },
                { "id": "1:5", "name": "Decoration", "type": "RECTANGLE" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_extract_icons_walks_depth_first_in_document_order() {
        let icons = extract_icons(&tree());

        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].id, "1:1");
        assert_eq!(icons[0].component_name, "IconDownload");
        assert_eq!(icons[0].original_name, "Icon / Download");
        assert_eq!(icons[1].component_name, "_2Home");
    }

    #[test]
    fn test_extract_icons_skips_unnamed_and_non_component_nodes() {
        let icons = extract_icons(&tree());
        assert!(icons.iter().all(|i| i.id != "1:4" && i.id != "1:5"));
    }

    #[test]
    fn test_extract_icons_returns_empty_for_barren_tree() {
        let root: Node = serde_json::from_value(serde_json::json!({
            "id": "0:1", "name": "Empty", "type": "FRAME", "children": []
        }))
        .unwrap();
        assert!(extract_icons(&root).is_empty());
    }

    #[test]
    fn test_extract_icons_disambiguates_collisions() {
        let root: Node = serde_json::from_value(serde_json::json!({
            "id": "0:1",
            "name": "Icons",
            "type": "FRAME",
            "children": [
                { "id": "1:1", "name": "Icon / Star", "type": "COMPONENT" },
                { "id": "1:2", "name": "icon star", "type": "COMPONENT" }
            ]
        }))
        .unwrap();

        let icons = extract_icons(&root);
        assert_eq!(icons[0].component_name, "IconStar");
        assert_eq!(icons[1].component_name, "IconStar2");
    }
}
