//! Wire types for the Figma REST endpoints the pipeline consumes.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::{self, Formatter};
use std::str::FromStr;

/// An entry in the Figma document tree (frame, group, component, ...).
///
/// Only the fields the pipeline reads are modelled; everything else in the
/// response is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// One entry of the `nodes` map in a `GET /files/{id}/nodes` response.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeWrapper {
    pub document: Node,
}

/// Response of `GET /files/{file_id}/nodes?ids=...`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetFileNodesResponse {
    #[serde(default)]
    pub nodes: HashMap<String, NodeWrapper>,
}

/// Response of `GET /images/{file_id}?ids=...&format=...`.
///
/// `images` maps each requested node id to a short-lived download URL; the
/// value is `null` when Figma could not render that node.
#[derive(Debug, Clone, Deserialize)]
pub struct GetImagesResponse {
    #[serde(default)]
    pub err: Option<String>,
    #[serde(default)]
    pub images: HashMap<String, Option<String>>,
}

/// Rendered image format accepted by the images endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Svg,
    Png,
    Jpg,
    Pdf,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(ImageFormat::Svg),
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpg),
            "pdf" => Ok(ImageFormat::Pdf),
            other => Err(format!("unknown image format '{other}' (expected svg, png, jpg or pdf)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_tree_deserializes_with_missing_fields() {
        let json = r#"{
            "id": "1:2",
            "name": "Icons",
            "type": "FRAME",
            "children": [
                { "id": "1:3", "name": "Icon / Download", "type": "COMPONENT" },
                { "id": "1:4", "type": "GROUP", "children": [] }
            ]
        }"#;

        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.node_type, "FRAME");
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].node_type, "COMPONENT");
        assert!(node.children[0].children.is_empty());
        assert!(node.children[1].name.is_empty());
    }

    #[test]
    fn test_images_response_keeps_null_entries() {
        let json = r#"{
            "err": null,
            "images": {
                "1:3": "https://figma-alpha-api.s3.amazonaws.com/x.svg",
                "1:4": null
            }
        }"#;

        let response: GetImagesResponse = serde_json::from_str(json).unwrap();
        assert!(response.err.is_none());
        assert_eq!(response.images.len(), 2);
        assert!(response.images["1:3"].is_some());
        assert!(response.images["1:4"].is_none());
    }

    #[test]
    fn test_image_format_round_trip() {
        assert_eq!("svg".parse::<ImageFormat>().unwrap(), ImageFormat::Svg);
        assert_eq!("JPEG".parse::<ImageFormat>().unwrap(), ImageFormat::Jpg);
        assert_eq!(ImageFormat::Pdf.to_string(), "pdf");
        assert!("webp".parse::<ImageFormat>().is_err());
    }
}
