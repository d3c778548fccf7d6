//! # iconsync-figma
//!
//! Typed client for the read-only slice of the Figma REST API that the icon
//! sync pipeline consumes: fetching a node subtree, requesting rendered-image
//! URLs for a set of node ids, and downloading the rendered bodies.

pub mod client;
pub mod error;
pub mod models;

pub use client::{FigmaBuilder, FigmaClient, default_base_url};
pub use error::Error;
pub use models::{GetFileNodesResponse, GetImagesResponse, ImageFormat, Node};
