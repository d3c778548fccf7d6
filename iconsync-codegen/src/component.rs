//! Per-icon React module rendering.

use crate::discover::IconAsset;
use crate::error::Error;
use crate::svg;

/// Intermediate representation of one generated icon module: everything the
/// templates need, fully resolved and free of I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconModule {
    /// Identifier the component, its file, and its exports are named by.
    pub component_name: String,
    /// Raw design label, bound to `displayName` for provenance.
    pub display_name: String,
    /// JSX element produced by [`svg::to_jsx`].
    pub jsx: String,
}

impl IconModule {
    /// Lower a downloaded asset to its module IR.
    pub fn from_asset(asset: &IconAsset) -> Result<Self, Error> {
        Ok(Self {
            component_name: asset.node.component_name.clone(),
            display_name: asset.node.original_name.clone(),
            jsx: svg::to_jsx(&asset.svg, &asset.node.component_name)?,
        })
    }
}

/// Render the React module source for one icon.
pub fn render_component(module: &IconModule) -> String {
    let name = &module.component_name;
    let mut code = String::with_capacity(module.jsx.len() + 256);

    code.push_str("import React from 'react';\n\n");
    code.push_str(&format!(
        "const {name} = ({{ size = {}, color = '{}', ...props }}) => (\n",
        svg::DEFAULT_SIZE,
        svg::DEFAULT_COLOR
    ));
    code.push_str(&format!("  {}\n", module.jsx));
    code.push_str(");\n\n");
    code.push_str(&format!("{name}.displayName = '{}';\n\n", module.display_name));
    code.push_str(&format!("export default {name};\n"));
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discover::IconNode;

    fn asset() -> IconAsset {
        IconAsset {
            node: IconNode {
                id: "1:3".into(),
                original_name: "Icon / Download".into(),
                component_name: "IconDownload".into(),
            },
            svg: r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none"><path d="M12 3v10"/></svg>"#.into(),
        }
    }

    #[test]
    fn test_render_component_binds_defaults_and_display_name() {
        let module = IconModule::from_asset(&asset()).unwrap();
        let source = render_component(&module);

        assert!(source.starts_with("import React from 'react';\n"));
        assert!(source.contains(
            "const IconDownload = ({ size = 24, color = 'currentColor', ...props }) => ("
        ));
        assert!(source.contains("IconDownload.displayName = 'Icon / Download';"));
        assert!(source.ends_with("export default IconDownload;\n"));
    }

    #[test]
    fn test_render_component_is_deterministic() {
        let module = IconModule::from_asset(&asset()).unwrap();
        assert_eq!(render_component(&module), render_component(&module));
    }

    #[test]
    fn test_from_asset_propagates_template_errors() {
        let mut broken = asset();
        broken.svg = "<div/>".into();
        assert!(matches!(
            IconModule::from_asset(&broken),
            Err(Error::MissingSvgRoot { ref name }) if name == "IconDownload"
        ));
    }
}
