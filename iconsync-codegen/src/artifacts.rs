//! Aggregate artifact rendering: barrel module, type declarations, README.
//!
//! Every renderer is a pure function of the ordered module list, so two runs
//! over identical inputs produce byte-identical output.

use crate::component::{IconModule, render_component};
use std::path::{Path, PathBuf};

/// A rendered artifact ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Output locations for one run. All targets are overwritten unconditionally;
/// parent directories are created on demand by the writer.
#[derive(Debug, Clone)]
pub struct ArtifactLayout {
    pub icons_dir: PathBuf,
    pub index_file: PathBuf,
    pub types_file: PathBuf,
    pub readme_file: PathBuf,
}

impl ArtifactLayout {
    /// Import prefix the barrel uses to reach the per-icon modules, derived
    /// from the position of the icons directory relative to the barrel.
    fn import_prefix(&self) -> String {
        let parent = self.index_file.parent().unwrap_or_else(|| Path::new(""));
        match self.icons_dir.strip_prefix(parent) {
            Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Ok(rel) => format!("./{}", rel.to_string_lossy().replace('\\', "/")),
            Err(_) => "./icons".to_string(),
        }
    }
}

/// Assemble every artifact for one run as pure values, in write order:
/// per-icon modules first, then barrel, type declarations, and README.
pub fn plan_artifacts(
    modules: &[IconModule],
    layout: &ArtifactLayout,
    package_name: &str,
) -> Vec<GeneratedFile> {
    let mut files = Vec::with_capacity(modules.len() + 3);
    for module in modules {
        files.push(GeneratedFile {
            path: layout.icons_dir.join(format!("{}.js", module.component_name)),
            content: render_component(module),
        });
    }
    files.push(GeneratedFile {
        path: layout.index_file.clone(),
        content: render_index(modules, &layout.import_prefix()),
    });
    files.push(GeneratedFile {
        path: layout.types_file.clone(),
        content: render_type_declarations(modules),
    });
    files.push(GeneratedFile {
        path: layout.readme_file.clone(),
        content: render_readme(modules, package_name),
    });
    files
}

/// Render the barrel module: one re-export per icon, the `AllIcons` mapping,
/// and the ordered `IconNames` list. The mapping's key set always equals the
/// name list's contents, in the same order.
pub fn render_index(modules: &[IconModule], import_prefix: &str) -> String {
    let mut code = String::from("// Auto-generated from Figma - Do not edit\n");
    for module in modules {
        code.push_str(&format!(
            "export {{ default as {name} }} from '{import_prefix}/{name}';\n",
            name = module.component_name
        ));
    }

    code.push_str("\n// All icons object\n");
    if modules.is_empty() {
        code.push_str("export const AllIcons = {};\n");
    } else {
        code.push_str("export const AllIcons = {\n");
        let members: Vec<String> =
            modules.iter().map(|m| format!("  {}", m.component_name)).collect();
        code.push_str(&members.join(",\n"));
        code.push_str("\n};\n");
    }

    code.push_str("\n// Icon names array\nexport const IconNames = [");
    let names: Vec<String> =
        modules.iter().map(|m| format!("'{}'", m.component_name)).collect();
    code.push_str(&names.join(", "));
    code.push_str("];\n");
    code
}

/// Render the type-declaration module: the fixed `IconProps` contract applied
/// uniformly to every icon, the typed `AllIcons` mapping, and `IconNames`.
pub fn render_type_declarations(modules: &[IconModule]) -> String {
    let mut code = String::from("import React from 'react';\n\n");
    code.push_str("interface IconProps {\n");
    code.push_str("  size?: number | string;\n");
    code.push_str("  color?: string;\n");
    code.push_str("  className?: string;\n");
    code.push_str("  style?: React.CSSProperties;\n");
    code.push_str("  [key: string]: any;\n");
    code.push_str("}\n\n");
    code.push_str("type IconComponent = React.FC<IconProps>;\n\n");

    for module in modules {
        code.push_str(&format!(
            "export declare const {}: IconComponent;\n",
            module.component_name
        ));
    }

    if modules.is_empty() {
        code.push_str("\nexport declare const AllIcons: {};\n");
    } else {
        code.push_str("\nexport declare const AllIcons: {\n");
        for module in modules {
            code.push_str(&format!("  {}: IconComponent;\n", module.component_name));
        }
        code.push_str("};\n");
    }

    code.push_str("\nexport declare const IconNames: string[];\n");
    code
}

/// Render the README: install/usage samples, the prop contract, and a
/// catalogue of every icon with provenance back to its design label.
pub fn render_readme(modules: &[IconModule], package_name: &str) -> String {
    let sample: Vec<&str> = modules.iter().take(3).map(|m| m.component_name.as_str()).collect();
    let first = sample.first().copied().unwrap_or("Home");
    let second = sample.get(1).copied().unwrap_or("Home");
    let third = sample.get(2).copied().unwrap_or("Search");
    let import_list =
        if sample.is_empty() { "Home, Search".to_string() } else { sample.join(", ") };

    let catalogue: String = modules
        .iter()
        .map(|m| format!("- **{}** (`{}`)\n", m.component_name, m.display_name))
        .collect();

    format!(
        r#"# {package_name}

React icon library automatically synced from Figma.

## Installation

```bash
npm install {package_name}
```

## Usage

### Individual Icons
```jsx
import {{ {import_list} }} from '{package_name}';

function App() {{
  return (
    <div>
      <{first} size={{24}} />
      <{second} size={{32}} color="blue" />
      <{third} className="my-icon" />
    </div>
  );
}}
```

### All Icons
```jsx
import {{ AllIcons }} from '{package_name}';

function IconGrid() {{
  return (
    <div>
      {{Object.entries(AllIcons).map(([name, Icon]) => (
        <div key={{name}}>
          <Icon size={{24}} />
          <span>{{name}}</span>
        </div>
      ))}}
    </div>
  );
}}
```

## Props

All icons accept these props:
- `size`: number | string (default: 24)
- `color`: string (default: 'currentColor')
- `className`: string
- `style`: React.CSSProperties
- Any other SVG props

## Available Icons ({count})

{catalogue}
---

*Auto-updated from Figma*
"#,
        package_name = package_name,
        import_list = import_list,
        first = first,
        second = second,
        third = third,
        count = modules.len(),
        catalogue = catalogue,
    )
}
