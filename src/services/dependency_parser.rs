use serde_json::Value;

/// Extraction strategy for one manifest format: key-style extraction for
/// structured manifests, line-pattern extraction for plain lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestStrategy {
    NodePackageJson,
    PythonRequirements,
    PythonPyproject,
    CargoToml,
    GoMod,
    RubyGemfile,
}

pub struct ManifestProbe {
    pub path: &'static str,
    pub ecosystem: &'static str,
    pub strategy: ManifestStrategy,
}

/// The fixed set of manifests the analyzer probes. Every ecosystem named
/// here gets a dependency bucket in the analysis output, found or not.
pub const MANIFEST_PROBES: &[ManifestProbe] = &[
    ManifestProbe { path: "package.json", ecosystem: "node", strategy: ManifestStrategy::NodePackageJson },
    ManifestProbe { path: "requirements.txt", ecosystem: "python", strategy: ManifestStrategy::PythonRequirements },
    ManifestProbe { path: "pyproject.toml", ecosystem: "python", strategy: ManifestStrategy::PythonPyproject },
    ManifestProbe { path: "Cargo.toml", ecosystem: "rust", strategy: ManifestStrategy::CargoToml },
    ManifestProbe { path: "go.mod", ecosystem: "go", strategy: ManifestStrategy::GoMod },
    ManifestProbe { path: "Gemfile", ecosystem: "ruby", strategy: ManifestStrategy::RubyGemfile },
];

/// Distinct ecosystems in probe-table order.
pub fn probed_ecosystems() -> Vec<&'static str> {
    let mut ecosystems = Vec::new();
    for probe in MANIFEST_PROBES {
        if !ecosystems.contains(&probe.ecosystem) {
            ecosystems.push(probe.ecosystem);
        }
    }
    ecosystems
}

/// Dependency names declared by one manifest, in declaration order.
/// Unparseable content contributes an empty list, never an error.
pub fn parse_manifest(strategy: ManifestStrategy, content: &str) -> Vec<String> {
    match strategy {
        ManifestStrategy::NodePackageJson => parse_package_json(content),
        ManifestStrategy::PythonRequirements => parse_requirements_txt(content),
        ManifestStrategy::PythonPyproject => parse_pyproject(content),
        ManifestStrategy::CargoToml => parse_cargo_toml(content),
        ManifestStrategy::GoMod => parse_go_mod(content),
        ManifestStrategy::RubyGemfile => parse_gemfile(content),
    }
}

fn parse_package_json(content: &str) -> Vec<String> {
    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("unparseable package.json: {}", e);
            return Vec::new();
        }
    };

    let mut packages = Vec::new();
    for section in ["dependencies", "devDependencies"] {
        if let Some(map) = value.get(section).and_then(Value::as_object) {
            packages.extend(map.keys().cloned());
        }
    }
    packages
}

fn parse_requirements_txt(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| {
            let name: String = line
                .chars()
                .take_while(|c| !matches!(c, '=' | '>' | '<' | '~' | '!' | '[' | ';' | ' '))
                .collect();
            let name = name.trim();
            if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            }
        })
        .collect()
}

fn parse_pyproject(content: &str) -> Vec<String> {
    let value: toml::Value = match content.parse() {
        Ok(value) => value,
        Err(e) => {
            log::debug!("unparseable pyproject.toml: {}", e);
            return Vec::new();
        }
    };

    let mut packages = Vec::new();

    // PEP 621: [project] dependencies = ["name>=1.0", ...]
    if let Some(deps) = value
        .get("project")
        .and_then(|p| p.get("dependencies"))
        .and_then(toml::Value::as_array)
    {
        for dep in deps {
            if let Some(spec) = dep.as_str() {
                let name: String = spec
                    .chars()
                    .take_while(|c| !matches!(c, '=' | '>' | '<' | '~' | '!' | '[' | ';' | ' '))
                    .collect();
                if !name.is_empty() {
                    packages.push(name);
                }
            }
        }
    }

    // Poetry: [tool.poetry.dependencies] keys, minus the interpreter pin
    if let Some(deps) = value
        .get("tool")
        .and_then(|t| t.get("poetry"))
        .and_then(|p| p.get("dependencies"))
        .and_then(toml::Value::as_table)
    {
        packages.extend(deps.keys().filter(|k| *k != "python").cloned());
    }

    packages
}

fn parse_cargo_toml(content: &str) -> Vec<String> {
    let value: toml::Value = match content.parse() {
        Ok(value) => value,
        Err(e) => {
            log::debug!("unparseable Cargo.toml: {}", e);
            return Vec::new();
        }
    };

    value
        .get("dependencies")
        .and_then(toml::Value::as_table)
        .map(|table| table.keys().cloned().collect())
        .unwrap_or_default()
}

fn parse_go_mod(content: &str) -> Vec<String> {
    let mut packages = Vec::new();
    let mut in_require_block = false;

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with("require (") {
            in_require_block = true;
            continue;
        }
        if in_require_block && line.starts_with(')') {
            in_require_block = false;
            continue;
        }

        let candidate = if in_require_block {
            line
        } else if let Some(rest) = line.strip_prefix("require ") {
            rest.trim()
        } else {
            continue;
        };

        if let Some(module) = candidate.split_whitespace().next() {
            if module.contains('/') || module.contains('.') {
                packages.push(module.to_string());
            }
        }
    }
    packages
}

fn parse_gemfile(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let rest = line.strip_prefix("gem ")?;
            let quote = rest.chars().next().filter(|c| *c == '\'' || *c == '"')?;
            let rest = &rest[1..];
            rest.split(quote).next().map(|name| name.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_json_collects_dependency_keys() {
        let content = r#"{"dependencies": {"flask": "*"}, "devDependencies": {"jest": "^29.0.0"}}"#;
        let packages = parse_manifest(ManifestStrategy::NodePackageJson, content);
        assert_eq!(packages, vec!["flask", "jest"]);
    }

    #[test]
    fn package_json_preserves_declaration_order() {
        let content = r#"{"dependencies": {"zebra": "1", "apple": "2", "mango": "3"}}"#;
        let packages = parse_manifest(ManifestStrategy::NodePackageJson, content);
        assert_eq!(packages, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn unparseable_manifest_contributes_empty_list() {
        assert!(parse_manifest(ManifestStrategy::NodePackageJson, "{not json").is_empty());
        assert!(parse_manifest(ManifestStrategy::CargoToml, "[dependencies").is_empty());
        assert!(parse_manifest(ManifestStrategy::PythonPyproject, "= broken").is_empty());
    }

    #[test]
    fn requirements_txt_strips_version_specifiers() {
        let content = "flask==2.0\nrequests>=2.28\nnumpy\n# a comment\n\n-r other.txt\npydantic[email]~=2.0\n";
        let packages = parse_manifest(ManifestStrategy::PythonRequirements, content);
        assert_eq!(packages, vec!["flask", "requests", "numpy", "pydantic"]);
    }

    #[test]
    fn pyproject_reads_pep621_and_poetry_sections() {
        let content = r#"
[project]
dependencies = ["httpx>=0.27", "click"]

[tool.poetry.dependencies]
python = "^3.11"
rich = "*"
"#;
        let packages = parse_manifest(ManifestStrategy::PythonPyproject, content);
        assert_eq!(packages, vec!["httpx", "click", "rich"]);
    }

    #[test]
    fn cargo_toml_reads_dependency_table_keys() {
        let content = r#"
[package]
name = "demo"

[dependencies]
serde = { version = "1.0", features = ["derive"] }
tokio = "1"
"#;
        let mut packages = parse_manifest(ManifestStrategy::CargoToml, content);
        packages.sort();
        assert_eq!(packages, vec!["serde", "tokio"]);
    }

    #[test]
    fn go_mod_reads_single_and_block_requires() {
        let content = "module example.com/demo\n\ngo 1.22\n\nrequire github.com/gorilla/mux v1.8.0\n\nrequire (\n\tgolang.org/x/sync v0.7.0\n\tgithub.com/stretchr/testify v1.9.0 // indirect\n)\n";
        let packages = parse_manifest(ManifestStrategy::GoMod, content);
        assert_eq!(
            packages,
            vec!["github.com/gorilla/mux", "golang.org/x/sync", "github.com/stretchr/testify"]
        );
    }

    #[test]
    fn gemfile_reads_quoted_gem_names() {
        let content = "source 'https://rubygems.org'\n\ngem 'rails', '~> 7.1'\ngem \"puma\"\n";
        let packages = parse_manifest(ManifestStrategy::RubyGemfile, content);
        assert_eq!(packages, vec!["rails", "puma"]);
    }

    #[test]
    fn probed_ecosystems_are_distinct_and_ordered() {
        assert_eq!(probed_ecosystems(), vec!["node", "python", "rust", "go", "ruby"]);
    }
}
