pub const MIT_LICENSE_TEMPLATE: &str = r#"MIT License

Copyright (c) {year} {owner}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

pub const GITIGNORE_RUST: &str = "/target\nCargo.lock\n**/*.rs.bk\n";

pub const GITIGNORE_NODE: &str = "node_modules/\ndist/\nbuild/\n.env\n.env.local\nnpm-debug.log*\nyarn-error.log\n";

pub const GITIGNORE_PYTHON: &str = "__pycache__/\n*.py[cod]\n.venv/\nvenv/\n.env\ndist/\nbuild/\n*.egg-info/\n";

pub const GITIGNORE_GO: &str = "bin/\n*.exe\n*.test\n*.out\nvendor/\n.env\n";

pub const GITIGNORE_DEFAULT: &str = ".env\n*.log\n.DS_Store\nThumbs.db\n";

/// Template lookup by primary language, falling back to the generic list.
pub const GITIGNORE_TEMPLATES: &[(&str, &str)] = &[
    ("rust", GITIGNORE_RUST),
    ("javascript", GITIGNORE_NODE),
    ("typescript", GITIGNORE_NODE),
    ("python", GITIGNORE_PYTHON),
    ("go", GITIGNORE_GO),
];

pub fn gitignore_for_language(language: Option<&str>) -> &'static str {
    let Some(language) = language else {
        return GITIGNORE_DEFAULT;
    };
    let lower = language.to_lowercase();
    GITIGNORE_TEMPLATES
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, template)| *template)
        .unwrap_or(GITIGNORE_DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gitignore_lookup_is_case_insensitive_with_fallback() {
        assert_eq!(gitignore_for_language(Some("Rust")), GITIGNORE_RUST);
        assert_eq!(gitignore_for_language(Some("TypeScript")), GITIGNORE_NODE);
        assert_eq!(gitignore_for_language(Some("COBOL")), GITIGNORE_DEFAULT);
        assert_eq!(gitignore_for_language(None), GITIGNORE_DEFAULT);
    }
}
