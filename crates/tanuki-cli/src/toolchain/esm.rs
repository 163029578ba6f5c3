//! ES module wrapper generation for CommonJS bundles.
//!
//! Node reports the shape of the bundle's `module.exports` (its `typeof` and
//! own property names). From that shape a small `.mjs` file is generated that
//! re-exports every named key and the module itself as the default export.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{BuildError, Result};
use crate::toolchain::shell::Shell;

const PROBE_SCRIPT: &str = "const m = require(process.argv[1]); \
const type = m === null ? 'null' : typeof m; \
const keys = type === 'object' || type === 'function' ? Object.getOwnPropertyNames(m) : []; \
process.stdout.write(JSON.stringify({ type, keys }));";

const FUNCTION_OWN_KEYS: &[&str] = &["length", "prototype", "name", "caller"];

const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// `typeof module.exports` plus its own property names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleShape {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub keys: Vec<String>,
}

impl ModuleShape {
    pub fn new(kind: &str, keys: &[&str]) -> Self {
        Self {
            kind: kind.to_string(),
            keys: keys.iter().map(|key| key.to_string()).collect(),
        }
    }

    /// Keys worth re-exporting, sorted.
    pub fn export_keys(&self) -> BTreeSet<&str> {
        let mut keys: BTreeSet<&str> = self.keys.iter().map(String::as_str).collect();
        keys.remove("__esModule");

        match self.kind.as_str() {
            "function" => {
                for key in FUNCTION_OWN_KEYS {
                    keys.remove(key);
                }
            }
            "object" => {}
            _ => keys.clear(),
        }

        keys
    }
}

/// Whether `name` can follow `export const`.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return false;
    }

    !RESERVED_WORDS.contains(&name)
}

/// Generates the wrapper importing `rel_path`.
pub fn cjs_to_esm(shape: &ModuleShape, rel_path: &str) -> String {
    let rel_path = if rel_path.starts_with("./") || rel_path.starts_with("../") || rel_path == ".."
    {
        rel_path.to_string()
    } else {
        format!("./{}", rel_path)
    };

    let mut output = format!(
        "import mod from {};\n",
        serde_json::Value::String(rel_path)
    );

    for key in shape.export_keys() {
        if is_valid_identifier(key) {
            output.push_str(&format!("export const {key} = mod.{key};\n"));
        }
    }

    output.push_str("\nexport default mod;");
    output
}

/// Loads the bundle with node and reports its export shape.
pub fn probe(shell: &Shell, bundle: &Path) -> Result<ModuleShape> {
    let node = shell.resolve_system("node")?;
    let args = [
        "-e".to_string(),
        PROBE_SCRIPT.to_string(),
        bundle.display().to_string(),
    ];
    let output = shell.exec(&node, &args)?;

    serde_json::from_slice(&output.stdout).map_err(|e| {
        BuildError::EsmWrapper {
            path: bundle.to_path_buf(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Writes `<name>.mjs` next to the `<name>.cjs` bundle.
pub fn write_wrapper(shell: &Shell, bundle: &Path, target: &Path) -> Result<()> {
    let shape = probe(shell, bundle)?;
    let rel_path = bundle
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| BuildError::EsmWrapper {
            path: bundle.to_path_buf(),
            message: "bundle path has no file name".to_string(),
        })?;

    let wrapper = cjs_to_esm(&shape, &rel_path);
    fs::write(target, wrapper + "\n").map_err(|error| BuildError::ArtifactWriteFailed {
        path: target.to_path_buf(),
        error,
    })?;

    info!(target: "tanuki::ts", "Emitted ESModule file.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_object_exports_are_sorted() {
        let shape = ModuleShape::new("object", &["zeta", "__esModule", "alpha", "default"]);
        assert_eq!(
            cjs_to_esm(&shape, "demo.cjs"),
            "import mod from \"./demo.cjs\";\n\
             export const alpha = mod.alpha;\n\
             export const zeta = mod.zeta;\n\
             \n\
             export default mod;"
        );
    }

    #[test]
    fn test_function_own_keys_dropped() {
        let shape = ModuleShape::new(
            "function",
            &["length", "name", "prototype", "caller", "create", "arguments"],
        );
        assert_eq!(
            cjs_to_esm(&shape, "./lib.cjs"),
            "import mod from \"./lib.cjs\";\nexport const create = mod.create;\n\nexport default mod;"
        );
    }

    #[test]
    fn test_primitive_and_null_exports_have_no_keys() {
        for kind in ["string", "null", "number"] {
            let shape = ModuleShape::new(kind, &["length"]);
            assert_eq!(
                cjs_to_esm(&shape, "../out.cjs"),
                "import mod from \"../out.cjs\";\n\nexport default mod;"
            );
        }
    }

    #[test]
    fn test_relative_prefix() {
        let shape = ModuleShape::new("object", &[]);
        assert!(cjs_to_esm(&shape, "..").starts_with("import mod from \"..\";"));
        assert!(cjs_to_esm(&shape, "dist/a.cjs").starts_with("import mod from \"./dist/a.cjs\";"));
    }

    #[test]
    fn test_identifiers() {
        assert!(is_valid_identifier("Tanuki"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("$store"));
        assert!(is_valid_identifier("café"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1st"));
        assert!(!is_valid_identifier("kebab-case"));
        assert!(!is_valid_identifier("default"));
        assert!(!is_valid_identifier("class"));
    }

    #[test]
    fn test_shape_from_probe_output() {
        let shape: ModuleShape =
            serde_json::from_str(r#"{"type":"object","keys":["a","b"]}"#).unwrap();
        assert_eq!(shape, ModuleShape::new("object", &["a", "b"]));
    }
}
