use std::path::PathBuf;

/// Project name used when no configuration is found.
pub fn default_name() -> String {
    "unknown".to_string()
}

pub fn default_eslint_fix() -> bool {
    true
}

pub fn default_eslint_extensions() -> Vec<String> {
    [".d.ts", ".ts", ".js", ".jsx", ".tsx"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn default_entry_points() -> Vec<String> {
    vec!["src/index.ts".to_string()]
}

pub fn default_docs_out() -> PathBuf {
    PathBuf::from(tanuki_docs::DEFAULT_OUTPUT)
}

/// Output directory used when tsconfig has no `outDir`.
pub fn default_build_dir() -> PathBuf {
    PathBuf::from("build")
}
