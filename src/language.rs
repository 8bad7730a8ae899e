//! src/language.rs

use std::collections::HashMap;
use std::path::Path;

// 定义文件扩展名到语言标识符的映射
fn get_extension_map() -> HashMap<&'static str, &'static str> {
    let mut map = HashMap::new();
    // Rust
    map.insert("rs", "rust");
    // Python
    map.insert("py", "python");
    // JavaScript & TypeScript
    map.insert("js", "javascript");
    map.insert("jsx", "javascript");
    map.insert("ts", "typescript");
    map.insert("tsx", "typescript");
    // Go
    map.insert("go", "go");
    // C & C++
    map.insert("c", "c");
    map.insert("h", "c");
    map.insert("cpp", "cpp");
    map.insert("cxx", "cpp");
    map.insert("cc", "cpp");
    map.insert("hpp", "cpp");
    // Config & docs
    map.insert("toml", "toml");
    map.insert("yml", "yaml");
    map.insert("yaml", "yaml");
    map.insert("md", "markdown");
    map.insert("sh", "shell");
    map
}

/// Whether the file belongs to one of the given file types, judged by its
/// extension. Files with no extension never match.
pub fn file_matches_types(path: &Path, types: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };
    get_extension_map()
        .get(ext)
        .is_some_and(|lang| types.iter().any(|t| t == lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rust_file_matches_rust_type() {
        assert!(file_matches_types(Path::new("src/main.rs"), &types(&["rust"])));
    }

    #[test]
    fn unrelated_file_does_not_match() {
        assert!(!file_matches_types(Path::new("notes.txt"), &types(&["rust"])));
        assert!(!file_matches_types(Path::new("src/main.rs"), &types(&["python"])));
    }

    #[test]
    fn file_without_extension_never_matches() {
        assert!(!file_matches_types(Path::new("Makefile"), &types(&["rust", "shell"])));
    }

    #[test]
    fn yaml_covers_both_extensions() {
        assert!(file_matches_types(Path::new("ci.yml"), &types(&["yaml"])));
        assert!(file_matches_types(Path::new("ci.yaml"), &types(&["yaml"])));
    }
}
