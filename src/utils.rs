use std::path::{Path, PathBuf};

use glob::glob;

/// Shorten a path for display by replacing the cleanup root with ~.
pub fn display_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => format!("~/{}", relative.display()),
        Err(_) => path.display().to_string(),
    }
}

/// Expand wildcard patterns into concrete paths.
///
/// A pattern that matches nothing is kept literally, wildcard and all;
/// the deletion layer recognizes the leftover token and omits it from
/// the batch. Paths without wildcards pass through untouched.
pub fn expand_patterns(patterns: &[PathBuf]) -> Vec<PathBuf> {
    let mut expanded = Vec::new();
    for pattern in patterns {
        let text = pattern.to_string_lossy();
        if !text.contains(['*', '?']) {
            expanded.push(pattern.clone());
            continue;
        }
        match glob(&text) {
            Ok(matches) => {
                let before = expanded.len();
                expanded.extend(matches.flatten());
                if expanded.len() == before {
                    expanded.push(pattern.clone());
                }
            }
            Err(_) => expanded.push(pattern.clone()),
        }
    }
    expanded
}

/// True when a path's final segment is still a literal glob token,
/// i.e. a pattern that failed to match anything.
pub fn is_unmatched_pattern(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().contains(['*', '?']))
        .unwrap_or(false)
}
