pub mod domain;
pub mod shared;

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                rust_sources(&path, out);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                out.push(path);
            }
        }
    }

    /// Comments across both crates are written in English
    #[test]
    fn test_comments_are_english() {
        let crates = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
        let mut files = Vec::new();
        rust_sources(&crates.join("contracts/src"), &mut files);
        rust_sources(&crates.join("frontend/src"), &mut files);
        assert!(!files.is_empty());

        let cyrillic = |c: char| ('\u{0400}'..='\u{04FF}').contains(&c);
        let offending: Vec<String> = files
            .iter()
            .flat_map(|path| {
                let text = fs::read_to_string(path).unwrap();
                text.lines()
                    .enumerate()
                    .filter(|(_, line)| line.trim_start().starts_with("//") && line.chars().any(cyrillic))
                    .map(|(n, _)| format!("{}:{}", path.display(), n + 1))
                    .collect::<Vec<_>>()
            })
            .collect();
        assert!(offending.is_empty(), "non-English comments: {:?}", offending);
    }
}
