#![allow(dead_code)]


/// Value of `name` in `show-ref` output
pub fn find_ref(show_ref_output: &str, name: &str) -> Option<String> {
    show_ref_output
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
}

/// Parent ids listed in `cat-commit` output
pub fn parse_parents(metadata: &str) -> Vec<String> {
    metadata
        .lines()
        .find_map(|line| line.strip_prefix("parent="))
        .filter(|value| *value != "none")
        .map(|value| value.split(',').map(str::to_string).collect())
        .unwrap_or_default()
}
