//! Folder enumeration integration tests
//!
//! Tests the walker against fixture workspaces.

use quickfile_scanner::{list_folders, IgnoreList};
use std::fs;
use tempfile::TempDir;

/// Create a fixture workspace with a typical project layout
fn create_test_workspace() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let base = temp_dir.path();

    for dir in [
        "src/components/button",
        "src/pages",
        "docs",
        "node_modules/react/lib",
        ".git/objects",
        "logs.log",
    ] {
        fs::create_dir_all(base.join(dir)).expect("Failed to create fixture directory");
    }

    fs::write(base.join("README.md"), "# fixture").expect("Failed to write README");
    fs::write(base.join("src/main.ts"), "").expect("Failed to write main.ts");

    temp_dir
}

#[test]
fn test_lists_folders_depth_first() {
    let workspace = create_test_workspace();
    let folders: Vec<String> = list_folders(workspace.path(), IgnoreList::defaults())
        .expect("Failed to list folders")
        .collect();

    assert_eq!(
        folders,
        vec![
            "/",
            "/docs",
            "/src",
            "/src/components",
            "/src/components/button",
            "/src/pages",
        ]
    );
}

#[test]
fn test_ignored_folders_are_pruned() {
    let workspace = create_test_workspace();
    let folders: Vec<String> = list_folders(workspace.path(), IgnoreList::defaults())
        .expect("Failed to list folders")
        .collect();

    assert!(!folders.iter().any(|f| f.starts_with("/node_modules")));
    assert!(!folders.iter().any(|f| f.starts_with("/.git")));
    // Glob patterns apply to folder names too
    assert!(!folders.contains(&"/logs.log".to_string()));
}

#[test]
fn test_empty_ignore_list_lists_everything() {
    let workspace = create_test_workspace();
    let folders: Vec<String> = list_folders(workspace.path(), IgnoreList::empty())
        .expect("Failed to list folders")
        .collect();

    assert!(folders.contains(&"/node_modules/react/lib".to_string()));
    assert!(folders.contains(&"/.git/objects".to_string()));
    assert!(folders.contains(&"/logs.log".to_string()));
}

#[test]
fn test_custom_pattern_prunes_subtree() {
    let workspace = create_test_workspace();
    let mut ignore = IgnoreList::empty();
    ignore.insert("comp*", "Custom");

    let folders: Vec<String> = list_folders(workspace.path(), ignore)
        .expect("Failed to list folders")
        .collect();

    assert!(folders.contains(&"/src".to_string()));
    assert!(!folders.iter().any(|f| f.contains("components")));
}

#[test]
fn test_files_are_never_listed() {
    let workspace = create_test_workspace();
    let folders: Vec<String> = list_folders(workspace.path(), IgnoreList::defaults())
        .expect("Failed to list folders")
        .collect();

    assert!(!folders.iter().any(|f| f.ends_with(".md") || f.ends_with(".ts")));
}

#[test]
fn test_walk_is_read_only() {
    let workspace = create_test_workspace();
    let before = walk_count(workspace.path());
    let listed = list_folders(workspace.path(), IgnoreList::defaults())
        .expect("Failed to list folders")
        .count();
    assert_eq!(listed, 6);
    assert_eq!(before, walk_count(workspace.path()));
}

fn walk_count(root: &std::path::Path) -> usize {
    fn visit(path: &std::path::Path) -> usize {
        fs::read_dir(path)
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .map(|e| {
                        let p = e.path();
                        if p.is_dir() {
                            1 + visit(&p)
                        } else {
                            1
                        }
                    })
                    .sum()
            })
            .unwrap_or(0)
    }
    visit(root)
}
