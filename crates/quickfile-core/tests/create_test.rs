//! Create command integration tests
//!
//! Runs the resolver and writer together against temporary workspaces.

use quickfile_core::command::{create, CommandError};
use quickfile_core::notify::{Notice, GENERIC_ERROR};
use quickfile_core::{resolve, ApplyOutcome, Opener, Writer};
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Collects every notice it receives
#[derive(Default)]
struct Recorder {
    notices: RefCell<Vec<Notice>>,
}

impl quickfile_core::Notifier for Recorder {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}

impl Recorder {
    fn messages(&self) -> Vec<String> {
        self.notices.borrow().iter().map(ToString::to_string).collect()
    }
}

/// Remembers which files it was asked to open
#[derive(Default)]
struct RecordingOpener {
    opened: RefCell<Vec<PathBuf>>,
}

impl Opener for RecordingOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

#[test]
fn test_brace_expansion_creates_missing_parent() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let recorder = Recorder::default();
    let writer = Writer::new(workspace.path(), &recorder);

    let summary = create(&writer, "/", "pages/{index,about}.tsx").expect("create failed");

    assert_eq!(summary.created(), 2);
    assert!(workspace.path().join("pages").is_dir());
    assert!(workspace.path().join("pages/index.tsx").is_file());
    assert!(workspace.path().join("pages/about.tsx").is_file());
    assert_eq!(
        recorder.messages(),
        vec![
            "'pages/index.tsx' created successfully!",
            "'pages/about.tsx' created successfully!",
        ]
    );
}

#[test]
fn test_directory_in_base_folder_then_already_exists() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(workspace.path().join("src")).expect("Failed to create src");
    let recorder = Recorder::default();
    let writer = Writer::new(workspace.path(), &recorder);

    let first = create(&writer, "/src", "utils/").expect("create failed");
    assert_eq!(first.created(), 1);
    assert!(workspace.path().join("src/utils").is_dir());

    let second = create(&writer, "/src", "utils/").expect("create failed");
    assert_eq!(second.existing(), 1);
    assert_eq!(second.created(), 0);
    assert_eq!(
        recorder.notices.borrow().last(),
        Some(&Notice::AlreadyExists("src/utils/".to_string()))
    );
}

#[test]
fn test_dotted_token_is_created_verbatim() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let recorder = Recorder::default();
    let writer = Writer::new(workspace.path(), &recorder);

    create(&writer, "/", "{README.md,notes}.txt").expect("create failed");

    assert!(workspace.path().join("README.md").is_file());
    assert!(workspace.path().join("notes.txt").is_file());
    assert!(!workspace.path().join("README.md.txt").exists());
}

#[test]
fn test_unbalanced_brace_creates_nothing() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let recorder = Recorder::default();
    let writer = Writer::new(workspace.path(), &recorder);

    let err = create(&writer, "/", "a/b/{x,y").unwrap_err();

    assert!(matches!(err, CommandError::Parse(_)));
    assert_eq!(err.code(), "INVALID_INPUT");
    assert!(!workspace.path().join("a").exists());
    assert_eq!(
        recorder.messages(),
        vec!["Invalid input. Curly Braces only, please."]
    );
}

#[test]
fn test_brace_opened_after_group_creates_nothing() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let recorder = Recorder::default();
    let writer = Writer::new(workspace.path(), &recorder);

    for input in ["{a,b}.{ts", "src/{a,b}{c"] {
        let err = create(&writer, "/", input).unwrap_err();
        assert!(matches!(err, CommandError::Parse(_)));
    }

    assert!(fs::read_dir(workspace.path()).unwrap().next().is_none());
    assert_eq!(recorder.notices.borrow().len(), 2);
}

#[test]
fn test_blank_input_is_noop() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let recorder = Recorder::default();
    let writer = Writer::new(workspace.path(), &recorder);

    let summary = create(&writer, "/", "   ").expect("create failed");

    assert!(summary.is_noop());
    assert!(recorder.notices.borrow().is_empty());
    assert_eq!(fs::read_dir(workspace.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_workspace_is_reported() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let missing = workspace.path().join("gone");
    let recorder = Recorder::default();
    let writer = Writer::new(&missing, &recorder);

    let err = create(&writer, "/", "index.ts").unwrap_err();

    assert!(matches!(err, CommandError::NoWorkspace(_)));
    assert_eq!(recorder.notices.borrow().as_slice(), &[Notice::NoWorkspace]);
    assert!(!missing.exists());
}

#[test]
fn test_existing_files_are_never_overwritten() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(workspace.path().join("lib")).unwrap();
    fs::write(workspace.path().join("lib/a.rs"), "fn keep() {}").unwrap();
    let recorder = Recorder::default();
    let writer = Writer::new(workspace.path(), &recorder);

    let summary = create(&writer, "/lib", "{a,b}.rs").expect("create failed");

    assert_eq!(summary.existing(), 1);
    assert_eq!(summary.created(), 1);
    assert_eq!(
        fs::read_to_string(workspace.path().join("lib/a.rs")).unwrap(),
        "fn keep() {}"
    );

    // A second run touches nothing
    let again = create(&writer, "/lib", "{a,b}.rs").expect("create failed");
    assert_eq!(again.existing(), 2);
    assert_eq!(
        fs::read_to_string(workspace.path().join("lib/a.rs")).unwrap(),
        "fn keep() {}"
    );
}

#[test]
fn test_file_request_on_existing_directory_reports_exists() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(workspace.path().join("docs")).unwrap();
    let recorder = Recorder::default();
    let writer = Writer::new(workspace.path(), &recorder);

    let summary = create(&writer, "/", "docs").expect("create failed");

    assert_eq!(summary.existing(), 1);
    assert!(workspace.path().join("docs").is_dir());
}

#[test]
fn test_partial_failure_keeps_earlier_entries() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    // "b" is a file, so "b/inner.txt" cannot be created
    fs::write(workspace.path().join("b"), "").unwrap();
    let recorder = Recorder::default();
    let writer = Writer::new(workspace.path(), &recorder);

    let summary = create(&writer, "/", "{a.txt,b/inner.txt,c.txt}").expect("create failed");

    assert_eq!(summary.created(), 2);
    assert_eq!(summary.failed(), 1);
    assert!(workspace.path().join("a.txt").is_file());
    assert!(workspace.path().join("c.txt").is_file());
    assert_eq!(recorder.messages()[1], GENERIC_ERROR);
}

#[test]
fn test_traversal_is_refused() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let inner = workspace.path().join("inner");
    fs::create_dir(&inner).unwrap();
    let recorder = Recorder::default();
    let writer = Writer::new(&inner, &recorder);

    let summary = create(&writer, "/", "../escape.txt").expect("create failed");

    assert_eq!(summary.failed(), 1);
    assert!(!workspace.path().join("escape.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_symlinked_folder_cannot_redirect_outside() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let outside = TempDir::new().expect("Failed to create temp dir");
    std::os::unix::fs::symlink(outside.path(), workspace.path().join("link")).unwrap();
    let recorder = Recorder::default();
    let writer = Writer::new(workspace.path(), &recorder);

    let summary = create(&writer, "/", "link/escaped.txt").expect("create failed");
    assert_eq!(summary.failed(), 1);
    assert!(!outside.path().join("escaped.txt").exists());

    let summary = create(&writer, "/link", "nested/{a,b}.txt").expect("create failed");
    assert_eq!(summary.failed(), 2);
    assert!(!outside.path().join("nested").exists());
}

#[test]
fn test_opener_called_for_files_only() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let recorder = Recorder::default();
    let opener = RecordingOpener::default();
    let writer = Writer::new(workspace.path(), &recorder).with_opener(&opener);

    create(&writer, "/", "{assets/,main.ts}").expect("create failed");

    assert_eq!(
        opener.opened.borrow().as_slice(),
        &[workspace.path().join("main.ts")]
    );

    // Nothing new is created, nothing is opened
    create(&writer, "/", "main.ts").expect("create failed");
    assert_eq!(opener.opened.borrow().len(), 1);
}

#[test]
fn test_apply_single_entry() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let recorder = Recorder::default();
    let writer = Writer::new(workspace.path(), &recorder);
    let target = resolve("/", "deep/nested/dir/file.md")
        .expect("parse failed")
        .expect("blank input");

    let outcome = writer
        .apply(
            target.base_folder(),
            target.sub_path(),
            &target.entries()[0],
        )
        .expect("apply failed");

    assert_eq!(
        outcome,
        ApplyOutcome::Created(workspace.path().join("deep/nested/dir/file.md"))
    );
}
