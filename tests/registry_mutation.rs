// tests/registry_mutation.rs

use std::path::PathBuf;

use pkgwatch::types::FolderStatus;
use pkgwatch_test_utils::builders::{folder_states, TreeBuilder, WatcherBuilder};

fn p(s: &str) -> PathBuf {
    PathBuf::from(s)
}

fn watcher_over(root: &str, dirs: &[&str]) -> pkgwatch::registry::Watcher {
    let mut tree = TreeBuilder::new(root);
    for dir in dirs {
        tree = tree.dir(dir);
    }
    let (mut watcher, _shell) = WatcherBuilder::new(tree.build()).build();
    watcher.adjust(root).unwrap();
    watcher
}

#[test]
fn creation_makes_path_watched() {
    let mut watcher = watcher_over("/ws/src/app", &[]);

    watcher.creation("/ws/src/app/new");

    assert!(watcher.is_watched("/ws/src/app/new"));
    assert!(!watcher.is_ignored("/ws/src/app/new"));
    assert_eq!(watcher.status("/ws/src/app/new"), FolderStatus::Active);
}

#[test]
fn creation_is_idempotent() {
    let mut watcher = watcher_over("/ws/src/app", &[]);

    watcher.creation("/ws/src/app/new");
    watcher.creation("/ws/src/app/new");

    assert_eq!(watcher.len(), 2);
}

#[test]
fn creation_overwrites_an_ignored_record_as_active() {
    let mut watcher = watcher_over("/ws/src/app", &["lib"]);
    watcher.ignore("lib");

    watcher.creation("/ws/src/app/lib");

    assert!(watcher.is_watched("/ws/src/app/lib"));
}

#[test]
fn deletion_forgets_the_path() {
    let mut watcher = watcher_over("/ws/src/app", &["lib"]);
    watcher.ignore("lib");

    watcher.deletion("/ws/src/app/lib");

    assert!(!watcher.is_watched("/ws/src/app/lib"));
    assert!(!watcher.is_ignored("/ws/src/app/lib"));
    assert_eq!(watcher.status("/ws/src/app/lib"), FolderStatus::Unknown);
}

#[test]
fn deletion_of_unknown_path_is_noop() {
    let mut watcher = watcher_over("/ws/src/app", &["lib"]);

    watcher.deletion("/nowhere");
    watcher.deletion("/ws/src/app/lib/main.go");

    assert_eq!(watcher.len(), 2);
}

#[test]
fn unknown_paths_are_neither_watched_nor_ignored() {
    let watcher = watcher_over("/ws/src/app", &["lib"]);

    assert!(!watcher.is_watched("/never/inserted"));
    assert!(!watcher.is_ignored("/never/inserted"));
    assert!(!watcher.status("/never/inserted").is_tracked());
}

#[test]
fn ignore_then_reinstate_round_trips() {
    let mut watcher = watcher_over("/ws/src/app", &["lib", "cmd/tool"]);

    assert_eq!(watcher.ignore("tool"), 1);
    assert!(watcher.is_ignored("/ws/src/app/cmd/tool"));
    assert!(watcher.is_watched("/ws/src/app/lib"));

    assert_eq!(watcher.reinstate("tool"), 1);
    assert!(watcher.is_watched("/ws/src/app/cmd/tool"));
    assert!(folder_states(&watcher).iter().all(|(_, active)| *active));
}

#[test]
fn ignore_matches_every_nested_directory_with_the_suffix() {
    // Deliberately coarse: `a` matches by plain string suffix, so an
    // unrelated directory like `data` is caught too.
    let mut watcher = watcher_over("/ws/src/pkg", &["a", "b/a", "data", "b"]);

    let matched = watcher.ignore("a");

    assert_eq!(matched, 3);
    assert_eq!(
        folder_states(&watcher),
        vec![
            (p("/ws/src/pkg"), true),
            (p("/ws/src/pkg/a"), false),
            (p("/ws/src/pkg/b"), true),
            (p("/ws/src/pkg/b/a"), false),
            (p("/ws/src/pkg/data"), false),
        ]
    );
}

#[test]
fn ignore_with_no_match_changes_nothing() {
    let mut watcher = watcher_over("/ws/src/app", &["lib"]);

    assert_eq!(watcher.ignore("zzz"), 0);
    assert!(folder_states(&watcher).iter().all(|(_, active)| *active));
}

#[test]
fn snapshot_results_are_fresh_and_independent() {
    let mut watcher = watcher_over("/ws/src/app", &["lib"]);
    watcher.ignore("lib");

    let mut first = watcher.watched_folders();
    for record in first.iter_mut() {
        record.active = !record.active;
        record.result.outcome = Some("failed".to_string());
        record.result.output.push_str("FAIL");
    }

    let second = watcher.watched_folders();
    assert_eq!(second.len(), 2);
    for record in &second {
        assert_eq!(record.result.outcome, None);
        assert!(record.result.output.is_empty());
        assert_eq!(record.result.package_name, record.name);
        let expected_active = record.path != p("/ws/src/app/lib");
        assert_eq!(record.active, expected_active);
    }
}

#[test]
fn records_are_named_after_their_import_path() {
    let watcher = watcher_over("/ws/src/github.com/u/app", &["internal/db"]);

    let mut names: Vec<String> = watcher
        .watched_folders()
        .into_iter()
        .map(|r| r.name)
        .collect();
    names.sort();

    assert_eq!(
        names,
        vec!["github.com/u/app", "github.com/u/app/internal/db"]
    );
}

#[test]
fn records_outside_a_source_tree_are_named_by_path() {
    let watcher = watcher_over("/tmp/project", &[]);

    let records = watcher.watched_folders();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "/tmp/project");
}
