// tests/end_to_end.rs

use std::path::PathBuf;

use pkgwatch_test_utils::builders::{TreeBuilder, WatcherBuilder};
use pkgwatch_test_utils::init_tracing;

#[test]
fn ignore_package_in_freshly_scanned_workspace() {
    init_tracing();
    let fs = TreeBuilder::new("/ws/src/pkg/a")
        .dir("b")
        .dir("c")
        .file("a.go")
        .build();
    let (mut watcher, shell) = WatcherBuilder::new(fs).build();

    let report = watcher.adjust("/ws/src/pkg/a").unwrap();
    assert_eq!(report.folders, 3);
    assert!(watcher.watched_folders().iter().all(|r| r.active));
    assert_eq!(shell.writes(), vec![("GOPATH".to_string(), "/ws".to_string())]);

    watcher.ignore("a");

    let inactive: Vec<PathBuf> = watcher
        .watched_folders()
        .into_iter()
        .filter(|r| !r.active)
        .map(|r| r.path)
        .collect();
    assert_eq!(inactive, vec![PathBuf::from("/ws/src/pkg/a")]);
    assert!(watcher.is_ignored("/ws/src/pkg/a"));
    assert!(watcher.is_watched("/ws/src/pkg/a/b"));
    assert!(watcher.is_watched("/ws/src/pkg/a/c"));
}

#[test]
fn change_feed_style_updates_after_scan() {
    let fs = TreeBuilder::new("/ws/src/pkg/a").dir("b").build();
    let (mut watcher, _shell) = WatcherBuilder::new(fs.clone()).build();
    watcher.adjust("/ws/src/pkg/a").unwrap();

    fs.add_dir("/ws/src/pkg/a/d");
    watcher.creation("/ws/src/pkg/a/d");
    fs.remove("/ws/src/pkg/a/b");
    watcher.deletion("/ws/src/pkg/a/b");

    let mut names: Vec<String> = watcher
        .watched_folders()
        .into_iter()
        .map(|r| r.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["pkg/a", "pkg/a/d"]);

    // A fresh scan agrees with the incremental updates.
    watcher.adjust("/ws/src/pkg/a").unwrap();
    assert_eq!(watcher.len(), 2);
    assert!(watcher.is_watched("/ws/src/pkg/a/d"));
}
