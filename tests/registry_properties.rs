// tests/registry_properties.rs

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use pkgwatch_test_utils::builders::{folder_states, TreeBuilder, WatcherBuilder};

const ROOT: &str = "/ws/src/root";

// Relative directory paths made of a few short segments, so that nested
// paths and shared suffixes show up often.
fn rel_dirs_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    let segment = prop::sample::select(vec!["a", "b", "ab", "pkg", "util"]);
    let path = prop::collection::vec(segment.prop_map(str::to_string), 1..4);
    prop::collection::vec(path, 0..12)
}

/// Every directory the tree contains: the root plus each prefix of each path.
fn expected_dirs(rel_dirs: &[Vec<String>]) -> BTreeSet<PathBuf> {
    let mut dirs = BTreeSet::new();
    dirs.insert(PathBuf::from(ROOT));
    for segments in rel_dirs {
        let mut path = PathBuf::from(ROOT);
        for segment in segments {
            path.push(segment);
            dirs.insert(path.clone());
        }
    }
    dirs
}

fn build_tree(rel_dirs: &[Vec<String>]) -> pkgwatch::fs::mock::MockFileSystem {
    let mut tree = TreeBuilder::new(ROOT);
    for segments in rel_dirs {
        tree = tree.dir(&segments.join("/")).file(&format!("{}/x.go", segments.join("/")));
    }
    tree.build()
}

proptest! {
    #[test]
    fn adjust_tracks_exactly_the_directories(rel_dirs in rel_dirs_strategy()) {
        let (mut watcher, _shell) = WatcherBuilder::new(build_tree(&rel_dirs)).build();

        let report = watcher.adjust(ROOT).unwrap();

        let expected = expected_dirs(&rel_dirs);
        let tracked: BTreeSet<PathBuf> =
            folder_states(&watcher).into_iter().map(|(path, _)| path).collect();
        prop_assert_eq!(&tracked, &expected);
        prop_assert_eq!(report.folders, expected.len());
        prop_assert!(folder_states(&watcher).iter().all(|(_, active)| *active));
    }

    #[test]
    fn ignore_hits_exactly_the_suffix_matches(
        rel_dirs in rel_dirs_strategy(),
        name in prop::sample::select(vec!["a", "b", "ab", "pkg", "util", "t"]),
    ) {
        let (mut watcher, _shell) = WatcherBuilder::new(build_tree(&rel_dirs)).build();
        watcher.adjust(ROOT).unwrap();

        let matched = watcher.ignore(name);

        let expected_ignored: BTreeSet<PathBuf> = expected_dirs(&rel_dirs)
            .into_iter()
            .filter(|p| p.to_string_lossy().ends_with(name))
            .collect();
        prop_assert_eq!(matched, expected_ignored.len());
        for path in expected_dirs(&rel_dirs) {
            let ignored = expected_ignored.contains(&path);
            prop_assert_eq!(watcher.is_ignored(&path), ignored);
            prop_assert_eq!(watcher.is_watched(&path), !ignored);
        }

        watcher.reinstate(name);
        prop_assert!(folder_states(&watcher).iter().all(|(_, active)| *active));
    }

    #[test]
    fn untracked_paths_are_never_watched_or_ignored(
        rel_dirs in rel_dirs_strategy(),
        probe in "[a-z]{1,6}",
    ) {
        let (mut watcher, _shell) = WatcherBuilder::new(build_tree(&rel_dirs)).build();
        watcher.adjust(ROOT).unwrap();

        let path = Path::new("/elsewhere").join(&probe);
        prop_assert!(!watcher.is_watched(&path));
        prop_assert!(!watcher.is_ignored(&path));
    }
}
