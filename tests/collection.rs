//! Collection listing, lookup and globbing against real directory trees

use decant::Collection;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create `name` under `root`; a trailing `/` creates a directory instead.
fn file(root: &Path, name: &str) {
    let path = root.join(name);
    if name.ends_with('/') {
        fs::create_dir_all(&path).unwrap();
    } else {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
    }
}

fn tree(names: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for name in names {
        file(temp_dir.path(), name);
    }
    temp_dir
}

fn paths(root: &Path, names: &[&str]) -> Vec<PathBuf> {
    let mut paths: Vec<_> = names.iter().map(|name| root.join(name)).collect();
    paths.sort();
    paths
}

fn sorted(mut found: Vec<PathBuf>) -> Vec<PathBuf> {
    found.sort();
    found
}

const FIND_TREE: &[&str] = &[
    "a/b/c/d",
    "a/b/c/d.md",
    "a/b/c/d.txt",
    "a/b/d",
    "a/b/d.md",
    "a/d.mdn",
    "d",
    "d.foo",
    "d.md",
    "e/",
];

#[test]
fn test_entries_with_ext_only_includes_files() {
    let temp_dir = tree(&[
        "features/foo",
        "features/foo.a",
        "features/foo.aa",
        "features/foo.aaa",
        "features/foo.b",
        "foo",
        "foo.a",
        "foo.aa",
        "foo.aaa",
        "foo.b",
        "xyz/",
        "dir.aa/",
        "nested.aa/inner.aa",
    ]);
    let root = temp_dir.path();
    let collection = Collection::new(root, Some("aa")).unwrap();

    assert_eq!(
        sorted(collection.entries().unwrap()),
        paths(root, &["features/foo.aa", "foo.aa", "nested.aa/inner.aa"])
    );
}

#[test]
fn test_entries_without_ext_lists_all_nested_files() {
    let temp_dir = tree(&["a/b.en", "a/b/c/d.exe", "dir/", "foo.a", "foo.b", "noext"]);
    let root = temp_dir.path();
    let collection = Collection::new(root, None).unwrap();

    assert_eq!(
        sorted(collection.entries().unwrap()),
        paths(root, &["a/b.en", "a/b/c/d.exe", "foo.a", "foo.b", "noext"])
    );
}

#[test]
fn test_entries_with_alternation() {
    let temp_dir = tree(&["a.md", "b.markdown", "c.mkd", "d/e.md"]);
    let root = temp_dir.path();
    let collection = Collection::new(root, Some(".{md,markdown}")).unwrap();

    let entries = sorted(collection.entries().unwrap());
    assert_eq!(entries, paths(root, &["a.md", "b.markdown", "d/e.md"]));

    let slugs: Vec<_> = entries.iter().map(|p| collection.slug_for(p)).collect();
    assert_eq!(slugs, vec!["a", "b", "d/e"]);
}

#[test]
fn test_find_with_ext_appends_it() {
    let temp_dir = tree(FIND_TREE);
    let root = temp_dir.path();
    let collection = Collection::new(root, Some(".md")).unwrap();

    assert_eq!(collection.find("a").unwrap(), None);
    assert_eq!(
        collection.find("a/b/c/d").unwrap(),
        Some(root.join("a/b/c/d.md"))
    );
    assert_eq!(collection.find("a/b/d").unwrap(), Some(root.join("a/b/d.md")));
    assert_eq!(collection.find("a/d").unwrap(), None);
    assert_eq!(collection.find("d").unwrap(), Some(root.join("d.md")));
    assert_eq!(collection.find("d.foo").unwrap(), None);
    assert_eq!(collection.find("e").unwrap(), None);
    assert_eq!(collection.find("f").unwrap(), None);
}

#[test]
fn test_find_without_ext_uses_path_as_given() {
    let temp_dir = tree(FIND_TREE);
    let root = temp_dir.path();
    let collection = Collection::new(root, None).unwrap();

    assert_eq!(collection.find("a").unwrap(), None);
    assert_eq!(collection.find("a/b/c/d").unwrap(), Some(root.join("a/b/c/d")));
    assert_eq!(collection.find("a/b/d").unwrap(), Some(root.join("a/b/d")));
    assert_eq!(collection.find("a/d").unwrap(), None);
    assert_eq!(collection.find("d").unwrap(), Some(root.join("d")));
    assert_eq!(collection.find("d.foo").unwrap(), Some(root.join("d.foo")));
    assert_eq!(collection.find("e").unwrap(), None);
    assert_eq!(collection.find("f").unwrap(), None);
}

#[test]
fn test_glob_ignores_ext() {
    let mut names = FIND_TREE.to_vec();
    names.push("de/");
    let temp_dir = tree(&names);
    let root = temp_dir.path();
    let collection = Collection::new(root, Some("md")).unwrap();

    let glob = |pattern: &str| sorted(collection.glob(pattern).unwrap());

    assert_eq!(glob("d"), paths(root, &["d"]));
    assert_eq!(glob("d.*"), paths(root, &["d.foo", "d.md"]));
    assert_eq!(glob("d*"), paths(root, &["d", "d.foo", "d.md"]));
    assert_eq!(glob("a/*/d*"), paths(root, &["a/b/d", "a/b/d.md"]));
    assert_eq!(
        glob("a/**/d*"),
        paths(
            root,
            &[
                "a/b/c/d",
                "a/b/c/d.md",
                "a/b/c/d.txt",
                "a/b/d",
                "a/b/d.md",
                "a/d.mdn",
            ]
        )
    );
    assert_eq!(
        glob("**/d.md"),
        paths(root, &["a/b/c/d.md", "a/b/d.md", "d.md"])
    );
    assert_eq!(
        glob("**/d.md*"),
        paths(root, &["a/b/c/d.md", "a/b/d.md", "a/d.mdn", "d.md"])
    );
    assert_eq!(
        glob("a/b/**/*.{md,txt}"),
        paths(root, &["a/b/c/d.md", "a/b/c/d.txt", "a/b/d.md"])
    );
}

#[test]
fn test_collection_is_shareable_across_threads() {
    let temp_dir = tree(&["one.md", "two.md"]);
    let collection = Collection::new(temp_dir.path(), Some("md")).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| collection.entries().unwrap().len()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    });
}
