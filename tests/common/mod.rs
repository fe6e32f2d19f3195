use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub const BUILD_GRAPH: &str = r#"{
    "targets": [
        {
            "label": "//java/com/app:lib",
            "kind": "java_library",
            "sources": [{"relativePath": "java/com/app/Lib.java", "isSource": true}],
            "javaInfo": {
                "jars": [{"classJar": {"rootExecutionPathFragment": "bazel-out/bin", "relativePath": "java/com/app/liblib.jar"}}]
            }
        },
        {
            "label": "//java/com/app:test",
            "kind": "java_test",
            "deps": [{"label": "//java/com/app:lib"}],
            "testInfo": {"testSize": "small"}
        },
        {
            "label": "//py:tool",
            "kind": "py_binary",
            "deps": [{"label": "//py:data", "dependencyType": 1}],
            "pyInfo": {"pythonVersion": "PY3"}
        },
        {"label": "//py:data", "kind": "my_macro"},
        {"label": "py:broken", "kind": "py_library"}
    ]
}"#;

/// Writes `contents` as a build graph into a fresh temporary directory.
pub fn build_graph(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

pub fn import_cmd() -> Command {
    Command::cargo_bin("import").unwrap()
}
