//! `kiln.toml` manifest specs: overriding the toolchain defaults.

use crate::prelude::*;

#[test]
fn manifest_overrides_compiler_artifact_libs_and_flags() {
    let temp = Project::empty();
    temp.fake_bin("cc", FAKE_COMPILER);
    temp.fake_bin("pkgflags", FAKE_SDL2_CONFIG);
    temp.file(
        "kiln.toml",
        r#"
[build]
compiler = "cc"
artifact = "app"
libs = ["m", "pthread"]
flags = ["-O2", "-Wall"]
pkg_helper = "pkgflags"
"#,
    );
    temp.file("a.c", "int main(void) { return 0; }\n");

    temp.kiln().args(&["build"]).passes().stdout_has("Compiled a.c -> app");

    let recorded = std::fs::read_to_string(temp.path().join("cc.args")).expect("argv recorded");
    let args: Vec<&str> = recorded.lines().collect();
    assert_eq!(
        args,
        [
            "-o",
            "app",
            "a.c",
            "-lm",
            "-lpthread",
            "-O2",
            "-Wall",
            "-I/fake/include/SDL2",
            "-D_REENTRANT",
            "-L/fake/lib",
            "-lSDL2",
        ]
    );
    assert!(temp.path().join("app").exists());
}

#[test]
fn manifest_overrides_the_checker() {
    let temp = Project::empty();
    temp.fake_toolchain();
    temp.fake_bin("memcheck", FAKE_CHECKER);
    temp.file(
        "kiln.toml",
        r#"
[check]
runner = "memcheck"
args = ["--verify", "--strict"]
"#,
    );
    temp.file("a.c", "int main(void) { return 0; }\n");

    temp.kiln().args(&["run"]).passes().stdout_has("checker-ran --verify --strict ./main");
}

#[test]
fn malformed_manifest_is_a_hard_error() {
    let temp = Project::empty();
    temp.file("kiln.toml", "not valid toml [[[");
    temp.file("a.c", "int main(void) { return 0; }\n");

    temp.kiln().args(&["build"]).fails().stderr_has("failed to parse").stderr_has("kiln.toml");
}
