//! Shared helpers for kiln specs.
//!
//! `Project` wraps a temp directory holding a throwaway source tree. Specs
//! drop fake tool scripts into its `bin/` subdirectory; `Project::kiln()`
//! prepends that directory to `PATH` so the fakes shadow any real
//! clang/sdl2-config/leaks on the host.

use std::path::Path;
use std::process::Output;

/// Fake compiler: records its argv (one per line) to `cc.args` in the
/// working directory and creates the `-o` target.
pub const FAKE_COMPILER: &str = r#"printf '%s\n' "$@" > cc.args
out=""
while [ $# -gt 0 ]; do
  if [ "$1" = "-o" ]; then out="$2"; fi
  shift
done
if [ -n "$out" ]; then : > "$out"; fi
exit 0"#;

/// Fake flag helper: prints compile and link flags the way `sdl2-config
/// --cflags --libs` does, one group per line.
pub const FAKE_SDL2_CONFIG: &str = r#"echo "-I/fake/include/SDL2 -D_REENTRANT"
echo "-L/fake/lib -lSDL2""#;

/// Fake leak checker: prints a marker line with its argv and exits with
/// `FAKE_CHECKER_EXIT` (default 0).
pub const FAKE_CHECKER: &str = r#"echo "checker-ran $*"
exit "${FAKE_CHECKER_EXIT:-0}""#;

/// A temp project directory the specs build and check inside.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Fresh project with nothing in it.
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp project") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file under the project root, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write project file");
    }

    /// Install an executable `#!/bin/sh` script as `bin/<name>`.
    pub fn fake_bin(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        self.file(&format!("bin/{name}"), &format!("#!/bin/sh\n{body}\n"));
        let path = self.dir.path().join("bin").join(name);
        let mut perms = std::fs::metadata(&path).expect("script metadata").permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("mark script executable");
    }

    /// Install the default fake toolchain under the names the default
    /// config invokes.
    pub fn fake_toolchain(&self) {
        self.fake_bin("clang", FAKE_COMPILER);
        self.fake_bin("sdl2-config", FAKE_SDL2_CONFIG);
        self.fake_bin("leaks", FAKE_CHECKER);
    }

    /// A `kiln` command with this project as its working directory.
    pub fn kiln(&self) -> SpecCmd {
        let mut cmd = cargo_kiln();
        cmd.current_dir(self.dir.path());
        let host_path = std::env::var("PATH").unwrap_or_default();
        cmd.env("PATH", format!("{}:{host_path}", self.dir.path().join("bin").display()));
        SpecCmd { cmd }
    }
}

/// A `kiln` command with no project attached, for help/version specs.
pub fn cli() -> SpecCmd {
    SpecCmd { cmd: cargo_kiln() }
}

fn cargo_kiln() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("kiln").expect("kiln binary");
    // Keep host environment from leaking into output assertions.
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("COLOR");
    cmd.env_remove("KILN_LOG");
    cmd
}

/// Builder over a pending `kiln` invocation.
pub struct SpecCmd {
    cmd: assert_cmd::Command,
}

impl SpecCmd {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and assert exit code 0.
    pub fn passes(mut self) -> SpecRun {
        SpecRun { output: self.cmd.assert().success().get_output().clone() }
    }

    /// Run and assert a non-zero exit.
    pub fn fails(mut self) -> SpecRun {
        SpecRun { output: self.cmd.assert().failure().get_output().clone() }
    }

    /// Run and assert the exact exit code.
    pub fn exits_with(mut self, code: i32) -> SpecRun {
        SpecRun { output: self.cmd.assert().code(code).get_output().clone() }
    }
}

/// Captured output of a finished `kiln` invocation.
pub struct SpecRun {
    output: Output,
}

impl SpecRun {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout missing {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr missing {needle:?}:\n{stderr}");
        self
    }
}
