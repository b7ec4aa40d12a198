//! Developer tasks for sortab: `cargo xtask <task>`.
//!
//!   verify  markers, tests (both feature sets), clippy, Kani, proof constants
//!   check   cargo check + tests + clippy, no Kani
//!   test    tests with and without `parallel`
//!   kani    model checking in `kani-proofs/`
//!   bench   criterion benches

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fewest `INVARIANT:` comments `src/` may carry.
const MIN_INVARIANT_MARKERS: usize = 5;

type Task = fn() -> Result<()>;

fn main() -> Result<()> {
    match env::args().nth(1).as_deref() {
        Some("verify") => run_steps(&[
            ("invariant markers", invariant_markers),
            ("tests", test),
            ("clippy", clippy),
            ("kani proofs", kani),
            ("proof constants", proof_constants),
        ]),
        Some("check") => run_steps(&[
            ("cargo check", || cargo(&["check", "--all-targets"])),
            ("tests", || cargo(&["test", "--quiet"])),
            ("clippy", clippy),
        ]),
        Some("test") => test(),
        Some("kani") => kani(),
        Some("bench") => cargo(&["bench"]),
        other => {
            if let Some(task) = other {
                eprintln!("unknown task `{}`", task);
            }
            eprintln!("usage: cargo xtask <verify|check|test|kani|bench>");
            Ok(())
        }
    }
}

/// Run tasks in order, stopping at the first failure.
fn run_steps(steps: &[(&str, Task)]) -> Result<()> {
    let total = steps.len();
    for (i, (name, task)) in steps.iter().enumerate() {
        println!("[{}/{}] {}", i + 1, total, name);
        task().with_context(|| format!("step `{}` failed", name))?;
    }
    println!("ok: {} steps", total);
    Ok(())
}

fn test() -> Result<()> {
    cargo(&["test", "--quiet"])?;
    cargo(&["test", "--quiet", "--no-default-features"])
}

fn clippy() -> Result<()> {
    cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])
}

fn kani() -> Result<()> {
    let dir = root().join("kani-proofs");
    if !dir.is_dir() {
        println!("  no kani-proofs/, skipped");
        return Ok(());
    }
    run(Command::new(cargo_bin()).arg("kani").current_dir(&dir))
        .context("cargo kani failed (is kani-verifier installed?)")
}

// ============================================================================
// Tree checks
// ============================================================================

fn invariant_markers() -> Result<()> {
    let mut files = Vec::new();
    collect_rust_files(&root().join("src"), &mut files)?;

    let mut count = 0;
    for file in &files {
        let text = fs::read_to_string(file)
            .with_context(|| format!("reading {}", file.display()))?;
        count += text.matches("INVARIANT:").count();
    }

    if count < MIN_INVARIANT_MARKERS {
        bail!(
            "{} INVARIANT markers under src/, need at least {}",
            count,
            MIN_INVARIANT_MARKERS
        );
    }
    println!("  {} markers in {} files", count, files.len());
    Ok(())
}

fn collect_rust_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_rust_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
    Ok(())
}

/// `kani-proofs/` proves a copy of the bisection loop. Its limits must be
/// the ones the crate ships.
fn proof_constants() -> Result<()> {
    let search = read("src/search.rs")?;
    let proofs = read("kani-proofs/src/lib.rs")?;

    let table_len = const_value(&search, "MAX_TABLE_LEN")?;
    if table_len != "u16::MAX as usize" {
        bail!("MAX_TABLE_LEN = `{}`; proofs cover `u16::MAX as usize`", table_len);
    }

    let probes: u32 = const_value(&proofs, "MAX_PROBES")?
        .parse()
        .context("MAX_PROBES is not an integer literal")?;
    let expected = u32::BITS - u16::MAX.leading_zeros();
    if probes != expected {
        bail!("kani-proofs MAX_PROBES = {}, want {}", probes, expected);
    }

    const MIDPOINT: &str = "let mid = lo + (hi - lo) / 2;";
    for (path, text) in [("src/search.rs", &search), ("kani-proofs/src/lib.rs", &proofs)] {
        if !text.contains(MIDPOINT) {
            bail!("{}: midpoint is no longer `{}`", path, MIDPOINT);
        }
    }

    println!("  MAX_TABLE_LEN = {}, MAX_PROBES = {}", table_len, probes);
    Ok(())
}

/// Right-hand side of `pub const NAME: T = <value>;`.
fn const_value<'a>(text: &'a str, name: &str) -> Result<&'a str> {
    let prefix = format!("pub const {}:", name);
    text.lines()
        .map(str::trim)
        .find(|line| line.starts_with(&prefix))
        .and_then(|line| line.split_once('='))
        .map(|(_, rhs)| rhs.trim().trim_end_matches(';').trim())
        .with_context(|| format!("no `pub const {}` with a value", name))
}

// ============================================================================
// Process plumbing
// ============================================================================

/// Workspace root; xtask lives one level below it.
fn root() -> PathBuf {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest.parent().unwrap_or(manifest).to_path_buf()
}

fn read(relative: &str) -> Result<String> {
    fs::read_to_string(root().join(relative)).with_context(|| format!("reading {}", relative))
}

fn cargo_bin() -> String {
    env::var("CARGO").unwrap_or_else(|_| "cargo".to_string())
}

fn cargo(args: &[&str]) -> Result<()> {
    run(Command::new(cargo_bin()).args(args).current_dir(root()))
        .with_context(|| format!("cargo {}", args.join(" ")))
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("spawning command")?;
    if !status.success() {
        bail!("exited with {}", status);
    }
    Ok(())
}
