use anyhow::{Context, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

/// workload -> baseline -> mean time in nanoseconds
type Results = BTreeMap<String, BTreeMap<String, f64>>;

const CRITERION_DIR: &str = "target/criterion";
const REPORT_PATH: &str = "benchmark_results/report.md";

pub fn run_benchmarks(quick: bool, baseline: &str) -> Result<()> {
    println!("Running benchmark suite...");

    // Build first to avoid measuring build time
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", "suite", "--release"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    let start = Instant::now();
    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--bench", "suite"]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    cmd.arg("--save-baseline").arg(baseline);

    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run bench for baseline {baseline}"))?;

    if status.success() {
        println!("Finished baseline {baseline} in {:.2?}", start.elapsed());
    } else {
        eprintln!("Warning: Benchmark run failed for baseline {baseline}");
    }

    Ok(())
}

pub fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let root = Path::new(CRITERION_DIR);
    if !root.exists() {
        eprintln!("No criterion output found at {}", root.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(root, root, &mut results);

    let baselines: BTreeSet<&String> = results.values().flat_map(BTreeMap::keys).collect();

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# triad Benchmark Report")?;
    writeln!(file)?;

    // Header
    write!(file, "| Workload |")?;
    for baseline in &baselines {
        write!(file, " {baseline} (mean) | {baseline} (iter/s) |")?;
    }
    writeln!(file)?;

    // Separator
    write!(file, "|---|")?;
    for _ in &baselines {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    // Rows
    for (workload, by_baseline) in &results {
        write!(file, "| {workload} |")?;
        for baseline in &baselines {
            match by_baseline.get(*baseline) {
                Some(&ns) => write!(file, " {} | {} |", format_time(ns), format_rate(1e9 / ns))?,
                None => write!(file, " N/A | - |")?,
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns >= 1e9 {
        format!("{:.2} s", ns / 1e9)
    } else if ns >= 1e6 {
        format!("{:.2} ms", ns / 1e6)
    } else if ns >= 1e3 {
        format!("{:.2} µs", ns / 1e3)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_rate(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

fn mean_estimate(path: &Path) -> Option<f64> {
    let content = fs::read_to_string(path).ok()?;
    let json: serde_json::Value = serde_json::from_str(&content).ok()?;
    json.get("mean")?.get("point_estimate")?.as_f64()
}

fn collect_results(root: &Path, dir: &Path, results: &mut Results) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        // Structure: <root>/<group>/<function>[/<size>]/<baseline>/estimates.json
        let Some(baseline_dir) = path.parent() else { continue };
        let Some(workload_dir) = baseline_dir.parent() else { continue };
        let Some(baseline) = baseline_dir.file_name().and_then(|s| s.to_str()) else {
            continue;
        };

        // `change` holds relative estimates and `base` duplicates a saved baseline.
        if matches!(baseline, "report" | "change" | "base") {
            continue;
        }
        let Ok(workload) = workload_dir.strip_prefix(root) else { continue };
        let workload = workload
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if let Some(ns) = mean_estimate(&path).filter(|&ns| ns > 0.0) {
            results
                .entry(workload)
                .or_default()
                .insert(baseline.to_string(), ns);
        }
    }
}
