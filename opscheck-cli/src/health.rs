//! Environment and tool health probing.
//!
//! Checks which DevOps tools are installed, which conventional
//! environment variables are set, and a few basic system facts. All
//! probing is best-effort: a missing tool is a warning, never a failure.

use std::collections::BTreeMap;
use std::process::Command;

use crate::print::Painter;

/// DevOps tools worth probing for.
const TOOLS: &[&str] = &[
    "git",
    "docker",
    "kubectl",
    "ansible",
    "terraform",
    "cmake",
    "make",
    "gcc",
    "python3",
    "node",
    "npm",
];

/// Environment variables that should always be set.
const REQUIRED_ENV: &[&str] = &["PATH", "HOME", "USER", "SHELL"];

/// Environment variables that are informative when present.
const OPTIONAL_ENV: &[&str] = &["CI", "GITHUB_ACTIONS", "DOCKER_HOST"];

pub struct HealthReport {
    pub system: BTreeMap<String, String>,
    pub tools: BTreeMap<String, String>,
    pub environment: BTreeMap<String, String>,
    pub warnings: Vec<String>,
}

/// Gather system facts, tool versions and environment variables.
pub fn collect() -> HealthReport {
    let mut report = HealthReport {
        system: BTreeMap::new(),
        tools: BTreeMap::new(),
        environment: BTreeMap::new(),
        warnings: Vec::new(),
    };

    report.system.insert(
        "OS".to_owned(),
        format!("{} {}", std::env::consts::OS, std::env::consts::ARCH),
    );
    if let Ok(cores) = std::thread::available_parallelism() {
        report.system.insert("CPU".to_owned(), format!("{cores} cores"));
    }

    for tool in TOOLS {
        match probe_tool(tool) {
            Some(version) => {
                report.tools.insert((*tool).to_owned(), version);
            }
            None => report.warnings.push(format!("{tool} not found")),
        }
    }

    for var in REQUIRED_ENV {
        match std::env::var(var) {
            Ok(value) => {
                report.environment.insert((*var).to_owned(), value);
            }
            Err(_) => report.warnings.push(format!("{var} not set")),
        }
    }
    for var in OPTIONAL_ENV {
        let value = std::env::var(var).unwrap_or_else(|_| "(not set)".to_owned());
        report.environment.insert((*var).to_owned(), value);
    }

    report
}

/// Run `<tool> --version` and return the first line of output, or `None`
/// when the tool is missing.
fn probe_tool(tool: &str) -> Option<String> {
    let output = Command::new(tool).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first_line = stdout.lines().next().unwrap_or("").trim();
    Some(if first_line.is_empty() {
        "installed".to_owned()
    } else {
        first_line.to_owned()
    })
}

pub fn print_report(report: &HealthReport, painter: &Painter) {
    println!("{}", "=".repeat(50));
    println!("         SYSTEM HEALTH REPORT");
    println!("{}", "=".repeat(50));

    println!("\nSystem:");
    for (key, value) in &report.system {
        println!("  {key}: {value}");
    }

    println!("\nTools:");
    for (tool, version) in &report.tools {
        println!("  {}", painter.success(&format!("{tool}: {version}")));
    }

    println!("\nEnvironment:");
    for (var, value) in &report.environment {
        println!("  {var}: {value}");
    }

    println!("\nSummary:");
    if report.warnings.is_empty() {
        println!("  {}", painter.success("All checks passed"));
    } else {
        for warning in &report.warnings {
            println!("  {}", painter.warning(warning));
        }
        println!(
            "  {}",
            painter.warning(&format!("{} warnings", report.warnings.len()))
        );
    }
    println!("{}", "=".repeat(50));
}
