// src/presentation.rs
use std::fmt::Write;

use quality_probe_domain::{
    Snapshot, SnapshotDiff, SnapshotFormat, SnapshotOptions, Verdict,
    analytics::{ComplexityTarget, GateMetric, Trend},
    serialize,
};
use quality_probe_shared_kernel::Result;

use crate::args::{CompareFormat, OutputFormat};

/// Render a scan result for stdout.
pub fn render_scan(
    snapshot: &Snapshot,
    verdict: &Verdict,
    format: OutputFormat,
    options: &SnapshotOptions,
    target: ComplexityTarget,
) -> Result<String> {
    match format {
        OutputFormat::Json => serialize(snapshot, SnapshotFormat::Json),
        OutputFormat::Yaml => serialize(snapshot, SnapshotFormat::Yaml),
        OutputFormat::Text => Ok(render_text(snapshot, verdict, options, target)),
    }
}

// write! into a String cannot fail, so its results are discarded below.
fn render_text(snapshot: &Snapshot, verdict: &Verdict, options: &SnapshotOptions, target: ComplexityTarget) -> String {
    let bands = &options.mi_bands;
    let (watch, high) = (bands.watch_floor(), bands.high_floor());
    let mut out = String::new();

    let _ = writeln!(out, "Maintainability snapshot for: {}", snapshot.root_path());
    let _ = writeln!(out, "  Files scanned              : {}", snapshot.file_count());
    let _ = writeln!(out, "  Total SLOC                 : {}", snapshot.total_sloc());
    let _ = writeln!(out, "  Avg SLOC per file          : {:.1}", snapshot.avg_sloc_per_file());
    let _ = writeln!(
        out,
        "  Avg MI (all files)         : {:.1}  (<{watch:.0} = watch, {watch:.0}-{high:.0} = moderate, >={high:.0} = high)",
        snapshot.avg_mi()
    );
    let _ = writeln!(out, "  Files with low MI (<{watch:.0})    : {}", snapshot.low_mi_file_count());
    let _ = writeln!(out, "  High-CC funcs (D/E/F)      : {}", snapshot.high_cc_func_count());
    let _ = writeln!(out, "  CC grades (all files)      :");
    for (grade, count) in snapshot.cc_grade_histogram().iter() {
        let _ = writeln!(out, "    {grade}: {count}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "  Total functions            : {}", snapshot.function_count());
    let _ = writeln!(out, "  Typed functions            : {}", snapshot.typed_function_count());
    let _ = writeln!(out, "  Typing coverage (functions): {:.1}%", snapshot.typing_coverage_pct());

    let _ = writeln!(out);
    let _ = writeln!(out, "  Avg cognitive complexity   : {:.1}", snapshot.avg_cognitive_complexity());
    let _ = writeln!(out, "  Max cognitive complexity   : {}", snapshot.max_cognitive_complexity());

    let _ = writeln!(out);
    let _ = writeln!(out, "Top {} lowest MI files:", options.top_k);
    for hotspot in snapshot.lowest_mi_files() {
        let band = bands.classify(hotspot.maintainability_index);
        let _ = writeln!(out, "  {:5.1} [{band}]  {}", hotspot.maintainability_index, hotspot.path);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Top {} most complex functions (target cognitive complexity <= {}):",
        options.top_k,
        target.value()
    );
    for hotspot in snapshot.most_complex_functions() {
        let flag = target.flag(hotspot.cognitive_complexity);
        let _ = writeln!(
            out,
            "  {:3} [{flag}]  {}:{}  {}",
            hotspot.cognitive_complexity.value(),
            hotspot.file_path,
            hotspot.line_number,
            hotspot.qualified_name
        );
    }

    if !verdict.breaches.is_empty() {
        let _ = writeln!(out);
    }
    for breach in &verdict.breaches {
        let p = breach.precision();
        let _ = match breach.metric {
            GateMetric::AvgMi => writeln!(
                out,
                "[FAIL] Average MI {:.p$} is below threshold {:.1}",
                breach.actual, breach.floor
            ),
            GateMetric::TypingCoveragePct => writeln!(
                out,
                "[FAIL] Typing coverage {:.p$}% is below threshold {:.1}%",
                breach.actual, breach.floor
            ),
        };
    }
    out
}

/// Render a snapshot diff for stdout.
pub fn render_diff(diff: &SnapshotDiff, format: CompareFormat) -> Result<String> {
    match format {
        CompareFormat::Json => {
            let mut out = serde_json::to_string_pretty(diff)?;
            out.push('\n');
            Ok(out)
        }
        CompareFormat::Text => Ok(render_diff_text(diff)),
    }
}

fn render_diff_text(diff: &SnapshotDiff) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Comparison Summary");
    let _ = writeln!(out, "-------------------");
    let _ = writeln!(out, "  old: {}", diff.old_root);
    let _ = writeln!(out, "  new: {}", diff.new_root);
    let _ = writeln!(out);

    for m in &diff.metrics {
        let marker = match m.trend {
            Trend::Improved => "+",
            Trend::Regressed => "!",
            Trend::Unchanged | Trend::Changed => " ",
        };
        let _ = writeln!(
            out,
            "{marker} {:<26} {:>10.1} -> {:>10.1}  ({:+.1}, {})",
            m.metric,
            m.old,
            m.new,
            m.delta,
            m.trend.label()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "CC grades:");
    for g in &diff.grades {
        let _ = writeln!(out, "    {}: {} -> {} ({:+})", g.grade, g.old, g.new, g.delta);
    }

    let verdict = |v: Option<bool>| match v {
        Some(true) => "passed",
        Some(false) => "failed",
        None => "not evaluated",
    };
    let _ = writeln!(out);
    if diff.verdict.changed() {
        let _ = writeln!(out, "Verdict: {} -> {}", verdict(diff.verdict.old), verdict(diff.verdict.new));
    } else {
        let _ = writeln!(out, "Verdict: {} (unchanged)", verdict(diff.verdict.new));
    }

    for (title, churn) in [
        ("Lowest MI files", &diff.lowest_mi_files),
        ("Most complex functions", &diff.most_complex_functions),
    ] {
        if churn.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{title}:");
        for entry in &churn.entered {
            let _ = writeln!(out, "  + {entry}");
        }
        for entry in &churn.left {
            let _ = writeln!(out, "  - {entry}");
        }
    }
    out
}
