//! Text tables for terminal output.

use crate::aggregator::{NearestFamily, PairCallMap};
use crate::parser::schema::{Metric, Profile};
use std::cmp::Ordering;

const NAME_WIDTH: usize = 42;

/// Render the `max_lines` most expensive functions by `metric`
///
/// Percentages are relative to the inclusive wall time of `main()` when
/// present, otherwise to the sum of exclusive wall time.
pub fn format_profile(profile: &Profile, max_lines: usize, metric: Metric) -> String {
    let mut lines = Vec::new();

    let total_wt = match &profile.main {
        Some(main) => main.wall_time,
        None => profile.calls.iter().map(|c| c.excl_wall_time).sum(),
    };

    lines.push(format!("  FUNCTIONS BY {}", metric.as_str().to_uppercase()));
    lines.push(format!(
        "  {:<width$} {:>8} {:>12} {:>12} {:>7}",
        "Function",
        "Calls",
        "Incl. WT",
        "Excl. WT",
        "%",
        width = NAME_WIDTH
    ));
    lines.push(format!("  {}", "-".repeat(NAME_WIDTH + 43)));

    for call in profile.top(max_lines, metric) {
        lines.push(format!(
            "  {:<width$} {:>8} {:>12.1} {:>12.1} {:>6.1}%",
            truncate_name(&call.name),
            call.count,
            call.wall_time,
            call.excl_wall_time,
            percentage(call.wall_time, total_wt),
            width = NAME_WIDTH
        ));
    }

    lines.join("\n")
}

/// Render the callers and callees of `function`
pub fn format_family(function: &str, family: &NearestFamily) -> String {
    let mut lines = vec![format!("  {}", function)];

    lines.push(format!("  Parents ({} calls)", family.parents_count));
    push_neighbors(&mut lines, &family.parents, family.parents_count);

    lines.push(format!("  Children ({} calls)", family.children_count));
    push_neighbors(&mut lines, &family.children, family.children_count);

    lines.join("\n")
}

fn push_neighbors(lines: &mut Vec<String>, neighbors: &PairCallMap, total_count: i64) {
    if neighbors.is_empty() {
        lines.push("    (none)".to_string());
        return;
    }

    let mut sorted: Vec<_> = neighbors.iter().collect();
    sorted.sort_by(|(an, a), (bn, b)| {
        b.wall_time
            .partial_cmp(&a.wall_time)
            .unwrap_or(Ordering::Equal)
            .then_with(|| an.cmp(bn))
    });

    for (name, pc) in sorted {
        lines.push(format!(
            "    {:<width$} {:>8} {:>12.1} {:>6.1}%",
            truncate_name(name),
            pc.count,
            pc.wall_time,
            percentage(pc.count as f64, total_count as f64),
            width = NAME_WIDTH
        ));
    }
}

fn percentage(part: f64, total: f64) -> f64 {
    if total != 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

// Keep the tail: the method name is the interesting part
fn truncate_name(name: &str) -> String {
    let len = name.chars().count();
    if len > NAME_WIDTH {
        let tail: String = name.chars().skip(len - (NAME_WIDTH - 3)).collect();
        format!("...{}", tail)
    } else {
        name.to_string()
    }
}
