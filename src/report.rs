use crate::data::QualifiedFileSet;
use crate::stats::StatRecord;

/// Scientific notation with three decimals, e.g. `1.235e-3`.
pub fn format_value(value: f64) -> String {
    format!("{value:.3e}")
}

/// One line per record under a title line.
pub fn render_table(title: &str, stats: &[StatRecord]) -> String {
    let mut out = format!("{title}\n");
    if stats.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }
    let width = stats.iter().map(|s| s.name.len()).max().unwrap_or(0);
    out.extend(stats.iter().map(|stat| {
        format!(
            "  {:<width$}  {:>12} {}\n",
            stat.name,
            format_value(stat.value),
            stat.unit
        )
    }));
    out
}

pub fn render_file_list(files: &QualifiedFileSet) -> String {
    files
        .iter()
        .map(|(name, path)| format!("{name}\t{}\n", path.display()))
        .collect()
}
