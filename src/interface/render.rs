use crate::models::{AdvisoryTip, EmissionsBreakdown};
use crate::sampler::SampleSummary;

/// Character width of a full (100%) bar.
pub const BAR_CHARS: usize = 30;

/// Format a category value the way results are shown: two decimals and a unit.
pub fn format_tons(value: f64) -> String {
    format!("{:.2} tons", value)
}

/// Text bar for a width in percent.
pub fn bar(width_percent: f64) -> String {
    let filled = ((width_percent.clamp(0.0, 100.0) / 100.0) * BAR_CHARS as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CHARS - filled))
}

/// Display the breakdown with relative bars, followed by the tips.
pub fn display_results(breakdown: &EmissionsBreakdown, tips: &[AdvisoryTip]) {
    println!();
    println!("=== Your Carbon Footprint ===");
    println!();
    println!("Total: {:.2} metric tons CO2e per year", breakdown.total);
    println!();

    let max_label = breakdown
        .categories()
        .iter()
        .map(|(c, _)| c.label().len())
        .max()
        .unwrap_or(10);

    for (category, width) in breakdown.bar_widths() {
        println!(
            "  {:<width$}  {}  {:>12}",
            category.label(),
            bar(width),
            format_tons(breakdown.get(category)),
            width = max_label
        );
    }

    display_tips(tips);
}

/// Display advisory tips in order.
pub fn display_tips(tips: &[AdvisoryTip]) {
    println!();
    println!("--- Ways to Reduce Your Footprint ---");
    println!();

    for tip in tips {
        println!("{} {}", tip.icon, tip.title);
        println!("   {}", tip.body);
        println!();
    }
}

/// Display aggregate statistics for a sampled batch.
pub fn display_sample_summary(summary: &SampleSummary) {
    println!();
    println!("=== Sample Summary ({} surveys) ===", summary.count);
    println!();
    println!("Min total:  {}", format_tons(summary.min_total));
    println!("Mean total: {}", format_tons(summary.mean_total));
    println!("Max total:  {}", format_tons(summary.max_total));
    println!();
    println!("Largest category:");

    for category in crate::models::Category::ALL {
        let count = summary.largest_counts.get(&category).copied().unwrap_or(0);
        println!("  {:<15} {}", category.label(), count);
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tons() {
        assert_eq!(format_tons(7.0), "7.00 tons");
        assert_eq!(format_tons(0.849999), "0.85 tons");
    }

    #[test]
    fn test_bar_lengths() {
        assert_eq!(bar(100.0).chars().filter(|c| *c == '█').count(), BAR_CHARS);
        assert_eq!(bar(0.0).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(bar(50.0).chars().filter(|c| *c == '█').count(), BAR_CHARS / 2);
        assert_eq!(bar(f64::INFINITY).chars().count(), BAR_CHARS);
    }
}
