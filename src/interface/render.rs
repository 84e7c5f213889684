use crate::models::{HealthAnalysis, MenuItem};
use crate::wheel::WheelSegment;

/// Display the current wheel layout.
pub fn display_wheel(segments: &[WheelSegment]) {
    if segments.is_empty() {
        println!("The wheel is empty.");
        return;
    }

    println!();
    println!("=== On the wheel ({} segments) ===", segments.len());
    for segment in segments {
        println!(
            "  {:>5.1}° - {:>5.1}°  {}",
            segment.angle_start,
            segment.angle_start + segment.angle_span,
            segment.item.display_label()
        );
    }
    println!();
}

pub fn display_spinning() {
    println!("Spinning the wheel...");
}

/// Display the result card for the winning item.
pub fn display_result_card(item: &MenuItem, analysis: Option<&HealthAnalysis>) {
    println!();
    println!("=================================");
    println!("  {}", item.name);
    if let Some(alt) = &item.secondary_name {
        println!("  {}", alt);
    }
    println!("---------------------------------");
    println!("  Energy:  {} kcal", item.approx_calories);
    println!("  Cuisine: {:?}", item.cuisine);
    if item.is_healthy_option {
        println!("  Healthy option");
    }
    println!("---------------------------------");
    println!("  AI Nutrition Analysis");
    match analysis {
        Some(analysis) => {
            println!("  Nutri-Score: {}", analysis.nutri_score);
            println!("  \"{}\"", analysis.health_tip);
        }
        None => println!("  No analysis available."),
    }
    println!("=================================");
    println!();
}

/// Display the catalog as a table.
pub fn display_menu(items: &[MenuItem]) {
    if items.is_empty() {
        println!("No menu items match the selected category.");
        return;
    }

    let max_name_len = items
        .iter()
        .map(|i| i.display_label().chars().count())
        .max()
        .unwrap_or(10);

    for item in items {
        let label = item.display_label();
        let pad = max_name_len.saturating_sub(label.chars().count());
        println!(
            "{:>3}. {}{}  {:<11}  {:>4} kcal{}",
            item.id,
            label,
            " ".repeat(pad),
            item.category.label(),
            item.approx_calories,
            if item.is_healthy_option { "  [healthy]" } else { "" },
        );
    }
    println!();
    println!("{} items", items.len());
}
