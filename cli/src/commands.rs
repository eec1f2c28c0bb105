//! REPL command implementations.
//!
//! Each command takes a fresh [`DashboardSnapshot`] so output always reflects
//! the current realm selection; nothing here caches derived data.

use armory_core::config::Settings;
use armory_core::realm::RealmFilter;
use armory_core::view::DashboardView;
use armory_types::formatting::{format_decimal_f64, format_pct_ratio, format_thousands};

const BAR_WIDTH: usize = 40;

/// Render the rank-sorted, realm-filtered roster table.
pub fn show_table(view: &DashboardView) -> Result<(), String> {
    let snapshot = view.snapshot();
    println!(
        "{:>5}  {:<20} {:>5}  {:<15} {}",
        "Rank", "Character", "Level", "Class", "Realm"
    );
    for row in &snapshot.rows {
        println!(
            "{:>5}  {:<20} {:>5}  {:<15} {}",
            row.rank, row.name, row.level, row.class_name, row.realm
        );
    }
    println!("({} characters)", snapshot.rows.len());
    Ok(())
}

/// Render the class distribution for the current selection.
pub fn show_classes(view: &DashboardView, settings: &Settings) -> Result<(), String> {
    let snapshot = view.snapshot();
    let total: usize = snapshot.class_distribution.iter().map(|s| s.count).sum();
    for slice in &snapshot.class_distribution {
        println!(
            "{:<15} {:>5}  {}",
            slice.class_name,
            slice.count,
            format_pct_ratio(slice.count, total, settings.european_numbers)
        );
    }
    if snapshot.class_distribution.is_empty() {
        println!("(no characters match the current selection)");
    }
    Ok(())
}

/// Render the realm-population bar chart (whole roster, ignores the filter).
pub fn show_realms(view: &DashboardView, settings: &Settings) -> Result<(), String> {
    let snapshot = view.snapshot();
    let chart = &snapshot.realm_stats.population_chart;
    let max = chart.first().map(|b| b.count).unwrap_or(0);
    for bar in chart {
        let len = if max == 0 { 0 } else { (bar.count * BAR_WIDTH).div_ceil(max) };
        println!(
            "{:<20} {:<width$} {}",
            bar.realm,
            "#".repeat(len),
            format_thousands(bar.count, settings.european_numbers),
            width = BAR_WIDTH
        );
    }
    Ok(())
}

/// Show the realm with the highest average character level.
pub fn show_top(view: &DashboardView, settings: &Settings) -> Result<(), String> {
    let snapshot = view.snapshot();
    let top = &snapshot.realm_stats.top_realm;
    if top.is_unset() {
        println!("No realm data loaded.");
    } else {
        println!(
            "Highest average level: {} ({})",
            top.realm,
            format_decimal_f64(top.avg_level, 1, settings.european_numbers)
        );
    }
    Ok(())
}

/// Change the active realm selection and report the resulting row count.
pub fn select_realm(view: &mut DashboardView, selection: &str) -> Result<(), String> {
    view.select_realm(selection);
    let snapshot = view.snapshot();
    match view.filter() {
        RealmFilter::All => println!("Showing all realms ({} characters)", snapshot.rows.len()),
        RealmFilter::Realm(realm) => {
            println!("Showing {realm} ({} characters)", snapshot.rows.len());
        }
    }
    Ok(())
}

/// List the selector options: the sentinel plus every raw realm name.
pub fn show_options(view: &DashboardView) -> Result<(), String> {
    println!("{}", RealmFilter::ALL);
    for realm in view.snapshot().realm_options {
        println!("{realm}");
    }
    Ok(())
}

pub fn show_settings(settings: &Settings) -> Result<(), String> {
    println!("data_path        = {}", settings.data_path.display());
    println!("european_numbers = {}", settings.european_numbers);
    Ok(())
}
