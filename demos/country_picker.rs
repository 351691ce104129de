//! Example demonstrating country picker population.
//!
//! This example shows how a UI would fill a country picker from the bundled
//! table and pre-select the entry matching the current system locale.
//!
//! # Running
//!
//! ```bash
//! cargo run --example country_picker
//! ```

use country_resolver::{all_country_codes, best_match_for_current_locale};

fn main() {
    println!("=== Country Picker Demo ===\n");

    let selected = best_match_for_current_locale();

    println!("{:<4} {:<10} {:<8} {:<25}", "", "Locale", "Dial", "Country");
    println!("{}", "-".repeat(50));

    for country in all_country_codes() {
        let marker = if country == selected { ">" } else { "" };
        println!(
            "{:<4} {:<10} +{:<7} {:<25}",
            marker,
            country.locale_code.as_str(),
            country.dial_code,
            country.country_name
        );
    }

    println!("\nPre-selected for this system: {selected}");
}
