//! Example demonstrating phone-field country auto-selection.
//!
//! This example simulates a user typing an international phone number digit
//! by digit and shows how the best-guess country sharpens as more of the
//! dialing prefix arrives.
//!
//! # Running
//!
//! ```bash
//! cargo run --example prefix_autofill
//! ```

use country_resolver::best_guess_prefix_for_tail;

fn main() {
    println!("=== Prefix Autofill Demo ===\n");

    // A Bahamian number: shares the NANP "1" with the US until the
    // island code is typed.
    let number = "+12425551212";

    println!("Typing {number}:\n");
    println!("{:<16} {:<25}", "Typed so far", "Best guess");
    println!("{}", "-".repeat(40));

    for end in 1..=number.len() {
        let typed = &number[..end];
        let guess = best_guess_prefix_for_tail(typed);
        println!("{:<16} {:<25}", typed, guess.to_string());
    }
}
