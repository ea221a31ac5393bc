//! Basic usage of the crumpler API

use crumpler_api::{shorten_diff, Config, Crumpler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model: String = (1..=30).map(|n| format!("Line {n} of the expected text\n")).collect();
    let subject = model.replace("Line 17 of the", "Line 17 of an unexpected");

    // Method 1: Convenience function with the default configuration
    println!("=== Method 1: Default Configuration ===");
    let result = shorten_diff(&subject, &model)?;
    println!("--- model ---\n{}", result.model);
    println!("--- subject ---\n{}", result.subject);

    // Method 2: Custom configuration
    println!("=== Method 2: Custom Configuration ===");
    let config = Config::builder()
        .bracket_size(1)
        .max_line_length(24)
        .same_head_length_limit(Some(4))
        .line_number_padding(' ')
        .line_number_delim(" | ")
        .indent_collapse_ellipses(true)
        .build()?;
    let crumpler = Crumpler::with_config(config)?;
    let result = crumpler.shorten_diff(&subject, &model);
    println!("--- model ---\n{}", result.model);
    println!("--- subject ---\n{}", result.subject);

    // Method 3: Shortening a lone text
    println!("=== Method 3: Single Text ===");
    let shortened = crumpler.shorten_text(&model);
    println!("{}", shortened.text);

    Ok(())
}
