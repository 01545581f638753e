// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
        _                   _             _ _
  _ __ | |___   ___ _____ _| |_ _   _  __| (_) ___
 | '_ \| / __| / __|_   _| | | | | |/ _` | |/ _ \
 | |_) | \__ \ \__ \ | | | |_| |_| | (_| | | (_) |
 | .__/|_|___/ |___/ |_|  \__|\__,_|\__,_|_|\___/
 |_|

    Plain Language Summaries & Readability Scores
"#;
    println!("{}", banner);
}
