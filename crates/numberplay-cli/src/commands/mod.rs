pub mod config;
pub mod module;
pub mod numberline;
pub mod quiz;
pub mod rounding;
pub mod stats;

use std::io::{self, BufRead, Write};

use numberplay_core::storage::{Database, TtlCache};
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;

/// The shared cache every game command receives.
pub type Cache<'a> = TtlCache<&'a Database>;

/// Print a prompt and read one trimmed line. `None` on EOF.
pub fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Seeded generator for reproducible sessions, entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> Mcg128Xsl64 {
    match seed {
        Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
        None => Mcg128Xsl64::from_entropy(),
    }
}

/// Format an integer with thousands separators (12345 -> "12,345").
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Print the closing stats block for a game session.
pub fn print_session_stats(labels: [&str; 3], stats: numberplay_core::SessionStats) {
    println!();
    println!(
        "{}: {}  {}: {}  {}: {}%",
        labels[0],
        stats.attempts,
        labels[1],
        stats.correct,
        labels[2],
        stats.accuracy_percent()
    );
}
