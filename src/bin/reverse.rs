//! Reverse each line read from standard input.

use std::io::{self, BufRead, Write};

fn reverse(source: &str) -> String {
    source.chars().rev().collect()
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        writeln!(stdout, "{}", reverse(&line?))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("hello"), "olleh");
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn test_reverse_multibyte() {
        // Reversal operates on characters, not bytes.
        assert_eq!(reverse("héllo"), "olléh");
    }
}
