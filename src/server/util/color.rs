//! Default colors for lookup records shown in charts and badges.

use rand::Rng;

/// Returns a random `#RRGGBB` color.
pub fn random_hex_color() -> String {
    let mut rng = rand::rng();
    format!("#{:06X}", rng.random_range(0..=0xFF_FFFFu32))
}

/// Keeps a supplied color, falling back to a random one when absent or blank.
pub fn color_or_random(color: Option<String>) -> String {
    match color {
        Some(c) if !c.trim().is_empty() => c.trim().to_string(),
        _ => random_hex_color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(value: &str) -> bool {
        value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn random_color_is_hex() {
        for _ in 0..100 {
            assert!(is_hex_color(&random_hex_color()));
        }
    }

    #[test]
    fn keeps_supplied_color() {
        assert_eq!(color_or_random(Some(" #FF0000 ".to_string())), "#FF0000");
    }

    #[test]
    fn replaces_blank_color() {
        assert!(is_hex_color(&color_or_random(Some("   ".to_string()))));
        assert!(is_hex_color(&color_or_random(None)));
    }
}
