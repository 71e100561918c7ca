//! Label helpers for rendering result cards and titles

/// Uppercase the first character, leave the rest untouched.
///
/// `"mr-mime"` becomes `"Mr-mime"`, matching how names and type badges are
/// shown on cards.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pikachu"), "Pikachu");
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize("Fire"), "Fire");
        assert_eq!(capitalize(""), "");
    }
}
