const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y', 'A', 'E', 'I', 'O', 'U', 'Y'];

/// Flesch-Kincaid style grade level.
///
/// `0.39 * words / sentences + 11.8 * vowels / words - 15.59`, where sentences
/// are the `.`-delimited segments and vowels stand in for syllables. Text with
/// no words scores 0.0.
pub fn flesch_kincaid(text: &str) -> f64 {
    let words = text.split_whitespace().count();
    if words == 0 {
        return 0.0;
    }
    let sentences = text.split('.').count();
    let vowels = text.chars().filter(|c| VOWELS.contains(c)).count();
    let words = words as f64;
    0.39 * words / sentences as f64 + 11.8 * (vowels as f64 / words) - 15.59
}
