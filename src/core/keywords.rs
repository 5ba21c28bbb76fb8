/// Words that carry no search signal and are stripped from vibe text
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "feel", "feeling", "for", "i", "in",
    "is", "it", "like", "me", "mood", "my", "of", "on", "or", "so", "some", "something", "that",
    "the", "to", "very", "want", "with",
];

/// Derive search terms from a free-text vibe description
///
/// Lowercases, splits on non-alphanumeric characters, strips stopwords and
/// deduplicates while preserving first-occurrence order. Deterministic and
/// free of I/O. If nothing survives, the trimmed raw description is used as
/// a single fallback term so every adapter still has something to search.
pub fn derive_keywords(description: &str) -> Vec<String> {
    let lowered = description.to_lowercase();
    let mut terms: Vec<String> = Vec::new();

    for token in lowered.split(|c: char| !c.is_alphanumeric()) {
        if token.is_empty() || STOPWORDS.contains(&token) {
            continue;
        }
        if !terms.iter().any(|t| t == token) {
            terms.push(token.to_string());
        }
    }

    if terms.is_empty() {
        let trimmed = lowered.trim();
        if !trimmed.is_empty() {
            terms.push(trimmed.to_string());
        }
    }

    terms
}

/// Join derived terms into the query string shared by the providers
pub fn search_query(terms: &[String]) -> String {
    terms.join(" ")
}

/// Movie genre hints for moods that rarely match film titles directly
///
/// Mirrors the keyword ladder used by the movie adapter: a vibe like
/// "cozy rainy day" finds nothing by title, so genre terms are appended
/// as later search attempts.
pub fn genre_hints(terms: &[String]) -> Vec<&'static str> {
    let has = |word: &str| terms.iter().any(|t| t == word);

    if has("cozy") || has("rainy") {
        vec!["romantic comedy", "drama"]
    } else if has("adventure") || has("adventurous") || has("exciting") {
        vec!["action", "adventure"]
    } else if has("scary") || has("spooky") {
        vec!["horror"]
    } else if has("funny") || has("comedy") {
        vec!["comedy"]
    } else {
        vec![]
    }
}
