//! Accent- and case-insensitive comparison of spoken text.

/// Lowercases, strips French diacritics, turns hyphens and apostrophes into spaces and
/// collapses whitespace.
#[must_use]
pub fn fold(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for c in text.chars().flat_map(char::to_lowercase) {
        let c = match c {
            'à' | 'â' | 'ä' | 'á' => 'a',
            'ç' => 'c',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' | 'í' => 'i',
            'ô' | 'ö' | 'ó' => 'o',
            'ù' | 'û' | 'ü' | 'ú' => 'u',
            'ÿ' => 'y',
            'œ' => {
                folded.push('o');
                'e'
            }
            'æ' => {
                folded.push('a');
                'e'
            }
            '-' | '\'' | '’' | '_' => ' ',
            c if c.is_whitespace() => ' ',
            c => c,
        };

        if c == ' ' && (folded.is_empty() || folded.ends_with(' ')) {
            continue;
        }

        folded.push(c);
    }

    if folded.ends_with(' ') {
        folded.pop();
    }

    folded
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

fn starts_word(haystack: &str, start: usize) -> bool {
    haystack[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !is_word_char(c))
}

fn ends_word(haystack: &str, end: usize) -> bool {
    let mut rest = haystack[end..].chars();
    match rest.next() {
        None => true,
        Some('s' | 'x') => rest.next().is_none_or(|c| !is_word_char(c)),
        Some(c) => !is_word_char(c),
    }
}

/// Whether `phrase` occurs in `haystack` as whole words. A trailing plural `s` or `x` is
/// tolerated. Both arguments are expected to be folded.
#[must_use]
pub fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    !phrase.is_empty()
        && haystack.match_indices(phrase).any(|(start, _)| {
            starts_word(haystack, start) && ends_word(haystack, start + phrase.len())
        })
}

/// Whether a word of `haystack` begins with `stem`.
#[must_use]
pub fn contains_stem(haystack: &str, stem: &str) -> bool {
    !stem.is_empty()
        && haystack
            .match_indices(stem)
            .any(|(start, _)| starts_word(haystack, start))
}
