//! Rewriting of spelled-out French cardinals into digits.

use log::debug;

use crate::text::fold;

/// Words after which a lone `un`/`une` is a count rather than an article.
const UNIT_PREFIXES: [&str; 9] = [
    "serie", "set", "rep", "fois", "kilo", "kg", "minute", "min", "mn",
];

fn cardinal(word: &str) -> Option<u32> {
    let value = match word {
        "zero" => 0,
        "un" | "une" => 1,
        "deux" => 2,
        "trois" => 3,
        "quatre" => 4,
        "cinq" => 5,
        "six" => 6,
        "sept" => 7,
        "huit" => 8,
        "neuf" => 9,
        "dix" => 10,
        "onze" => 11,
        "douze" => 12,
        "treize" => 13,
        "quatorze" => 14,
        "quinze" => 15,
        "seize" => 16,
        "vingt" | "vingts" => 20,
        "trente" => 30,
        "quarante" => 40,
        "cinquante" => 50,
        "soixante" => 60,
        "cent" | "cents" => 100,
        _ => return None,
    };
    Some(value)
}

struct Word {
    start: usize,
    end: usize,
    folded: String,
}

fn words(text: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        match (c.is_alphabetic(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                words.push(Word {
                    start: s,
                    end: i,
                    folded: fold(&text[s..i]),
                });
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        words.push(Word {
            start: s,
            end: text.len(),
            folded: fold(&text[s..]),
        });
    }

    words
}

/// Parts of one compound number are separated by blanks or a single hyphen.
fn joined(text: &str, previous: &Word, next: &Word) -> bool {
    let gap = text[previous.end..next.start].trim();
    gap.is_empty() || gap == "-"
}

/// Reads the longest compound number at the start of `words`.
///
/// Returns the value and the number of words consumed.
fn read_number(text: &str, words: &[Word]) -> Option<(u32, usize)> {
    let mut value = cardinal(&words.first()?.folded)?;
    let mut last = value;
    let mut consumed = 1;

    while let Some(word) = words.get(consumed) {
        if !joined(text, &words[consumed - 1], word) {
            break;
        }

        let (next, width) = if word.folded == "et" {
            match words.get(consumed + 1) {
                Some(after)
                    if joined(text, word, after)
                        && matches!(after.folded.as_str(), "un" | "une" | "onze") =>
                {
                    (cardinal(&after.folded)?, 2)
                }
                _ => break,
            }
        } else {
            match cardinal(&word.folded) {
                Some(next) => (next, 1),
                None => break,
            }
        };

        if next == 100 && value < 100 {
            value *= 100;
        } else if next == 20 && last == 4 && value % 100 == 4 {
            value += 76;
        } else if next < last
            && (last == 100 || next < 10 || (next < 20 && (last == 60 || value % 100 == 80)))
        {
            value += next;
        } else {
            break;
        }

        last = next;
        consumed += width;
    }

    Some((value, consumed))
}

/// A lone article counts only if a unit word follows it directly.
fn is_counting_article(text: &str, words: &[Word], index: usize) -> bool {
    words.get(index + 1).is_some_and(|next| {
        text[words[index].end..next.start].trim().is_empty()
            && UNIT_PREFIXES
                .iter()
                .any(|prefix| next.folded.starts_with(prefix))
    })
}

/// Replaces spelled-out numbers (`quatre`, `dix-sept`, `vingt et un`, `quatre-vingts`) with
/// digits. Only whole words are replaced, and a lone `un`/`une` only when it counts a unit.
#[must_use]
pub fn normalize_numerals(segment: &str) -> String {
    let words = words(segment);
    let mut normalized = String::with_capacity(segment.len());
    let mut copied = 0;
    let mut i = 0;

    while i < words.len() {
        match read_number(segment, &words[i..]) {
            Some((_, 1))
                if matches!(words[i].folded.as_str(), "un" | "une")
                    && !is_counting_article(segment, &words, i) =>
            {
                i += 1;
            }
            Some((value, consumed)) => {
                normalized.push_str(&segment[copied..words[i].start]);
                normalized.push_str(&value.to_string());
                copied = words[i + consumed - 1].end;
                i += consumed;
            }
            None => i += 1,
        }
    }

    normalized.push_str(&segment[copied..]);

    if normalized != segment {
        debug!("normalized numerals: \"{segment}\" -> \"{normalized}\"");
    }

    normalized
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        "quatre séries de 12 répétitions à 20 kg",
        "4 séries de 12 répétitions à 20 kg"
    )]
    #[case(
        "trois séries de douze répétitions à vingt kilos",
        "3 séries de 12 répétitions à 20 kilos"
    )]
    #[case("Quatre séries", "4 séries")]
    #[case("zéro kilo", "0 kilo")]
    #[case("dix-sept pompes", "17 pompes")]
    #[case("dix sept pompes", "17 pompes")]
    #[case("vingt et un squats", "21 squats")]
    #[case("vingt-deux squats", "22 squats")]
    #[case("trente cinq minutes de course", "35 minutes de course")]
    #[case("soixante-dix kilos", "70 kilos")]
    #[case("soixante et onze kilos", "71 kilos")]
    #[case("soixante-dix-huit kilos", "78 kilos")]
    #[case("quatre-vingts kilos", "80 kilos")]
    #[case("quatre-vingt-deux kilos", "82 kilos")]
    #[case("quatre-vingt-dix-neuf kilos", "99 kilos")]
    #[case("cent vingt kilos", "120 kilos")]
    #[case("deux cents kilos", "200 kilos")]
    #[case("deux cent cinquante kilos", "250 kilos")]
    #[case("deux trois", "2 3")]
    #[case("une série de dix", "1 série de 10")]
    #[case("un kilo", "1 kilo")]
    #[case("un développé couché", "un développé couché")]
    #[case("une course", "une course")]
    #[case("un vingt kilos", "un 20 kilos")]
    #[case("un 20 kilos", "un 20 kilos")]
    #[case("une, série", "une, série")]
    #[case("vingt, trois", "20, 3")]
    #[case("vingt et des poussières", "20 et des poussières")]
    #[case("septembre", "septembre")]
    #[case("curl 21", "curl 21")]
    #[case("", "")]
    fn test_normalize_numerals(#[case] segment: &str, #[case] expected: &str) {
        assert_eq!(normalize_numerals(segment), expected);
    }

    #[rstest]
    #[case("quatre séries de douze répétitions")]
    #[case("vingt et un squats à soixante-dix kilos")]
    #[case("un développé couché")]
    #[case("course trente minutes")]
    #[case("un vingt kilos")]
    #[case("une douze minutes")]
    fn test_normalize_numerals_idempotent(#[case] segment: &str) {
        let normalized = normalize_numerals(segment);
        assert_eq!(normalize_numerals(&normalized), normalized);
    }

    #[test]
    fn test_all_small_cardinals() {
        let words = [
            "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix",
            "onze", "douze", "treize", "quatorze", "quinze", "seize", "dix-sept", "dix-huit",
            "dix-neuf", "vingt",
        ];
        for (expected, word) in words.iter().enumerate() {
            assert_eq!(
                normalize_numerals(&format!("{word} séries")),
                format!("{expected} séries")
            );
        }
    }
}
