use log::debug;

fn is_decimal_separator(c: char, previous: Option<char>, next: Option<char>) -> bool {
    matches!(c, '.' | ',')
        && previous.is_some_and(|p| p.is_ascii_digit())
        && next.is_some_and(|n| n.is_ascii_digit())
}

/// Splits a transcript into trimmed, non-empty exercise utterances.
///
/// A separator between two digits is a decimal separator and does not split.
#[must_use]
pub fn segment<'a>(transcript: &'a str, separators: &[char]) -> Vec<&'a str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut previous = None;
    let mut chars = transcript.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        if separators.contains(&c) && !is_decimal_separator(c, previous, next) {
            push_trimmed(&mut segments, &transcript[start..i]);
            start = i + c.len_utf8();
        }
        previous = Some(c);
    }

    push_trimmed(&mut segments, &transcript[start..]);

    debug!("split transcript into {} segment(s)", segments.len());

    segments
}

fn push_trimmed<'a>(segments: &mut Vec<&'a str>, segment: &'a str) {
    let segment = segment.trim();
    if !segment.is_empty() {
        segments.push(segment);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const SEPARATORS: [char; 5] = ['.', '!', '?', ';', '\n'];

    #[rstest]
    #[case("15 pompes", vec!["15 pompes"])]
    #[case(
        "15 pompes. 20 squats. course 30 minutes",
        vec!["15 pompes", "20 squats", "course 30 minutes"]
    )]
    #[case("15 pompes.", vec!["15 pompes"])]
    #[case(". . 15 pompes ..", vec!["15 pompes"])]
    #[case("squat 62.5 kg. rameur", vec!["squat 62.5 kg", "rameur"])]
    #[case("squat 62. 5 kg", vec!["squat 62", "5 kg"])]
    #[case("pompes; squats\nvélo ! rameur?", vec!["pompes", "squats", "vélo", "rameur"])]
    #[case("", vec![])]
    #[case("   ", vec![])]
    #[case("...", vec![])]
    fn test_segment(#[case] transcript: &str, #[case] expected: Vec<&str>) {
        assert_eq!(segment(transcript, &SEPARATORS), expected);
    }

    #[test]
    fn test_segment_custom_separators() {
        assert_eq!(
            segment("pompes, squats. rameur", &[',']),
            vec!["pompes", "squats. rameur"]
        );
    }
}
