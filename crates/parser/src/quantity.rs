use std::{ops::Range, sync::LazyLock};

use log::debug;
use regex::Regex;
use vocalift_domain::{Minutes, Reps, Sets, Weight};

static SETS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([0-9]+)\s*(?:s[ée]ries?|sets?)\b").expect("valid sets pattern")
});
static REPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([0-9]+)\s*(?:r[ée]p[ée]titions?|reps?)\b").expect("valid reps pattern")
});
static WEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([0-9]+(?:[.,][0-9]+)?)\s*(?:kilogrammes?|kilos?|kgs?)\b")
        .expect("valid weight pattern")
});
static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([0-9]+)\s*(?:minutes?|mins?|mn)\b").expect("valid duration pattern")
});
/// `<sets> fois <reps>`
static TIMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([0-9]+)\s*fois\s*([0-9]+)\b").expect("valid times pattern")
});
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]+(?:[.,][0-9]+)?\b").expect("valid number pattern"));

/// Words joining quantities to the exercise name, dropped from the ends of a custom name.
const FILLER_WORDS: [&str; 9] = ["de", "des", "à", "a", "avec", "et", "en", "pour", "fois"];

/// Quantities spoken in one segment. Every present value lies within the range of its type.
#[derive(Debug, Default, Clone)]
pub struct ParsedQuantity {
    pub sets: Option<Sets>,
    pub reps: Option<Reps>,
    pub weight: Option<Weight>,
    pub duration: Option<Minutes>,
    spans: Vec<Range<usize>>,
}

impl ParsedQuantity {
    #[must_use]
    pub fn found(&self) -> bool {
        self.sets.is_some() || self.reps.is_some() || self.weight.is_some() || self.duration.is_some()
    }

    /// Byte ranges of the segment taken up by quantity phrases, in ascending order.
    #[must_use]
    pub fn spans(&self) -> &[Range<usize>] {
        &self.spans
    }

    /// The segment without its quantity phrases and the filler words around them.
    #[must_use]
    pub fn residual(&self, segment: &str) -> String {
        let mut remaining = String::with_capacity(segment.len());
        let mut copied = 0;
        for span in &self.spans {
            if span.start >= copied
                && segment.is_char_boundary(span.start)
                && segment.is_char_boundary(span.end)
            {
                remaining.push_str(&segment[copied..span.start]);
                remaining.push(' ');
                copied = span.end;
            }
        }
        remaining.push_str(&segment[copied..]);

        let mut words = remaining
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | ':'))
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>();
        while words
            .first()
            .is_some_and(|w| FILLER_WORDS.contains(&w.to_lowercase().as_str()))
        {
            words.remove(0);
        }
        while words
            .last()
            .is_some_and(|w| FILLER_WORDS.contains(&w.to_lowercase().as_str()))
        {
            words.pop();
        }

        words.join(" ")
    }
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

fn validated<T, E: std::fmt::Display>(field: &str, value: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("discarding {field} \"{value}\": {err}");
            None
        }
    }
}

/// Extracts set count, repetitions, weight and duration from a segment whose numerals are
/// already digits.
///
/// Each quantity is anchored to its own unit word, so the phrasing order does not matter. A
/// number without unit counts repetitions if no repetitions were spoken explicitly.
/// `<n> fois <m>` stands for `n` sets of `m` repetitions.
#[must_use]
pub fn extract_quantity(segment: &str) -> ParsedQuantity {
    let mut quantity = ParsedQuantity::default();

    let mut spans = [&*SETS, &*REPS, &*WEIGHT, &*DURATION]
        .iter()
        .flat_map(|pattern| pattern.find_iter(segment).map(|m| m.range()))
        .collect::<Vec<_>>();

    let times = TIMES.captures_iter(segment).find(|captures| {
        captures
            .get(0)
            .is_some_and(|m| !spans.iter().any(|span| overlaps(span, &m.range())))
    });
    let times_value = |group: usize| {
        times
            .as_ref()
            .and_then(|captures| captures.get(group))
            .map(|m| m.as_str().to_string())
    };
    if let Some(m) = times.as_ref().and_then(|captures| captures.get(0)) {
        spans.push(m.range());
    }

    let value_of = |pattern: &Regex| {
        pattern
            .captures(segment)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
    };

    if let Some(value) = value_of(&SETS).or_else(|| times_value(1)) {
        quantity.sets = validated("sets", &value, Sets::try_from(value.as_str()));
    }

    let explicit_reps = value_of(&REPS).or_else(|| times_value(2));
    if let Some(value) = &explicit_reps {
        quantity.reps = validated("reps", value, Reps::try_from(value.as_str()));
    }

    if let Some(value) = value_of(&WEIGHT) {
        quantity.weight = validated("weight", &value, Weight::try_from(value.as_str()));
    }

    if let Some(value) = value_of(&DURATION) {
        quantity.duration = validated("duration", &value, Minutes::try_from(value.as_str()));
    }

    if explicit_reps.is_none() {
        let bare = NUMBER.find_iter(segment).find(|m| {
            !m.as_str().contains(['.', ','])
                && !spans
                    .iter()
                    .any(|span| span.start <= m.start() && m.end() <= span.end)
        });
        if let Some(m) = bare {
            quantity.reps = validated("reps", m.as_str(), Reps::try_from(m.as_str()));
            spans.push(m.range());
        }
    }

    spans.sort_by_key(|span| span.start);
    quantity.spans = spans;

    debug!(
        "extracted quantity from \"{segment}\": sets={:?} reps={:?} weight={:?} duration={:?}",
        quantity.sets, quantity.reps, quantity.weight, quantity.duration
    );

    quantity
}
