use log::debug;

use crate::{
    text::{contains_phrase, fold},
    vocabulary::Vocabulary,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The whole segment is a known phrase.
    Exact,
    /// The segment contains a known phrase.
    Contained,
    /// A keyword stem and its modifiers were recognized.
    Keyword,
    /// Nothing was recognized, the segment is used verbatim.
    Custom,
}

impl MatchKind {
    #[must_use]
    pub fn confidence(self) -> f32 {
        match self {
            MatchKind::Exact | MatchKind::Contained => 1.0,
            MatchKind::Keyword => 0.8,
            MatchKind::Custom => 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseMatch {
    pub name: String,
    pub found: bool,
    pub confidence: f32,
    pub kind: MatchKind,
}

impl ExerciseMatch {
    fn new(name: &str, kind: MatchKind) -> Self {
        Self {
            name: name.to_string(),
            found: kind != MatchKind::Custom,
            confidence: kind.confidence(),
            kind,
        }
    }
}

/// Resolves the exercise named in a segment.
///
/// Known phrases are tried longest first, as the whole segment and then as part of it. The
/// keyword families are consulted last. If nothing matches, the trimmed segment is returned as
/// a custom exercise.
#[must_use]
pub fn resolve(segment: &str, vocabulary: &Vocabulary) -> ExerciseMatch {
    let folded = fold(segment);
    let phrases = vocabulary.phrases();

    let exercise_match = if let Some(phrase) = phrases.iter().find(|p| p.spoken == folded) {
        ExerciseMatch::new(&phrase.exercise, MatchKind::Exact)
    } else if let Some(phrase) = phrases
        .iter()
        .find(|p| contains_phrase(&folded, &p.spoken))
    {
        ExerciseMatch::new(&phrase.exercise, MatchKind::Contained)
    } else if let Some(rule) = vocabulary
        .families()
        .iter()
        .find_map(|family| family.resolve(&folded))
    {
        ExerciseMatch::new(&rule.exercise, MatchKind::Keyword)
    } else {
        ExerciseMatch::new(segment.trim(), MatchKind::Custom)
    };

    debug!(
        "resolved \"{segment}\" to \"{}\" ({:?})",
        exercise_match.name, exercise_match.kind
    );

    exercise_match
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("pompes", "Pompes", MatchKind::Exact)]
    #[case("Pompes", "Pompes", MatchKind::Exact)]
    #[case("pompe", "Pompes", MatchKind::Exact)]
    #[case("squat", "Squat", MatchKind::Exact)]
    #[case("Développé Couché", "Développé couché", MatchKind::Exact)]
    #[case("developpe couche", "Développé couché", MatchKind::Exact)]
    #[case("15 pompes", "Pompes", MatchKind::Contained)]
    #[case("20 squats", "Squat", MatchKind::Contained)]
    #[case("développé couché 80 kg", "Développé couché", MatchKind::Contained)]
    #[case("3 séries de développé haltères", "Développé haltères", MatchKind::Contained)]
    #[case("course 30 minutes", "Course à pied", MatchKind::Contained)]
    #[case("30 minutes de tapis de course", "Tapis de course", MatchKind::Contained)]
    #[case("soulevé de terre roumain 100 kg", "Soulevé de terre roumain", MatchKind::Contained)]
    #[case("hack squat 60 kg", "Hack squat", MatchKind::Contained)]
    #[case("4 séries d'élévations latérales", "Élévations latérales", MatchKind::Contained)]
    #[case("curl marteau 12 kg", "Curl marteau", MatchKind::Contained)]
    #[case("développé incliné aux haltères", "Développé incliné", MatchKind::Contained)]
    #[case("développé avec des haltères", "Développé haltères", MatchKind::Keyword)]
    #[case("développé 60 kg", "Développé couché", MatchKind::Keyword)]
    #[case("curl avec haltères", "Curl haltères", MatchKind::Keyword)]
    #[case("curl 12 kg", "Curl barre", MatchKind::Keyword)]
    #[case("rowing avec la barre", "Rowing barre", MatchKind::Keyword)]
    #[case("rowing un bras haltère", "Rowing haltères", MatchKind::Keyword)]
    #[case("rowing", "Rowing barre", MatchKind::Keyword)]
    #[case("élévation latérale à la poulie", "Élévations latérales", MatchKind::Contained)]
    #[case("élévations sur le côté latérale", "Élévations latérales", MatchKind::Keyword)]
    #[case("tirage à la poulie", "Tirage poulie haute", MatchKind::Keyword)]
    #[case("tirage nuque", "Tirage vertical", MatchKind::Keyword)]
    #[case("extension à la poulie", "Extension poulie haute", MatchKind::Keyword)]
    #[case("tirage à la corde", "Tirage vertical", MatchKind::Keyword)]
    #[case("corde à sauter 10 minutes", "Corde à sauter", MatchKind::Contained)]
    fn test_resolve(#[case] segment: &str, #[case] name: &str, #[case] kind: MatchKind) {
        let exercise_match = resolve(segment, Vocabulary::builtin());
        assert_eq!(exercise_match.name, name);
        assert_eq!(exercise_match.kind, kind);
        assert!(exercise_match.found);
    }

    #[rstest]
    #[case("exercice inexistant xyz", "exercice inexistant xyz")]
    #[case("  swing kettlebell  ", "swing kettlebell")]
    #[case("élévations du bassin", "élévations du bassin")]
    #[case("", "")]
    fn test_resolve_custom(#[case] segment: &str, #[case] name: &str) {
        let exercise_match = resolve(segment, Vocabulary::builtin());
        assert_eq!(
            exercise_match,
            ExerciseMatch {
                name: name.to_string(),
                found: false,
                confidence: 0.5,
                kind: MatchKind::Custom
            }
        );
    }

    #[rstest]
    #[case("pompes", 1.0)]
    #[case("15 pompes", 1.0)]
    #[case("curl avec haltères", 0.8)]
    #[case("exercice inexistant xyz", 0.5)]
    fn test_resolve_confidence(#[case] segment: &str, #[case] confidence: f32) {
        assert_approx_eq!(resolve(segment, Vocabulary::builtin()).confidence, confidence);
    }

    #[test]
    fn test_resolve_longest_phrase_first() {
        let vocabulary = Vocabulary::from_json(
            r#"{"phrases": {"développé": "Développé couché", "développé haltères": "Développé haltères"}}"#,
        )
        .unwrap();
        assert_eq!(
            resolve("3 séries de développé haltères", &vocabulary).name,
            "Développé haltères"
        );
        assert_eq!(
            resolve("développé haltères 3 séries", &vocabulary).name,
            "Développé haltères"
        );
    }

    #[test]
    fn test_resolve_word_bounded() {
        let vocabulary = Vocabulary::from_json(r#"{"phrases": {"vélo": "Vélo"}}"#).unwrap();
        assert_eq!(
            resolve("développé 80 kg", &vocabulary).kind,
            MatchKind::Custom
        );
    }
}
