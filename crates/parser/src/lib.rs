#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::sync::LazyLock;

use vocalift_domain::{MuscleGroup, ParsedExercise, WorkoutDraft};

mod assembler;
mod builtin;
mod classifier;
mod numeral;
mod quantity;
mod resolver;
mod segment;
mod settings;
mod text;
mod vocabulary;

pub use numeral::normalize_numerals;
pub use quantity::ParsedQuantity;
pub use resolver::{ExerciseMatch, MatchKind};
pub use segment::segment;
pub use settings::{Settings, SettingsError};
pub use text::fold;
pub use vocabulary::{
    Category, CategoryData, Family, FamilyData, Phrase, Rule, RuleData, Vocabulary,
    VocabularyData, VocabularyError,
};

static DEFAULT_SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::default);

/// Turns spoken workout descriptions into exercises.
///
/// A parser holds no state besides its read-only configuration, so it can be reused for every
/// update of a growing transcript.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    vocabulary: &'a Vocabulary,
    settings: &'a Settings,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, settings: &'a Settings) -> Self {
        Self {
            vocabulary,
            settings,
        }
    }

    #[must_use]
    pub fn parse(&self, transcript: &str) -> WorkoutDraft {
        segment(transcript, &self.settings.separators)
            .into_iter()
            .filter_map(|segment| self.assemble(segment))
            .collect()
    }

    #[must_use]
    pub fn parse_quantity(&self, segment: &str) -> ParsedQuantity {
        quantity::extract_quantity(&normalize_numerals(segment))
    }

    #[must_use]
    pub fn resolve_exercise(&self, segment: &str) -> ExerciseMatch {
        resolver::resolve(&normalize_numerals(segment), self.vocabulary)
    }

    #[must_use]
    pub fn muscle_group(&self, name: &str) -> MuscleGroup {
        classifier::classify(name, self.vocabulary)
    }

    /// The exercise described by a single segment, if it is not noise.
    #[must_use]
    pub fn assemble(&self, segment: &str) -> Option<ParsedExercise> {
        let normalized = normalize_numerals(segment);
        assembler::assemble(
            &normalized,
            &resolver::resolve(&normalized, self.vocabulary),
            &quantity::extract_quantity(&normalized),
            self.vocabulary,
            self.settings,
        )
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new(Vocabulary::builtin(), &DEFAULT_SETTINGS)
    }
}

/// Parses a transcript with the built-in vocabulary and default settings.
#[must_use]
pub fn parse_transcript(transcript: &str) -> WorkoutDraft {
    Parser::default().parse(transcript)
}

#[must_use]
pub fn parse_quantity(segment: &str) -> ParsedQuantity {
    Parser::default().parse_quantity(segment)
}

#[must_use]
pub fn resolve_exercise(segment: &str) -> ExerciseMatch {
    Parser::default().resolve_exercise(segment)
}

#[must_use]
pub fn muscle_group(name: &str) -> MuscleGroup {
    Parser::default().muscle_group(name)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use vocalift_domain::ExerciseType;

    use super::*;

    #[test]
    fn test_parse_with_custom_vocabulary() {
        let vocabulary = Vocabulary::try_from(
            VocabularyData::builtin().merge(
                serde_json::from_str(r#"{"phrases": {"hip thrust": "Hip thrust"}, "categories": [{"group": "jambes", "exercises": ["Hip thrust"]}]}"#)
                    .unwrap(),
            ),
        )
        .unwrap();
        let settings = Settings::default();
        let parser = Parser::new(&vocabulary, &settings);

        let draft = parser.parse("hip thrust 3 séries de 10 à 80 kg");

        assert_eq!(draft.len(), 1);
        assert_eq!(draft[0].name.as_str(), "Hip thrust");
        assert_eq!(draft[0].muscle_group, MuscleGroup::Jambes);
        assert_eq!(draft[0].num_sets(), 3);
    }

    #[test]
    fn test_parse_with_custom_separators() {
        let settings = Settings::from_json(r#"{"separators": [",", "."]}"#).unwrap();
        let parser = Parser::new(Vocabulary::builtin(), &settings);

        let draft = parser.parse("15 pompes, 20 squats, squat 62,5 kg");

        assert_eq!(
            draft.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["Pompes", "Squat", "Squat"]
        );
    }

    #[test]
    fn test_parse_normalizes_numerals() {
        let draft = parse_transcript("trois séries de dix-huit pompes");

        assert_eq!(draft.len(), 1);
        assert_eq!(draft[0].num_sets(), 3);
        assert!(draft[0].sets.iter().all(|set| u32::from(set.reps) == 18));
    }

    #[rstest]
    #[case("quatre séries", Some(4))]
    #[case("vingt séries", Some(20))]
    #[case("vingt et une séries", None)]
    fn test_parse_quantity(#[case] segment: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_quantity(segment).sets.map(u32::from), expected);
    }

    #[rstest]
    #[case("un développé couché", "Développé couché", MatchKind::Contained)]
    #[case("élévations latérales", "Élévations latérales", MatchKind::Exact)]
    fn test_resolve_exercise(#[case] segment: &str, #[case] name: &str, #[case] kind: MatchKind) {
        let exercise_match = resolve_exercise(segment);
        assert_eq!(exercise_match.name, name);
        assert_eq!(exercise_match.kind, kind);
    }

    #[test]
    fn test_muscle_group() {
        assert_eq!(muscle_group("Pompes"), MuscleGroup::Pectoraux);
        assert_eq!(muscle_group("Squat"), MuscleGroup::Jambes);
    }

    #[test]
    fn test_assemble() {
        let exercise = Parser::default().assemble("trente minutes de vélo").unwrap();
        assert_eq!(exercise.name.as_str(), "Vélo");
        assert_eq!(exercise.exercise_type, ExerciseType::Cardio);
        assert_eq!(u32::from(exercise.sets[0].duration), 30);
    }
}
