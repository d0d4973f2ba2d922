use std::{
    collections::{BTreeMap, HashSet},
    sync::LazyLock,
};

use log::debug;
use vocalift_domain::{MuscleGroup, catalog};

use crate::{
    builtin,
    text::{contains_phrase, contains_stem, fold},
};

static BUILTIN: LazyLock<Vocabulary> = LazyLock::new(|| {
    Vocabulary::try_from(VocabularyData::builtin()).expect("built-in vocabulary is valid")
});

/// Loadable description of the spoken exercise vocabulary.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct VocabularyData {
    /// Spoken phrase mapped to the canonical exercise name.
    pub phrases: BTreeMap<String, String>,
    pub families: Vec<FamilyData>,
    pub categories: Vec<CategoryData>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct FamilyData {
    pub stems: Vec<String>,
    pub rules: Vec<RuleData>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct RuleData {
    /// The rule applies if any of these words is spoken. An empty list always applies.
    #[serde(default)]
    pub any_of: Vec<String>,
    pub exercise: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryData {
    pub group: MuscleGroup,
    #[serde(default)]
    pub exercises: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl VocabularyData {
    #[must_use]
    pub fn builtin() -> Self {
        let mut phrases = builtin::PHRASES
            .iter()
            .map(|(spoken, exercise)| ((*spoken).to_string(), (*exercise).to_string()))
            .collect::<BTreeMap<_, _>>();
        for entry in &catalog::CATALOG {
            for exercise in entry.exercises {
                phrases
                    .entry(fold(exercise))
                    .or_insert_with(|| (*exercise).to_string());
            }
        }

        let families = builtin::FAMILIES
            .iter()
            .map(|(stems, rules)| FamilyData {
                stems: to_strings(stems),
                rules: rules
                    .iter()
                    .map(|(any_of, exercise)| RuleData {
                        any_of: to_strings(any_of),
                        exercise: (*exercise).to_string(),
                    })
                    .collect(),
            })
            .collect();

        let categories = builtin::KEYWORDS
            .iter()
            .map(|(group, keywords)| CategoryData {
                group: *group,
                exercises: to_strings(catalog::exercises(*group)),
                keywords: to_strings(keywords),
            })
            .collect();

        Self {
            phrases,
            families,
            categories,
        }
    }

    /// Extends this vocabulary. Phrases of `other` replace equally spoken phrases, its
    /// families take precedence and its categories add to the existing ones.
    #[must_use]
    pub fn merge(mut self, other: VocabularyData) -> Self {
        let replaced = other.phrases.keys().map(|k| fold(k)).collect::<HashSet<_>>();
        self.phrases.retain(|spoken, _| !replaced.contains(&fold(spoken)));
        self.phrases.extend(other.phrases);

        let mut families = other.families;
        families.append(&mut self.families);
        self.families = families;

        for category in other.categories {
            match self
                .categories
                .iter_mut()
                .find(|c| c.group == category.group)
            {
                Some(existing) => {
                    existing.exercises.extend(category.exercises);
                    existing.keywords.extend(category.keywords);
                }
                None => self.categories.push(category),
            }
        }

        self
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Validated vocabulary with every key folded for matching.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    phrases: Vec<Phrase>,
    families: Vec<Family>,
    categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Phrase {
    pub spoken: String,
    pub exercise: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Family {
    pub stems: Vec<String>,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub any_of: Vec<String>,
    pub exercise: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub group: MuscleGroup,
    pub exercises: Vec<String>,
    pub keywords: Vec<String>,
}

impl Vocabulary {
    #[must_use]
    pub fn builtin() -> &'static Vocabulary {
        &BUILTIN
    }

    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        Vocabulary::try_from(serde_json::from_str::<VocabularyData>(json)?)
    }

    /// Phrases ordered longest first.
    #[must_use]
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    #[must_use]
    pub fn families(&self) -> &[Family] {
        &self.families
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl TryFrom<VocabularyData> for Vocabulary {
    type Error = VocabularyError;

    fn try_from(data: VocabularyData) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        let mut phrases = Vec::with_capacity(data.phrases.len());
        for (spoken, exercise) in data.phrases {
            let folded = fold(&spoken);
            if folded.is_empty() {
                return Err(VocabularyError::EmptyPhrase(exercise));
            }
            let exercise = exercise.trim();
            if exercise.is_empty() {
                return Err(VocabularyError::EmptyExercise(spoken));
            }
            if seen.insert(folded.clone()) {
                phrases.push(Phrase {
                    spoken: folded,
                    exercise: exercise.to_string(),
                });
            } else {
                debug!("ignoring duplicate phrase \"{spoken}\"");
            }
        }
        phrases.sort_by(|a, b| {
            b.spoken
                .chars()
                .count()
                .cmp(&a.spoken.chars().count())
                .then_with(|| a.spoken.cmp(&b.spoken))
        });

        let families = data
            .families
            .into_iter()
            .map(Family::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let categories = data
            .categories
            .into_iter()
            .map(Category::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            phrases,
            families,
            categories,
        })
    }
}

impl TryFrom<FamilyData> for Family {
    type Error = VocabularyError;

    fn try_from(data: FamilyData) -> Result<Self, Self::Error> {
        let stems = data.stems.iter().map(|s| fold(s)).collect::<Vec<_>>();
        if stems.is_empty() || stems.iter().any(String::is_empty) {
            return Err(VocabularyError::EmptyStems);
        }
        if data.rules.is_empty() {
            return Err(VocabularyError::EmptyRules(data.stems.join(", ")));
        }

        let last = data.rules.len() - 1;
        let mut rules = Vec::with_capacity(data.rules.len());
        for (i, rule) in data.rules.into_iter().enumerate() {
            let exercise = rule.exercise.trim().to_string();
            if exercise.is_empty() {
                return Err(VocabularyError::EmptyExercise(stems.join(", ")));
            }
            if rule.any_of.is_empty() && i != last {
                return Err(VocabularyError::MisplacedDefault(exercise));
            }
            let any_of = rule.any_of.iter().map(|m| fold(m)).collect::<Vec<_>>();
            if any_of.iter().any(String::is_empty) {
                return Err(VocabularyError::EmptyModifier(exercise));
            }
            rules.push(Rule { any_of, exercise });
        }

        Ok(Self { stems, rules })
    }
}

impl TryFrom<CategoryData> for Category {
    type Error = VocabularyError;

    fn try_from(data: CategoryData) -> Result<Self, Self::Error> {
        let exercises = data.exercises.iter().map(|e| fold(e)).collect::<Vec<_>>();
        if exercises.iter().any(String::is_empty) {
            return Err(VocabularyError::EmptyExercise(data.group.to_string()));
        }
        let keywords = data.keywords.iter().map(|k| fold(k)).collect::<Vec<_>>();
        if keywords.iter().any(String::is_empty) {
            return Err(VocabularyError::EmptyKeyword(data.group));
        }

        Ok(Self {
            group: data.group,
            exercises,
            keywords,
        })
    }
}

impl Family {
    /// The first applicable rule, if a stem of this family is spoken.
    #[must_use]
    pub fn resolve(&self, folded: &str) -> Option<&Rule> {
        if !self.stems.iter().any(|stem| contains_stem(folded, stem)) {
            return None;
        }
        self.rules.iter().find(|rule| rule.applies(folded))
    }
}

impl Rule {
    #[must_use]
    pub fn applies(&self, folded: &str) -> bool {
        self.any_of.is_empty()
            || self
                .any_of
                .iter()
                .any(|modifier| contains_phrase(folded, modifier))
    }
}

#[derive(thiserror::Error, Debug)]
pub enum VocabularyError {
    #[error("invalid vocabulary: {0}")]
    Json(#[from] serde_json::Error),
    #[error("empty spoken phrase for \"{0}\"")]
    EmptyPhrase(String),
    #[error("empty exercise name for \"{0}\"")]
    EmptyExercise(String),
    #[error("exercise family without stems")]
    EmptyStems,
    #[error("exercise family \"{0}\" without rules")]
    EmptyRules(String),
    #[error("default rule for \"{0}\" must be the last rule of its family")]
    MisplacedDefault(String),
    #[error("empty modifier in rule for \"{0}\"")]
    EmptyModifier(String),
    #[error("empty keyword for muscle group {0}")]
    EmptyKeyword(MuscleGroup),
}
