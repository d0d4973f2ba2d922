use log::debug;
use vocalift_domain::MuscleGroup;

use crate::{
    text::{contains_phrase, fold},
    vocabulary::Vocabulary,
};

/// Determines the muscle group of an exercise.
///
/// Listed exercises are looked up exactly. Otherwise the longest keyword contained in the name
/// decides, earlier categories winning ties. Unknown names fall back to the default group.
#[must_use]
pub fn classify(name: &str, vocabulary: &Vocabulary) -> MuscleGroup {
    let folded = fold(name);
    let categories = vocabulary.categories();

    if let Some(category) = categories.iter().find(|c| c.exercises.contains(&folded)) {
        return category.group;
    }

    let mut best: Option<(usize, MuscleGroup)> = None;
    for category in categories {
        for keyword in &category.keywords {
            if contains_phrase(&folded, keyword)
                && best.is_none_or(|(length, _)| keyword.len() > length)
            {
                best = Some((keyword.len(), category.group));
            }
        }
    }

    if let Some((_, group)) = best {
        group
    } else {
        debug!("no muscle group found for \"{name}\"");
        MuscleGroup::default()
    }
}
