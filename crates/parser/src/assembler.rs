use log::debug;
use vocalift_domain::{Name, ParsedExercise, Reps, Sets};

use crate::{
    classifier::classify, quantity::ParsedQuantity, resolver::ExerciseMatch,
    settings::Settings, vocabulary::Vocabulary,
};

/// Builds the exercise described by one normalized segment.
///
/// Segments naming no known exercise and containing no quantity are noise and yield nothing.
/// An unknown exercise is named after the segment without its quantity phrases, so that
/// `exercice inconnu 10 reps` is logged as `exercice inconnu`. The verbatim segment is used only
/// if nothing else remains.
#[must_use]
pub fn assemble(
    segment: &str,
    exercise: &ExerciseMatch,
    quantity: &ParsedQuantity,
    vocabulary: &Vocabulary,
    settings: &Settings,
) -> Option<ParsedExercise> {
    if !exercise.found && !quantity.found() {
        debug!("dropping segment \"{segment}\" without exercise or quantity");
        return None;
    }

    let name = if exercise.found {
        Name::truncated(&exercise.name)
    } else {
        let residual = quantity.residual(segment);
        if residual.is_empty() {
            Name::truncated(&exercise.name)
        } else {
            Name::truncated(&residual)
        }
    };
    let Ok(name) = name else {
        debug!("dropping segment \"{segment}\" without exercise name");
        return None;
    };

    let muscle_group = classify(&name, vocabulary);

    let is_cardio = muscle_group.is_cardio()
        || (quantity.duration.is_some() && quantity.weight.is_none() && quantity.reps.is_none());

    if is_cardio {
        return Some(ParsedExercise::cardio(
            name,
            muscle_group,
            quantity.duration.unwrap_or_default(),
        ));
    }

    let reps = quantity.reps.unwrap_or(if quantity.weight.is_some() {
        settings.default_reps
    } else {
        Reps::default()
    });

    Some(ParsedExercise::strength(
        name,
        muscle_group,
        quantity.sets.unwrap_or(Sets::ONE),
        reps,
        quantity.weight.unwrap_or(settings.default_weight),
    ))
}
