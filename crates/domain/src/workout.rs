use derive_more::{Deref, IntoIterator};

use crate::{ExerciseType, Minutes, MuscleGroup, Name, Reps, Set, Sets, Weight};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParsedExercise {
    pub name: Name,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub muscle_group: MuscleGroup,
    pub sets: Vec<Set>,
}

impl ParsedExercise {
    /// One set carrying the whole duration.
    #[must_use]
    pub fn cardio(name: Name, muscle_group: MuscleGroup, duration: Minutes) -> Self {
        Self {
            name,
            exercise_type: ExerciseType::Cardio,
            muscle_group,
            sets: vec![Set {
                duration,
                ..Set::default()
            }],
        }
    }

    /// Identical sibling sets.
    #[must_use]
    pub fn strength(
        name: Name,
        muscle_group: MuscleGroup,
        sets: Sets,
        reps: Reps,
        weight: Weight,
    ) -> Self {
        let set = Set {
            reps,
            weight,
            duration: Minutes::default(),
        };
        Self {
            name,
            exercise_type: ExerciseType::Strength,
            muscle_group,
            sets: vec![set; u32::from(sets) as usize],
        }
    }

    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }
}

#[derive(Deref, IntoIterator, Debug, Default, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
#[into_iterator(owned, ref)]
pub struct WorkoutDraft(Vec<ParsedExercise>);

impl From<Vec<ParsedExercise>> for WorkoutDraft {
    fn from(value: Vec<ParsedExercise>) -> Self {
        Self(value)
    }
}

impl FromIterator<ParsedExercise> for WorkoutDraft {
    fn from_iter<T: IntoIterator<Item = ParsedExercise>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
