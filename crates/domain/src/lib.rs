#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod exercise;
mod name;
mod set;
mod workout;

pub use exercise::{ExerciseType, MuscleGroup, MuscleGroupIter};
pub use name::{MAX_NAME_LENGTH, Name, NameError};
pub use set::{Minutes, MinutesError, Reps, RepsError, Set, Sets, SetsError, Weight, WeightError};
pub use workout::{ParsedExercise, WorkoutDraft};
