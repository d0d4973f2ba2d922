use strum::{EnumIter, IntoEnumIterator};

#[derive(
    Clone,
    Copy,
    Default,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    EnumIter,
    strum::Display,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MuscleGroup {
    #[default]
    Pectoraux,
    Dos,
    #[serde(rename = "épaules", alias = "epaules")]
    #[strum(to_string = "épaules", serialize = "epaules")]
    Epaules,
    Biceps,
    Triceps,
    Jambes,
    Abdos,
    Cardio,
}

impl MuscleGroup {
    pub fn iter() -> MuscleGroupIter {
        <Self as IntoEnumIterator>::iter()
    }

    #[must_use]
    pub fn is_cardio(self) -> bool {
        self == MuscleGroup::Cardio
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Strength,
    Cardio,
}
