use crate::MuscleGroup;

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct CatalogEntry {
    pub muscle_group: MuscleGroup,
    pub exercises: &'static [&'static str],
}

pub const CATALOG: [CatalogEntry; 8] = [
    CatalogEntry {
        muscle_group: MuscleGroup::Pectoraux,
        exercises: &[
            "Développé couché",
            "Développé incliné",
            "Développé décliné",
            "Pompes",
            "Écarté couché",
            "Écarté incliné",
            "Développé haltères",
            "Dips",
            "Pull-over",
            "Pec deck",
        ],
    },
    CatalogEntry {
        muscle_group: MuscleGroup::Dos,
        exercises: &[
            "Tractions",
            "Tractions lestées",
            "Tractions assistées",
            "Rowing barre",
            "Rowing haltères",
            "Tirage horizontal",
            "Tirage vertical",
            "Soulevé de terre",
            "Rowing T-bar",
            "Shrugs",
            "Hyperextensions",
            "Tirage poulie haute",
        ],
    },
    CatalogEntry {
        muscle_group: MuscleGroup::Epaules,
        exercises: &[
            "Développé militaire",
            "Élévations latérales",
            "Élévations frontales",
            "Oiseau",
            "Développé Arnold",
            "Upright row",
            "Face pull",
            "Handstand push-up",
        ],
    },
    CatalogEntry {
        muscle_group: MuscleGroup::Biceps,
        exercises: &[
            "Curl barre",
            "Curl haltères",
            "Curl marteau",
            "Curl concentré",
            "Curl pupitre",
            "Curl 21",
            "Traction supination",
            "Curl câble",
        ],
    },
    CatalogEntry {
        muscle_group: MuscleGroup::Triceps,
        exercises: &[
            "Dips",
            "Extension couché",
            "Extension verticale",
            "Pompes diamant",
            "Kick back",
            "Extension poulie haute",
            "Développé serré",
        ],
    },
    CatalogEntry {
        muscle_group: MuscleGroup::Jambes,
        exercises: &[
            "Squat",
            "Leg press",
            "Fentes",
            "Leg curl",
            "Leg extension",
            "Soulevé de terre roumain",
            "Mollets debout",
            "Mollets assis",
            "Hack squat",
            "Goblet squat",
        ],
    },
    CatalogEntry {
        muscle_group: MuscleGroup::Abdos,
        exercises: &[
            "Crunch",
            "Planche",
            "Relevé de jambes",
            "Russian twist",
            "Grimpeur",
            "Bicycle crunch",
            "Dead bug",
            "Hanging knee raise",
        ],
    },
    CatalogEntry {
        muscle_group: MuscleGroup::Cardio,
        exercises: &[
            "Course à pied",
            "Vélo",
            "Elliptique",
            "Rameur",
            "Tapis de course",
            "Vélo spinning",
            "Stepper",
            "Corde à sauter",
            "Burpees",
            "Sauts étoiles",
            "Genoux hauts",
            "Montées de genoux",
            "Sprint",
            "Marche rapide",
            "Natation",
            "Aquabike",
            "HIIT",
            "Tabata",
        ],
    },
];

#[must_use]
pub fn exercises(muscle_group: MuscleGroup) -> &'static [&'static str] {
    CATALOG
        .iter()
        .find(|entry| entry.muscle_group == muscle_group)
        .map(|entry| entry.exercises)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_exercises() {
        assert_eq!(exercises(MuscleGroup::Pectoraux).len(), 10);
        assert_eq!(exercises(MuscleGroup::Dos).len(), 12);
        assert_eq!(exercises(MuscleGroup::Epaules).len(), 8);
        assert_eq!(exercises(MuscleGroup::Biceps).len(), 8);
        assert_eq!(exercises(MuscleGroup::Triceps).len(), 7);
        assert_eq!(exercises(MuscleGroup::Jambes).len(), 10);
        assert_eq!(exercises(MuscleGroup::Abdos).len(), 8);
        assert_eq!(exercises(MuscleGroup::Cardio).len(), 18);
    }

    #[test]
    fn test_catalog_covers_all_muscle_groups() {
        for muscle_group in MuscleGroup::iter() {
            assert!(
                !exercises(muscle_group).is_empty(),
                "no exercises for {muscle_group}"
            );
        }
    }

    #[test]
    fn test_catalog_duplicate_names() {
        for entry in CATALOG {
            let mut exercise_names = HashSet::new();
            for name in entry.exercises {
                let name = name.to_lowercase();
                assert!(!exercise_names.contains(&name), "duplicate name {name}");
                exercise_names.insert(name);
            }
        }
    }

    #[test]
    fn test_catalog_names_trimmed() {
        for entry in CATALOG {
            for name in entry.exercises {
                assert_eq!(*name, name.trim());
                assert!(!name.is_empty());
            }
        }
    }

    #[test]
    fn test_catalog_distinct_names() {
        let names = CATALOG
            .iter()
            .flat_map(|entry| entry.exercises.iter().copied())
            .collect::<HashSet<_>>();
        assert!(names.contains("Dips"));
        assert_eq!(names.len(), 80);
    }
}
