//! French spoken vocabulary shipped with the parser.

use vocalift_domain::MuscleGroup;

/// Spoken variants and common misrecognitions. The names of the exercise catalog are added on
/// top of these.
pub(crate) const PHRASES: [(&str, &str); 43] = [
    ("pompe", "Pompes"),
    ("pomes", "Pompes"),
    ("developpe couche", "Développé couché"),
    ("develope couche", "Développé couché"),
    ("devole couche", "Développé couché"),
    ("dips", "Dips"),
    ("ecarte couche", "Écarté couché"),
    ("ecarte incline", "Écarté incliné"),
    ("pull over", "Pull-over"),
    ("traction", "Tractions"),
    ("traction lestee", "Tractions lestées"),
    ("souleve de terre", "Soulevé de terre"),
    ("souleve de terre roumain", "Soulevé de terre roumain"),
    ("tirage horizontal", "Tirage horizontal"),
    ("tirage vertical", "Tirage vertical"),
    ("shrug", "Shrugs"),
    ("squat", "Squat"),
    ("fente", "Fentes"),
    ("leg press", "Leg press"),
    ("presse a cuisse", "Leg press"),
    ("mollet", "Mollets debout"),
    ("developpe militaire", "Développé militaire"),
    ("elevation laterale", "Élévations latérales"),
    ("elevation frontale", "Élévations frontales"),
    ("curl barre", "Curl barre"),
    ("curl haltere", "Curl haltères"),
    ("extension triceps", "Extension triceps"),
    ("barre au front", "Barre au front"),
    ("kickback", "Kick back"),
    ("crunch", "Crunch"),
    ("gainage", "Gainage"),
    ("planche", "Planche"),
    ("relevement de jambe", "Relevé de jambes"),
    ("course", "Course à pied"),
    ("footing", "Course à pied"),
    ("jogging", "Course à pied"),
    ("running", "Course à pied"),
    ("tapis", "Tapis de course"),
    ("rameur", "Rameur"),
    ("elliptique", "Elliptique"),
    ("velo", "Vélo"),
    ("spinning", "Vélo spinning"),
    ("burpee", "Burpees"),
];

type Rules = &'static [(&'static [&'static str], &'static str)];

/// Keyword stems with their modifier rules, in priority order.
pub(crate) const FAMILIES: [(&[&str], Rules); 6] = [
    (
        &["developp", "develop"],
        &[
            (&["incline"], "Développé incliné"),
            (&["decline"], "Développé décliné"),
            (&["haltere"], "Développé haltères"),
            (&["serre"], "Développé serré"),
            (&["militaire"], "Développé militaire"),
            (&["couche", "coucher"], "Développé couché"),
            (&[], "Développé couché"),
        ],
    ),
    (
        &["curl"],
        &[
            (&["haltere"], "Curl haltères"),
            (&["marteau"], "Curl marteau"),
            (&["concentre"], "Curl concentré"),
            (&[], "Curl barre"),
        ],
    ),
    (
        &["rowing"],
        &[
            (&["barre", "bar"], "Rowing barre"),
            (&["haltere"], "Rowing haltères"),
            (&[], "Rowing barre"),
        ],
    ),
    (
        &["elevation"],
        &[
            (&["laterale"], "Élévations latérales"),
            (&["frontale"], "Élévations frontales"),
        ],
    ),
    (
        &["tirage"],
        &[
            (&["horizontal"], "Tirage horizontal"),
            (&["vertical"], "Tirage vertical"),
            (&["poulie"], "Tirage poulie haute"),
            (&[], "Tirage vertical"),
        ],
    ),
    (
        &["extension"],
        &[
            (&["couche"], "Extension couché"),
            (&["poulie"], "Extension poulie haute"),
            (&[], "Extension verticale"),
        ],
    ),
];

/// Words hinting at a muscle group when an exercise is not listed in the catalog.
pub(crate) const KEYWORDS: [(MuscleGroup, &[&str]); 8] = [
    (
        MuscleGroup::Pectoraux,
        &[
            "développé couché",
            "développé incliné",
            "développé décliné",
            "pompe",
            "dips",
            "écarté",
            "pec",
            "pectoraux",
            "pull over",
        ],
    ),
    (
        MuscleGroup::Dos,
        &[
            "traction",
            "tirage",
            "rowing",
            "soulevé de terre",
            "pull",
            "dos",
            "shrug",
        ],
    ),
    (
        MuscleGroup::Epaules,
        &["développé militaire", "élévation", "épaule", "deltoïde", "oiseau"],
    ),
    (MuscleGroup::Biceps, &["curl", "biceps"]),
    (
        MuscleGroup::Triceps,
        &["extension triceps", "barre au front", "triceps", "kick back"],
    ),
    (
        MuscleGroup::Jambes,
        &[
            "squat",
            "fente",
            "leg press",
            "leg curl",
            "mollet",
            "quadriceps",
            "ischio",
            "jambe",
            "presse",
        ],
    ),
    (
        MuscleGroup::Abdos,
        &["crunch", "gainage", "planche", "abdo"],
    ),
    (
        MuscleGroup::Cardio,
        &[
            "course",
            "vélo",
            "rameur",
            "elliptique",
            "cardio",
            "corde",
            "natation",
            "marche",
            "sprint",
            "footing",
            "jogging",
            "running",
        ],
    ),
];
