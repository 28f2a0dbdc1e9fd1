#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
}

pub(crate) const SALUTATIONS: &[&str] = &[
    "hello",
    "hi",
    "good morning",
    "good afternoon",
    "good evening",
    "namaste",
];

// Priority order matters: the first phrase present wins, not the earliest.
pub(crate) const NAME_PHRASES: &[&str] = &["my name", "myself", "i am"];
pub(crate) const CLOSING_PHRASES: &[&str] = &["thank", "that's all", "listening"];

const NAME: &[&str] = &["name", "myself", "i am"];
const AGE: &[&str] = &["years old", "age"];
const CLASS_SCHOOL: &[&str] = &["class", "grade", "studying", "school", "college"];
const FAMILY: &[&str] = &[
    "family", "mother", "father", "parents", "siblings", "brother", "sister",
];
const HOBBIES: &[&str] = &[
    "hobby", "hobbies", "playing", "reading", "dancing", "singing", "drawing", "interest",
    "enjoy",
];
const GOAL: &[&str] = &["goal", "aim", "ambition", "become a", "want to be"];
const UNIQUE_POINT: &[&str] = &["fact", "special", "unique", "don't know about me"];

const BUILTIN_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "Name",
        triggers: NAME,
    },
    CategoryDef {
        name: "Age",
        triggers: AGE,
    },
    CategoryDef {
        name: "Class/School",
        triggers: CLASS_SCHOOL,
    },
    CategoryDef {
        name: "Family",
        triggers: FAMILY,
    },
    CategoryDef {
        name: "Hobbies",
        triggers: HOBBIES,
    },
    CategoryDef {
        name: "Goal",
        triggers: GOAL,
    },
    CategoryDef {
        name: "Unique Point",
        triggers: UNIQUE_POINT,
    },
];

// Multi-word entries are kept even though token matching never reaches them.
const BUILTIN_FILLERS: &[&str] = &[
    "um", "uh", "like", "you know", "so", "actually", "basically", "right", "i mean", "well",
    "kinda", "sort of", "okay", "hmm", "ah",
];

pub fn builtin_categories() -> &'static [CategoryDef] {
    BUILTIN_CATEGORIES
}

pub fn builtin_fillers() -> &'static [&'static str] {
    BUILTIN_FILLERS
}
