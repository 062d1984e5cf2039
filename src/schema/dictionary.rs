//! The BRFSS 2015 diabetes indicators data dictionary
//!
//! 22 variables, in the column order of the published dataset file.

use super::types::{Category, Domain, FieldDef};

const NO_YES: &[Category] = &[
    Category { code: 0, label: "no" },
    Category { code: 1, label: "yes" },
];

const DIABETES: &[Category] = &[
    Category { code: 0, label: "no diabetes" },
    Category { code: 1, label: "prediabetes or diabetes" },
];

const SEX: &[Category] = &[
    Category { code: 0, label: "female" },
    Category { code: 1, label: "male" },
];

const GEN_HLTH: &[Category] = &[
    Category { code: 1, label: "excellent" },
    Category { code: 2, label: "very good" },
    Category { code: 3, label: "good" },
    Category { code: 4, label: "fair" },
    Category { code: 5, label: "poor" },
];

const AGE: &[Category] = &[
    Category { code: 1, label: "18-24" },
    Category { code: 2, label: "25-29" },
    Category { code: 3, label: "30-34" },
    Category { code: 4, label: "35-39" },
    Category { code: 5, label: "40-44" },
    Category { code: 6, label: "45-49" },
    Category { code: 7, label: "50-54" },
    Category { code: 8, label: "55-59" },
    Category { code: 9, label: "60-64" },
    Category { code: 10, label: "65-69" },
    Category { code: 11, label: "70-74" },
    Category { code: 12, label: "75-79" },
    Category { code: 13, label: "80 or older" },
];

const EDUCATION: &[Category] = &[
    Category { code: 1, label: "never attended school or only kindergarten" },
    Category { code: 2, label: "grades 1 through 8" },
    Category { code: 3, label: "grades 9 through 11" },
    Category { code: 4, label: "grade 12 or GED" },
    Category { code: 5, label: "college 1 to 3 years" },
    Category { code: 6, label: "college 4 years or more" },
];

const INCOME: &[Category] = &[
    Category { code: 1, label: "less than $10,000" },
    Category { code: 2, label: "$10,000 to less than $15,000" },
    Category { code: 3, label: "$15,000 to less than $20,000" },
    Category { code: 4, label: "$20,000 to less than $25,000" },
    Category { code: 5, label: "$25,000 to less than $35,000" },
    Category { code: 6, label: "$35,000 to less than $50,000" },
    Category { code: 7, label: "$50,000 to less than $75,000" },
    Category { code: 8, label: "$75,000 or more" },
];

const fn flag(name: &'static str, description: &'static str) -> FieldDef {
    FieldDef {
        name,
        domain: Domain::Binary,
        description,
        categories: NO_YES,
    }
}

const fn days(name: &'static str, description: &'static str) -> FieldDef {
    FieldDef {
        name,
        domain: Domain::Range { min: 0, max: 30 },
        description,
        categories: &[],
    }
}

/// Number of variables in the dictionary.
pub const FIELD_COUNT: usize = 22;

/// Every dictionary variable, in dataset column order.
pub static SURVEY_FIELDS: [FieldDef; FIELD_COUNT] = [
    FieldDef {
        name: "Diabetes_binary",
        domain: Domain::Binary,
        description: "Diabetes status",
        categories: DIABETES,
    },
    flag("HighBP", "Told by a health professional they have high blood pressure"),
    flag("HighChol", "Told by a health professional they have high cholesterol"),
    flag("CholCheck", "Cholesterol check within the past five years"),
    FieldDef {
        name: "BMI",
        domain: Domain::AtLeast { min: 1 },
        description: "Body mass index",
        categories: &[],
    },
    flag("Smoker", "Smoked at least 100 cigarettes in their entire life"),
    flag("Stroke", "Ever told they had a stroke"),
    flag(
        "HeartDiseaseorAttack",
        "Coronary heart disease or myocardial infarction",
    ),
    flag("PhysActivity", "Physical activity in the past 30 days, not including job"),
    flag("Fruits", "Consumes fruit one or more times per day"),
    flag("Veggies", "Consumes vegetables one or more times per day"),
    flag(
        "HvyAlcoholConsump",
        "Heavy drinker (men over 14 drinks per week, women over 7)",
    ),
    flag("AnyHealthcare", "Has any kind of health care coverage"),
    flag(
        "NoDocbcCost",
        "Needed to see a doctor in the past 12 months but could not because of cost",
    ),
    FieldDef {
        name: "GenHlth",
        domain: Domain::Range { min: 1, max: 5 },
        description: "Self-rated general health",
        categories: GEN_HLTH,
    },
    days(
        "MentHlth",
        "Days of poor mental health in the past 30 days",
    ),
    days(
        "PhysHlth",
        "Days of physical illness or injury in the past 30 days",
    ),
    flag("DiffWalk", "Serious difficulty walking or climbing stairs"),
    FieldDef {
        name: "Sex",
        domain: Domain::Binary,
        description: "Sex of respondent",
        categories: SEX,
    },
    FieldDef {
        name: "Age",
        domain: Domain::Range { min: 1, max: 13 },
        description: "Thirteen-level age category",
        categories: AGE,
    },
    FieldDef {
        name: "Education",
        domain: Domain::Range { min: 1, max: 6 },
        description: "Highest grade or year of school completed",
        categories: EDUCATION,
    },
    FieldDef {
        name: "Income",
        domain: Domain::Range { min: 1, max: 8 },
        description: "Annual household income",
        categories: INCOME,
    },
];

/// Looks up a variable by its exact (case-sensitive) column name.
pub fn field(name: &str) -> Option<&'static FieldDef> {
    SURVEY_FIELDS.iter().find(|f| f.name == name)
}

/// Position of a variable in dataset column order.
pub fn field_index(name: &str) -> Option<usize> {
    SURVEY_FIELDS.iter().position(|f| f.name == name)
}

/// Column names in dataset order.
pub fn field_names() -> impl Iterator<Item = &'static str> {
    SURVEY_FIELDS.iter().map(|f| f.name)
}
