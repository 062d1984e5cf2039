//! Raw and validated survey records

use serde::Serialize;
use serde_json::Value;

use super::types::integer_code;
use super::validator::SchemaValidator;
use super::violations::Violation;

/// A raw record: column name to value, as read from the survey input.
pub type Record = serde_json::Map<String, Value>;

/// One respondent's answers after validation.
///
/// Only constructible through [`SurveyRecord::from_record`], so every value is
/// known to lie in its domain. Fields are read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SurveyRecord {
    #[serde(rename = "Diabetes_binary")]
    diabetes_binary: u8,
    #[serde(rename = "HighBP")]
    high_bp: u8,
    #[serde(rename = "HighChol")]
    high_chol: u8,
    #[serde(rename = "CholCheck")]
    chol_check: u8,
    #[serde(rename = "BMI")]
    bmi: u16,
    #[serde(rename = "Smoker")]
    smoker: u8,
    #[serde(rename = "Stroke")]
    stroke: u8,
    #[serde(rename = "HeartDiseaseorAttack")]
    heart_disease_or_attack: u8,
    #[serde(rename = "PhysActivity")]
    phys_activity: u8,
    #[serde(rename = "Fruits")]
    fruits: u8,
    #[serde(rename = "Veggies")]
    veggies: u8,
    #[serde(rename = "HvyAlcoholConsump")]
    hvy_alcohol_consump: u8,
    #[serde(rename = "AnyHealthcare")]
    any_healthcare: u8,
    #[serde(rename = "NoDocbcCost")]
    no_docbc_cost: u8,
    #[serde(rename = "GenHlth")]
    gen_hlth: u8,
    #[serde(rename = "MentHlth")]
    ment_hlth: u8,
    #[serde(rename = "PhysHlth")]
    phys_hlth: u8,
    #[serde(rename = "DiffWalk")]
    diff_walk: u8,
    #[serde(rename = "Sex")]
    sex: u8,
    #[serde(rename = "Age")]
    age: u8,
    #[serde(rename = "Education")]
    education: u8,
    #[serde(rename = "Income")]
    income: u8,
}

macro_rules! accessors {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $name(&self) -> $ty {
                self.$name
            }
        )*
    };
}

impl SurveyRecord {
    /// Validates a raw record and builds the typed form.
    ///
    /// Unknown columns are ignored. On failure returns the violation list.
    pub fn from_record(record: &Record) -> Result<Self, Vec<Violation>> {
        let result = SchemaValidator::new().validate(record);
        if !result.is_valid() {
            return Err(result.into_violations());
        }

        // Every field is present and in range here.
        let code = |name: &str| -> i64 { record.get(name).and_then(integer_code).unwrap_or(0) };
        let flag = |name: &str| -> u8 { code(name) as u8 };

        Ok(Self {
            diabetes_binary: flag("Diabetes_binary"),
            high_bp: flag("HighBP"),
            high_chol: flag("HighChol"),
            chol_check: flag("CholCheck"),
            bmi: code("BMI").min(u16::MAX as i64) as u16,
            smoker: flag("Smoker"),
            stroke: flag("Stroke"),
            heart_disease_or_attack: flag("HeartDiseaseorAttack"),
            phys_activity: flag("PhysActivity"),
            fruits: flag("Fruits"),
            veggies: flag("Veggies"),
            hvy_alcohol_consump: flag("HvyAlcoholConsump"),
            any_healthcare: flag("AnyHealthcare"),
            no_docbc_cost: flag("NoDocbcCost"),
            gen_hlth: flag("GenHlth"),
            ment_hlth: flag("MentHlth"),
            phys_hlth: flag("PhysHlth"),
            diff_walk: flag("DiffWalk"),
            sex: flag("Sex"),
            age: flag("Age"),
            education: flag("Education"),
            income: flag("Income"),
        })
    }

    /// Returns a variable's code by its dictionary column name.
    pub fn get(&self, name: &str) -> Option<i64> {
        let value = match name {
            "Diabetes_binary" => self.diabetes_binary as i64,
            "HighBP" => self.high_bp as i64,
            "HighChol" => self.high_chol as i64,
            "CholCheck" => self.chol_check as i64,
            "BMI" => self.bmi as i64,
            "Smoker" => self.smoker as i64,
            "Stroke" => self.stroke as i64,
            "HeartDiseaseorAttack" => self.heart_disease_or_attack as i64,
            "PhysActivity" => self.phys_activity as i64,
            "Fruits" => self.fruits as i64,
            "Veggies" => self.veggies as i64,
            "HvyAlcoholConsump" => self.hvy_alcohol_consump as i64,
            "AnyHealthcare" => self.any_healthcare as i64,
            "NoDocbcCost" => self.no_docbc_cost as i64,
            "GenHlth" => self.gen_hlth as i64,
            "MentHlth" => self.ment_hlth as i64,
            "PhysHlth" => self.phys_hlth as i64,
            "DiffWalk" => self.diff_walk as i64,
            "Sex" => self.sex as i64,
            "Age" => self.age as i64,
            "Education" => self.education as i64,
            "Income" => self.income as i64,
            _ => return None,
        };
        Some(value)
    }

    accessors! {
        diabetes_binary: u8,
        high_bp: u8,
        high_chol: u8,
        chol_check: u8,
        bmi: u16,
        smoker: u8,
        stroke: u8,
        heart_disease_or_attack: u8,
        phys_activity: u8,
        fruits: u8,
        veggies: u8,
        hvy_alcohol_consump: u8,
        any_healthcare: u8,
        no_docbc_cost: u8,
        gen_hlth: u8,
        ment_hlth: u8,
        phys_hlth: u8,
        diff_walk: u8,
        sex: u8,
        age: u8,
        education: u8,
        income: u8,
    }
}

impl TryFrom<&Record> for SurveyRecord {
    type Error = Vec<Violation>;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        SurveyRecord::from_record(record)
    }
}
