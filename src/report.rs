// src/report.rs
//
// Blood pressure report rendering. Pure and deterministic: no I/O, same
// reading always produces the same string.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalReading {
    pub patient_name: String,
    pub exam_date: NaiveDate,
    pub systolic: i32,
    pub diastolic: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Normal,
    BorderlineHigh,
    High,
}

/// Fixed thresholds, evaluated in order, first match wins.
pub fn classify(systolic: i32, diastolic: i32) -> Classification {
    if systolic < 120 && diastolic < 80 {
        Classification::Normal
    } else if (120..130).contains(&systolic) && diastolic < 80 {
        Classification::BorderlineHigh
    } else {
        Classification::High
    }
}

struct Labels {
    title: &'static str,
    patient: &'static str,
    exam_date: &'static str,
    reading: &'static str,
    assessment: &'static str,
    normal: &'static str,
    borderline_high: &'static str,
    high: &'static str,
}

const EN: Labels = Labels {
    title: "Blood Pressure Report",
    patient: "Patient",
    exam_date: "Exam date",
    reading: "Reading",
    assessment: "Assessment",
    normal: "Normal",
    borderline_high: "Borderline High",
    high: "High",
};

const ES: Labels = Labels {
    title: "Informe de presión arterial",
    patient: "Paciente",
    exam_date: "Fecha del examen",
    reading: "Lectura",
    assessment: "Evaluación",
    normal: "Normal",
    borderline_high: "Límite alta",
    high: "Alta",
};

pub fn generate(reading: &ClinicalReading, language: Language) -> String {
    let labels = match language {
        Language::En => &EN,
        Language::Es => &ES,
    };

    let assessment = match classify(reading.systolic, reading.diastolic) {
        Classification::Normal => labels.normal,
        Classification::BorderlineHigh => labels.borderline_high,
        Classification::High => labels.high,
    };

    format!(
        "{title}\n{patient}: {name}\n{exam_date}: {date}\n{reading_label}: {sys}/{dia} mmHg\n{assessment_label}: {assessment}",
        title = labels.title,
        patient = labels.patient,
        name = reading.patient_name,
        exam_date = labels.exam_date,
        date = reading.exam_date.format("%Y-%m-%d"),
        reading_label = labels.reading,
        sys = reading.systolic,
        dia = reading.diastolic,
        assessment_label = labels.assessment,
        assessment = assessment,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(systolic: i32, diastolic: i32) -> ClinicalReading {
        ClinicalReading {
            patient_name: "Maria Gomez".into(),
            exam_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            systolic,
            diastolic,
        }
    }

    #[test]
    fn test_classification_bands() {
        assert_eq!(classify(118, 75), Classification::Normal);
        assert_eq!(classify(119, 79), Classification::Normal);
        assert_eq!(classify(125, 75), Classification::BorderlineHigh);
        assert_eq!(classify(120, 79), Classification::BorderlineHigh);
        // diastolic disqualifies the borderline band
        assert_eq!(classify(125, 80), Classification::High);
        assert_eq!(classify(130, 75), Classification::High);
        assert_eq!(classify(140, 90), Classification::High);
        // first-match order: systolic below 120 but diastolic at 80
        assert_eq!(classify(118, 80), Classification::High);
    }

    #[test]
    fn test_generate_english_labels() {
        assert!(generate(&reading(118, 75), Language::En).contains("Normal"));
        assert!(generate(&reading(125, 75), Language::En).contains("Borderline High"));
        assert!(generate(&reading(140, 90), Language::En).contains("High"));
    }

    #[test]
    fn test_generate_spanish_labels_same_classification() {
        let es = generate(&reading(125, 75), Language::Es);
        assert!(es.contains("Límite alta"));
        assert!(es.contains("Informe de presión arterial"));
        assert!(es.contains("Maria Gomez"));

        let high = generate(&reading(140, 90), Language::Es);
        assert!(high.contains("Alta"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let r = reading(122, 70);
        assert_eq!(generate(&r, Language::En), generate(&r, Language::En));
        assert_eq!(generate(&r, Language::Es), generate(&r, Language::Es));
    }

    #[test]
    fn test_generate_includes_reading_and_date() {
        let s = generate(&reading(118, 75), Language::En);
        assert!(s.contains("118/75 mmHg"));
        assert!(s.contains("2026-03-14"));
    }
}
