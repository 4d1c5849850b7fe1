// src/routes/report_routes.rs

use axum::{extract::State, routing::post, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::ApiError,
    models::AppState,
    report::{generate, ClinicalReading, Language},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/reports/blood_pressure", post(render_blood_pressure_report))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodPressureReportRequest {
    pub patient_name: String,
    pub exam_date: NaiveDate,
    pub systolic: i32,
    pub diastolic: i32,
    pub language: Language,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub data: ReportData,
}

#[derive(Debug, Serialize)]
pub struct ReportData {
    pub report: String,
}

pub async fn render_blood_pressure_report(
    State(_state): State<AppState>,
    Json(req): Json<BloodPressureReportRequest>,
) -> Result<Json<ReportResponse>, ApiError> {
    if req.systolic <= 0 || req.diastolic <= 0 {
        return Err(ApiError::InvalidArgument(
            "systolic and diastolic must be positive".into(),
        ));
    }

    let reading = ClinicalReading {
        patient_name: req.patient_name.trim().to_string(),
        exam_date: req.exam_date,
        systolic: req.systolic,
        diastolic: req.diastolic,
    };

    Ok(Json(ReportResponse {
        data: ReportData {
            report: generate(&reading, req.language),
        },
    }))
}
