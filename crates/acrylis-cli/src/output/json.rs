use acrylis_core::error::AcrylisError;
use acrylis_core::grade::Assessment;
use acrylis_core::model::AnalysisResult;
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    result: &'a AnalysisResult,
    assessment: &'a Assessment,
}

pub fn print(result: &AnalysisResult, assessment: &Assessment) -> Result<(), AcrylisError> {
    let json = serde_json::to_string_pretty(&Report { result, assessment })?;
    println!("{json}");
    Ok(())
}
