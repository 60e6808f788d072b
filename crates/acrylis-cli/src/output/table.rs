use acrylis_core::grade::{Assessment, Grade};
use acrylis_core::model::{AnalysisResult, IndividualAnalysis, Status};

pub fn print(result: &AnalysisResult, assessment: &Assessment) {
    for (concern, analysis) in result.analyses() {
        println!("=== {} ===\n", concern);
        print_analysis(analysis);
    }

    print_grade(assessment);
}

fn print_analysis(analysis: &IndividualAnalysis) {
    let verdict = if analysis.is_safe { "SAFE" } else { "NOT SAFE" };
    println!("  Verdict: {verdict}");
    println!("  {}\n", analysis.explanation);

    if analysis.found_ingredients.is_empty() {
        return;
    }

    let max_name = analysis
        .found_ingredients
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(10);

    for found in &analysis.found_ingredients {
        let marker = match found.status {
            Status::Unsafe => "x",
            Status::Unknown => "?",
        };
        println!(
            "  {} {:<width$}  {}",
            marker,
            found.name,
            found.status,
            width = max_name
        );
        println!("      {}", found.reason);
    }
    println!();
}

fn print_grade(assessment: &Assessment) {
    if assessment.grade == Grade::APlus {
        println!("Grade: {} ({})", assessment.grade, assessment.grade.summary());
        return;
    }

    println!(
        "Grade: {} ({}), risk score {} from {} problematic ingredient(s)",
        assessment.grade,
        assessment.grade.summary(),
        assessment.risk_score,
        assessment.problematic_count
    );
    println!("  Ingredients in the first five positions weigh most; they are the most concentrated.");
}
