pub mod lessons;
pub mod teachers;

use crate::extract::{ExtractedTeacher, Extraction};

/// Format the report line of a single extracted teacher (e.g. to print it to stdout).
///
/// The output format will look like
/// ```text
/// NURMUHAMMADOV H: 3 ta dars
/// ```
pub fn format_extracted_teacher(teacher: &ExtractedTeacher) -> String {
    format!("{}: {} ta dars\n", teacher.name, teacher.num_lessons)
}

/// Format the final summary line, stating the number of teachers in the filtered document.
pub fn format_summary(extraction: &Extraction) -> String {
    format!("Jami {} ta o'qituvchi ajratildi\n", extraction.num_teachers())
}
