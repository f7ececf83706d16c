//! Selection of the requested teachers from a lesson document.
//!
//! The module provides the `extract()` function, which builds the filtered document together with the per-teacher
//! lesson counts that are reported to the user.

use super::SourceDocument;
use log::debug;
use serde_json::Value;


/// A teacher, which has been found in the source document and copied to the filtered document
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedTeacher {
    /// Teacher's name, i.e. the key in both documents
    pub name: String,
    /// Length of the teacher's lesson list
    pub num_lessons: usize,
}

/// Result of an extraction
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The filtered document. Its entries are ordered like the requested list of teachers.
    pub document: SourceDocument,
    /// One entry per matched name of the requested list, in the order of that list
    pub extracted: Vec<ExtractedTeacher>,
}

impl Extraction {
    /// Number of distinct teachers in the filtered document
    pub fn num_teachers(&self) -> usize {
        self.document.len()
    }
}

/// Build the filtered document from the source document and the list of requested teachers.
///
/// For each name in `teachers` (in list order) which is a key of `source`, the lesson list is copied unchanged into
/// the result and an `ExtractedTeacher` entry is recorded. Names missing in `source` are skipped without any notice.
/// A name given twice is processed twice: it results in two `ExtractedTeacher` entries but, of course, only one entry
/// of the filtered document.
///
/// # Errors
///
/// Fails with a string error message to be displayed to the user, if the value of a matched teacher has no length,
/// i.e. it is neither an array, an object nor a string.
pub fn extract(source: &SourceDocument, teachers: &[String]) -> Result<Extraction, String> {
    extract_with(source, teachers, |_| {})
}

/// Like `extract()`, but calls `on_extracted` for every `ExtractedTeacher` entry as soon as it has been recorded.
///
/// Thus, the teachers matched before a failing one have already been reported, when the error is returned.
pub fn extract_with<F>(
    source: &SourceDocument,
    teachers: &[String],
    mut on_extracted: F,
) -> Result<Extraction, String>
where
    F: FnMut(&ExtractedTeacher),
{
    let mut document = SourceDocument::new();
    let mut extracted = Vec::new();

    for name in teachers {
        let lessons = match source.get(name) {
            Some(l) => l,
            None => continue,
        };
        let num_lessons = lesson_count(lessons).ok_or_else(|| {
            format!(
                "Lessons of teacher '{}' have no length (found {}).",
                name,
                value_kind(lessons)
            )
        })?;
        debug!("Extracting {} lessons of teacher '{}'", num_lessons, name);

        document.insert(name.clone(), lessons.clone());
        let teacher = ExtractedTeacher {
            name: name.clone(),
            num_lessons,
        };
        on_extracted(&teacher);
        extracted.push(teacher);
    }

    Ok(Extraction {
        document,
        extracted,
    })
}

/// Number of elements of a lesson list.
///
/// Besides arrays, objects (number of members) and strings (number of characters) have a length, too. Returns None for
/// all other JSON values.
pub fn lesson_count(lessons: &Value) -> Option<usize> {
    match lessons {
        Value::Array(a) => Some(a.len()),
        Value::Object(o) => Some(o.len()),
        Value::String(s) => Some(s.chars().count()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
