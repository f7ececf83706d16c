pub mod extract;
pub mod io;

use std::path::PathBuf;

/// A lesson document: teacher names mapped to their (opaque) lists of lesson records.
///
/// serde_json is built with `preserve_order`, so the map keeps insertion order when iterated and
/// serialized.
pub type SourceDocument = serde_json::Map<String, serde_json::Value>;

/// Input file read, if no other file is given
pub const DEFAULT_INPUT_FILE: &str = "oqituvchilar_original.json";
/// Output file written, if no other file is given
pub const DEFAULT_OUTPUT_FILE: &str = "oqituvchilar_by_name_extracted.json";

/// Teachers extracted, if no other list of teachers is given
pub const DEFAULT_TEACHERS: [&str; 7] = [
    "NURMUHAMMADOV H",
    "YUSUFJONOVA M",
    "QORABOYEVA N",
    "SAMIYEVA G",
    "IBRAGIMOV S",
    "ABBOSOVA S",
    "MUSAYEVA N",
];

/// Parameters of a single extraction run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path of the source document
    pub input: PathBuf,
    /// Path of the filtered document. An existing file is overwritten.
    pub output: PathBuf,
    /// Names of the teachers to extract. The order of this list determines the order of the output.
    pub teachers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            teachers: DEFAULT_TEACHERS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn default_config() {
        let config = super::Config::default();
        assert_eq!(config.input.to_str(), Some("oqituvchilar_original.json"));
        assert_eq!(
            config.output.to_str(),
            Some("oqituvchilar_by_name_extracted.json")
        );
        assert_eq!(config.teachers.len(), 7);
        assert_eq!(config.teachers[0], "NURMUHAMMADOV H");
        assert_eq!(config.teachers[6], "MUSAYEVA N");
    }
}
