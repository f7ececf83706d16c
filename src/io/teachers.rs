//! IO functionality for reading the list of teachers to extract from a json file.

/// Read the names of the teachers to extract from a JSON-serialized list of strings.
///
/// The order of the names is kept, since it determines the order of the filtered document.
pub fn read<R: std::io::Read>(reader: R) -> Result<Vec<String>, String> {
    serde_json::from_reader::<_, Vec<String>>(reader).map_err(|err| err.to_string())
}
