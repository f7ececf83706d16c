//! IO functionality for reading a lesson document (teacher names mapped to lesson lists) and writing the filtered
//! document.

use crate::SourceDocument;

/// Read a lesson document from a Reader (e.g. an open file).
///
/// The whole content is read and must be UTF-8 encoded JSON with an object at the top level. The values of the object
/// are not checked in any way.
///
/// # Errors
///
/// Fails with a string error message to be displayed to the user, if
/// * reading from `reader` fails
/// * the content is not valid UTF-8
/// * the content has invalid JSON syntax or is not a JSON object (the string representation of the serde_json error
///   is returned)
pub fn read<R: std::io::Read>(mut reader: R) -> Result<SourceDocument, String> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|e| format!("Could not read input: {}", e))?;
    let text =
        String::from_utf8(buffer).map_err(|e| format!("Input is not valid UTF-8: {}", e))?;
    serde_json::from_str::<SourceDocument>(&text).map_err(|err| err.to_string())
}

/// Write the filtered document as pretty-printed JSON (2 spaces indentation) to a Writer (e.g. an output file).
///
/// Non-ASCII characters are written as they are, not as `\u` escape sequences.
pub fn write<W: std::io::Write>(writer: W, document: &SourceDocument) -> Result<(), String> {
    serde_json::to_writer_pretty(writer, document).map_err(|e| format!("{}", e))?;

    Ok(())
}

#[cfg(test)]
mod test {
    use serde_json::json;
    use std::io::Write;

    const SIMPLE_INPUT: &str = r#"{
        "YUSUFJONOVA M": [
            {"day": "Du", "start": "08:30", "end": "09:50", "group": "ИТ-21", "room": "А-204"}
        ],
        "NURMUHAMMADOV H": [1, 2, 3],
        "Ўзбекистон": []
    }"#;

    #[test]
    fn parse_simple_file() {
        let document = super::read(SIMPLE_INPUT.as_bytes()).unwrap();

        assert_eq!(document.len(), 3);
        let keys: Vec<&str> = document.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["YUSUFJONOVA M", "NURMUHAMMADOV H", "Ўзбекистон"]);
        assert_eq!(document["NURMUHAMMADOV H"], json!([1, 2, 3]));
        assert_eq!(document["YUSUFJONOVA M"][0]["group"], "ИТ-21");
    }

    #[test]
    fn parse_errors() {
        assert!(super::read(&b"{\"NURMUHAMMADOV H\": [1, 2"[..]).is_err());
        assert!(super::read(&b"[1, 2, 3]"[..]).is_err());
        assert!(super::read(&b""[..]).is_err());

        let result = super::read(&b"{\"MUSAYEVA N\": [\"\xff\xfe\"]}"[..]);
        assert!(result.unwrap_err().contains("UTF-8"));
    }

    #[test]
    fn parse_empty_object() {
        let document = super::read(&b"{}"[..]).unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn write_pretty_unescaped() {
        let data = json!({
            "QORABOYEVA N": [{"group": "ИТ-21", "note": "français"}],
            "ABBOSOVA S": []
        });
        let mut buffer = Vec::<u8>::new();
        let result = super::write(&mut buffer, data.as_object().unwrap());
        assert!(result.is_ok());

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "{\n  \"QORABOYEVA N\": [\n    {\n      \"group\": \"ИТ-21\",\n      \"note\": \"français\"\n    }\n  ],\n  \"ABBOSOVA S\": []\n}"
        );
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn write_empty_document() {
        let mut buffer = Vec::<u8>::new();
        super::write(&mut buffer, &crate::SourceDocument::new()).unwrap();
        assert_eq!(buffer, b"{}");
    }

    #[test]
    fn big_numbers_unchanged() {
        let input = "{\"SAMIYEVA G\": [{\"id\": 123456789012345678901234567890, \"weight\": 0.1}]}";
        let source = super::read(input.as_bytes()).unwrap();
        let teachers = vec![String::from("SAMIYEVA G")];
        let extraction = crate::extract::extract(&source, &teachers).unwrap();

        let mut buffer = Vec::<u8>::new();
        super::write(&mut buffer, &extraction.document).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "{\n  \"SAMIYEVA G\": [\n    {\n      \"id\": 123456789012345678901234567890,\n      \"weight\": 0.1\n    }\n  ]\n}"
        );
    }

    #[test]
    fn extract_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join(crate::DEFAULT_INPUT_FILE);
        let output_path = dir.path().join(crate::DEFAULT_OUTPUT_FILE);
        std::fs::File::create(&input_path)
            .unwrap()
            .write_all(SIMPLE_INPUT.as_bytes())
            .unwrap();

        let source = super::read(std::fs::File::open(&input_path).unwrap()).unwrap();
        let teachers = vec![
            String::from("NURMUHAMMADOV H"),
            String::from("YUSUFJONOVA M"),
            String::from("SAMIYEVA G"),
        ];
        let extraction = crate::extract::extract(&source, &teachers).unwrap();
        super::write(
            std::fs::File::create(&output_path).unwrap(),
            &extraction.document,
        )
        .unwrap();

        let written = std::fs::read_to_string(&output_path).unwrap();
        assert!(written.contains("А-204"));
        let reparsed = super::read(written.as_bytes()).unwrap();
        assert_eq!(reparsed, extraction.document);
        let keys: Vec<&str> = reparsed.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["NURMUHAMMADOV H", "YUSUFJONOVA M"]);
    }
}
