//! Product barcode helpers for locating OCR documents.

use std::path::Path;

/// Whether `input` looks like an EAN-13 barcode.
pub fn is_barcode(input: &str) -> bool {
    input.len() == 13 && input.bytes().all(|b| b.is_ascii_digit())
}

/// Derive a barcode from the numeric directories above `path`.
///
/// Product images are stored as `326/385/000/1234/1.json`: walking up from
/// the file, every all-digit directory name is prepended until the first
/// non-numeric one.
pub fn barcode_from_path(path: &Path) -> Option<String> {
    let mut barcode = String::new();

    for parent in path.ancestors().skip(1) {
        let Some(name) = parent.file_name().and_then(|n| n.to_str()) else {
            break;
        };
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_digit()) {
            break;
        }
        barcode.insert_str(0, name);
    }

    if barcode.is_empty() { None } else { Some(barcode) }
}

/// Split a barcode into the four path segments used by the image store.
///
/// Segments are clamped to the barcode length, so shorter codes yield
/// empty trailing segments.
pub fn split_barcode(barcode: &str) -> [&str; 4] {
    let segment = |start: usize, end: usize| {
        let end = end.min(barcode.len());
        barcode.get(start.min(end)..end).unwrap_or("")
    };

    [segment(0, 3), segment(3, 6), segment(6, 9), segment(9, 13)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_barcode() {
        assert!(is_barcode("3263850001234"));
        assert!(!is_barcode("326385000123"));
        assert!(!is_barcode("326385000123a"));
        assert!(!is_barcode("data/ocr"));
    }

    #[test]
    fn test_barcode_from_nested_dirs() {
        let path = PathBuf::from("ocr/326/385/000/1234/1.json");
        assert_eq!(barcode_from_path(&path), Some("3263850001234".to_string()));
    }

    #[test]
    fn test_barcode_stops_at_first_non_numeric() {
        let path = PathBuf::from("1234/ocr/567/2.json");
        assert_eq!(barcode_from_path(&path), Some("567".to_string()));
    }

    #[test]
    fn test_no_barcode() {
        assert_eq!(barcode_from_path(&PathBuf::from("ocr/2.json")), None);
        assert_eq!(barcode_from_path(&PathBuf::from("2.json")), None);
    }

    #[test]
    fn test_split_barcode() {
        assert_eq!(split_barcode("3263850001234"), ["326", "385", "000", "1234"]);
        assert_eq!(split_barcode("32638"), ["326", "38", "", ""]);
    }
}
