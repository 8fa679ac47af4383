//! Multi-document splitting for rendered Helm manifests.
//!
//! `helm template` and `helm get manifest` emit one text blob with documents
//! separated by `---` lines. Splitting on every occurrence of the `---` token
//! is wrong: literal block scalars (PEM certificates and the like) may contain
//! indented lines of dashes that are content, not boundaries. The scanner
//! below is line oriented and only treats an unindented `---` line as a
//! separator.

/// Split a rendered manifest blob into individual YAML documents.
///
/// Document text is preserved byte for byte, including line endings and any
/// `# Source:` comment lines that follow a separator. Segments that are empty
/// or whitespace-only are discarded, so a blob with a leading or trailing
/// separator does not produce empty documents.
pub fn split_documents(blob: &str) -> Vec<String> {
    let mut documents = Vec::new();
    let mut buffer = String::new();

    for line in blob.split_inclusive('\n') {
        if is_separator(line) {
            flush(&mut buffer, &mut documents);
        } else {
            buffer.push_str(line);
        }
    }
    flush(&mut buffer, &mut documents);

    documents
}

/// A separator is a line that reads exactly `---` once trailing whitespace
/// (including the line ending) is removed. Leading whitespace disqualifies
/// the line: YAML document separators are never indented, while indented
/// dashes inside a block scalar are data. A trailing comment (`--- # foo`)
/// also disqualifies it.
fn is_separator(line: &str) -> bool {
    line.trim_end() == "---"
}

fn flush(buffer: &mut String, documents: &mut Vec<String>) {
    if buffer.trim().is_empty() {
        buffer.clear();
    } else {
        documents.push(std::mem::take(buffer));
    }
}
