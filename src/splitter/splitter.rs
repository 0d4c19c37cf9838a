/// Statement delimiter.
pub const STATEMENT_SEPARATOR: char = ';';

/// One `;`-separated piece of the source, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// Byte offset of `text` in the source.
    pub offset: usize,
}

impl<'a> Segment<'a> {
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Splits `source` on every `;`.
///
/// Always yields at least one segment: a source without `;` (including the
/// empty source) yields itself.
pub fn split_statements(source: &str) -> Vec<Segment<'_>> {
    let mut offset = 0;

    source
        .split(STATEMENT_SEPARATOR)
        .map(|text| {
            let segment = Segment { text, offset };
            offset += text.len() + STATEMENT_SEPARATOR.len_utf8();
            segment
        })
        .collect()
}
