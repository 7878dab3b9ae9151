//! Sentinel-terminated source storage.

/// Owns the source bytes plus one trailing sentinel byte (`0x00`), so the
/// [`crate::Cursor`] never needs a bounds check on its common-path `current`
/// read — reading past the last real byte always lands on the sentinel.
///
/// Unlike the teacher's `ori_lexer_core::SourceBuffer`, this type does not
/// track encoding issues: the input here is always a Rust `&str`, so byte
/// content is already guaranteed valid UTF-8 by the type system, and the
/// interior-null-byte ambiguity the teacher's cursor guards against (raw
/// bytes of unknown provenance) cannot arise from a `&str`.
pub struct SourceBuffer {
    bytes: Vec<u8>,
    source_len: usize,
}

impl SourceBuffer {
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut bytes = Vec::with_capacity(source.len() + 1);
        bytes.extend_from_slice(source.as_bytes());
        bytes.push(0);
        SourceBuffer {
            bytes,
            source_len: source.len(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.source_len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    #[must_use]
    pub fn cursor(&self) -> crate::Cursor<'_> {
        crate::Cursor::new(&self.bytes, self.source_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_excludes_the_sentinel() {
        let buf = SourceBuffer::new("abc");
        assert_eq!(buf.len(), 3);
    }
}
