//! Reassembly of newline-terminated command lines from raw serial reads.

/// Accumulates raw bytes from the device and yields complete,
/// whitespace-trimmed lines.
///
/// Reads from the port arrive in arbitrary chunks; a token may be split
/// across several reads, or several tokens may arrive in one. Lines are
/// handed out one per call so the listener processes one command per
/// iteration. Blank lines are consumed silently.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw bytes read from the device.
    pub fn extend(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Pop the next complete non-blank line, if one is buffered.
    ///
    /// A line that is not valid UTF-8 is discarded from the buffer and
    /// reported as an error, so the next line can still be read.
    pub fn next_line(&mut self) -> Result<Option<String>, std::str::Utf8Error> {
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.buf.drain(..=pos).collect();
            let line = std::str::from_utf8(&raw[..pos])?.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_line_in_one_chunk() {
        let mut lines = LineBuffer::new();
        lines.extend(b"CHECK_UPDATE\n");
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("CHECK_UPDATE"));
        assert_eq!(lines.next_line().unwrap(), None);
    }

    #[test]
    fn token_split_across_reads_reassembles() {
        let mut lines = LineBuffer::new();
        lines.extend(b"CHECK_");
        assert_eq!(lines.next_line().unwrap(), None);
        lines.extend(b"UPDATE\n");
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("CHECK_UPDATE"));
    }

    #[test]
    fn buffered_lines_come_out_one_per_call() {
        let mut lines = LineBuffer::new();
        lines.extend(b"CHECK_UPDATE\nRUN_ANALYSIS\n");
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("CHECK_UPDATE"));
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("RUN_ANALYSIS"));
        assert_eq!(lines.next_line().unwrap(), None);
    }

    #[test]
    fn blank_lines_skipped() {
        let mut lines = LineBuffer::new();
        lines.extend(b"\n  \nCHECK_UPDATE\n\n");
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("CHECK_UPDATE"));
        assert_eq!(lines.next_line().unwrap(), None);
    }

    #[test]
    fn crlf_and_whitespace_trimmed() {
        let mut lines = LineBuffer::new();
        lines.extend(b"  CHECK_UPDATE \r\n");
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("CHECK_UPDATE"));
    }

    #[test]
    fn incomplete_line_waits_for_newline() {
        let mut lines = LineBuffer::new();
        lines.extend(b"CHECK_UPDATE");
        assert_eq!(lines.next_line().unwrap(), None);
        lines.extend(b"\n");
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("CHECK_UPDATE"));
    }

    #[test]
    fn invalid_utf8_errors_then_recovers() {
        let mut lines = LineBuffer::new();
        lines.extend(b"\xff\xfe\nCHECK_UPDATE\n");
        assert!(lines.next_line().is_err());
        // The bad line was discarded; the next one is readable.
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("CHECK_UPDATE"));
    }
}
