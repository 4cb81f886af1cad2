//! Command and status tokens for the device protocol.
//!
//! The wire format is newline-delimited ASCII, one token per line. Commands
//! arrive from the device; statuses are written back. Unknown commands are
//! not part of the closed set and are reported to the display only.

/// A command token received from the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CheckUpdate,
    RunAnalysis,
}

impl Command {
    /// Parse a whitespace-trimmed line into a command token.
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            "CHECK_UPDATE" => Some(Self::CheckUpdate),
            "RUN_ANALYSIS" => Some(Self::RunAnalysis),
            _ => None,
        }
    }
}

/// A status token written back to the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Processing,
    /// New law(s) found, with the newest law's name optionally appended.
    Update(Option<String>),
    NoUpdate,
    AnalysisDone,
    AnalysisError,
}

impl Status {
    /// Render as the wire token, without the trailing newline.
    ///
    /// An appended name is flattened to a single line so the framing can
    /// never be broken by backend data.
    pub fn token(&self) -> String {
        match self {
            Self::Processing => "PROCESSING".to_string(),
            Self::Update(None) => "UPDATE".to_string(),
            Self::Update(Some(name)) => format!("UPDATE:{}", sanitize(name)),
            Self::NoUpdate => "NO_UPDATE".to_string(),
            Self::AnalysisDone => "ANALYSIS_DONE".to_string(),
            Self::AnalysisError => "ANALYSIS_ERROR".to_string(),
        }
    }
}

fn sanitize(name: &str) -> String {
    name.replace(['\r', '\n'], " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_commands() {
        assert_eq!(Command::parse("CHECK_UPDATE"), Some(Command::CheckUpdate));
        assert_eq!(Command::parse("RUN_ANALYSIS"), Some(Command::RunAnalysis));
    }

    #[test]
    fn parse_rejects_unknown_and_case_variants() {
        assert_eq!(Command::parse("check_update"), None);
        assert_eq!(Command::parse("REBOOT"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn status_tokens() {
        assert_eq!(Status::Processing.token(), "PROCESSING");
        assert_eq!(Status::Update(None).token(), "UPDATE");
        assert_eq!(
            Status::Update(Some("Law A".into())).token(),
            "UPDATE:Law A"
        );
        assert_eq!(Status::NoUpdate.token(), "NO_UPDATE");
        assert_eq!(Status::AnalysisDone.token(), "ANALYSIS_DONE");
        assert_eq!(Status::AnalysisError.token(), "ANALYSIS_ERROR");
    }

    #[test]
    fn update_name_never_embeds_line_breaks() {
        let status = Status::Update(Some("Law\nA\r\n".into()));
        assert_eq!(status.token(), "UPDATE:Law A");
    }
}
