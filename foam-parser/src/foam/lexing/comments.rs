//! Comment and blank line detection

/// Line comment opener
pub const LINE_COMMENT: &str = "//";
/// Block comment opener
pub const BLOCK_COMMENT_OPEN: &str = "/*";
/// Block comment closer
pub const BLOCK_COMMENT_CLOSE: &str = "*/";

/// Check if a trimmed line starts with a comment opener
pub fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with(LINE_COMMENT) || trimmed.starts_with(BLOCK_COMMENT_OPEN)
}

/// Blank and comment lines never produce symbols
pub fn is_skippable(trimmed: &str) -> bool {
    trimmed.is_empty() || is_comment(trimmed)
}

/// Tracks multi-line `/* ... */` comments so their body lines can be skipped.
///
/// Only comments whose opener starts a line are tracked; a `/*` after other content leaves
/// the state untouched.
#[derive(Debug, Default, Clone)]
pub struct BlockCommentState {
    inside: bool,
}

impl BlockCommentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Feed the next trimmed line. Returns true when the line belongs to a block comment.
    pub fn consume(&mut self, trimmed: &str) -> bool {
        if self.inside {
            if trimmed.contains(BLOCK_COMMENT_CLOSE) {
                self.inside = false;
            }
            return true;
        }
        if let Some(rest) = trimmed.strip_prefix(BLOCK_COMMENT_OPEN) {
            if !rest.contains(BLOCK_COMMENT_CLOSE) {
                self.inside = true;
            }
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skippable_lines() {
        assert!(is_skippable(""));
        assert!(is_skippable("// solver settings"));
        assert!(is_skippable("/* banner */"));
        assert!(!is_skippable("application icoFoam;"));
        assert!(!is_skippable("\\*---------------------------------------------------------------------------*/"));
    }

    #[test]
    fn test_block_comment_body_is_tracked() {
        let mut state = BlockCommentState::new();
        assert!(state.consume("/*--------------------------------*- C++ -*----------------------------------*\\"));
        assert!(state.is_inside());
        assert!(state.consume("Description"));
        assert!(state.consume("\\*---------------------------------------------------------------------------*/"));
        assert!(!state.is_inside());
        assert!(!state.consume("FoamFile"));
    }

    #[test]
    fn test_single_line_block_comment_closes_immediately() {
        let mut state = BlockCommentState::new();
        assert!(state.consume("/* one liner */"));
        assert!(!state.is_inside());
        assert!(!state.consume("a 1;"));
    }
}
