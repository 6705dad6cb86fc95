/// Comment delimiter.
pub const MARKER: char = '#';

/// Comment continuation carried from one line to the next.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommentState {
    pub open: bool,
    pub text: String,
}

impl CommentState {
    /// Called at the start of every line; pending text from an earlier
    /// line gets a line break before the new fragment.
    pub fn continue_line(&mut self) {
        if self.open && !self.text.is_empty() {
            self.text.push('\n');
        }
    }
}

/// Result of a comment scan that consumed text.
#[derive(Debug, PartialEq)]
pub struct Scanned {
    /// Position where tokenizing resumes.
    pub resume: usize,
    /// Full text of a comment that closed during this scan.
    pub comment: Option<String>,
}

fn is_space(line: &[char], index: usize) -> bool {
    line.get(index) == Some(&' ')
}

fn is_marker(line: &[char], index: usize) -> bool {
    line.get(index) == Some(&MARKER)
}

/// `#` alone or `# ...` at the start of the line.
fn leading_delimiter(line: &[char]) -> bool {
    is_marker(line, 0) && (line.len() == 1 || is_space(line, 1))
}

/// `... #` at the end of the line, with the marker at or after `pos`.
fn trailing_delimiter(line: &[char], pos: usize) -> bool {
    let len = line.len();
    len >= 2 && len - 1 >= pos && is_marker(line, len - 1) && is_space(line, len - 2)
}

/// Position of the marker of the first ` # ` whose marker sits after `pos`.
fn inner_delimiter(line: &[char], pos: usize) -> Option<usize> {
    line.windows(3)
        .enumerate()
        .skip(pos)
        .find(|(_, w)| w[..] == [' ', MARKER, ' '])
        .map(|(index, _)| index + 1)
}

/// Position just past a delimiter whose marker is at `marker`; a single
/// space following the marker belongs to the delimiter.
fn past(line: &[char], marker: usize) -> usize {
    if is_space(line, marker + 1) {
        marker + 2
    } else {
        marker + 1
    }
}

/// Looks for comment text at `pos`. Returns `None` when no comment applies
/// there; otherwise the state is updated and the scan tells the caller where
/// to resume.
pub fn scan(line: &[char], pos: usize, state: &mut CommentState) -> Option<Scanned> {
    if state.open {
        Some(close(line, pos, state))
    } else {
        open(line, pos, state)
    }
}

fn close(line: &[char], pos: usize, state: &mut CommentState) -> Scanned {
    let end = if pos == 0 && leading_delimiter(line) {
        Some(0)
    } else if let Some(marker) = inner_delimiter(line, pos) {
        Some(marker)
    } else if trailing_delimiter(line, pos) {
        Some(line.len() - 1)
    } else {
        None
    };
    match end {
        Some(marker) => {
            state.text.extend(&line[pos..=marker]);
            state.open = false;
            Scanned {
                resume: past(line, marker),
                comment: Some(std::mem::take(&mut state.text)),
            }
        }
        None => {
            state.text.extend(&line[pos..]);
            Scanned {
                resume: line.len(),
                comment: None,
            }
        }
    }
}

fn open(line: &[char], pos: usize, state: &mut CommentState) -> Option<Scanned> {
    if !is_marker(line, pos) {
        return None;
    }
    let opens = if pos == 0 {
        leading_delimiter(line)
    } else {
        is_space(line, pos - 1) && (is_space(line, pos + 1) || pos + 1 == line.len())
    };
    if !opens {
        return None;
    }
    state.open = true;
    state.text = MARKER.to_string();
    Some(Scanned {
        resume: past(line, pos),
        comment: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_no_comment() {
        let mut state = CommentState::default();
        assert_eq!(scan(&chars("1 2 +"), 2, &mut state), None);
        assert_eq!(scan(&chars("1 #2"), 2, &mut state), None);
        assert_eq!(scan(&chars("1# 2"), 1, &mut state), None);
        assert_eq!(state, CommentState::default());
    }

    #[test]
    fn test_open_at_start() {
        let mut state = CommentState::default();
        let line = chars("# hello");
        assert_eq!(
            scan(&line, 0, &mut state),
            Some(Scanned {
                resume: 2,
                comment: None
            })
        );
        assert!(state.open);
        let mut state = CommentState::default();
        assert_eq!(scan(&chars("#"), 0, &mut state).map(|s| s.resume), Some(1));
        assert!(state.open);
    }

    #[test]
    fn test_open_mid_line_and_trailing() {
        let mut state = CommentState::default();
        let line = chars("1 # x");
        assert_eq!(scan(&line, 2, &mut state).map(|s| s.resume), Some(4));
        assert!(state.open);
        let mut state = CommentState::default();
        let line = chars("1 2 #");
        assert_eq!(scan(&line, 4, &mut state).map(|s| s.resume), Some(5));
        assert!(state.open);
    }

    #[test]
    fn test_close_same_line() {
        let mut state = CommentState::default();
        let line = chars("1 # hi # 2");
        let opened = scan(&line, 2, &mut state).unwrap();
        let closed = scan(&line, opened.resume, &mut state).unwrap();
        assert_eq!(closed.resume, 9);
        assert_eq!(closed.comment.as_deref(), Some("#hi #"));
        assert_eq!(state, CommentState::default());
    }

    #[test]
    fn test_stays_open() {
        let mut state = CommentState {
            open: true,
            text: "# start".to_string(),
        };
        let line = chars("more words");
        let scanned = scan(&line, 0, &mut state).unwrap();
        assert_eq!(scanned.resume, line.len());
        assert_eq!(scanned.comment, None);
        assert!(state.open);
        assert_eq!(state.text, "# startmore words");
    }

    #[test]
    fn test_close_on_later_lines() {
        let mut state = CommentState {
            open: true,
            text: "#".to_string(),
        };
        let scanned = scan(&chars("# 5"), 0, &mut state).unwrap();
        assert_eq!(scanned.resume, 2);
        assert_eq!(scanned.comment.as_deref(), Some("##"));

        let mut state = CommentState {
            open: true,
            text: "#".to_string(),
        };
        let scanned = scan(&chars("end #"), 0, &mut state).unwrap();
        assert_eq!(scanned.resume, 5);
        assert_eq!(scanned.comment.as_deref(), Some("#end #"));
        assert!(!state.open);
    }

    #[test]
    fn test_continue_line() {
        let mut state = CommentState {
            open: true,
            text: "# a".to_string(),
        };
        state.continue_line();
        assert_eq!(state.text, "# a\n");
        let mut closed = CommentState::default();
        closed.continue_line();
        assert_eq!(closed.text, "");
    }
}
