use super::comment::{self, CommentState};
use super::number;
use super::token::*;

/// Tokenizes one input line. An open comment in `comment` carries over from
/// the previous line and is left updated for the next.
pub fn lex(s: &str, comment: &mut CommentState) -> Vec<Token> {
    comment.continue_line();
    let tokens = SrpnLexer {
        line: s.chars().collect(),
        tokens: vec![],
        pending: vec![],
        comment,
    }
    .lex();
    if log::log_enabled!(log::Level::Trace) {
        let spelled: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        log::trace!("lex {:?} => [{}]", s, spelled.join(" "));
    }
    tokens
}

fn is_srpn_whitespace(c: char) -> bool {
    c.is_whitespace()
}

struct SrpnLexer<'a> {
    line: Vec<char>,
    tokens: Vec<Token>,
    pending: Vec<Operator>,
    comment: &'a mut CommentState,
}

impl<'a> SrpnLexer<'a> {
    fn lex(mut self) -> Vec<Token> {
        let mut pos = 0;
        while let Some(&ch) = self.line.get(pos) {
            pos = self.advance(pos, ch);
        }
        self.flush();
        self.tokens
    }

    /// Consumes whatever starts at `pos` and returns the next position.
    fn advance(&mut self, pos: usize, ch: char) -> usize {
        if self.comment.open || ch == comment::MARKER {
            if let Some(scanned) = comment::scan(&self.line, pos, self.comment) {
                self.flush();
                if let Some(text) = scanned.comment {
                    self.tokens.push(Token::Comment(text));
                }
                return scanned.resume;
            }
        }
        if is_srpn_whitespace(ch) {
            self.flush();
            return pos + 1;
        }
        if let Some((token, next)) = number::scan(&self.line, pos) {
            self.tokens.push(token);
            return next;
        }
        if let Some(op) = Operator::from_char(ch) {
            self.buffer(op, pos);
            return pos + 1;
        }
        self.flush();
        self.tokens.push(Token::from_char(ch));
        pos + 1
    }

    /// Compact notation: operators are held back until a looser-binding
    /// operator, whitespace or the end of the line releases them.
    fn buffer(&mut self, op: Operator, pos: usize) {
        let previous = self.pending.last().copied().unwrap_or(Operator::Plus);
        let at_break = match self.line.get(pos + 1) {
            Some(&next) => is_srpn_whitespace(next),
            None => true,
        };
        if at_break || previous.precedence() < op.precedence() {
            self.flush();
        }
        self.pending.push(op);
    }

    /// Most recently buffered operator goes first.
    fn flush(&mut self) {
        while let Some(op) = self.pending.pop() {
            self.tokens.push(Token::Operator(op));
        }
    }
}
