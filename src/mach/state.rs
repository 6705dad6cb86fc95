use super::random::RandomCursor;
use crate::lang::CommentState;

/// State that outlives a single line: where the next random draw comes
/// from and any comment still open from an earlier line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProgramState {
    pub random: RandomCursor,
    pub comment: CommentState,
}
