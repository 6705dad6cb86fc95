use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Operand stack capacity.
pub const STACK_LIMIT: usize = 23;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    limit: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new(STACK_LIMIT)
    }
}

impl<T> Stack<T> {
    pub fn new(limit: usize) -> Stack<T> {
        Stack {
            limit,
            vec: Vec::with_capacity(limit),
        }
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow)
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.limit
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    /// A full stack rejects the value and stays unchanged.
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            Err(error!(StackOverflow))
        } else {
            self.vec.push(val);
            Ok(())
        }
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    /// Pops the two most recent values as `(earlier, later)`.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        if self.vec.len() < 2 {
            return Err(self.underflow_error());
        }
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
}
