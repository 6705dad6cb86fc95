//! # SRPN
//!
//! A Reverse Polish Notation calculator with C-style saturating 32-bit
//! integer arithmetic.
//!
//! Operands are pushed onto a stack of at most 23 values and operators
//! follow them: `3 4 +` adds 3 and 4. Results never wrap; they stop at
//! -2147483648 and 2147483647.
//!
//! ```
//! let mut runtime = srpn::mach::Runtime::new();
//! assert_eq!(runtime.enter("3 4 +"), "");
//! assert_eq!(runtime.enter("="), "7");
//! assert_eq!(runtime.enter("2147483647 1 + ="), "2147483647");
//! ```
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `12`, `-3` | push a decimal number |
//! | `017` | push a legacy octal number (15) |
//! | `+ - * / % ^` | arithmetic on the two most recent values |
//! | `=` | print the most recent value |
//! | `d` | print the whole stack, oldest first |
//! | `r` | push the next pseudo-random number |
//! | `# text #` | comment, may span several lines |
//!
//! Operators written without spaces are read as a compact expression,
//! so `2+3*4=` prints 14.

pub mod lang;
pub mod mach;
