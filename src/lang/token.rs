/// ## Lexical tokens of one input line

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Number(f64),
    RandomDraw { negate: bool },
    LegacyOctal(String),
    Operator(Operator),
    Equals,
    Display,
    Comment(String),
    Unknown(char),
}

impl Token {
    pub fn from_char(ch: char) -> Token {
        match ch {
            '=' => Token::Equals,
            'd' => Token::Display,
            _ => match Operator::from_char(ch) {
                Some(op) => Token::Operator(op),
                None => Token::Unknown(ch),
            },
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Number(n) => write!(f, "{}", n),
            RandomDraw { negate: true } => write!(f, "-r"),
            RandomDraw { negate: false } => write!(f, "r"),
            LegacyOctal(s) => write!(f, "{}", s),
            Operator(op) => write!(f, "{}", op),
            Equals => write!(f, "="),
            Display => write!(f, "d"),
            Comment(s) => write!(f, "{}", s),
            Unknown(ch) => write!(f, "{}", ch),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Modulus,
    Plus,
    Minus,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '^' => Some(Caret),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            '%' => Some(Modulus),
            '+' => Some(Plus),
            '-' => Some(Minus),
            _ => None,
        }
    }

    /// Binding level for compact notation; lower binds tighter.
    pub fn precedence(&self) -> u8 {
        use Operator::*;
        match self {
            Caret => 1,
            Multiply | Divide | Modulus => 2,
            Plus | Minus => 3,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulus => write!(f, "%"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
        }
    }
}
