use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    InvalidArgument(&'static str),

    #[error("Stack overflow: Cannot push to full stack")]
    StackOverflow,

    #[error("Stack underflow: Cannot pop from empty stack")]
    StackUnderflow,

    #[error("Stack is empty")]
    EmptyStack,

    #[error("Invalid postfix expression")]
    InvalidPostfix,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
