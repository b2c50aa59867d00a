use std::fmt;

use colored::Colorize;
use lexer::{Token, TokenType};

/// Compile-time diagnostics, reported with the offending token's location
/// (§7). Construction never happens while `panic_mode` is suppressing
/// cascades — see `Compiler::error_at` in `lib.rs`.
pub enum CompileError {
    Unexpected { token: Token, message: String },
    TooManyConstants { token: Token },
    TooManyLocals { token: Token },
    TooManyParameters { token: Token },
    TooManyArguments { token: Token },
    JumpTooLarge { token: Token },
    DuplicateLocal { token: Token, name: String },
    SelfReferentialInitializer { token: Token },
    InvalidAssignmentTarget { token: Token },
    ReturnOutsideFunction { token: Token },
}

impl CompileError {
    pub fn token(&self) -> &Token {
        match self {
            CompileError::Unexpected { token, .. }
            | CompileError::TooManyConstants { token }
            | CompileError::TooManyLocals { token }
            | CompileError::TooManyParameters { token }
            | CompileError::TooManyArguments { token }
            | CompileError::JumpTooLarge { token }
            | CompileError::DuplicateLocal { token, .. }
            | CompileError::SelfReferentialInitializer { token }
            | CompileError::InvalidAssignmentTarget { token }
            | CompileError::ReturnOutsideFunction { token } => token,
        }
    }

    fn message(&self) -> String {
        match self {
            CompileError::Unexpected { message, .. } => message.clone(),
            CompileError::TooManyConstants { .. } => "Too many constants in one chunk.".to_string(),
            CompileError::TooManyLocals { .. } => "Too many local variables in function.".to_string(),
            CompileError::TooManyParameters { .. } => "Can't have more than 255 parameters.".to_string(),
            CompileError::TooManyArguments { .. } => "Can't have more than 255 arguments.".to_string(),
            CompileError::JumpTooLarge { .. } => "Too much code to jump over.".to_string(),
            CompileError::DuplicateLocal { name, .. } => {
                format!("Already a variable named '{name}' in this scope.")
            }
            CompileError::SelfReferentialInitializer { .. } => {
                "Can't read local variable in its own initializer.".to_string()
            }
            CompileError::InvalidAssignmentTarget { .. } => "Invalid assignment target.".to_string(),
            CompileError::ReturnOutsideFunction { .. } => "Can't return from top-level code.".to_string(),
        }
    }
}

impl fmt::Display for CompileError {
    /// `[line N] Error at '<lexeme>': <msg>` (`at end` for `EOF`), matching
    /// spec.md's stdout/stderr rule, with the severity tag colorized.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.token();
        let location = match token.typ {
            TokenType::EOF => "at end".to_string(),
            TokenType::Error => String::new(),
            _ => format!("at '{}'", token.lexeme()),
        };
        write!(
            f,
            "[line {}] {} {location}: {}",
            token.line,
            "Error".red().bold(),
            self.message()
        )?;
        write!(f, "\n{token}")
    }
}

impl fmt::Debug for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl std::error::Error for CompileError {}
