use std::fmt;

use colored::Colorize;

/// One live call frame at the moment an error unwound the stack, innermost
/// first. `name = None` marks the synthetic top-level script frame.
pub struct FrameInfo {
    pub name: Option<String>,
    pub line: usize,
}

/// Runtime diagnostics (§7). Unlike `CompileError`, there is no recovery:
/// raising one always aborts the run and resets the VM's stack.
pub struct RuntimeError {
    pub message: String,
    /// Innermost call first, the top-level script frame last — matching
    /// the reference `runtime_error`'s frame walk.
    pub frames: Vec<FrameInfo>,
}

impl RuntimeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), frames: Vec::new() }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", "Runtime error:".red().bold(), self.message)?;
        for frame in &self.frames {
            match &frame.name {
                Some(name) => writeln!(f, "[line {}] in {name}()", frame.line)?,
                None => writeln!(f, "[line {}] in script", frame.line)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl std::error::Error for RuntimeError {}
