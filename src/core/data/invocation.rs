/// Which output target a render invocation is built for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Render into the fixed temporary path for immediate visual feedback.
    Preview,
    /// Render into the user-chosen destination, optionally handing the
    /// result to an external viewer.
    Save,
}

/// One external-process call, as an ordered sequence of string tokens.
///
/// Tokens are passed to the process as discrete argv entries and never
/// joined through a shell, so path arguments need no escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInvocation {
    program: String,
    args: Vec<String>,
}

impl RenderInvocation {
    #[must_use]
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The full token sequence, program name first.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(1 + self.args.len());
        tokens.push(self.program.clone());
        tokens.extend(self.args.iter().cloned());
        tokens
    }

    /// The destination path, taken from the token following `-o`.
    #[must_use]
    pub fn output_path(&self) -> Option<&str> {
        self.args
            .iter()
            .position(|arg| arg == "-o")
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}
