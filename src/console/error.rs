//! Console error types

/// Console error with code and message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// E01: Unknown command
    UnknownCommand,
    /// E02: Line carried no command
    EmptyCommand,
    /// E03: Command table is full
    RegistryFull,
    /// E04: Command name is empty
    EmptyName,
    /// E05: Command description is empty
    EmptyDescription,
}

impl ConsoleError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "E01",
            Self::EmptyCommand => "E02",
            Self::RegistryFull => "E03",
            Self::EmptyName => "E04",
            Self::EmptyDescription => "E05",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "unknown command",
            Self::EmptyCommand => "empty command",
            Self::RegistryFull => "command table full",
            Self::EmptyName => "empty command name",
            Self::EmptyDescription => "empty command description",
        }
    }
}

impl core::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
