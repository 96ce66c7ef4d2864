use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    InvalidIndex(String),
    EmptyFile(String),
    Parse(String),
    Read(String),
    Serialize(String),
    Write(String),
    InvalidInput(String),
    InvalidData(String),
}

impl AppError {
    pub fn invalid_index<M: Into<String>>(message: M) -> Self {
        Self::InvalidIndex(message.into())
    }

    pub fn empty_file<M: Into<String>>(message: M) -> Self {
        Self::EmptyFile(message.into())
    }

    pub fn parse<M: Into<String>>(message: M) -> Self {
        Self::Parse(message.into())
    }

    pub fn read<M: Into<String>>(message: M) -> Self {
        Self::Read(message.into())
    }

    pub fn serialize<M: Into<String>>(message: M) -> Self {
        Self::Serialize(message.into())
    }

    pub fn write<M: Into<String>>(message: M) -> Self {
        Self::Write(message.into())
    }

    pub fn invalid_input<M: Into<String>>(message: M) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_data<M: Into<String>>(message: M) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidIndex(_) => "invalid_index",
            Self::EmptyFile(_) => "empty_file",
            Self::Parse(_) => "parse_error",
            Self::Read(_) => "read_error",
            Self::Serialize(_) => "serialize_error",
            Self::Write(_) => "write_error",
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidData(_) => "invalid_data",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidIndex(message)
            | Self::EmptyFile(message)
            | Self::Parse(message)
            | Self::Read(message)
            | Self::Serialize(message)
            | Self::Write(message)
            | Self::InvalidInput(message)
            | Self::InvalidData(message) => message,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}
