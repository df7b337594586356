//! FTP Transfer types
//!
//! Representation types selectable with the TYPE command.

/// FTP representation types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferType {
    Ascii,
}

impl TransferType {
    /// Type code used as the TYPE command argument
    pub fn code(&self) -> &'static str {
        match self {
            TransferType::Ascii => "A",
        }
    }
}
