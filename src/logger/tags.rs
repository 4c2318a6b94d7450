/// Log tags identify the subsystem a message comes from
///
/// Each tag has a debug key used by the --debug-<key> command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    GasOracle,
    Cache,
    Config,
    System,
    Other(String),
}

impl LogTag {
    /// Key used for --debug-<key> flags and tag filtering
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::GasOracle => "gas".to_string(),
            LogTag::Cache => "cache".to_string(),
            LogTag::Config => "config".to_string(),
            LogTag::System => "system".to_string(),
            LogTag::Other(s) => s.to_lowercase(),
        }
    }

    /// Uncolored label for plain output
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::GasOracle => "GAS".to_string(),
            LogTag::Cache => "CACHE".to_string(),
            LogTag::Config => "CONFIG".to_string(),
            LogTag::System => "SYSTEM".to_string(),
            LogTag::Other(s) => s.to_uppercase(),
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
