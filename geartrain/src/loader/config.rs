/// Loader configuration

/// What to do with a numeric field that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericPolicy {
    /// Reject the file with a parse error
    #[default]
    Strict,
    /// Log a warning and use zero, as older GearTrain tools did
    Lenient,
}

/// Scene loader configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoaderConfig {
    pub numeric_policy: NumericPolicy,
}

impl LoaderConfig {
    /// Configuration accepting malformed numbers as zero
    pub fn lenient() -> Self {
        Self { numeric_policy: NumericPolicy::Lenient }
    }
}
