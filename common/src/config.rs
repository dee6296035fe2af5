#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Suppresses the startup banner.
    pub no_banner: bool,

    /// Output verbosity reduction level.
    ///
    /// 0 prints everything, 1 drops decorative output, 2 keeps results only.
    pub quiet: u8,

    /// Replaces owner names with a placeholder in rendered rows.
    pub redact_owner: bool,
}
