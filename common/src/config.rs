#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// How much of the surrounding chrome to suppress.
    ///
    /// `0` prints the banner, chapter headers and transcripts, `1` drops the
    /// banner and headers, `2` prints only the closing summary.
    pub quiet: u8,
    /// Skips the banner even when `quiet` is `0`.
    pub no_banner: bool,
    /// Base seed for chapters that roll dice.
    ///
    /// When absent a fresh seed is drawn for every run.
    pub seed: Option<u64>,
    /// Raises the log filter: warn, info, debug, then trace.
    pub verbose: u8,
}

impl Config {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn shows_transcripts(&self) -> bool {
        self.quiet < 2
    }

    pub fn shows_headers(&self) -> bool {
        self.quiet == 0
    }

    pub fn shows_banner(&self) -> bool {
        self.quiet == 0 && !self.no_banner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_shows_everything() {
        let cfg = Config::default();
        assert!(cfg.shows_banner());
        assert!(cfg.shows_headers());
        assert!(cfg.shows_transcripts());
        assert_eq!(cfg.log_level(), "warn");
    }

    #[test]
    fn quiet_levels_strip_output_progressively() {
        let one = Config { quiet: 1, ..Config::default() };
        assert!(!one.shows_banner());
        assert!(!one.shows_headers());
        assert!(one.shows_transcripts());

        let two = Config { quiet: 2, ..Config::default() };
        assert!(!two.shows_transcripts());
    }

    #[test]
    fn verbosity_saturates_at_trace() {
        let cfg = Config { verbose: 9, ..Config::default() };
        assert_eq!(cfg.log_level(), "trace");
    }
}
