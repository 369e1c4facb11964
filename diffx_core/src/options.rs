use diffx_value::DiffError;
use regex::Regex;

/// Output renderer selected for [`crate::format_output`] (spec §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Diffx,
    Json,
    Yaml,
    Unified,
}

/// Parse an `output_format` string, as accepted by `diff_strings`-adjacent
/// hosts that pass the format by name rather than by enum (spec §4.5).
pub fn parse_output_format(name: &str) -> Result<OutputFormat, DiffError> {
    match name {
        "diffx" => Ok(OutputFormat::Diffx),
        "json" => Ok(OutputFormat::Json),
        "yaml" => Ok(OutputFormat::Yaml),
        "unified" => Ok(OutputFormat::Unified),
        other => Err(DiffError::config(format!(
            "unknown output format `{other}`; expected one of diffx, json, yaml, unified"
        ))),
    }
}

/// Options controlling normalization, filtering, and formatting semantics
/// for a `diff()` call (spec §4.5). Construct with [`DiffOptions::default`]
/// and layer on the `with_*` builders, mirroring this corpus's existing
/// options-builder shape.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffOptions {
    pub epsilon: f64,
    pub array_id_key: Option<String>,
    pub ignore_keys_regex: Option<String>,
    pub path_filter: Option<String>,
    pub ignore_whitespace: bool,
    pub ignore_case: bool,
    pub show_unchanged: bool,
    pub show_types: bool,
    pub output_format: OutputFormat,
    pub context_lines: usize,
    pub brief_mode: bool,
    pub quiet_mode: bool,
    pub use_memory_optimization: bool,
    pub batch_size: Option<usize>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            epsilon: 0.0,
            array_id_key: None,
            ignore_keys_regex: None,
            path_filter: None,
            ignore_whitespace: false,
            ignore_case: false,
            show_unchanged: false,
            show_types: false,
            output_format: OutputFormat::default(),
            context_lines: 0,
            brief_mode: false,
            quiet_mode: false,
            use_memory_optimization: false,
            batch_size: None,
        }
    }
}

impl DiffOptions {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_array_id_key(mut self, key: impl Into<String>) -> Self {
        self.array_id_key = Some(key.into());
        self
    }

    pub fn with_ignore_keys_regex(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_keys_regex = Some(pattern.into());
        self
    }

    pub fn with_path_filter(mut self, substring: impl Into<String>) -> Self {
        self.path_filter = Some(substring.into());
        self
    }

    pub fn with_ignore_whitespace(mut self, value: bool) -> Self {
        self.ignore_whitespace = value;
        self
    }

    pub fn with_ignore_case(mut self, value: bool) -> Self {
        self.ignore_case = value;
        self
    }

    pub fn with_show_unchanged(mut self, value: bool) -> Self {
        self.show_unchanged = value;
        self
    }

    pub fn with_show_types(mut self, value: bool) -> Self {
        self.show_types = value;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_context_lines(mut self, lines: usize) -> Self {
        self.context_lines = lines;
        self
    }

    pub fn with_brief_mode(mut self, value: bool) -> Self {
        self.brief_mode = value;
        self
    }

    pub fn with_quiet_mode(mut self, value: bool) -> Self {
        self.quiet_mode = value;
        self
    }

    pub fn with_use_memory_optimization(mut self, value: bool) -> Self {
        self.use_memory_optimization = value;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Compile and validate this option set (spec §4.1 pre-condition).
    /// Called once per `diff()` invocation; the compiled regex is reused
    /// across the whole walk rather than recompiled per key.
    pub(crate) fn resolve(&self) -> Result<ResolvedOptions<'_>, DiffError> {
        let ignore_keys_regex = match &self.ignore_keys_regex {
            Some(pattern) => Some(Regex::new(pattern).map_err(|err| {
                DiffError::config(format!("invalid ignore_keys_regex `{pattern}`: {err}"))
            })?),
            None => None,
        };

        Ok(ResolvedOptions {
            options: self,
            ignore_keys_regex,
        })
    }
}

/// A [`DiffOptions`] with its regex compiled, ready for the engine to
/// consult during descent.
pub(crate) struct ResolvedOptions<'a> {
    pub options: &'a DiffOptions,
    pub ignore_keys_regex: Option<Regex>,
}

impl ResolvedOptions<'_> {
    pub fn key_is_ignored(&self, key: &str) -> bool {
        self.ignore_keys_regex
            .as_ref()
            .is_some_and(|re| re.is_match(key))
    }
}
