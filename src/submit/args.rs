use serde::Deserialize;
use serde::Serialize;

/// The arguments handed to a job script through the scheduler's
/// environment-injection flag.
///
/// Positional arguments are space-joined into a single `PARAMS` variable;
/// named arguments become one variable each. Named arguments keep their
/// insertion order in the encoded output, which is why this holds a list
/// of pairs and not a sorted map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobArgs {
    /// The positional arguments, joined into the `PARAMS` variable.
    #[serde(default)]
    positional: Vec<String>,

    /// The named arguments, in insertion order, keys unique.
    #[serde(default)]
    named: Vec<(String, String)>,
}

impl JobArgs {
    /// Create an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn positional(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a named argument.
    ///
    /// Setting a key again replaces its value but keeps its position.
    pub fn named(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.named.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.named.push((key, value)),
        }
        self
    }

    /// Whether nothing would be encoded: no named arguments, and no
    /// positional argument that survives empty-string filtering.
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.positional.iter().all(|arg| arg.is_empty())
    }

    /// The `PARAMS="..."` segment, or `None` when no positional argument
    /// survives filtering.
    ///
    /// Empty strings are dropped entirely; they contribute neither a token
    /// nor a separator.
    fn params_segment(&self) -> Option<String> {
        let filtered = self
            .positional
            .iter()
            .filter(|arg| !arg.is_empty())
            .map(String::as_str)
            .collect::<Vec<&str>>();

        if filtered.is_empty() {
            None
        } else {
            Some(format!("PARAMS=\"{}\"", filtered.join(" ")))
        }
    }

    /// Encode for Torque's `-v` flag, placed before the script name.
    ///
    /// The shape is `-v PARAMS="p1 p2" KEY=value,OTHER=value`: named
    /// entries are comma-joined among themselves but space-separated from
    /// the `PARAMS` segment. Returns an empty string when there is nothing
    /// to encode, in which case no flag is emitted at all.
    pub fn encode_torque(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut segments = Vec::new();
        if let Some(params) = self.params_segment() {
            segments.push(params);
        }
        if !self.named.is_empty() {
            segments.push(
                self.named
                    .iter()
                    .map(|(key, value)| format!("{key}={value}"))
                    .collect::<Vec<String>>()
                    .join(","),
            );
        }

        format!("-v {}", segments.join(" "))
    }

    /// Encode for Slurm's `--export=` flag, placed after the script name.
    ///
    /// The shape is `--export=PARAMS="p1 p2",KEY="value"`: the `PARAMS`
    /// segment and the quoted named entries are all comma-joined into one
    /// flag value. Returns an empty string when there is nothing to
    /// encode.
    pub fn encode_slurm(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut segments = Vec::new();
        if let Some(params) = self.params_segment() {
            segments.push(params);
        }
        for (key, value) in &self.named {
            segments.push(format!("{key}=\"{value}\""));
        }

        format!("--export={}", segments.join(","))
    }
}

impl<S: Into<String>> FromIterator<S> for JobArgs {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            positional: iter.into_iter().map(Into::into).collect(),
            named: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "tests/args.rs"]
mod tests;
