/// A single shell command bound to a key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingEntry {
    pub command: String,
    pub label: Option<String>,
    pub working_directory: Option<String>,
}

impl MappingEntry {
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_working_directory(mut self, wd: impl Into<String>) -> Self {
        self.working_directory = Some(wd.into());
        self
    }

    /// The label, if one is set and non-empty
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }

    /// The working directory, if one is set and non-empty
    #[must_use]
    pub fn working_directory(&self) -> Option<&str> {
        self.working_directory.as_deref().filter(|wd| !wd.is_empty())
    }
}
