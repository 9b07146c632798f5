/// Dataset-level defaults shown before the user makes a selection.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DexConfig {
    /// Key preselected in the single-creature view.
    pub default_selection: String,
    /// Keys preselected in the comparison view.
    pub default_comparison: Vec<String>,
}

impl DexConfig {
    pub const DEFAULT_SELECTION: &'static str = "bulbasaur";
    pub const DEFAULT_COMPARISON: [&'static str; 3] = ["bulbasaur", "charmander", "squirtle"];

    pub fn new() -> Self {
        Self {
            default_selection: Self::DEFAULT_SELECTION.to_string(),
            default_comparison: Self::DEFAULT_COMPARISON
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Every key referenced by this config.
    pub fn referenced_keys(&self) -> impl Iterator<Item = &str> {
        core::iter::once(self.default_selection.as_str())
            .chain(self.default_comparison.iter().map(String::as_str))
    }
}

impl Default for DexConfig {
    fn default() -> Self {
        Self::new()
    }
}
