/// Settings fixed when a pattern set is created.
///
/// Builder-style: start from [`CompileOptions::default`] and chain setters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    pub(crate) merge_character_maps: bool,
    pub(crate) nesting_limit: u32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            merge_character_maps: true,
            nesting_limit: 256,
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge literal-character alternatives into shared lookup tables.
    /// Turning this off changes the graph shape, never the match results.
    pub fn merge_character_maps(mut self, on: bool) -> Self {
        self.merge_character_maps = on;
        self
    }

    /// Maximum depth of nested groups.
    pub fn nesting_limit(mut self, limit: u32) -> Self {
        self.nesting_limit = limit;
        self
    }

    pub fn get_merge_character_maps(&self) -> bool {
        self.merge_character_maps
    }

    pub fn get_nesting_limit(&self) -> u32 {
        self.nesting_limit
    }
}
