use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PrepareStats {
    pub input_entries: usize,
    pub blank_skipped: usize,
    pub duplicates_skipped: usize,
    pub www_added: usize,
    pub wildcards: usize,
    pub pruned: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedNames {
    pub names: Vec<String>,
    pub stats: PrepareStats,
}
