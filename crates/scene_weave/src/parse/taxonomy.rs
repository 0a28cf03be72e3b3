//! Suffix vocabulary recognized by the layer-name classifier.
//!
//! The vocabulary is plain data rather than compiled patterns so that
//! projects with different export conventions can extend the lists.

/// Keyword lists that drive layer-name classification.
///
/// The default vocabulary treats `light` and `glow` as shadow-family
/// keywords: cosmetic variants fold into the shadow bucket. Any suffix word
/// outside the vocabulary is a patch, not an error.
#[derive(Debug, Clone)]
pub struct SuffixTaxonomy {
    /// Trailing marker for environment/background layers.
    pub environment_suffix: String,
    /// Keywords classified as shadow-role decorations.
    pub shadow_keywords: Vec<String>,
    /// Keywords classified as patch-role decorations.
    pub patch_keywords: Vec<String>,
    /// Keywords classified as item silhouettes.
    pub silhouette_keywords: Vec<String>,
}

impl Default for SuffixTaxonomy {
    fn default() -> Self {
        Self {
            environment_suffix: "_bg".to_owned(),
            shadow_keywords: vec![
                "shadow".to_owned(),
                "sh".to_owned(),
                "light".to_owned(),
                "glow".to_owned(),
            ],
            patch_keywords: vec!["patch".to_owned()],
            silhouette_keywords: vec!["silhouette".to_owned()],
        }
    }
}

impl SuffixTaxonomy {
    /// Iterates over every keyword of every role.
    pub fn all_keywords(&self) -> impl Iterator<Item = &str> {
        self.shadow_keywords
            .iter()
            .chain(&self.patch_keywords)
            .chain(&self.silhouette_keywords)
            .map(String::as_str)
    }
}
