//! Classification of a single layer name into its structural role.
//!
//! Names follow the convention `<item>[_<index>][_<keyword>...]`:
//! `owl_01` is the base image of placeholder `owl_01` of item `owl`,
//! `owl_01_sh` a shadow on that placeholder, `owl_silhouette` the item's
//! display icon, and `back_bg` an environment layer. The classifier is a pure
//! function of the name and the taxonomy; it never consults other entries, so
//! decorations addressed to a placeholder that never materializes are only
//! caught later, during assembly finalization.
use crate::parse::taxonomy::SuffixTaxonomy;

/// Role of an auxiliary image layered with a placeholder's base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationRole {
    /// Removed when the item is picked up. Cosmetic `light`/`glow` variants
    /// are folded into this role by the default taxonomy.
    Shadow,
    /// Purely cosmetic fit-in layer. Fallback role for any suffix word
    /// outside the vocabulary.
    Patch,
}

/// Structural role of one layer name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Background/environment layer, outside the item hierarchy.
    Environment,
    /// Representative icon for an item.
    Silhouette {
        item: String,
    },
    /// Base image anchoring one placeholder of an item.
    PlaceholderBase {
        item: String,
        placeholder: String,
    },
    /// Shadow or patch attached to a placeholder.
    Decoration {
        item: String,
        placeholder: String,
        role: DecorationRole,
    },
    Unparseable,
}

/// Classifies a single layer name against the taxonomy.
///
/// Deterministic: the result depends only on the inputs.
pub fn classify(name: &str, taxonomy: &SuffixTaxonomy) -> Classification {
    if name.ends_with(&taxonomy.environment_suffix) {
        return Classification::Environment;
    }

    let (base, suffix) = split_base(name, taxonomy);
    if !is_valid_base(base) {
        return Classification::Unparseable;
    }

    let (placeholder, decoration) = match split_index(suffix) {
        Some((index, rest)) => (format!("{base}{index}"), rest),
        None => (base.to_owned(), suffix),
    };

    if decoration.is_empty() {
        return Classification::PlaceholderBase {
            item: base.to_owned(),
            placeholder,
        };
    }

    let word = decoration.trim_start_matches('_');
    if matches_keyword(word, &taxonomy.silhouette_keywords) {
        return Classification::Silhouette {
            item: base.to_owned(),
        };
    }
    let role = if matches_keyword(word, &taxonomy.shadow_keywords) {
        DecorationRole::Shadow
    } else {
        DecorationRole::Patch
    };

    Classification::Decoration {
        item: base.to_owned(),
        placeholder,
        role,
    }
}

/// Splits `name` into item base and trailing suffix.
///
/// The base ends at the first underscore run whose following text starts with
/// a digit, or with a vocabulary keyword anchored by a digit, underscore or
/// end of string. Without such a run the whole name is the base.
fn split_base<'a>(name: &'a str, taxonomy: &SuffixTaxonomy) -> (&'a str, &'a str) {
    let mut search_from = 0;
    while let Some(offset) = name[search_from..].find('_') {
        let pos = search_from + offset;
        let run_end = name[pos..]
            .find(|c| c != '_')
            .map_or(name.len(), |p| pos + p);
        let rest = &name[run_end..];
        let splits = rest.starts_with(|c: char| c.is_ascii_digit())
            || taxonomy.all_keywords().any(|kw| anchored_keyword(rest, kw));
        if splits {
            return (&name[..pos], &name[pos..]);
        }
        search_from = run_end.max(pos + 1);
    }
    (name, "")
}

/// A usable item base: non-empty, only alphanumerics and underscores, and at
/// least one alphanumeric. Rejects degenerate exports like `""`, `" "`,
/// `"%6-%#"` and `"_01"`.
fn is_valid_base(base: &str) -> bool {
    !base.is_empty()
        && base.chars().all(|c| c.is_alphanumeric() || c == '_')
        && base.chars().any(char::is_alphanumeric)
}

/// Strips a placeholder index segment (`_<digits>` followed by `_` or end)
/// off the front of `suffix`, returning the segment and the remainder.
fn split_index(suffix: &str) -> Option<(&str, &str)> {
    let digits = suffix.strip_prefix('_')?;
    let len = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if len == 0 {
        return None;
    }
    let rest = &digits[len..];
    if rest.is_empty() || rest.starts_with('_') {
        Some((&suffix[..1 + len], rest))
    } else {
        None
    }
}

/// `text` starts with `keyword` anchored by a digit, underscore or end.
fn anchored_keyword(text: &str, keyword: &str) -> bool {
    text.strip_prefix(keyword).is_some_and(|rest| {
        rest.is_empty() || rest.starts_with('_') || rest.starts_with(|c: char| c.is_ascii_digit())
    })
}

fn matches_keyword(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|kw| anchored_keyword(text, kw))
}
