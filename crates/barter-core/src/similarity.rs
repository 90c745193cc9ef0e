//! ============================================================================
//! Similarity Scorer - Rank catalog items against a target
//! ============================================================================
//! Scores are additive integer bonuses:
//! - same category: +50
//! - each target token (over 2 chars) overlapping a candidate token: +10
//! - same zipcode: +20
//!
//! The zipcode bonus is a same-place proxy, not a geographic distance.
//! Scoring sits behind `SimilarityScorer` so the lexical heuristic can be
//! swapped for another strategy without touching ranking.
//! ============================================================================

use tracing::debug;

use crate::types::{Item, ScoredItem, TargetItem};

/// Strategy for scoring one catalog item against a target.
///
/// A score of 0 means "unrelated"; those items are dropped from rankings.
pub trait SimilarityScorer: Send + Sync + std::fmt::Debug {
    fn score(&self, target: &TargetItem, candidate: &Item) -> u32;

    /// Human-readable name for this scorer
    fn name(&self) -> &str;
}

/// Bonus weights for `LexicalScorer`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    pub category_bonus: u32,
    pub token_bonus: u32,
    pub zipcode_bonus: u32,
    /// Target tokens shorter than this many chars earn nothing
    pub min_token_chars: usize,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            category_bonus: 50,
            token_bonus: 10,
            zipcode_bonus: 20,
            min_token_chars: 3,
        }
    }
}

/// Category, bidirectional substring token overlap, and zipcode equality.
#[derive(Debug, Clone, Default)]
pub struct LexicalScorer {
    weights: ScoreWeights,
}

impl LexicalScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    fn score_tokens(&self, target_tokens: &[String], candidate: &Item) -> u32 {
        let candidate_tokens = tokenize(&item_text(&candidate.name, &candidate.description));

        let overlapping = target_tokens
            .iter()
            .filter(|word| word.chars().count() >= self.weights.min_token_chars)
            .filter(|word| {
                candidate_tokens
                    .iter()
                    .any(|other| other.contains(word.as_str()) || word.contains(other.as_str()))
            })
            .count() as u32;

        overlapping * self.weights.token_bonus
    }
}

impl SimilarityScorer for LexicalScorer {
    fn score(&self, target: &TargetItem, candidate: &Item) -> u32 {
        let target_tokens = tokenize(&item_text(&target.name, &target.description));
        let mut score = 0;

        if target.category == Some(candidate.category) {
            score += self.weights.category_bonus;
        }

        score += self.score_tokens(&target_tokens, candidate);

        if target.zipcode.as_deref() == Some(candidate.zipcode.as_str()) {
            score += self.weights.zipcode_bonus;
        }

        score
    }

    fn name(&self) -> &str {
        "lexical"
    }
}

/// Lower-case the text and split it on whitespace. No stemming, and
/// punctuation stays attached to its word.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn item_text(name: &str, description: &str) -> String {
    format!("{} {}", name, description)
}

/// Rank `catalog` against `target` with the default lexical scorer.
///
/// Returns an empty list when the target has no name or no description;
/// callers should read that as "cannot compute", not "no matches".
pub fn find_similar_items(target: &TargetItem, catalog: &[Item]) -> Vec<ScoredItem> {
    rank_similar(&LexicalScorer::new(), target, catalog)
}

/// Rank `catalog` against `target` with any scorer.
///
/// Excludes the target itself by id, drops zero scores, and sorts by score
/// descending. Ties keep catalog order. The catalog is not modified.
pub fn rank_similar(
    scorer: &dyn SimilarityScorer,
    target: &TargetItem,
    catalog: &[Item],
) -> Vec<ScoredItem> {
    if target.name.is_empty() || target.description.is_empty() {
        debug!("Similarity search skipped: target has no name or description");
        return Vec::new();
    }

    let mut ranked: Vec<ScoredItem> = catalog
        .iter()
        .filter(|item| target.id != Some(item.id))
        .filter_map(|item| {
            let score = scorer.score(target, item);
            (score > 0).then(|| ScoredItem {
                item: item.clone(),
                similarity_score: score,
            })
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.similarity_score.cmp(&a.similarity_score));

    debug!(
        "{} scorer matched {} of {} items",
        scorer.name(),
        ranked.len(),
        catalog.len()
    );
    ranked
}
