//! Distractor drawing
//!
//! Candidates come from the catalog in random order. A candidate is kept
//! only if its label differs from the answer and from every label kept so
//! far. When a batch runs dry the next batch is twice as large, until the
//! pool is exhausted or the fetch limit is reached.

use super::types::GenerateQuizError;
use crate::ports::catalog_store::CatalogError;
use quiz_domain::DISTRACTOR_COUNT;
use std::future::Future;
use tracing::debug;

pub(super) async fn draw<T, F, Fut, L>(
    answer: &str,
    fetch_limit: usize,
    mut fetch: F,
    mut label: L,
) -> Result<Vec<String>, GenerateQuizError>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>, CatalogError>>,
    L: FnMut(&T) -> String,
{
    let ceiling = fetch_limit.max(DISTRACTOR_COUNT);
    let mut limit = DISTRACTOR_COUNT;

    loop {
        let candidates = fetch(limit).await?;
        let exhausted = candidates.len() < limit;

        let mut picked: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT);
        for candidate in &candidates {
            let text = label(candidate);
            if text != answer && !picked.contains(&text) {
                picked.push(text);
                if picked.len() == DISTRACTOR_COUNT {
                    return Ok(picked);
                }
            }
        }

        if exhausted || limit >= ceiling {
            return Err(GenerateQuizError::InsufficientDistractors {
                answer: answer.to_string(),
                found: picked.len(),
                needed: DISTRACTOR_COUNT,
            });
        }

        debug!(
            "Only {} distinct distractors for '{}' in {} candidates, widening",
            picked.len(),
            answer,
            candidates.len()
        );
        limit = (limit * 2).min(ceiling);
    }
}
