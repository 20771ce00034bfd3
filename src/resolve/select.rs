//! Selection over a candidate list the caller already holds

use crate::format::{default_label, labels, Candidate};
use crate::prompt::{PromptError, Prompter};

/// Exact key match
pub(crate) fn find_by_key<'c, T: Candidate>(candidates: &'c [T], key: &str) -> Option<&'c T> {
    candidates.iter().find(|c| c.key() == key)
}

/// Prompt for one candidate
///
/// The cursor starts on the candidate keyed `default_key` when it is present.
pub fn select_from_list<'c, T, P>(
    prompter: &P,
    message: &str,
    candidates: &'c [T],
    default_key: Option<&str>,
) -> Result<&'c T, PromptError>
where
    T: Candidate,
    P: Prompter + ?Sized,
{
    let options = labels(candidates);
    let default_option = default_key.and_then(|key| default_label(candidates, key));

    let index = prompter.select(message, &options, default_option.as_deref())?;
    candidates.get(index).ok_or_else(|| out_of_range(index, candidates.len()))
}

/// Prompt for any number of candidates
///
/// Candidates keyed by one of `preselected_keys` start checked. The result
/// follows list order.
pub fn multi_select_from_list<'c, T, P, K>(
    prompter: &P,
    message: &str,
    candidates: &'c [T],
    preselected_keys: &[K],
) -> Result<Vec<&'c T>, PromptError>
where
    T: Candidate,
    P: Prompter + ?Sized,
    K: AsRef<str>,
{
    let options = labels(candidates);
    let defaults: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| preselected_keys.iter().any(|k| k.as_ref() == c.key()))
        .map(|(i, _)| i)
        .collect();

    prompter
        .multi_select(message, &options, &defaults)?
        .into_iter()
        .map(|index| {
            candidates
                .get(index)
                .ok_or_else(|| out_of_range(index, candidates.len()))
        })
        .collect()
}

fn out_of_range(index: usize, len: usize) -> PromptError {
    PromptError::Failed(format!("selected option {} of {} is out of range", index, len))
}
