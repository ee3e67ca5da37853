//! Prefix matching by path-component specificity.
//!
//! This module provides the pure functions that pick, for a given path, the
//! single "winning" prefix out of a set of overlapping candidates, such as
//! project root folders or mapping-table keys.

/// Counts the path components of a POSIX-style path string.
///
/// The count is computed by repeatedly stripping the last `/`-delimited
/// segment until nothing is left, counting each strip. Reaching the root
/// `"/"` counts as two components and terminates immediately, which makes
/// `"/"` itself count as 2 and keeps it distinct from the empty string
/// (count 0), the universal fallback prefix.
///
/// # Examples
///
/// ```
/// use pathport::prefix::count_path_components;
///
/// assert_eq!(count_path_components(""), 0);
/// assert_eq!(count_path_components("/"), 2);
/// assert_eq!(count_path_components("a/b/"), 3);
/// assert_eq!(count_path_components("/a/b/"), 4);
/// ```
pub fn count_path_components(path: &str) -> usize {
    let mut remaining = path;
    let mut count = 0;
    while !remaining.is_empty() {
        remaining = parent_of(remaining);
        count += 1;
        if remaining == "/" {
            count += 1;
            break;
        }
    }
    count
}

/// Returns the head of a POSIX split: everything before the last `/`, with
/// trailing slashes trimmed unless the head is the root itself.
fn parent_of(path: &str) -> &str {
    match path.rfind('/') {
        None => "",
        Some(idx) => {
            let head = &path[..idx + 1];
            let trimmed = head.trim_end_matches('/');
            // "/" (or a run of slashes) has no parent above the root
            if trimmed.is_empty() { head } else { trimmed }
        }
    }
}

/// Selects the most specific candidate prefix matching `path`.
///
/// Each non-empty candidate is normalized to end with `/` before the
/// starts-with test; the empty string is kept as-is and matches any path
/// with the lowest possible specificity. The returned value is the
/// *normalized* winning candidate, so callers can strip exactly its length
/// from `path`.
///
/// # Arguments
///
/// * `path` - The path to match candidates against
/// * `candidates` - Candidate prefixes, taken in iteration order
///
/// # Returns
///
/// `None` when no candidate matches. When several match, the one with the
/// greatest path-component count wins; on equal counts the first candidate
/// encountered in iteration order is kept.
///
/// # Examples
///
/// ```
/// use pathport::prefix::select_best_prefix;
///
/// let roots = ["", "/a/", "/a/b/"];
/// assert_eq!(select_best_prefix("/a/b/c", roots), Some("/a/b/".to_string()));
/// assert_eq!(select_best_prefix("/elsewhere", ["/a/"]), None);
/// ```
pub fn select_best_prefix<I, S>(path: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut matched: Vec<String> = Vec::new();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if candidate.is_empty() {
            matched.push(String::new());
            continue;
        }
        let normalized = if candidate.ends_with('/') {
            candidate.to_string()
        } else {
            format!("{candidate}/")
        };
        if path.starts_with(&normalized) {
            matched.push(normalized);
        }
    }

    if matched.len() <= 1 {
        return matched.into_iter().next();
    }

    // several matches: first occurrence of the most specific one wins
    let mut best: Option<(String, usize)> = None;
    for candidate in matched {
        let depth = count_path_components(&candidate);
        let replace = match &best {
            None => true,
            Some((_, best_depth)) => depth > *best_depth,
        };
        if replace {
            best = Some((candidate, depth));
        }
    }
    best.map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests;
