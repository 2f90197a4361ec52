use std::collections::HashSet;

use tracing::debug;

use crate::profile::{Profile, ProfileMatch};
use crate::profiles::PROFILES;

/// Renders names as `['a', 'b']`, double-quoting a name that holds a single quote.
fn quoted_list(names: &[&String]) -> String {
    let items: Vec<String> = names
        .iter()
        .map(|n| {
            if n.contains('\'') && !n.contains('"') {
                format!("\"{n}\"")
            } else {
                format!("'{}'", n.replace('\\', "\\\\").replace('\'', "\\'"))
            }
        })
        .collect();
    format!("[{}]", items.join(", "))
}

/// Scores `profile` against a header.
///
/// Each signature scores the share of its names present in `columns`. The
/// best signature wins; on an equal share the longer signature is preferred
/// as the more specific one.
pub fn match_profile(profile: &Profile, columns: &[String]) -> ProfileMatch {
    let colset: HashSet<String> = columns.iter().map(|c| (profile.normalize)(c)).collect();

    let mut best = 0.0f64;
    let mut best_sig_len = 0usize;
    let mut best_reasons = Vec::new();

    for sig in profile.signatures {
        let names: Vec<String> = sig.iter().map(|s| (profile.normalize)(s)).collect();
        let hits: Vec<&String> = names.iter().filter(|n| colset.contains(*n)).collect();
        let confidence = hits.len() as f64 / names.len().max(1) as f64;

        if confidence > best || (confidence == best && names.len() > best_sig_len) {
            best = confidence;
            best_sig_len = names.len();
            best_reasons = vec![format!(
                "Matched {}/{} signature headers: {}",
                hits.len(),
                names.len(),
                quoted_list(&hits)
            )];
        }
    }

    ProfileMatch {
        name: profile.name.to_string(),
        confidence: best,
        reasons: best_reasons,
    }
}

/// Best match across `registry`.
///
/// Profiles are ranked by confidence only. Equal confidences keep registry
/// order, so the earlier profile wins regardless of signature length.
pub fn detect_in(registry: &[Profile], columns: &[String]) -> ProfileMatch {
    let mut matches: Vec<ProfileMatch> = registry
        .iter()
        .map(|p| match_profile(p, columns))
        .collect();

    for m in &matches {
        debug!(profile = %m.name, confidence = m.confidence, "profile scored");
    }

    // Stable: ties keep registration order.
    matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    matches
        .into_iter()
        .next()
        .unwrap_or_else(|| ProfileMatch::unknown("No profiles registered."))
}

/// Best match across the built-in profiles.
pub fn detect(columns: &[String]) -> ProfileMatch {
    detect_in(PROFILES, columns)
}
