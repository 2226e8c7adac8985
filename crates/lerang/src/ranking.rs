//! Weighted multi-field relevance scoring
//!
//! One document is scored against one tokenized query: every term is checked
//! against every field, the first matching rule per field wins for that term
//! (exact beats substring beats fuzzy), contributions add up across terms,
//! and a bonus rewards documents matched on more than one distinct field.

use crate::config::SearchConfig;
use crate::fuzzy::similarity;
use lacarte::Document;

/// Score one document against the tokenized query.
///
/// `ingredient_names` are the extracted bare names for this document. The
/// result is clamped to `[0, max_score]`; an empty term list scores 0.
pub fn score_document(
    doc: &Document,
    ingredient_names: &[String],
    terms: &[String],
    config: &SearchConfig,
) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }

    let w = &config.weights;
    let title = doc.title.to_lowercase();
    let category = doc.category_text().to_lowercase();
    let excerpt = doc.excerpt_text().to_lowercase();
    let tags: Vec<String> = doc.tags.iter().map(|t| t.to_lowercase()).collect();
    let ingredients: Vec<String> = ingredient_names.iter().map(|n| n.to_lowercase()).collect();

    let mut score = 0.0;
    let mut title_hit = false;
    let mut category_hit = false;
    let mut excerpt_hit = false;
    let mut tag_hits = vec![false; tags.len()];
    let mut ingredient_hits = vec![false; ingredients.len()];

    for term in terms {
        if title == *term {
            score += w.title_exact;
            title_hit = true;
        } else if title.contains(term.as_str()) {
            score += w.title_substring;
            title_hit = true;
        } else {
            let sim = similarity(&title, term);
            if sim > config.title_fuzzy_threshold {
                score += w.title_fuzzy_scale * sim;
                title_hit = true;
            }
        }

        if !category.is_empty() && category.contains(term.as_str()) {
            score += w.category_substring;
            category_hit = true;
        }

        for (i, tag) in tags.iter().enumerate() {
            if tag == term {
                score += w.tag_exact;
                tag_hits[i] = true;
            } else if tag.contains(term.as_str()) {
                score += w.tag_substring;
                tag_hits[i] = true;
            }
        }

        for (i, name) in ingredients.iter().enumerate() {
            if name.contains(term.as_str()) {
                score += w.ingredient_substring;
                ingredient_hits[i] = true;
            } else {
                let sim = similarity(name, term);
                if sim > config.ingredient_fuzzy_threshold {
                    score += w.ingredient_fuzzy_scale * sim;
                    ingredient_hits[i] = true;
                }
            }
        }

        if !excerpt.is_empty() && excerpt.contains(term.as_str()) {
            score += w.excerpt_substring;
            excerpt_hit = true;
        }
    }

    // Each tag and each ingredient counts as its own field.
    let matched_fields = usize::from(title_hit)
        + usize::from(category_hit)
        + usize::from(excerpt_hit)
        + tag_hits.iter().filter(|hit| **hit).count()
        + ingredient_hits.iter().filter(|hit| **hit).count();

    if matched_fields > 1 {
        score += w.multi_field_bonus * matched_fields as f64;
    }

    score.clamp(0.0, config.max_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> Document {
        Document {
            title: title.to_string(),
            ..Document::default()
        }
    }

    fn terms(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_exact_title_beats_substring() {
        let config = SearchConfig::default();
        let exact = score_document(&titled("Pasta"), &[], &terms(&["pasta"]), &config);
        let substring = score_document(&titled("Pasta Carbonara"), &[], &terms(&["pasta"]), &config);

        assert_eq!(exact, 40.0);
        assert_eq!(substring, 30.0);
    }

    #[test]
    fn test_fuzzy_title_scales_with_similarity() {
        let config = SearchConfig::default();
        // "pasa" vs "pasta" similarity is 0.8, above the 0.7 threshold
        let score = score_document(&titled("Pasa"), &[], &terms(&["pasta"]), &config);
        assert!((score - 20.0 * 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_fuzzy_title_below_threshold_scores_zero() {
        let config = SearchConfig::default();
        let score = score_document(&titled("Bread"), &[], &terms(&["pasta"]), &config);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_category_and_excerpt_substring_weights() {
        let config = SearchConfig::default();
        let doc = Document {
            title: "Annat".to_string(),
            category: Some("Vegetarisk middag".to_string()),
            excerpt: Some("Snabb middag för hela veckan".to_string()),
            ..Document::default()
        };

        // Two distinct fields matched: 15 + 5 + bonus 2 * 2
        let score = score_document(&doc, &[], &terms(&["middag"]), &config);
        assert_eq!(score, 15.0 + 5.0 + 4.0);
    }

    #[test]
    fn test_tag_exact_beats_tag_substring() {
        let config = SearchConfig::default();
        let doc = Document {
            title: "Annat".to_string(),
            tags: vec!["kyckling".to_string(), "kycklinggryta".to_string()],
            ..Document::default()
        };

        // One exact tag (12), one substring tag (8), two distinct fields -> bonus 4
        let score = score_document(&doc, &[], &terms(&["kyckling"]), &config);
        assert_eq!(score, 12.0 + 8.0 + 4.0);
    }

    #[test]
    fn test_ingredient_substring_and_fuzzy() {
        let config = SearchConfig::default();
        let doc = titled("Annat");

        let substring = score_document(
            &doc,
            &["vetemjöl".to_string()],
            &terms(&["mjöl"]),
            &config,
        );
        assert_eq!(substring, 10.0);

        // "tomat" vs "tomaat": similarity 1 - 1/6, above the 0.8 threshold
        let fuzzy = score_document(
            &doc,
            &["tomaat".to_string()],
            &terms(&["tomat"]),
            &config,
        );
        assert!((fuzzy - 8.0 * (1.0 - 1.0 / 6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_multi_field_bonus_requires_more_than_one_field() {
        let config = SearchConfig::default();

        // Title only: no bonus
        let single = score_document(&titled("Pasta"), &[], &terms(&["pasta"]), &config);
        assert_eq!(single, 40.0);

        // Title + tag: 40 + 12 + 2 * 2
        let doc = Document {
            title: "Pasta".to_string(),
            tags: vec!["pasta".to_string()],
            ..Document::default()
        };
        let double = score_document(&doc, &[], &terms(&["pasta"]), &config);
        assert_eq!(double, 40.0 + 12.0 + 4.0);
    }

    #[test]
    fn test_repeated_terms_amplify_score() {
        let config = SearchConfig::default();
        let once = score_document(&titled("Pasta Carbonara"), &[], &terms(&["pasta"]), &config);
        let twice = score_document(
            &titled("Pasta Carbonara"),
            &[],
            &terms(&["pasta", "pasta"]),
            &config,
        );
        assert_eq!(twice, once * 2.0);
    }

    #[test]
    fn test_score_is_clamped_to_ceiling() {
        let config = SearchConfig::default();
        let doc = Document {
            title: "Pasta".to_string(),
            category: Some("pasta".to_string()),
            excerpt: Some("pasta pasta".to_string()),
            tags: vec!["pasta".to_string(), "pastarätt".to_string()],
            ..Document::default()
        };
        let score = score_document(
            &doc,
            &["pastaskruvar".to_string()],
            &terms(&["pasta", "pasta", "pasta"]),
            &config,
        );
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_empty_terms_score_zero() {
        let config = SearchConfig::default();
        assert_eq!(score_document(&titled("Pasta"), &[], &[], &config), 0.0);
    }

    #[test]
    fn test_missing_optional_fields_cannot_contribute() {
        let config = SearchConfig::default();
        let score = score_document(&titled("Annat"), &[], &terms(&["middag"]), &config);
        assert_eq!(score, 0.0);
    }
}
