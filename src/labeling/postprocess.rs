use crate::{
    error::ClassificationError,
    models::{Label, LabelResult},
};

/// Turn raw model scores into confidences in [0, 1].
///
/// Scores already inside [0, 1] are treated as probabilities and kept; anything
/// else is treated as logits and softmaxed.
pub fn to_probabilities(scores: &[f32]) -> Vec<f32> {
    if scores.iter().all(|s| (0.0..=1.0).contains(s)) {
        return scores.to_vec();
    }

    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    if sum == 0.0 || !sum.is_finite() {
        return vec![0.0; scores.len()];
    }
    exps.into_iter().map(|e| e / sum).collect()
}

/// Keep labels at or above `threshold`, highest confidence first, at most `max_results`
pub fn select_labels(
    probabilities: &[f32],
    labels: &[String],
    threshold: f32,
    max_results: usize,
) -> Result<LabelResult, ClassificationError> {
    if probabilities.len() != labels.len() {
        return Err(ClassificationError::OutputMismatch {
            outputs: probabilities.len(),
            labels: labels.len(),
        });
    }

    let mut result: LabelResult = probabilities
        .iter()
        .zip(labels)
        .enumerate()
        .filter(|(_, (p, _))| **p >= threshold)
        .map(|(index, (p, text))| Label::new(text.clone(), *p, index))
        .collect();

    result.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    result.truncate(max_results);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn probabilities_pass_through() {
        let probs = to_probabilities(&[0.1, 0.7, 0.2]);
        assert_eq!(probs, vec![0.1, 0.7, 0.2]);
    }

    #[test]
    fn logits_are_softmaxed() {
        let probs = to_probabilities(&[2.0, 1.0, -3.0]);
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!(probs[0] > probs[1] && probs[1] > probs[2]);
    }

    #[test]
    fn select_filters_sorts_and_truncates() {
        let labels = names(&["Table", "Cat", "Dog", "Plant"]);
        let result = select_labels(&[0.6, 0.9, 0.1, 0.55], &labels, 0.5, 2).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "Cat");
        assert_eq!(result[0].index, 1);
        assert_eq!(result[1].text, "Table");
    }

    #[test]
    fn threshold_is_inclusive() {
        let labels = names(&["Cat"]);
        let result = select_labels(&[0.5], &labels, 0.5, 10).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn nothing_above_threshold_gives_empty_result() {
        let labels = names(&["Cat", "Dog"]);
        let result = select_labels(&[0.3, 0.2], &labels, 0.5, 10).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn mismatched_output_is_an_error() {
        let labels = names(&["Cat"]);
        let err = select_labels(&[0.3, 0.2], &labels, 0.5, 10).unwrap_err();
        assert_eq!(
            err,
            ClassificationError::OutputMismatch {
                outputs: 2,
                labels: 1
            }
        );
    }
}
