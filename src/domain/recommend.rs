//! Popularity-based course recommendations.
//!
//! Candidate courses are scored by their total enrollment count. When there
//! are at least two candidates, the scores are split into two groups with a
//! one-dimensional 2-means clustering and only the group with the higher
//! mean is kept. The survivors are ranked by score.

use serde::Serialize;

use super::Course;

/// Upper bound on 2-means refinement rounds. One-dimensional 2-means
/// converges in a handful of rounds; the cap only guards against float
/// oscillation.
const MAX_ROUNDS: usize = 100;

/// A recommended course together with the score it was ranked by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// The recommended course.
    pub course: Course,
    /// Number of students enrolled in the course.
    pub enrollment_count: u64,
}

/// Ranks `candidates` (course, enrollment count) and returns at most
/// `limit` recommendations.
///
/// Candidates must already exclude courses the student is enrolled in.
#[must_use]
pub fn recommend(candidates: Vec<(Course, u64)>, limit: usize) -> Vec<Recommendation> {
    let scores: Vec<u64> = candidates.iter().map(|(_, score)| *score).collect();
    let keep = popular_cluster(&scores);

    let mut kept: Vec<Recommendation> = candidates
        .into_iter()
        .zip(keep)
        .filter_map(|((course, enrollment_count), keep)| {
            keep.then_some(Recommendation {
                course,
                enrollment_count,
            })
        })
        .collect();

    kept.sort_by(|a, b| {
        b.enrollment_count
            .cmp(&a.enrollment_count)
            .then_with(|| a.course.title.cmp(&b.course.title))
    });
    kept.truncate(limit);
    kept
}

/// Returns a membership mask marking the scores that fall in the cluster
/// with the highest mean.
///
/// With fewer than two scores every score is kept.
#[must_use]
pub fn popular_cluster(scores: &[u64]) -> Vec<bool> {
    if scores.len() < 2 {
        return vec![true; scores.len()];
    }
    let labels = two_means(scores);
    let high = labels.iter().any(|&upper| upper);
    labels.into_iter().map(|upper| upper == high).collect()
}

/// One-dimensional 2-means. Returns `true` for points assigned to the
/// upper centroid.
///
/// Centroids are seeded at the minimum and maximum score, which makes the
/// result deterministic. Points equidistant from both centroids go to the
/// lower one. If every score is equal, every point lands in the lower
/// cluster.
fn two_means(scores: &[u64]) -> Vec<bool> {
    let points: Vec<f64> = scores.iter().map(|&s| s as f64).collect();
    let min = points.iter().copied().fold(f64::INFINITY, f64::min);
    let max = points.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut low = min;
    let mut high = max;
    let mut labels: Vec<bool> = assign(&points, low, high);

    for _ in 0..MAX_ROUNDS {
        if let Some(mean) = mean_where(&points, &labels, false) {
            low = mean;
        }
        if let Some(mean) = mean_where(&points, &labels, true) {
            high = mean;
        }
        let next = assign(&points, low, high);
        if next == labels {
            break;
        }
        labels = next;
    }
    labels
}

fn assign(points: &[f64], low: f64, high: f64) -> Vec<bool> {
    points
        .iter()
        .map(|p| (p - high).abs() < (p - low).abs())
        .collect()
}

fn mean_where(points: &[f64], labels: &[bool], upper: bool) -> Option<f64> {
    let (sum, n) = points
        .iter()
        .zip(labels)
        .filter(|(_, l)| **l == upper)
        .fold((0.0, 0usize), |(sum, n), (p, _)| (sum + p, n + 1));
    (n > 0).then(|| sum / n as f64)
}
