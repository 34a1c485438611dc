//! Per-post engagement metrics and rounding helpers

use super::normalizer::Post;

/// Likes + comments + shares, summed as floats so huge counts cannot overflow
fn interactions(post: &Post) -> f64 {
    post.likes as f64 + post.comments as f64 + post.shares as f64
}

/// Engagement rate counting likes, comments, shares and saves
///
/// # Returns
/// Interactions divided by views, or 0.0 when the post has no views
pub fn engagement_rate_with_saves(post: &Post) -> f64 {
    if post.views <= 0 {
        return 0.0;
    }
    (interactions(post) + post.saves_or_favorites as f64) / post.views as f64
}

/// Engagement rate counting likes, comments and shares only
pub fn engagement_rate_no_saves(post: &Post) -> f64 {
    if post.views <= 0 {
        return 0.0;
    }
    interactions(post) / post.views as f64
}

pub fn views(post: &Post) -> f64 {
    post.views as f64
}

/// Round to a fixed number of decimals using the exact decimal expansion of `value`.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", decimals, value)
        .parse()
        .unwrap_or(value)
}

/// Fraction to percentage, two decimals
pub fn percent(fraction: f64) -> f64 {
    round_to(fraction * 100.0, 2)
}
