//! The five summary views computed over the full post set

use super::band::DurationBand;
use super::grouping::{grouped_counts, grouped_means, mean};
use super::metrics::{engagement_rate_no_saves, engagement_rate_with_saves, percent, round_to, views};
use super::normalizer::Post;
use super::table::{Cell, SummaryTable};
use std::collections::BTreeSet;

const ER_NO_SAVES: &str = "avg_engagement_rate_no_saves_percent";
const ER_WITH_SAVES: &str = "avg_engagement_rate_with_saves_percent";
const ER_NO_SAVES_SHORT: &str = "avg_er_no_saves_percent";
const ER_WITH_SAVES_SHORT: &str = "avg_er_with_saves_percent";

pub const TRENDING_GROUP: &str = "trending_sound_used=1";
pub const NON_TRENDING_GROUP: &str = "trending_sound_used=0";
pub const LIFT_GROUP: &str = "lift_percent";

/// Count and share of posts per hook style
pub fn hook_distribution(posts: &[Post]) -> SummaryTable {
    let total = posts.len();
    let mut table = SummaryTable::new(
        "hook_distribution",
        "hook_distribution",
        &["hook_style", "count", "percent"],
    );

    for (hook, count) in grouped_counts(posts, |p| p.hook_style.clone()) {
        let share = count as f64 / total as f64;
        table.push_row(vec![hook.into(), count.into(), percent(share).into()]);
    }
    table
}

/// Mean engagement per hook style
pub fn engagement_by_hook(posts: &[Post]) -> SummaryTable {
    let no_saves = grouped_means(posts, |p| p.hook_style.clone(), engagement_rate_no_saves);
    let with_saves = grouped_means(posts, |p| p.hook_style.clone(), engagement_rate_with_saves);

    let mut table = SummaryTable::new(
        "engagement_by_hook",
        "engagement_by_hook",
        &["hook_style", ER_NO_SAVES, ER_WITH_SAVES],
    )
    .with_sheet_header(&["hook_style", ER_NO_SAVES_SHORT, ER_WITH_SAVES_SHORT]);

    let hooks: BTreeSet<&String> = no_saves.keys().chain(with_saves.keys()).collect();
    for hook in hooks {
        table.push_row(vec![
            hook.clone().into(),
            percent(no_saves.get(hook).copied().unwrap_or(0.0)).into(),
            percent(with_saves.get(hook).copied().unwrap_or(0.0)).into(),
        ]);
    }
    table
}

/// Count, mean views and mean engagement for every duration band, empty bands included
pub fn duration_band_performance(posts: &[Post]) -> SummaryTable {
    let band_of = |p: &Post| DurationBand::from_seconds(p.video_duration_seconds);
    let counts = grouped_counts(posts, band_of);
    let avg_views = grouped_means(posts, band_of, views);
    let avg_no_saves = grouped_means(posts, band_of, engagement_rate_no_saves);
    let avg_with_saves = grouped_means(posts, band_of, engagement_rate_with_saves);

    let mut table = SummaryTable::new(
        "duration_band_performance",
        "duration_band_perf",
        &["duration_band", "count", "avg_views", ER_NO_SAVES, ER_WITH_SAVES],
    )
    .with_sheet_header(&[
        "duration_band",
        "count",
        "avg_views",
        ER_NO_SAVES_SHORT,
        ER_WITH_SAVES_SHORT,
    ]);

    for band in DurationBand::all() {
        table.push_row(vec![
            band.as_str().into(),
            counts.get(&band).copied().unwrap_or(0).into(),
            round_to(avg_views.get(&band).copied().unwrap_or(0.0), 0).into(),
            percent(avg_no_saves.get(&band).copied().unwrap_or(0.0)).into(),
            percent(avg_with_saves.get(&band).copied().unwrap_or(0.0)).into(),
        ]);
    }
    table
}

/// Mean engagement per niche category
pub fn category_engagement(posts: &[Post]) -> SummaryTable {
    let no_saves = grouped_means(posts, |p| p.niche_category.clone(), engagement_rate_no_saves);
    let with_saves = grouped_means(posts, |p| p.niche_category.clone(), engagement_rate_with_saves);

    // This sheet keeps the long column names.
    let mut table = SummaryTable::new(
        "category_engagement",
        "category_engagement",
        &["niche_category", ER_NO_SAVES, ER_WITH_SAVES],
    );

    let categories: BTreeSet<&String> = no_saves.keys().chain(with_saves.keys()).collect();
    for category in categories {
        table.push_row(vec![
            category.clone().into(),
            percent(no_saves.get(category).copied().unwrap_or(0.0)).into(),
            percent(with_saves.get(category).copied().unwrap_or(0.0)).into(),
        ]);
    }
    table
}

/// Relative difference in mean views, trending sound vs not
///
/// # Returns
/// `((trending / non_trending) - 1) * 100`, or 0.0 when the non-trending mean is zero
pub fn view_lift_percent(trending_mean: f64, non_trending_mean: f64) -> f64 {
    if non_trending_mean == 0.0 {
        return 0.0;
    }
    (trending_mean / non_trending_mean - 1.0) * 100.0
}

/// Post counts and mean views split by the trending-sound flag, plus the lift row
pub fn trending_sound_lift(posts: &[Post]) -> SummaryTable {
    let trending: Vec<f64> = posts
        .iter()
        .filter(|p| p.uses_trending_sound())
        .map(views)
        .collect();
    let non_trending: Vec<f64> = posts
        .iter()
        .filter(|p| p.trending_sound_used == 0)
        .map(views)
        .collect();

    let avg_trending = mean(trending.iter().copied());
    let avg_non_trending = mean(non_trending.iter().copied());
    let lift = view_lift_percent(avg_trending, avg_non_trending);

    let mut table = SummaryTable::new(
        "trending_sound_lift",
        "trending_sound_lift",
        &["group", "count", "avg_views"],
    );
    table.push_row(vec![
        TRENDING_GROUP.into(),
        trending.len().into(),
        round_to(avg_trending, 0).into(),
    ]);
    table.push_row(vec![
        NON_TRENDING_GROUP.into(),
        non_trending.len().into(),
        round_to(avg_non_trending, 0).into(),
    ]);
    table.push_row(vec![LIFT_GROUP.into(), Cell::Empty, round_to(lift, 2).into()]);
    table
}

/// All five views in export order
pub fn build_all_views(posts: &[Post]) -> Vec<SummaryTable> {
    vec![
        hook_distribution(posts),
        engagement_by_hook(posts),
        duration_band_performance(posts),
        category_engagement(posts),
        trending_sound_lift(posts),
    ]
}
