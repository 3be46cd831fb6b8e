use indexmap::IndexMap;

/// Totals below this are [`Severity::Low`].
pub const MODERATE_THRESHOLD: f64 = 3.0;
/// Totals at or above this are [`Severity::High`].
pub const HIGH_THRESHOLD: f64 = 7.0;
/// Thinnest bar, as a fraction of the full width, so small categories stay visible.
pub const BAR_FLOOR_FRACTION: f64 = 0.05;
/// Number of categories drawn as bars; the rest are listed compactly.
pub const DEFAULT_TOP_N: usize = 4;

/// Coarse classification of the predicted daily complaint volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low Activity",
            Severity::Moderate => "Moderate Activity",
            Severity::High => "High Activity",
        }
    }
}

/// Buckets a total: `[0, 3)` Low, `[3, 7)` Moderate, `[7, ∞)` High.
///
/// Negative totals are not produced by the predictor and are not guarded.
pub fn classify_severity(total: f64) -> Severity {
    if total < MODERATE_THRESHOLD {
        Severity::Low
    } else if total < HIGH_THRESHOLD {
        Severity::Moderate
    } else {
        Severity::High
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCategory {
    pub name: String,
    pub count: f64,
}

/// Categories by count, largest first. Equal counts keep the map's order.
pub fn rank_categories(categories: &IndexMap<String, f64>) -> Vec<RankedCategory> {
    let mut ranked: Vec<RankedCategory> = categories
        .iter()
        .map(|(name, count)| RankedCategory {
            name: name.clone(),
            count: *count,
        })
        .collect();
    // sort_by is stable, so ties stay in input order
    ranked.sort_by(|a, b| b.count.total_cmp(&a.count));
    ranked
}

/// Splits a ranking into the first `n` entries and the rest.
pub fn split_top_n(ranked: &[RankedCategory], n: usize) -> (&[RankedCategory], &[RankedCategory]) {
    ranked.split_at(n.min(ranked.len()))
}

/// Width of a category bar relative to the predicted total, in `[0, 1]`.
///
/// Never thinner than [`BAR_FLOOR_FRACTION`] unless the total is zero, in
/// which case every bar is empty.
pub fn bar_width_fraction(count: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    (count / total).max(BAR_FLOOR_FRACTION).min(1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownBar {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub name: String,
    pub count: f64,
    pub width: f64,
}

impl BreakdownBar {
    pub fn width_percent(&self) -> f64 {
        self.width * 100.0
    }
}

/// Everything the result view needs for one prediction.
///
/// The total comes from the predictor and is trusted as-is; the category
/// counts only decide the ranking and bar widths.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub total: f64,
    pub severity: Severity,
    pub bars: Vec<BreakdownBar>,
    pub others: Vec<RankedCategory>,
}

impl Breakdown {
    pub fn new(categories: &IndexMap<String, f64>, total: f64, top_n: usize) -> Self {
        let ranked = rank_categories(categories);
        let (head, tail) = split_top_n(&ranked, top_n);

        let bars = head
            .iter()
            .enumerate()
            .map(|(index, category)| BreakdownBar {
                rank: index + 1,
                name: category.name.clone(),
                count: category.count,
                width: bar_width_fraction(category.count, total),
            })
            .collect();

        Self {
            total,
            severity: classify_severity(total),
            bars,
            others: tail.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn categories(entries: &[(&str, f64)]) -> IndexMap<String, f64> {
        entries
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect()
    }

    fn names(ranked: &[RankedCategory]) -> Vec<&str> {
        ranked.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(classify_severity(0.0), Severity::Low);
        assert_eq!(classify_severity(2.999), Severity::Low);
        assert_eq!(classify_severity(3.0), Severity::Moderate);
        assert_eq!(classify_severity(6.999), Severity::Moderate);
        assert_eq!(classify_severity(7.0), Severity::High);
        assert_eq!(classify_severity(15.0), Severity::High);
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Low.label(), "Low Activity");
        assert_eq!(Severity::Moderate.label(), "Moderate Activity");
        assert_eq!(Severity::High.label(), "High Activity");
    }

    #[test]
    fn test_rank_is_descending_and_stable_for_ties() {
        let input = categories(&[("A", 5.0), ("B", 5.0), ("C", 3.0)]);
        assert_eq!(names(&rank_categories(&input)), vec!["A", "B", "C"]);

        let input = categories(&[("C", 3.0), ("B", 5.0), ("A", 5.0)]);
        assert_eq!(names(&rank_categories(&input)), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_rank_does_not_touch_input() {
        let input = categories(&[("ถนน", 1.0), ("น้ำท่วม", 4.0)]);
        let copy = input.clone();
        let _ = rank_categories(&input);
        assert_eq!(input, copy);
    }

    #[test]
    fn test_split_top_n() {
        let ranked = rank_categories(&categories(&[
            ("a", 6.0),
            ("b", 5.0),
            ("c", 4.0),
            ("d", 3.0),
            ("e", 2.0),
            ("f", 1.0),
        ]));
        let (head, tail) = split_top_n(&ranked, 4);
        assert_eq!(names(head), vec!["a", "b", "c", "d"]);
        assert_eq!(names(tail), vec!["e", "f"]);

        let (head, tail) = split_top_n(&ranked[..2], 4);
        assert_eq!(head.len(), 2);
        assert!(tail.is_empty());

        let (head, tail) = split_top_n(&ranked, 0);
        assert!(head.is_empty());
        assert_eq!(tail.len(), 6);
    }

    #[test]
    fn test_bar_width_fraction() {
        assert_eq!(bar_width_fraction(5.0, 10.0), 0.5);
        assert_eq!(bar_width_fraction(0.1, 10.0), BAR_FLOOR_FRACTION);
        assert_eq!(bar_width_fraction(0.0, 10.0), BAR_FLOOR_FRACTION);
        // Category counts can exceed a total that was rounded independently.
        assert_eq!(bar_width_fraction(12.0, 10.0), 1.0);
        assert_eq!(bar_width_fraction(3.0, 0.0), 0.0);
        assert_eq!(bar_width_fraction(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_breakdown_trusts_supplied_total() {
        let input = categories(&[("ถนน", 10.0), ("น้ำท่วม", 4.0), ("PM2.5", 1.0)]);
        // total deliberately disagrees with the sum of the categories
        let breakdown = Breakdown::new(&input, 20.0, 2);

        assert_eq!(breakdown.severity, Severity::High);
        assert_eq!(breakdown.bars.len(), 2);
        assert_eq!(breakdown.bars[0].rank, 1);
        assert_eq!(breakdown.bars[0].name, "ถนน");
        assert_eq!(breakdown.bars[0].width, 0.5);
        assert_eq!(breakdown.bars[1].width, 0.2);
        assert_eq!(breakdown.bars[0].width_percent(), 50.0);
        assert_eq!(names(&breakdown.others), vec!["PM2.5"]);
    }

    #[test]
    fn test_breakdown_with_zero_total() {
        let input = categories(&[("ถนน", 0.0), ("คลอง", 0.0)]);
        let breakdown = Breakdown::new(&input, 0.0, DEFAULT_TOP_N);
        assert_eq!(breakdown.severity, Severity::Low);
        assert!(breakdown.bars.iter().all(|bar| bar.width == 0.0));
        assert!(breakdown.others.is_empty());
    }

    fn arb_categories() -> impl Strategy<Value = IndexMap<String, f64>> {
        prop::collection::vec(("[a-z]{1,4}", 0u32..20), 0..12).prop_map(|entries| {
            entries
                .into_iter()
                .map(|(name, count)| (name, f64::from(count)))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn rank_is_idempotent(input in arb_categories()) {
            let ranked = rank_categories(&input);
            let again: IndexMap<String, f64> = ranked
                .iter()
                .map(|c| (c.name.clone(), c.count))
                .collect();
            prop_assert_eq!(rank_categories(&again), ranked.clone());
            prop_assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
        }

        #[test]
        fn bar_width_is_bounded(count in 0.0f64..1e6, total in 0.0f64..1e6) {
            let width = bar_width_fraction(count, total);
            prop_assert!(width <= 1.0);
            prop_assert!(width >= 0.0);
            prop_assert_eq!(bar_width_fraction(count, 0.0), 0.0);
        }
    }
}
