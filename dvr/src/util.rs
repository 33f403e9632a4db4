use crate::framework::Metric;
use crate::router::INF;

/// Adds two metrics, saturating to INF.
///
/// # Arguments
///
/// * `cost_a`: First metric
/// * `cost_b`: Second metric
/// * `max_metric`: ceiling, any sum at or above it is INF
///
/// returns: Metric
///
/// # Examples
///
/// ```
/// use dvr::router::INF;
/// assert_eq!(dvr::util::sum_inf(2, 3, INF), 5);
/// assert_eq!(dvr::util::sum_inf(INF - 1, 3, INF), INF);
/// assert_eq!(dvr::util::sum_inf(1, INF, INF), INF);
///
/// assert_eq!(dvr::util::sum_inf(15, 1, 16), INF);
/// assert_eq!(dvr::util::sum_inf(14, 1, 16), 15);
/// ```
pub fn sum_inf(cost_a: Metric, cost_b: Metric, max_metric: Metric) -> Metric {
    if cost_a == INF || cost_b == INF {
        return INF;
    }
    match cost_a.checked_add(cost_b) {
        Some(sum) if sum < max_metric => sum,
        _ => INF,
    }
}

/// Round cap used when none is configured: twice the node count,
/// at least 5 for anything larger than a single node.
///
/// ```
/// assert_eq!(dvr::util::default_round_limit(0), 1);
/// assert_eq!(dvr::util::default_round_limit(1), 2);
/// assert_eq!(dvr::util::default_round_limit(2), 5);
/// assert_eq!(dvr::util::default_round_limit(4), 8);
/// ```
pub fn default_round_limit(node_count: usize) -> usize {
    let limit = node_count.saturating_mul(2);
    if node_count == 0 {
        1
    } else if limit < 5 && node_count > 1 {
        5
    } else {
        limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_never_wraps() {
        assert_eq!(sum_inf(INF - 1, INF - 1, INF), INF);
        assert_eq!(sum_inf(INF - 2, 1, INF), INF - 1);
        assert_eq!(sum_inf(0, 0, INF), 0);
    }

    #[test]
    fn ceiling_is_exclusive() {
        assert_eq!(sum_inf(16, 0, 16), INF);
        assert_eq!(sum_inf(0, 15, 16), 15);
    }
}
