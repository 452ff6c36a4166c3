// route_scorer.rs
//
// Picks the recommended route among the provider's alternatives. The fastest
// route wins; exact duration ties go to the shorter route, and any remaining
// tie goes to the route listed first. Routes keep their input order in the
// output and only the `is_best` flag and color mark the winner.

use crate::shared_data::{AnnotatedRoute, RouteCandidate, RouteColor};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteSelection {
    /// Index (as carried by the candidate) of the winner, if any.
    pub best_route_index: Option<usize>,
    pub routes: Vec<AnnotatedRoute>,
}

impl RouteSelection {
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn best(&self) -> Option<&AnnotatedRoute> {
        self.routes.iter().find(|r| r.is_best)
    }
}

/// Ranking used to pick the winner: well-formed candidates first, then
/// duration, then distance. Uses IEEE total ordering so malformed values
/// never panic.
pub fn compare_candidates(a: &RouteCandidate, b: &RouteCandidate) -> Ordering {
    b.is_well_formed()
        .cmp(&a.is_well_formed())
        .then_with(|| a.duration_min.total_cmp(&b.duration_min))
        .then_with(|| a.distance_km.total_cmp(&b.distance_km))
}

/// Zero-based position of the recommended candidate.
pub fn best_position(candidates: &[RouteCandidate]) -> Option<usize> {
    // min_by keeps the first of several equal minima
    candidates
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| compare_candidates(a, b))
        .map(|(pos, _)| pos)
}

pub fn select_best(candidates: &[RouteCandidate]) -> RouteSelection {
    let Some(best) = best_position(candidates) else {
        log::debug!("No candidate routes supplied");
        return RouteSelection::default();
    };

    let malformed = candidates.iter().filter(|c| !c.is_well_formed()).count();
    if malformed > 0 {
        log::warn!("{} candidate route(s) have negative or non-finite values", malformed);
    }

    let routes: Vec<AnnotatedRoute> = candidates
        .iter()
        .enumerate()
        .map(|(pos, c)| {
            let is_best = pos == best;
            AnnotatedRoute {
                index: c.index,
                distance_km: c.distance_km,
                duration_min: c.duration_min,
                is_best,
                color: if is_best {
                    RouteColor::RECOMMENDED
                } else {
                    RouteColor::for_position(pos)
                },
            }
        })
        .collect();

    log::debug!(
        "[Routes] Route {} recommended out of {} ({:.1} km, {:.0} min)",
        candidates[best].index,
        candidates.len(),
        candidates[best].distance_km,
        candidates[best].duration_min
    );

    RouteSelection {
        best_route_index: Some(candidates[best].index),
        routes,
    }
}
