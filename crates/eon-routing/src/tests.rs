//! Unit tests for the routing core.
//!
//! The graph fixtures are tiny on purpose: each one is built to exercise a
//! specific corner of the dominance machinery, mirroring the situations
//! that break classical Dijkstra when labels stop being totally ordered.

#[cfg(test)]
mod helpers {
    use eon_core::{EdgeId, VertexId};
    use eon_net::{Demand, Graph, GraphBuilder};
    use eon_spectrum::{UnitRange, UnitSet};

    use crate::routing::{NoopProbe, Routing, RoutingConfig};
    use crate::units::AdaptiveUnits;

    pub fn ur(min: u32, max: u32) -> UnitRange {
        UnitRange::new(min, max)
    }

    pub fn su(members: &[(u32, u32)]) -> UnitSet {
        members.iter().map(|&(a, b)| ur(a, b)).collect()
    }

    /// A modulation table so roomy that unit requirements never escalate in
    /// small fixtures.
    pub fn roomy_table() -> AdaptiveUnits {
        AdaptiveUnits::new(100.0)
    }

    pub fn default_routing() -> Routing {
        Routing::new(roomy_table(), RoutingConfig::default()).unwrap()
    }

    /// Build a graph from `(a, b, weight, su)` link specs; `nou` is the
    /// largest `max` of any member.
    pub fn graph(
        vertices: u32,
        links: &[(u32, u32, f64, &[(u32, u32)])],
    ) -> (Graph, Vec<EdgeId>) {
        let mut b = GraphBuilder::new();
        for i in 0..vertices {
            b.add_vertex(format!("n{i}"));
        }
        let mut ids = Vec::new();
        for &(x, y, w, members) in links {
            let e = b.add_link(VertexId(x), VertexId(y), w);
            let s = su(members);
            let nou = s.iter().map(|r| (*r).max()).max().unwrap_or(0);
            b.set_link_units(e, nou.max(3), s);
            ids.push(e);
        }
        (b.build(), ids)
    }

    pub fn demand(src: u32, dst: u32, ncu: u32) -> Demand {
        Demand::new(VertexId(src), VertexId(dst), ncu)
    }

    /// Run one algorithm on a pristine graph.
    pub fn run(
        g: &Graph,
        d: &Demand,
        cu: UnitRange,
        alg: crate::search::Algorithm,
    ) -> Option<crate::search::SpectrumPath> {
        default_routing().search(g, d, cu, alg, &mut NoopProbe)
    }
}

// ── Adaptive units ────────────────────────────────────────────────────────────

#[cfg(test)]
mod adaptive {
    use crate::units::AdaptiveUnits;

    #[test]
    fn staircase_boundaries() {
        // L = 1600 puts the bucket boundaries at 300, 600, 1200, 2400, 4800.
        let au = AdaptiveUnits::new(1600.0);

        assert_eq!(au.units(10, 0.0), Some(10));
        assert_eq!(au.units(10, 300.0), Some(10));
        assert_eq!(au.units(10, 301.0), Some(11));
        assert_eq!(au.units(10, 600.0), Some(11));
        assert_eq!(au.units(10, 601.0), Some(20));
        assert_eq!(au.units(10, 1200.0), Some(20));
        assert_eq!(au.units(10, 1201.0), Some(30));
        assert_eq!(au.units(10, 2400.0), Some(30));
        assert_eq!(au.units(10, 2401.0), Some(40));
        assert_eq!(au.units(10, 4800.0), Some(40));
        assert_eq!(au.units(10, 4801.0), None);
    }

    #[test]
    fn eleven_tenths_rounds_up() {
        let au = AdaptiveUnits::new(1600.0);
        // ⌈11·4/10⌉ = 5, ⌈11·10/10⌉ = 11, ⌈11·1/10⌉ = 2.
        assert_eq!(au.units(4, 400.0), Some(5));
        assert_eq!(au.units(10, 400.0), Some(11));
        assert_eq!(au.units(1, 400.0), Some(2));
    }

    #[test]
    fn reach_is_the_bucket_ceiling() {
        let au = AdaptiveUnits::new(1600.0);

        assert_eq!(au.reach(10, 9), None);
        assert_eq!(au.reach(10, 10), Some(300.0));
        assert_eq!(au.reach(10, 11), Some(600.0));
        assert_eq!(au.reach(10, 19), Some(600.0));
        assert_eq!(au.reach(10, 20), Some(1200.0));
        assert_eq!(au.reach(10, 30), Some(2400.0));
        assert_eq!(au.reach(10, 40), Some(4800.0));
        assert_eq!(au.reach(10, 41), Some(4800.0));
    }

    #[test]
    fn units_at_reach_never_exceeds() {
        let au = AdaptiveUnits::new(1600.0);
        for used in [10, 11, 20, 30, 40] {
            let reach = au.reach(10, used).unwrap();
            assert!(au.units(10, reach).unwrap() <= used);
        }
    }

    #[test]
    fn ncus_enumerates_formats() {
        let tens: Vec<u32> = AdaptiveUnits::ncus(10).into_iter().collect();
        assert_eq!(tens, vec![10, 11, 20, 30, 40]);

        // Collapsing duplicates: ⌈11/10⌉ = 2 = 2·1.
        let ones: Vec<u32> = AdaptiveUnits::ncus(1).into_iter().collect();
        assert_eq!(ones, vec![1, 2, 3, 4]);
    }
}

// ── Labels ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod label {
    use super::helpers::ur;
    use crate::label::Label;
    use eon_core::{EdgeId, VertexId};

    fn l(cost: f64, min: u32, max: u32) -> Label {
        Label::new(cost, ur(min, max), EdgeId(0), VertexId(1))
    }

    #[test]
    fn container_order_is_cost_then_units() {
        assert!(l(1.0, 5, 6) < l(2.0, 0, 9));
        assert!(l(1.0, 0, 2) < l(1.0, 1, 3));
        assert!(l(1.0, 0, 2) < l(1.0, 0, 3));
    }

    #[test]
    fn dominance_needs_both_cost_and_inclusion() {
        // Cheaper and wider: dominates.
        assert!(l(1.0, 0, 4).dominates(&l(2.0, 1, 3)));
        // Equal labels dominate each other.
        assert!(l(1.0, 0, 4).dominates(&l(1.0, 0, 4)));
        // Cheaper but narrower: incomparable.
        assert!(!l(1.0, 0, 2).dominates(&l(2.0, 0, 4)));
        assert!(!l(2.0, 0, 4).dominates(&l(1.0, 0, 2)));
    }

    #[test]
    fn start_label_dominates_itself() {
        let s = Label::start(ur(0, 8), VertexId(0));
        assert!(s.dominates(&s));
        assert_eq!(s.cost(), 0.0);
        assert_eq!(s.edge(), EdgeId::INVALID);
    }
}

// ── Stores ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stores {
    use super::helpers::ur;
    use crate::label::Label;
    use crate::permanent::Permanent;
    use crate::tentative::Tentative;
    use eon_core::{EdgeId, VertexId};

    fn l(cost: f64, min: u32, max: u32, v: u32) -> Label {
        Label::new(cost, ur(min, max), EdgeId(min + max), VertexId(v))
    }

    #[test]
    fn tentative_pops_global_minimum() {
        let mut t = Tentative::new(3);
        t.push(l(5.0, 0, 1, 1));
        t.push(l(2.0, 0, 1, 2));
        t.push(l(4.0, 0, 1, 0));

        assert_eq!(t.len(), 3);
        assert_eq!(t.pop().cost(), 2.0);
        assert_eq!(t.pop().cost(), 4.0);
        assert_eq!(t.pop().cost(), 5.0);
        assert!(t.is_empty());
    }

    #[test]
    fn tentative_front_replacement_updates_index() {
        let mut t = Tentative::new(2);
        t.push(l(5.0, 0, 1, 1));
        // A cheaper label at the same vertex must supersede the queue entry.
        t.push(l(3.0, 2, 4, 1));
        assert_eq!(t.pop().cost(), 3.0);
        assert_eq!(t.pop().cost(), 5.0);
    }

    #[test]
    fn equal_cost_ties_pop_in_first_fit_order() {
        let mut t = Tentative::new(2);
        t.push(l(3.0, 4, 6, 1));
        t.push(l(3.0, 0, 2, 1));
        assert_eq!(t.pop().units(), ur(0, 2));
    }

    #[test]
    fn purge_worse_evicts_dominated_and_repairs_front() {
        let mut t = Tentative::new(2);
        t.push(l(4.0, 1, 2, 1));
        t.push(l(6.0, 2, 3, 1));

        // Cheaper and wider than both: both get purged, the index must
        // follow the new front.
        let j = Label::new(3.0, ur(0, 4), EdgeId(9), VertexId(1));
        t.purge_worse(&j);
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());

        t.push(j);
        assert_eq!(t.pop(), j);
    }

    #[test]
    fn purge_worse_spares_the_incomparable() {
        let mut t = Tentative::new(2);
        t.push(l(2.0, 0, 1, 1)); // cheaper — out of purge range
        t.push(l(5.0, 0, 4, 1)); // wider — incomparable
        t.push(l(5.0, 1, 2, 1)); // dominated

        let j = Label::new(3.0, ur(0, 3), EdgeId(9), VertexId(1));
        t.purge_worse(&j);

        assert_eq!(t.len(), 2);
        assert_eq!(t.pop().cost(), 2.0);
        assert_eq!(t.pop().units(), ur(0, 4));
    }

    #[test]
    fn permanent_dominance_stops_at_higher_cost() {
        let mut p = Permanent::new(2);
        p.push(l(1.0, 0, 2, 1));
        p.push(l(3.0, 0, 4, 1));

        // Dominated by the first member.
        assert!(p.has_better_or_equal(&l(2.0, 0, 1, 1)));
        // Cheaper than everything stored: nothing can dominate it.
        assert!(!p.has_better_or_equal(&l(0.5, 0, 1, 1)));
        // Wider than both at equal cost: incomparable.
        assert!(!p.has_better_or_equal(&Label::new(1.0, ur(0, 5), EdgeId(7), VertexId(1))));
    }
}

// ── Generic search scenarios ──────────────────────────────────────────────────

#[cfg(test)]
mod generic_search {
    use super::helpers::{demand, graph, roomy_table, ur};
    use crate::creator::LabelCreator;
    use crate::dijkstra::dijkstra;
    use crate::label::Label;
    use crate::permanent::Permanent;
    use crate::search;
    use crate::tentative::Tentative;
    use eon_core::VertexId;

    /// Run the driver and hand back the permanent store for inspection.
    fn settle(
        g: &eon_net::Graph,
        d: &eon_net::Demand,
        cu: eon_spectrum::UnitRange,
    ) -> Permanent {
        let mut p = Permanent::new(g.vertex_count());
        let mut t = Tentative::new(g.vertex_count());
        let creator = LabelCreator::new(g, d.ncu, roomy_table(), None);
        let mut peak = 0;
        dijkstra(g, &mut p, &mut t, Label::start(cu, d.src), &creator, d.dst, &mut peak);
        p
    }

    #[test]
    fn single_edge_full_band() {
        // (a) Two nodes, one link, three units free, three requested.
        let (g, e) = graph(2, &[(0, 1, 1.0, &[(0, 3)])]);
        let d = demand(0, 1, 3);
        let (_, r) = search::generic(&g, &d, ur(0, 3), roomy_table(), None);
        let r = r.unwrap();
        assert_eq!(r.units, ur(0, 3));
        assert_eq!(r.edges, vec![e[0]]);
        assert_eq!(g.path_cost(&r.edges), 1.0);
    }

    #[test]
    fn too_few_units_is_no_path() {
        let (g, _) = graph(2, &[(0, 1, 1.0, &[(0, 2)])]);
        let d = demand(0, 1, 3);
        let (_, r) = search::generic(&g, &d, ur(0, 2), roomy_table(), None);
        assert!(r.is_none());
    }

    #[test]
    fn costlier_path_wins_on_spectrum() {
        // (b) The cheap parallel link has incompatible spectrum; the search
        // must take the costlier one to keep a continuous range.
        let (g, e) = graph(
            3,
            &[
                (0, 1, 1.0, &[(0, 2)]), // e1
                (0, 1, 2.0, &[(1, 3)]), // e2
                (1, 2, 1.0, &[(1, 3)]), // e3
            ],
        );
        let d = demand(0, 2, 2);
        let (_, r) = search::generic(&g, &d, ur(0, 3), roomy_table(), None);
        let r = r.unwrap();
        assert_eq!(r.units, ur(1, 3));
        assert_eq!(r.edges, vec![e[1], e[2]]);
        assert_eq!(g.path_cost(&r.edges), 3.0);
    }

    #[test]
    fn worse_parallel_label_is_purged() {
        // (c) Same spectrum both ways: only the cheaper label survives at
        // the middle vertex.
        let (g, e) = graph(
            3,
            &[
                (0, 1, 2.0, &[(0, 1)]), // e1
                (0, 1, 1.0, &[(0, 1)]), // e2
                (1, 2, 2.0, &[(0, 1)]), // e3
            ],
        );
        let d = demand(0, 2, 1);
        let p = settle(&g, &d, ur(0, 3));

        let mid = p.frontier(VertexId(1));
        assert_eq!(mid.len(), 1);
        assert_eq!(mid[0].cost(), 1.0);
        assert_eq!(mid[0].units(), ur(0, 1));
        assert_eq!(mid[0].edge(), e[1]);
    }

    #[test]
    fn incomparable_labels_coexist() {
        // (d) The costlier link offers a wider range: both labels stay, and
        // the result still uses the cheap one.
        let (g, e) = graph(
            3,
            &[
                (0, 1, 2.0, &[(0, 2)]), // e1
                (0, 1, 1.0, &[(0, 1)]), // e2
                (1, 2, 2.0, &[(0, 1)]), // e3
            ],
        );
        let d = demand(0, 2, 1);
        let p = settle(&g, &d, ur(0, 3));

        let mid = p.frontier(VertexId(1));
        assert_eq!(mid.len(), 2);
        assert_eq!((mid[0].cost(), mid[0].edge()), (1.0, e[1]));
        assert_eq!((mid[1].cost(), mid[1].edge()), (2.0, e[0]));

        let (_, r) = search::generic(&g, &d, ur(0, 3), roomy_table(), None);
        let r = r.unwrap();
        assert_eq!(r.units, ur(0, 1));
        assert_eq!(r.edges, vec![e[1], e[2]]);
    }

    #[test]
    fn dominated_parallel_edge_never_enters() {
        // (e) Two parallel links straight to the destination; the worse one
        // is rejected by the dominance check, not purged later.
        let (g, e) = graph(
            2,
            &[
                (0, 1, 1.0, &[(0, 1)]), // e1
                (0, 1, 2.0, &[(0, 1)]), // e2
            ],
        );
        let d = demand(0, 1, 1);
        let p = settle(&g, &d, ur(0, 3));

        let dst = p.frontier(VertexId(1));
        assert_eq!(dst.len(), 1);
        assert_eq!(dst[0].edge(), e[0]);
        assert_eq!(dst[0].cost(), 1.0);
    }

    #[test]
    fn empty_spectrum_blocks_the_only_link() {
        // (f) A link with no free units cannot be crossed.
        let (g, _) = graph(2, &[(0, 1, 1.0, &[])]);
        let d = demand(0, 1, 1);
        let (_, r) = search::generic(&g, &d, ur(0, 3), roomy_table(), None);
        assert!(r.is_none());
    }

    #[test]
    fn permanent_frontiers_are_antichains() {
        let (g, _) = graph(
            4,
            &[
                (0, 1, 1.0, &[(0, 2)]),
                (0, 1, 2.0, &[(2, 5)]),
                (1, 2, 1.0, &[(0, 5)]),
                (0, 2, 5.0, &[(0, 5)]),
                (2, 3, 1.0, &[(0, 5)]),
            ],
        );
        let d = demand(0, 3, 1);
        let p = settle(&g, &d, ur(0, 5));

        for v in g.vertices() {
            let ls = p.frontier(v);
            // Costs never decrease along a frontier.
            for w in ls.windows(2) {
                assert!(w[0].cost() <= w[1].cost());
            }
            // No member dominates another.
            for (i, a) in ls.iter().enumerate() {
                for (j, b) in ls.iter().enumerate() {
                    if i != j {
                        assert!(!a.dominates(b), "{a} dominates {b} at {v}");
                    }
                }
            }
        }
    }

    #[test]
    fn first_fit_truncates_wide_fragments() {
        // Requested 1 unit on a band of 8: the assigned range must be the
        // lowest single unit, not the whole fragment.
        let (g, _) = graph(2, &[(0, 1, 1.0, &[(0, 8)])]);
        let d = demand(0, 1, 1);
        let (_, r) = search::generic(&g, &d, ur(0, 8), roomy_table(), None);
        assert_eq!(r.unwrap().units, ur(0, 1));
    }

    #[test]
    fn modulation_widens_long_paths() {
        // L = 8: a two-hop path of cost 2 lands in the 2/8 ≤ 3/8 bucket,
        // so 1 requested unit needs ⌈11/10⌉ = 2 units.
        let au = crate::units::AdaptiveUnits::new(8.0);
        let (g, _) = graph(
            3,
            &[(0, 1, 1.0, &[(0, 4)]), (1, 2, 1.0, &[(0, 4)])],
        );
        let d = demand(0, 2, 1);
        let (_, r) = search::generic(&g, &d, ur(0, 4), au, None);
        let r = r.unwrap();
        assert_eq!(r.units.count(), 2);
        assert_eq!(r.units, ur(0, 2));
    }

    #[test]
    fn beyond_reach_is_no_path() {
        // L = 1: cost 4 is past the last bucket (3·L) for any demand.
        let au = crate::units::AdaptiveUnits::new(1.0);
        let (g, _) = graph(2, &[(0, 1, 4.0, &[(0, 8)])]);
        let d = demand(0, 1, 1);
        let (_, r) = search::generic(&g, &d, ur(0, 8), au, None);
        assert!(r.is_none());
    }
}

// ── Cross-check agreement ─────────────────────────────────────────────────────

#[cfg(test)]
mod agreement {
    use super::helpers::{demand, graph, run, ur};
    use crate::search::Algorithm;

    const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::Parallel,
        Algorithm::BruteForce,
        Algorithm::YenKsp,
    ];

    /// Every algorithm must agree on existence, assigned width, and cost.
    fn assert_agreement(g: &eon_net::Graph, d: &eon_net::Demand, cu: eon_spectrum::UnitRange) {
        let reference = run(g, d, cu, Algorithm::Dijkstra);
        for alg in ALL {
            let other = run(g, d, cu, alg);
            match (&reference, &other) {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    assert_eq!(a.units.count(), b.units.count(), "{alg} width differs");
                    assert_eq!(
                        g.path_cost(&a.edges),
                        g.path_cost(&b.edges),
                        "{alg} cost differs"
                    );
                }
                _ => panic!("{alg} disagrees on existence: {reference:?} vs {other:?}"),
            }
        }
    }

    #[test]
    fn agreement_on_spectrum_detours() {
        let (g, _) = graph(
            3,
            &[
                (0, 1, 1.0, &[(0, 2)]),
                (0, 1, 2.0, &[(1, 3)]),
                (1, 2, 1.0, &[(1, 3)]),
            ],
        );
        assert_agreement(&g, &demand(0, 2, 2), ur(0, 3));
        assert_agreement(&g, &demand(0, 2, 1), ur(0, 3));
        assert_agreement(&g, &demand(0, 2, 3), ur(0, 3));
    }

    #[test]
    fn agreement_on_fragmented_ring() {
        // A ring whose links have punched-out spectra; routes must thread
        // through the common fragments.
        let (g, _) = graph(
            4,
            &[
                (0, 1, 1.0, &[(0, 3), (5, 8)]),
                (1, 2, 1.0, &[(1, 4), (6, 8)]),
                (2, 3, 1.0, &[(0, 2), (5, 7)]),
                (3, 0, 1.0, &[(0, 8)]),
                (0, 2, 2.5, &[(2, 6)]),
            ],
        );
        for (s, t) in [(0, 2), (1, 3), (2, 0), (3, 1)] {
            for ncu in 1..=3 {
                assert_agreement(&g, &demand(s, t, ncu), ur(0, 8));
            }
        }
    }

    #[test]
    fn agreement_on_infeasible_demands() {
        let (g, _) = graph(2, &[(0, 1, 1.0, &[(0, 2)])]);
        // More units than any link carries.
        assert_agreement(&g, &demand(0, 1, 5), ur(0, 2));
    }
}

// ── Facade ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod facade {
    use std::collections::BTreeSet;

    use super::helpers::{demand, graph, roomy_table, su, ur};
    use crate::error::RoutingError;
    use crate::routing::{Routing, RoutingConfig};
    use crate::search::Algorithm;
    use crate::select::SpectrumSelection;

    #[test]
    fn set_up_commits_and_tear_down_restores() {
        let (mut g, e) = graph(
            3,
            &[(0, 1, 1.0, &[(0, 4)]), (1, 2, 1.0, &[(0, 4)])],
        );
        let before: Vec<_> = g.edges().map(|e| g.unit_set(e).clone()).collect();

        let routing = Routing::new(roomy_table(), RoutingConfig::default()).unwrap();
        let d = demand(0, 2, 2);
        let p = routing.set_up(&mut g, &d).unwrap().unwrap();

        assert_eq!(p.units, ur(0, 2));
        assert_eq!(p.edges, vec![e[0], e[1]]);
        // Committed: the range is gone from both links.
        for &pe in &p.edges {
            assert_eq!(*g.unit_set(pe), su(&[(2, 4)]));
        }

        Routing::tear_down(&mut g, &p);
        let after: Vec<_> = g.edges().map(|e| g.unit_set(e).clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn second_demand_sees_the_commit() {
        let (mut g, _) = graph(2, &[(0, 1, 1.0, &[(0, 2)])]);
        let routing = Routing::new(roomy_table(), RoutingConfig::default()).unwrap();

        let first = routing.set_up(&mut g, &demand(0, 1, 2)).unwrap();
        assert!(first.is_some());
        // The band is exhausted now.
        let second = routing.set_up(&mut g, &demand(0, 1, 1)).unwrap();
        assert!(second.is_none());
    }

    #[test]
    fn no_path_leaves_graph_unchanged() {
        let (mut g, _) = graph(2, &[(0, 1, 1.0, &[])]);
        let before: Vec<_> = g.edges().map(|e| g.unit_set(e).clone()).collect();

        let routing = Routing::new(roomy_table(), RoutingConfig::default()).unwrap();
        let r = routing.set_up(&mut g, &demand(0, 1, 1)).unwrap();
        assert!(r.is_none());

        let after: Vec<_> = g.edges().map(|e| g.unit_set(e).clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn invalid_demands_are_rejected() {
        let (mut g, _) = graph(2, &[(0, 1, 1.0, &[(0, 2)])]);
        let routing = Routing::new(roomy_table(), RoutingConfig::default()).unwrap();

        let same = demand(0, 0, 1);
        assert!(matches!(
            routing.set_up(&mut g, &same),
            Err(RoutingError::InvalidDemand(_))
        ));

        let zero = demand(0, 1, 0);
        assert!(matches!(
            routing.set_up(&mut g, &zero),
            Err(RoutingError::InvalidDemand(_))
        ));
    }

    #[test]
    fn unimplemented_selections_fail_at_configuration() {
        for selection in [SpectrumSelection::Fittest, SpectrumSelection::Random] {
            let config = RoutingConfig { selection, ..RoutingConfig::default() };
            assert!(matches!(
                Routing::new(roomy_table(), config),
                Err(RoutingError::UnimplementedSelection(_))
            ));
        }
    }

    #[test]
    fn zero_k_fails_at_configuration() {
        let config = RoutingConfig { k: Some(0), ..RoutingConfig::default() };
        assert!(matches!(
            Routing::new(roomy_table(), config),
            Err(RoutingError::Config(_))
        ));
    }

    #[test]
    fn cross_checked_set_up_succeeds_when_algorithms_agree() {
        let (mut g, _) = graph(
            4,
            &[
                (0, 1, 1.0, &[(0, 3), (5, 8)]),
                (1, 2, 1.0, &[(1, 4), (6, 8)]),
                (2, 3, 1.0, &[(0, 2), (5, 7)]),
                (3, 0, 1.0, &[(0, 8)]),
            ],
        );
        let config = RoutingConfig {
            cross_check: BTreeSet::from([
                Algorithm::Parallel,
                Algorithm::BruteForce,
                Algorithm::YenKsp,
            ]),
            ..RoutingConfig::default()
        };
        let routing = Routing::new(roomy_table(), config).unwrap();

        // A mismatch would abort the process and fail the test run.
        for (s, t, ncu) in [(0, 2, 2), (1, 3, 1), (2, 0, 2)] {
            let _ = routing.set_up(&mut g, &demand(s, t, ncu)).unwrap();
        }
    }

    #[test]
    fn spectrum_selection_parses() {
        assert_eq!("first".parse(), Ok(SpectrumSelection::First));
        assert_eq!("fittest".parse(), Ok(SpectrumSelection::Fittest));
        assert_eq!("random".parse(), Ok(SpectrumSelection::Random));
        assert!("best".parse::<SpectrumSelection>().is_err());
    }
}

// ── Yen enumeration ───────────────────────────────────────────────────────────

#[cfg(test)]
mod yen {
    use super::helpers::graph;
    use crate::yen::KShortestPaths;
    use eon_core::VertexId;

    #[test]
    fn paths_come_in_ascending_cost() {
        let (g, _) = graph(
            4,
            &[
                (0, 1, 1.0, &[(0, 4)]),
                (1, 3, 1.0, &[(0, 4)]),
                (0, 2, 1.5, &[(0, 4)]),
                (2, 3, 1.5, &[(0, 4)]),
                (0, 3, 5.0, &[(0, 4)]),
            ],
        );
        let costs: Vec<f64> = KShortestPaths::new(&g, VertexId(0), VertexId(3), None)
            .map(|(c, _)| c)
            .collect();
        assert_eq!(costs, vec![2.0, 3.0, 5.0]);
    }

    #[test]
    fn k_caps_the_enumeration() {
        let (g, _) = graph(
            4,
            &[
                (0, 1, 1.0, &[(0, 4)]),
                (1, 3, 1.0, &[(0, 4)]),
                (0, 2, 1.5, &[(0, 4)]),
                (2, 3, 1.5, &[(0, 4)]),
                (0, 3, 5.0, &[(0, 4)]),
            ],
        );
        let n = KShortestPaths::new(&g, VertexId(0), VertexId(3), Some(2)).count();
        assert_eq!(n, 2);
    }

    #[test]
    fn paths_are_loopless() {
        let (g, _) = graph(
            4,
            &[
                (0, 1, 1.0, &[(0, 4)]),
                (1, 2, 1.0, &[(0, 4)]),
                (2, 3, 1.0, &[(0, 4)]),
                (1, 3, 3.0, &[(0, 4)]),
                (0, 2, 2.0, &[(0, 4)]),
            ],
        );
        for (_, path) in KShortestPaths::new(&g, VertexId(0), VertexId(3), None) {
            let mut seen = vec![VertexId(0)];
            let mut cur = VertexId(0);
            for e in path {
                cur = g.opposite(e, cur);
                assert!(!seen.contains(&cur), "loop through {cur}");
                seen.push(cur);
            }
            assert_eq!(cur, VertexId(3));
        }
    }

    #[test]
    fn parallel_edges_are_distinct_paths() {
        let (g, _) = graph(2, &[(0, 1, 1.0, &[(0, 4)]), (0, 1, 2.0, &[(0, 4)])]);
        let costs: Vec<f64> = KShortestPaths::new(&g, VertexId(0), VertexId(1), None)
            .map(|(c, _)| c)
            .collect();
        assert_eq!(costs, vec![1.0, 2.0]);
    }

    #[test]
    fn unreachable_yields_nothing() {
        let (g, _) = graph(3, &[(0, 1, 1.0, &[(0, 4)])]);
        assert_eq!(KShortestPaths::new(&g, VertexId(0), VertexId(2), None).count(), 0);
    }
}

// ── Scalar search ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod standard {
    use super::helpers::graph;
    use crate::standard::shortest_path_filtered;
    use eon_core::VertexId;

    #[test]
    fn cost_cap_prunes() {
        let (g, _) = graph(
            3,
            &[(0, 1, 1.0, &[(0, 4)]), (1, 2, 1.0, &[(0, 4)])],
        );
        let (_, ok) =
            shortest_path_filtered(&g, VertexId(0), VertexId(2), |_| true, Some(2.0));
        assert_eq!(ok.unwrap().0, 2.0);

        let (_, blocked) =
            shortest_path_filtered(&g, VertexId(0), VertexId(2), |_| true, Some(1.5));
        assert!(blocked.is_none());
    }

    #[test]
    fn filter_reroutes() {
        let (g, e) = graph(
            3,
            &[
                (0, 2, 1.0, &[(0, 4)]), // direct, will be filtered out
                (0, 1, 1.0, &[(0, 4)]),
                (1, 2, 1.0, &[(0, 4)]),
            ],
        );
        let banned = e[0];
        let (_, r) =
            shortest_path_filtered(&g, VertexId(0), VertexId(2), |x| x != banned, None);
        let (cost, path) = r.unwrap();
        assert_eq!(cost, 2.0);
        assert_eq!(path, vec![e[1], e[2]]);
    }
}
