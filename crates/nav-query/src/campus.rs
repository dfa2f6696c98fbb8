//! The loaded campus: buildings plus pathway graph, queried read-only.

use rustc_hash::FxHashSet;
use tracing::debug;

use nav_core::{NetworkConfig, NodeId};
use nav_spatial::{path_length, Building, DijkstraRouter, MapData, PathGraph, Router};

use crate::lookup::{closest_building, find_building};
use crate::meeting::{Leg, MeetingPlan, Route};
use crate::{QueryError, QueryResult};

/// Immutable campus model answering meeting queries.
///
/// Built once; every query takes `&self` and is independent of the others.
/// Routes never pass through the interior of a building: every building id
/// is forbidden as an intermediate vertex.
pub struct Campus<R = DijkstraRouter> {
    buildings:    Vec<Building>,
    graph:        PathGraph,
    building_ids: FxHashSet<NodeId>,
    router:       R,
}

impl Campus {
    /// Wrap a built graph and its buildings (in lookup order).
    pub fn new(graph: PathGraph, buildings: Vec<Building>) -> Self {
        Self::with_router(graph, buildings, DijkstraRouter)
    }

    /// Build the pathway network from parsed map data.
    pub fn from_map(data: MapData, config: &NetworkConfig) -> QueryResult<Self> {
        let (graph, buildings) = data.into_network(config)?;
        Ok(Self::new(graph, buildings))
    }
}

impl<R: Router<NodeId, f64>> Campus<R> {
    pub fn with_router(graph: PathGraph, buildings: Vec<Building>, router: R) -> Self {
        let building_ids = buildings.iter().map(|b| b.id).collect();
        Self { buildings, graph, building_ids, router }
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn graph(&self) -> &PathGraph {
        &self.graph
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// See [`find_building`].
    pub fn find_building(&self, query: &str) -> Option<&Building> {
        find_building(&self.buildings, query)
    }

    /// Route from building `from` to building `to` that avoids every other
    /// building.
    pub fn route_between(&self, from: NodeId, to: NodeId) -> Leg {
        let path = self.router.route(&self.graph, from, to, &self.building_ids);
        if path.is_empty() {
            return Leg::Unreachable;
        }
        match path_length(&self.graph, &path) {
            Some(miles) => Leg::Found(Route { path, miles }),
            None => {
                debug!(%from, %to, "router returned a path with a missing edge");
                Leg::Unreachable
            }
        }
    }

    /// Resolve both queries, pick the building nearest their midpoint as the
    /// meeting place, and route each person there.
    ///
    /// # Errors
    ///
    /// [`QueryError::PersonNotFound`] if a query matches no building (person 1
    /// is checked first).
    pub fn plan_meeting(&self, person1: &str, person2: &str) -> QueryResult<MeetingPlan> {
        let first = self.find_building(person1).ok_or_else(|| QueryError::PersonNotFound {
            person: 1,
            query:  person1.to_string(),
        })?;
        let second = self.find_building(person2).ok_or_else(|| QueryError::PersonNotFound {
            person: 2,
            query:  person2.to_string(),
        })?;

        let midpoint = first.location.midpoint(second.location);
        // Both lookups succeeded, so the list is non-empty and a closest
        // building always exists.
        let destination = closest_building(&self.buildings, midpoint).unwrap_or(first);
        debug!(
            from = %first.abbr,
            to = %second.abbr,
            meet = %destination.abbr,
            "meeting destination chosen"
        );

        let legs = [
            self.route_between(first.id, destination.id),
            self.route_between(second.id, destination.id),
        ];

        Ok(MeetingPlan {
            origins: [first.clone(), second.clone()],
            midpoint,
            destination: destination.clone(),
            legs,
        })
    }
}
