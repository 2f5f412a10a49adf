//! Everything that changes over the course of a game.
//!
//! A `GameState` only ever changes through its command methods. Each
//! command checks everything it needs before touching anything, so a
//! command that fails leaves the state exactly as it was.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use slog::{debug, info, o, Logger};
use thiserror::Error;

use crate::board::Board;
use crate::dice::DiceRoll;
use crate::resource::{city_cost, road_cost, settlement_cost, Resource, ResourceCounts, RESOURCES};
use crate::topology::{EdgeKey, Topology};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("there is no edge between vertices {0:?}")]
    UnknownEdge(EdgeKey),
    #[error("there is no vertex {0}")]
    UnknownVertex(usize),
    #[error("there is already a road on {0:?}")]
    RoadExists(EdgeKey),
    #[error("vertex {0} is already built on")]
    VertexOccupied(usize),
    #[error("vertex {vertex} is next to a building at vertex {neighbor}")]
    TooCloseToBuilding { vertex: usize, neighbor: usize },
    #[error("vertex {0} has no settlement to upgrade")]
    NoSettlement(usize),
    #[error("vertex {0} is already a city")]
    AlreadyCity(usize),
    #[error("need {needed} {resource} but only have {available}")]
    Insufficient {
        resource: Resource,
        needed: u32,
        available: u32,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum Building {
    Settlement,
    City,
}

impl Building {
    /// How much a building collects from each neighbouring face that produces.
    pub fn yield_per_roll(self) -> u32 {
        match self {
            Building::Settlement => 1,
            Building::City => 2,
        }
    }
}

pub struct GameStateBuilder {
    resources: ResourceCounts,
    log: Option<Logger>,
}

impl GameStateBuilder {
    pub fn new() -> GameStateBuilder {
        GameStateBuilder {
            resources: ResourceCounts::default(),
            log: None,
        }
    }

    pub fn with_resources(mut self, resources: ResourceCounts) -> Self {
        self.resources = resources;
        self
    }

    pub fn with_logger(mut self, parent_log: &Logger) -> Self {
        self.log = Some(parent_log.new(o!("system" => "game_state")));
        self
    }

    pub fn build(self) -> GameState {
        let log = self
            .log
            .unwrap_or_else(|| Logger::root(slog::Discard, o!()));
        info!(log, "Starting game"; "resources" => self.resources.total());
        GameState {
            ledger: self.resources,
            roads: BTreeSet::new(),
            buildings: BTreeMap::new(),
            log,
        }
    }
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        GameStateBuilder::new()
    }
}

#[derive(Debug, Serialize)]
pub struct GameState {
    ledger: ResourceCounts,
    roads: BTreeSet<EdgeKey>,
    buildings: BTreeMap<usize, Building>,
    #[serde(skip)]
    log: Logger,
}

impl GameState {
    pub fn ledger(&self) -> &ResourceCounts {
        &self.ledger
    }

    pub fn roads(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.roads.iter().cloned()
    }

    pub fn has_road(&self, key: EdgeKey) -> bool {
        self.roads.contains(&key)
    }

    pub fn building(&self, vertex: usize) -> Option<Building> {
        self.buildings.get(&vertex).cloned()
    }

    pub fn buildings(&self) -> impl Iterator<Item = (usize, Building)> + '_ {
        self.buildings.iter().map(|(&vertex, &building)| (vertex, building))
    }

    pub fn build_road(&mut self, topology: &Topology, key: EdgeKey) -> Result<(), BuildError> {
        let result = self.try_build_road(topology, key);
        self.log_rejection("road", &result);
        result
    }

    pub fn build_settlement(
        &mut self,
        topology: &Topology,
        vertex: usize,
    ) -> Result<(), BuildError> {
        let result = self.try_build_settlement(topology, vertex);
        self.log_rejection("settlement", &result);
        result
    }

    pub fn upgrade_to_city(
        &mut self,
        topology: &Topology,
        vertex: usize,
    ) -> Result<(), BuildError> {
        let result = self.try_upgrade_to_city(topology, vertex);
        self.log_rejection("city", &result);
        result
    }

    fn log_rejection(&self, command: &str, result: &Result<(), BuildError>) {
        if let Err(e) = result {
            debug!(self.log, "Rejected build"; "command" => command, "reason" => %e);
        }
    }

    fn try_build_road(&mut self, topology: &Topology, key: EdgeKey) -> Result<(), BuildError> {
        if topology.edge_index(key).is_none() {
            return Err(BuildError::UnknownEdge(key));
        }
        if self.roads.contains(&key) {
            return Err(BuildError::RoadExists(key));
        }
        self.spend(&road_cost())?;
        self.roads.insert(key);
        debug!(self.log, "Built road"; "a" => key.a(), "b" => key.b());
        Ok(())
    }

    fn try_build_settlement(
        &mut self,
        topology: &Topology,
        vertex: usize,
    ) -> Result<(), BuildError> {
        if vertex >= topology.vertices().len() {
            return Err(BuildError::UnknownVertex(vertex));
        }
        if self.buildings.contains_key(&vertex) {
            return Err(BuildError::VertexOccupied(vertex));
        }
        if let Some(neighbor) = topology
            .vertex_neighbors(vertex)
            .find(|neighbor| self.buildings.contains_key(neighbor))
        {
            return Err(BuildError::TooCloseToBuilding { vertex, neighbor });
        }
        self.spend(&settlement_cost())?;
        self.buildings.insert(vertex, Building::Settlement);
        debug!(self.log, "Built settlement"; "vertex" => vertex);
        Ok(())
    }

    fn try_upgrade_to_city(
        &mut self,
        topology: &Topology,
        vertex: usize,
    ) -> Result<(), BuildError> {
        if vertex >= topology.vertices().len() {
            return Err(BuildError::UnknownVertex(vertex));
        }
        match self.buildings.get(&vertex) {
            None => return Err(BuildError::NoSettlement(vertex)),
            Some(Building::City) => return Err(BuildError::AlreadyCity(vertex)),
            Some(Building::Settlement) => {}
        }
        self.spend(&city_cost())?;
        self.buildings.insert(vertex, Building::City);
        debug!(self.log, "Upgraded to city"; "vertex" => vertex);
        Ok(())
    }

    /// Credit production for every face showing the rolled number,
    /// and return what was produced.
    pub fn collect(&mut self, board: &Board, roll: DiceRoll) -> ResourceCounts {
        let mut produced = ResourceCounts::default();
        for face_index in board.faces_with_number(roll.total()) {
            let resource = match board.tile(face_index).and_then(|tile| tile.terrain.resource()) {
                Some(resource) => resource,
                None => continue,
            };
            let face = &board.topology().faces()[face_index];
            let amount: u32 = face
                .boundary()
                .iter()
                .filter_map(|vertex| self.buildings.get(vertex))
                .map(|building| building.yield_per_roll())
                .sum();
            *produced.get_mut(resource) += amount;
        }
        for &resource in RESOURCES.iter() {
            *self.ledger.get_mut(resource) += produced.get(resource);
        }
        debug!(
            self.log, "Collected";
            "roll" => roll.total(),
            "produced" => produced.total()
        );
        produced
    }

    // Deduct `cost`, or fail without deducting anything.
    fn spend(&mut self, cost: &ResourceCounts) -> Result<(), BuildError> {
        if let Some(resource) = self.ledger.first_shortfall(cost) {
            return Err(BuildError::Insufficient {
                resource,
                needed: cost.get(resource),
                available: self.ledger.get(resource),
            });
        }
        for &resource in RESOURCES.iter() {
            *self.ledger.get_mut(resource) -= cost.get(resource);
        }
        Ok(())
    }
}
