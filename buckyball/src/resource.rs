use std::fmt;

use serde::{Deserialize, Serialize};

/// Something a player can hold in their hand.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub enum Resource {
    Lumber,
    Brick,
    Wool,
    Grain,
    Ore,
}

pub static RESOURCES: [Resource; 5] = [
    Resource::Lumber,
    Resource::Brick,
    Resource::Wool,
    Resource::Grain,
    Resource::Ore,
];

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Resource::Lumber => "lumber",
            Resource::Brick => "brick",
            Resource::Wool => "wool",
            Resource::Grain => "grain",
            Resource::Ore => "ore",
        };
        f.write_str(name)
    }
}

/// What a face of the board is covered in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Producing(Resource),
    Desert,
}

impl Terrain {
    pub fn resource(self) -> Option<Resource> {
        match self {
            Terrain::Producing(resource) => Some(resource),
            Terrain::Desert => None,
        }
    }
}

/// A count of each kind of resource.
///
/// Used both for what a player holds and for what something costs.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceCounts {
    pub lumber: u32,
    pub brick: u32,
    pub wool: u32,
    pub grain: u32,
    pub ore: u32,
}

impl ResourceCounts {
    pub fn new() -> ResourceCounts {
        ResourceCounts::default()
    }

    pub fn with(mut self, resource: Resource, amount: u32) -> ResourceCounts {
        *self.get_mut(resource) = amount;
        self
    }

    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Lumber => self.lumber,
            Resource::Brick => self.brick,
            Resource::Wool => self.wool,
            Resource::Grain => self.grain,
            Resource::Ore => self.ore,
        }
    }

    pub fn get_mut(&mut self, resource: Resource) -> &mut u32 {
        match resource {
            Resource::Lumber => &mut self.lumber,
            Resource::Brick => &mut self.brick,
            Resource::Wool => &mut self.wool,
            Resource::Grain => &mut self.grain,
            Resource::Ore => &mut self.ore,
        }
    }

    pub fn total(&self) -> u32 {
        RESOURCES.iter().map(|&resource| self.get(resource)).sum()
    }

    /// The first resource we have less of than `other`, if any.
    pub fn first_shortfall(&self, other: &ResourceCounts) -> Option<Resource> {
        RESOURCES
            .iter()
            .cloned()
            .find(|&resource| self.get(resource) < other.get(resource))
    }
}

/// What it costs to build a road.
pub fn road_cost() -> ResourceCounts {
    ResourceCounts::new()
        .with(Resource::Lumber, 1)
        .with(Resource::Brick, 1)
}

/// What it costs to build a settlement.
pub fn settlement_cost() -> ResourceCounts {
    ResourceCounts::new()
        .with(Resource::Lumber, 1)
        .with(Resource::Brick, 1)
        .with(Resource::Wool, 1)
        .with(Resource::Grain, 1)
}

/// What it costs to upgrade a settlement to a city.
pub fn city_cost() -> ResourceCounts {
    ResourceCounts::new()
        .with(Resource::Grain, 2)
        .with(Resource::Ore, 3)
}
