use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use serde::Serialize;
use slog::{debug, info, o, Logger};
use thiserror::Error;

use crate::config::BoardConfig;
use crate::resource::{Resource, Terrain};
use crate::topology::{Topology, TopologyError};

/// How many faces get each kind of terrain.
pub static TERRAIN_COUNTS: [(Terrain, usize); 6] = [
    (Terrain::Producing(Resource::Lumber), 6),
    (Terrain::Producing(Resource::Brick), 6),
    (Terrain::Producing(Resource::Wool), 6),
    (Terrain::Producing(Resource::Grain), 6),
    (Terrain::Producing(Resource::Ore), 6),
    (Terrain::Desert, 2),
];

/// Dice numbers handed out to the producing faces. Bunched up
/// around the most likely rolls, like the dice themselves.
#[rustfmt::skip]
pub static NUMBER_TOKENS: [u8; 30] = [
    2,
    3, 3,
    4, 4, 4,
    5, 5, 5,
    6, 6, 6, 6,
    7, 7, 7, 7,
    8, 8, 8, 8,
    9, 9, 9,
    10, 10, 10,
    11, 11,
    12,
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error(transparent)]
    Topology(#[from] TopologyError),
    #[error("board has {faces} faces but {tiles} terrain tiles")]
    TileCount { faces: usize, tiles: usize },
    #[error("board has {producing} producing faces but {tokens} number tokens")]
    NumberCount { producing: usize, tokens: usize },
}

/// What's printed on one face of the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Tile {
    pub terrain: Terrain,
    /// Dice total that makes this face produce; deserts have none.
    pub number: Option<u8>,
}

/// A generated board: the shared topology, plus a tile for every face.
///
/// Deterministic given the topology and seed.
#[derive(Clone, Debug)]
pub struct Board {
    topology: Arc<Topology>,
    tiles: Vec<Tile>,
    seed: u64,
}

impl Board {
    /// Build the topology described by `config` and lay out a board on it.
    pub fn from_config(config: &BoardConfig, parent_log: &Logger) -> Result<Board, BoardError> {
        let topology = Topology::from_icosahedron(config.topology, parent_log)?;
        Board::generate(Arc::new(topology), config.seed, parent_log)
    }

    /// Shuffle terrain and number tokens onto the faces of `topology`.
    pub fn generate(
        topology: Arc<Topology>,
        seed: u64,
        parent_log: &Logger,
    ) -> Result<Board, BoardError> {
        let log = parent_log.new(o!("board_seed" => seed));
        let faces = topology.faces().len();

        let mut terrains: Vec<Terrain> = TERRAIN_COUNTS
            .iter()
            .flat_map(|&(terrain, count)| std::iter::repeat(terrain).take(count))
            .collect();
        if terrains.len() != faces {
            return Err(BoardError::TileCount {
                faces,
                tiles: terrains.len(),
            });
        }
        let producing = terrains
            .iter()
            .filter(|terrain| terrain.resource().is_some())
            .count();
        if producing != NUMBER_TOKENS.len() {
            return Err(BoardError::NumberCount {
                producing,
                tokens: NUMBER_TOKENS.len(),
            });
        }

        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        terrains.shuffle(&mut rng);
        let mut numbers = NUMBER_TOKENS.to_vec();
        numbers.shuffle(&mut rng);
        debug!(log, "Shuffled tiles"; "terrains" => terrains.len(), "numbers" => numbers.len());

        let mut numbers = numbers.into_iter();
        let tiles = terrains
            .into_iter()
            .map(|terrain| Tile {
                terrain,
                number: match terrain {
                    Terrain::Producing(_) => numbers.next(),
                    Terrain::Desert => None,
                },
            })
            .collect();

        info!(log, "Generated board"; "faces" => faces);
        Ok(Board {
            topology,
            tiles,
            seed,
        })
    }

    pub fn topology(&self) -> &Arc<Topology> {
        &self.topology
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, face_index: usize) -> Option<&Tile> {
        self.tiles.get(face_index)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Faces that produce when the dice total `number`.
    pub fn faces_with_number(&self, number: u8) -> impl Iterator<Item = usize> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(move |(_, tile)| tile.number == Some(number))
            .map(|(face_index, _)| face_index)
    }
}
