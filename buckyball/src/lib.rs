/*!
# Buckyball

A settlement-building board game played on the faces, edges and
vertices of a truncated icosahedron.

The board's shape comes from [`buckyball_topology`], re-exported here
as [`topology`]. On top of that this crate provides:

  - Board generation: terrain and dice numbers shuffled onto the faces
    from a seed.
  - A flat index of every selectable element, and pick resolution that
    turns a ray into the face, edge or vertex it points at.
  - An explicit [`GameState`](game_state::GameState) with build
    commands and dice production.
  - Per-face meshes ready to hand off to a renderer.
*/

#[cfg(test)]
#[macro_use]
extern crate approx;

pub use buckyball_topology as topology;

pub mod board;
pub mod config;
pub mod dice;
pub mod element;
pub mod game_state;
pub mod logging;
pub mod pick;
pub mod render;
pub mod resource;
