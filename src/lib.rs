// #![deny(missing_docs)]

//! Seam carving: shrink an image by repeatedly removing the connected
//! path of pixels with the least Sobel energy, rather than scaling it.

extern crate image;

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod flipper;
pub use flipper::Rotate;

pub mod error;
pub use error::CarveError;

pub mod luma;
pub mod energy;
pub use energy::{calculate_energy, EnergyMap};

pub mod seamfinder;
pub use seamfinder::{accumulate_cost, cost_to_seam, CostMap, Seam, SeamFinder};

pub mod seamcarver;
pub use seamcarver::{remove_vertical_seam, seamcarve, SeamCarver};

pub mod dump;
pub use dump::{compute_cost_map, compute_edge_map, map_to_image};

pub mod codec;
pub use codec::{carve_encoded, grid_from_image, grid_to_image};
