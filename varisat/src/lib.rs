//! The varisat SAT solver.

#[macro_use]
extern crate varisat_formula;

pub use varisat_formula::cnf;
pub use varisat_formula::lit;
pub use varisat_dimacs as dimacs;

mod analyze_conflict;
mod binary;
mod cdcl;
mod clause;
mod config;
mod context;
mod decision;
mod glue;
mod load;
mod prop;
mod schedule;
mod solver;
mod state;
mod tmp;

#[cfg(any(test, feature = "internal-testing"))]
mod test;

mod vec_mut_scan;

pub use config::SolverConfig;
pub use solver::{Solver, SolverError};
