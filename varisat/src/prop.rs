//! Unit propagation.
pub mod assignment;
mod binary;
pub mod graph;
mod long;
pub mod watch;

pub use assignment::{backtrack, enqueue_assignment, restart, Assignment, Trail};
pub use graph::{Conflict, ImplGraph, ImplNode, Reason};
pub use watch::{Watch, Watchlists};

use partial_ref::{partial, PartialRef};

use crate::context::{
    AssignmentP, BinaryClausesP, ClauseAllocP, Context, ImplGraphP, TrailP, WatchlistsP,
};
use binary::propagate_binary;
use long::propagate_long;

/// Propagate all consequences of the literals currently queued on the trail.
///
/// This is the BCP fixed-point loop from the solver driver: each newly assigned literal is
/// dequeued and both its binary and long watch lists are scanned. Returns `Ok(())` once the
/// queue is empty and `Err` with the conflicting clause as soon as one watch list scan finds one.
pub fn propagate(
    mut ctx: partial!(
        Context,
        mut AssignmentP,
        mut BinaryClausesP,
        mut ClauseAllocP,
        mut ImplGraphP,
        mut TrailP,
        mut WatchlistsP,
    ),
) -> Result<(), Conflict> {
    while let Some(lit) = ctx.part_mut(TrailP).pop_queue() {
        propagate_binary(ctx.borrow(), lit)?;
        propagate_long(ctx.borrow(), lit)?;
    }
    Ok(())
}
