//! Decision heuristics.

pub mod vsids;

use partial_ref::{partial, PartialRef};

use crate::context::{AssignmentP, Context, ImplGraphP, TrailP, VsidsP};
use crate::lit::{Lit, Var};
use crate::prop::{enqueue_assignment, Reason};

/// Make a variable available for decisions again.
///
/// Called when backtracking unassigns a variable.
pub fn make_available(mut ctx: partial!(Context, mut VsidsP), var: Var) {
    ctx.part_mut(VsidsP).make_available(var);
}

/// Make a decision and enqueue it.
///
/// Picks the unassigned variable with the highest VSIDS activity. The heap can still contain
/// variables that were assigned by propagation rather than by a prior decision, so entries are
/// popped and discarded until an actually unassigned one turns up.
///
/// The decision's polarity defaults to false (negative) unless the variable was previously
/// assigned, in which case the last value it held is restored (phase saving).
///
/// Returns `false` if no decision was made because all variables are assigned.
pub fn make_decision(
    mut ctx: partial!(Context, mut AssignmentP, mut ImplGraphP, mut TrailP, mut VsidsP),
) -> bool {
    loop {
        let var = match ctx.part_mut(VsidsP).next() {
            Some(var) => var,
            None => return false,
        };

        if ctx.part(AssignmentP).var_value(var).is_some() {
            continue;
        }

        let polarity = ctx.part(AssignmentP).last_var_value(var);
        let decision = Lit::from_var(var, polarity);

        ctx.part_mut(TrailP).new_decision_level();

        enqueue_assignment(ctx.borrow(), decision, Reason::Unit);

        return true;
    }
}
