use crate::components::{Body, Side};
use crate::field::FieldSpec;

/// Side that scored, if the puck has crossed a goal line
pub fn check_goal(puck: &Body, field: &FieldSpec) -> Option<Side> {
    field.goal_line_crossed(puck.pos.x).map(Side::opponent)
}
