// File: src/echo.rs
// Purpose: Copy submitted field values back into the render context

use crate::context::RenderContext;
use crate::descriptor::Record;

/// Assign every bound field's current value to `ctx`, keyed by wire name.
///
/// Excluded fields are skipped. Running it twice on an unchanged record
/// leaves the context as it was after the first run.
pub fn assign_form<R: Record + ?Sized>(record: &R, ctx: &mut RenderContext) {
    for field in record.describe().bound_fields() {
        if let Some(value) = record.field_value(field.identity) {
            ctx.insert(field.wire_name, value);
        }
    }
}
