/// Route handler for GET /api/arcana
///
/// Returns the arcana names in declared order as a JSON array, for
/// populating selects on the fusion page.

use crate::arcana::Arcana;

pub fn handle_list() -> String {
    serde_json::to_string(&Arcana::ALL).unwrap_or_else(|_| "[]".to_string())
}
