use serde::Deserialize;

///
/// Query parameters of seat modification.
///
/// Values are kept raw so that range and section checks
/// are reported by the service with a proper error body.
///
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatModification {
    pub section: String,
    pub seat_number: i64,
}
