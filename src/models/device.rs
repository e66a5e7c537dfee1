use serde::Serialize;

/// Form sent to change the front panel brightness.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRequest {
    /// 0 (off) to 100.
    pub luminosity: u8,
}
