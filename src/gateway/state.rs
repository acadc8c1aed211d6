use crate::arith::Variant;

/// Gateway shared state (read-only)
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// Numeric mode served by this process
    pub variant: Variant,
}

impl AppState {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }
}
