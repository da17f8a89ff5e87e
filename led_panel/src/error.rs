use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    #[error("panel needs at least one tile, got {devices_wide}x{devices_high}")]
    NoDevices { devices_wide: u8, devices_high: u8 },

    #[error("{devices} tiles need {columns} columns, more than the chain can address")]
    ChainTooLong { devices: usize, columns: usize },
}
