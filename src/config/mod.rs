//! Configuration system
//!
//! - `macros`: the `config_struct!` macro
//! - `schemas`: `GasStationConfig` and its defaults
//! - `utils`: TOML loading and the global instance

pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{GasStationConfig, ETH_GAS_STATION_URL};
pub use utils::{
    get_config_clone, init_config, is_config_initialized, load_config_from_path, CONFIG,
    CONFIG_FILE_PATH,
};
