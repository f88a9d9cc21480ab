//! Names of the directly derived (non-indicator) feature columns.
//!
//! These match the training data's column headers.

/// Screen diagonal.
pub const INCHES: &str = "Inches";
/// Memory in GB.
pub const RAM: &str = "Ram";
/// Weight in kg.
pub const WEIGHT: &str = "Weight";
/// CPU line rank.
pub const CPU_LINE: &str = "cpu_line";
/// CPU generation.
pub const CPU_GENERATION: &str = "cpu_generation";
/// CPU suffix rank.
pub const CPU_SUFFIX: &str = "cpu_type_suffix";
/// Base clock in GHz.
pub const CPU_CLOCK: &str = "cpu_clock_speed";
/// Resolution class rank.
pub const RESOLUTION: &str = "resolution_type";
/// Horizontal pixels.
pub const RESOLUTION_WIDTH: &str = "resolution_width";
/// Vertical pixels.
pub const RESOLUTION_HEIGHT: &str = "resolution_height";
/// 0/1 touchscreen flag.
pub const TOUCHSCREEN: &str = "touchscreen";
/// 0/1 IPS flag.
pub const IPS_PANEL: &str = "ips_panel";
/// 0/1 retina flag.
pub const RETINA: &str = "retina_display";
/// GPU model label code.
pub const GPU_MODEL: &str = "gpu_model";
/// HDD total.
pub const HDD: &str = "HDD";
/// SSD total.
pub const SSD: &str = "SSD";
/// Hybrid total.
pub const HYBRID: &str = "Hybrid";
/// Flash total.
pub const FLASH: &str = "Flash_Storage";

/// Every directly derived column.
pub const DERIVED: [&str; 18] = [
    INCHES,
    RAM,
    WEIGHT,
    CPU_LINE,
    CPU_GENERATION,
    CPU_SUFFIX,
    CPU_CLOCK,
    RESOLUTION,
    RESOLUTION_WIDTH,
    RESOLUTION_HEIGHT,
    TOUCHSCREEN,
    IPS_PANEL,
    RETINA,
    GPU_MODEL,
    HDD,
    SSD,
    HYBRID,
    FLASH,
];
