/// Defines the directory where the model result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/effmed/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/effmed/test";

/// Defines the default density of the isotropic background rock (kg/m³)
pub const DEFAULT_DENSITY: f64 = 2500.0;

/// Defines the default P-wave velocity of the isotropic background rock (m/s)
pub const DEFAULT_VP: f64 = 3231.0;

/// Defines the default S-wave velocity of the isotropic background rock (m/s)
pub const DEFAULT_VS: f64 = 1844.0;
