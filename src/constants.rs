// Page wiring for the web frontend.

// Element id of the drawing canvas in index.html
pub const CANVAS_ID: &str = "app-canvas";

// Query parameters read at startup, e.g. `?seed=7&mode=linear&dimensions=5`
pub const PARAM_SEED: &str = "seed";
pub const PARAM_MODE: &str = "mode";
pub const PARAM_DIMENSIONS: &str = "dimensions";
pub const PARAM_STEPS: &str = "steps";
pub const PARAM_DECAY: &str = "decay";
