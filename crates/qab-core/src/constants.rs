//! Global constants for qab-core

/// Nut kind used when a name reference does not carry one
pub const DEFAULT_NUT_KIND: &str = "hexagon";

/// Bolt kind used when a name reference does not carry one
pub const DEFAULT_BOLT_KIND: &str = "headless";

/// Bolt kind resolved by counterbored holes
pub const SOCKET_HEAD_KIND: &str = "socket_head";

/// Bolt kind resolved by countersunk holes
pub const COUNTERSUNK_KIND: &str = "countersunk";

/// Default extra shaft clearance added to a bolt diameter
pub const DEFAULT_CLEARANCE: f32 = 0.0;

/// Default extra clearance added to a bolt head diameter
pub const DEFAULT_HEAD_CLEARANCE: f32 = 0.1;

/// Default extra pocket depth added to a nut thickness
pub const DEFAULT_HEIGHT_CLEARANCE: f32 = 0.0;

/// Included angle of a metric countersink, in degrees
pub const COUNTERSINK_ANGLE: f32 = 90.0;

/// File name of the nut table inside a catalog directory
pub const NUTS_FILE: &str = "nuts.json";

/// File name of the bolt table inside a catalog directory
pub const BOLTS_FILE: &str = "bolts.json";
