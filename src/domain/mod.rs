// Domain layer: the numeral symbol table, conversion records and ports.
// Nothing here depends on configuration or logging.

pub mod model;
pub mod ports;
