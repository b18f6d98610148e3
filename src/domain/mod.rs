// Domain layer: timetable models and ports. No I/O here.

pub mod model;
pub mod ports;
