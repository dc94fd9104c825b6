//! Library surface of the kiosk binary (the demo script), exposed so
//! black-box tests can run it against an in-memory writer.

pub mod demo;
