//! Domain Layer
//!
//! Entities handed over by the host, the ports through which the host is
//! reached, and the pure services that turn host data into output rows.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
