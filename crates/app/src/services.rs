//! Application services (driving ports).

pub mod directory_service;
