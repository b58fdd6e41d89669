pub mod domain;
pub mod friendship_use_cases;
pub mod ports;
pub mod services;
