// Configuration module
// Named client profiles for the load test

pub mod profiles;
