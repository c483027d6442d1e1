
mod service_tests;
