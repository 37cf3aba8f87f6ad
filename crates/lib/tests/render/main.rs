mod common;
mod compose_tests;
mod perform_tests;
