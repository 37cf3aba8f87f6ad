mod common;
mod plan_tests;
mod render_tests;
mod validate_tests;
