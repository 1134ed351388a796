mod build_tests;
mod cli_tests;
