pub mod utils;

mod export_tests;
mod region_tests;
