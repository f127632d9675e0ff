pub mod paths;

pub use paths::detect_demo_folder;
