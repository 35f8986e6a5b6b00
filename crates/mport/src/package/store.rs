pub mod yaml;

pub use yaml::YamlPackageStore;
