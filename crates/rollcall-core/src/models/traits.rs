use std::fmt::Display;

/// Types that can be built from a YAML file on disk
pub trait FromYaml: Sized {
    type Error: Display;
    fn from_yaml(file_path: &str) -> Result<Self, Self::Error>;
}

/// Types that can be built from a JSON file on disk
pub trait FromJson: Sized {
    type Error: Display;
    fn from_json(file_path: &str) -> Result<Self, Self::Error>;
}
