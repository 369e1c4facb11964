//! One module per supported text format, each exposing a single
//! `parse_<fmt>(content: &str) -> Result<Value, DiffError>` function (spec
//! §4.7). These are treated as external collaborators by the diff engine
//! itself — nothing in `engine/` depends on this module.

mod csv;
mod ini;
mod json;
mod toml;
mod xml;
mod yaml;

pub use csv::parse_csv;
pub use ini::parse_ini;
pub use json::parse_json;
pub use toml::parse_toml;
pub use xml::parse_xml;
pub use yaml::parse_yaml;
