pub mod to_gbq;
pub mod to_json_schema;
