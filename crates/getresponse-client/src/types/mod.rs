/*
[INPUT]:  GetResponse API schema definitions and serde requirements
[OUTPUT]: Typed enums, query builder and request payloads
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod query;
pub mod requests;

pub use enums::*;
pub use query::QueryParams;
pub use requests::*;
