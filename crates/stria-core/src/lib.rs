//! Core types for the Stria barcode toolbox engine.
//!
//! This crate provides the symbology enumeration, validated symbol values,
//! and the generated-code value object shared by the generator and the
//! batch orchestration service.

pub mod code;
pub mod code_id;
pub mod error;
pub mod symbology;
pub mod value;

pub use code::GeneratedCode;
pub use code_id::CodeId;
pub use error::CoreError;
pub use symbology::Symbology;
pub use value::SymbolValue;
