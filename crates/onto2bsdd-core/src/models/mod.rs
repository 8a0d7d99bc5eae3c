mod dictionary;
mod log;
mod report;

pub use dictionary::{
    ClassEntity, ClassStatus, ClassType, DataType, PropertyEntity, PropertyLinkEntity,
    PropertyType, QUANTITY_VALUE_LABEL, RelationEntity, YEAR_LABEL,
};
pub use log::ConversionLogEntry;
pub use report::{ConversionReport, DanglingReference, PruneReport};
