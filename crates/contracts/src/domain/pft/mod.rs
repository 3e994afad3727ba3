pub mod dataset;
pub mod parameter;

pub use dataset::{CategoryDataset, CategoryRecord, DatasetError};
pub use parameter::{CellText, Parameter, ParameterValue, Primitive};
