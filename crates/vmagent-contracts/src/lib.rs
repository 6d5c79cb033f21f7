//! Data contracts exchanged with the control plane, plus the generic mapper that
//! moves them in and out of untyped nested values.

pub mod entities;
mod entity;
mod error;
mod macros;
pub mod mapper;
mod typed_list;

pub use entities::*;
pub use entity::{Entity, FieldKind, FieldSpec, ListField, Slot, SlotMut};
pub use error::ContractError;
pub use mapper::{InflateOptions, deflate, inflate, inflate_new, inflate_with};
pub use typed_list::TypedList;
pub use vmagent_value::{Mapping, Scalar, Value};

/// Field storage types named by `data_contract!` declarations.
#[doc(hidden)]
pub mod field_types {
    pub use vmagent_value::Scalar;

    pub type Nested<T> = T;
    pub type List<T> = crate::TypedList<T>;
}

#[cfg(test)]
mod tests;
