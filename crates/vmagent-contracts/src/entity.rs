use std::fmt;

use crate::{ContractError, Scalar};

/// Shape a field is declared with in an entity's descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    /// Nested entity, by entity name.
    Nested(&'static str),
    /// Typed list, by item entity name.
    List(&'static str),
}

/// One row of an entity's descriptor table: the wire name and declared shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Read access to a single field of an entity instance.
#[derive(Debug)]
pub enum Slot<'a> {
    Scalar(&'a Scalar),
    Nested(&'a dyn Entity),
    List(&'a dyn ListField),
}

/// Write access to a single field of an entity instance.
#[derive(Debug)]
pub enum SlotMut<'a> {
    Scalar(&'a mut Scalar),
    Nested(&'a mut dyn Entity),
    List(&'a mut dyn ListField),
}

impl SlotMut<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            SlotMut::Scalar(_) => "scalar",
            SlotMut::Nested(_) => "entity",
            SlotMut::List(_) => "list",
        }
    }
}

/// A fixed-shape record participating in inflate/deflate.
///
/// Implementations are generated by [`data_contract!`](crate::data_contract); the
/// descriptor table and both accessor lists must agree on names and order.
pub trait Entity: fmt::Debug {
    fn entity_name(&self) -> &'static str;

    /// Declared fields in declaration order.
    fn schema(&self) -> &'static [FieldSpec];

    fn fields(&self) -> Vec<(&'static str, Slot<'_>)>;

    fn fields_mut(&mut self) -> Vec<(&'static str, SlotMut<'_>)>;

    /// Look up a single field by wire name.
    fn field(&self, name: &str) -> Option<Slot<'_>> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, slot)| slot)
    }
}

/// Type-erased view of a [`TypedList`](crate::TypedList) used by the mapper.
///
/// The item type's name lives in the owning entity's descriptor table
/// ([`FieldKind::List`]).
pub trait ListField: fmt::Debug {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn items(&self) -> Box<dyn Iterator<Item = &dyn Entity> + '_>;

    /// Build a fresh item through the list's factory, let `populate` fill it in and
    /// append it. Nothing is appended when `populate` fails.
    fn append_with(
        &mut self,
        populate: &mut dyn FnMut(&mut dyn Entity) -> Result<(), ContractError>,
    ) -> Result<(), ContractError>;
}
