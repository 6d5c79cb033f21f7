/// Declare a data contract: a plain struct plus its [`Entity`](crate::Entity)
/// descriptor table and accessors.
///
/// Each field names its storage shape (`Scalar`, `Nested<T>` or `List<T>`) and its
/// wire name:
///
/// ```
/// use vmagent_contracts::{Entity, FieldKind, data_contract};
///
/// data_contract! {
///     pub struct Disk {
///         lun: Scalar => "lun",
///     }
/// }
///
/// data_contract! {
///     pub struct StorageProfile {
///         os_disk: Nested<Disk> => "osDisk",
///         data_disks: List<Disk> => "dataDisks",
///     }
/// }
///
/// let profile = StorageProfile::new();
/// assert_eq!(profile.schema()[1].kind, FieldKind::List("Disk"));
/// ```
#[macro_export]
macro_rules! data_contract {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $kind:ident $(<$item:ty>)? => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $crate::field_types::$kind $(<$item>)?,
            )*
        }

        impl $name {
            pub const SCHEMA: &'static [$crate::FieldSpec] = &[
                $(
                    $crate::FieldSpec {
                        name: $wire,
                        kind: $crate::FieldKind::$kind $((stringify!($item)))?,
                    },
                )*
            ];

            pub fn new() -> Self {
                Self::default()
            }
        }

        impl $crate::Entity for $name {
            fn entity_name(&self) -> &'static str {
                stringify!($name)
            }

            fn schema(&self) -> &'static [$crate::FieldSpec] {
                Self::SCHEMA
            }

            fn fields(&self) -> ::std::vec::Vec<(&'static str, $crate::Slot<'_>)> {
                ::std::vec![$(($wire, $crate::Slot::$kind(&self.$field)),)*]
            }

            fn fields_mut(&mut self) -> ::std::vec::Vec<(&'static str, $crate::SlotMut<'_>)> {
                ::std::vec![$(($wire, $crate::SlotMut::$kind(&mut self.$field)),)*]
            }
        }
    };
}
