use crate::{
    CertList, Entity, Extension, FieldKind, FieldSpec, Slot, VmStatus, data_contract,
};

#[test]
fn descriptor_table_lists_fields_in_declaration_order() {
    assert_eq!(
        Extension::SCHEMA,
        &[
            FieldSpec {
                name: "name",
                kind: FieldKind::Scalar
            },
            FieldSpec {
                name: "properties",
                kind: FieldKind::Nested("ExtensionProperties")
            },
            FieldSpec {
                name: "versionUris",
                kind: FieldKind::List("ExtensionVersionUri")
            },
        ]
    );
}

#[test]
fn accessors_agree_with_descriptor_table() {
    let status = VmStatus::new();
    let names: Vec<_> = status.fields().into_iter().map(|(name, _)| name).collect();
    let declared: Vec<_> = status.schema().iter().map(|field| field.name).collect();
    assert_eq!(names, declared);
    assert_eq!(status.entity_name(), "VmStatus");
}

#[test]
fn list_slot_matches_declared_item_type() {
    let certs = CertList::new();
    let Some(Slot::List(list)) = certs.field("certificates") else {
        panic!("certificates should be a list slot");
    };
    assert!(list.is_empty());
    assert_eq!(
        certs.schema()[0].kind,
        FieldKind::List("Cert")
    );
    assert!(certs.field("missing").is_none());
}

data_contract! {
    struct Empty {}
}

#[test]
fn entity_without_fields_deflates_to_empty_mapping() {
    let out = crate::deflate(&Empty::new());
    assert_eq!(out.as_mapping().map(|m| m.len()), Some(0));
}
