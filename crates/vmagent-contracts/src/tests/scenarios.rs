use serde_json::json;

use super::value;
use crate::{Cert, CertList, Scalar, Value, deflate, inflate, inflate_new};

#[test]
fn partial_cert_keeps_unset_fields() {
    let mut cert = Cert::new();
    inflate(&mut cert, &value(json!({"name": "cert1", "thumbprint": "ABC123"}))).unwrap();

    assert_eq!(cert.name, Scalar::from("cert1"));
    assert_eq!(cert.thumbprint, Scalar::from("ABC123"));
    assert!(cert.certificate_data_uri.is_null());

    let out = deflate(&cert);
    assert_eq!(
        out,
        value(json!({
            "name": "cert1",
            "thumbprint": "ABC123",
            "certificateDataUri": null
        }))
    );
}

#[test]
fn cert_list_preserves_item_order() {
    let certs: CertList =
        inflate_new(&value(json!({"certificates": [{"name": "c1"}, {"name": "c2"}]}))).unwrap();

    assert_eq!(certs.certificates.len(), 2);
    let names: Vec<_> = certs.certificates.iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, vec![Scalar::from("c1"), Scalar::from("c2")]);
    assert!(certs.certificates.iter().all(|c| c.thumbprint.is_null()));
}

#[test]
fn deflate_list_order_matches_append_order() {
    let mut certs = CertList::new();
    for name in ["a", "b", "c"] {
        let mut cert = certs.certificates.new_instance();
        cert.name = name.into();
        certs.certificates.append(cert);
    }

    let out = deflate(&certs);
    let names: Vec<_> = out
        .get("certificates")
        .and_then(Value::as_sequence)
        .unwrap()
        .iter()
        .map(|item| item.get("name").cloned().unwrap())
        .collect();
    assert_eq!(names, vec![Value::from("a"), Value::from("b"), Value::from("c")]);

    let again: CertList = inflate_new(&out).unwrap();
    assert_eq!(again, certs);
}

#[test]
fn deflate_does_not_alias_source() {
    let mut cert = Cert::new();
    cert.name = "before".into();
    let out = deflate(&cert);
    cert.name = "after".into();
    assert_eq!(out.get("name"), Some(&Value::from("before")));
}
