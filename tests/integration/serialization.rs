use data_quantity::prelude::*;

use crate::common::init_tracing;

#[test]
fn test_quantity_serializes_as_bits() {
    init_tracing();

    let json = serde_json::to_string(&DataQuantity::new(2.5)).unwrap();
    assert_eq!(json, "2.5");

    let q: DataQuantity = serde_json::from_str("1000.0").unwrap();
    assert_eq!(q.bits(), 1000.0);
}

#[test]
fn test_negative_bits_clamp_on_deserialize() {
    init_tracing();

    let q: DataQuantity = serde_json::from_str("-12.0").unwrap();
    assert_eq!(q.bits(), 0.0);
}

#[test]
fn test_units_serialize_as_tokens() {
    init_tracing();

    assert_eq!(serde_json::to_string(&BitUnit::Megabit).unwrap(), "\"Mbit\"");
    assert_eq!(serde_json::to_string(&DataUnit::Byte(ByteUnit::Kilobyte)).unwrap(), "\"kB\"");

    let unit: DataUnit = serde_json::from_str("\"Gbit\"").unwrap();
    assert_eq!(unit, DataUnit::Bit(BitUnit::Gigabit));
    assert!(serde_json::from_str::<ByteUnit>("\"kb\"").is_err());
}
