use std::time::Duration;

use data_quantity::prelude::*;

use crate::common::init_tracing;

#[test]
fn test_documented_scenarios() {
    init_tracing();

    assert_eq!(DataQuantity::new(-5).bits(), 0.0);
    assert_eq!(DataQuantity::new(0).bits(), 0.0);
    assert_eq!(DataQuantity::new(5).bits(), 5.0);
    assert_eq!(DataQuantity::new(1000).to_string(), "1000 bits");
    assert_eq!(DataQuantity::new(100).describe_as("kbit"), "0.1 kbit");

    assert_eq!(DataQuantity::new(10) / DataQuantity::new(0), None);
    assert_eq!((DataQuantity::new(10) / DataQuantity::new(4)).unwrap().bits(), 2.5);
}

#[test]
fn test_describe_in_every_unit() {
    init_tracing();

    let q = DataQuantity::new(8e15);
    let bit_forms: Vec<String> = BitUnit::ALL.iter().map(|u| q.describe_as(u.symbol())).collect();
    assert_eq!(
        bit_forms,
        ["8000000000000000 bit", "8000000000000 kbit", "8000000000 Mbit", "8000000 Gbit", "8000 Tbit", "8 Pbit"]
    );

    let byte_forms: Vec<String> = ByteUnit::ALL.iter().map(|u| q.describe_as(u.symbol())).collect();
    assert_eq!(byte_forms, ["1000000000000000 B", "1000000000000 kB", "1000000000 MB", "1000000 GB", "1000 TB", "1 PB"]);
}

#[test]
fn test_rate_from_elapsed_time() {
    init_tracing();

    let q = DataQuantity::from_bytes(250_000);
    assert_eq!(q.describe_rate_over(Duration::from_secs(2), "Mbit"), "1 Mbit/s");
    assert_eq!(q.describe_rate_over(Duration::from_secs(2), "kB"), "125 kB/s");
}

#[test]
fn test_arithmetic_never_goes_negative() {
    init_tracing();

    let small = DataQuantity::new(3);
    let large = DataQuantity::new(30);

    assert_eq!((small - large).bits(), 0.0);
    assert_eq!((small - 100).bits(), 0.0);
    assert_eq!((small * -2).bits(), 0.0);
    assert_eq!((large + -100.0).bits(), 0.0);
    assert_eq!(small.div_floor(-1).bits(), 0.0);
}

#[test]
fn test_mixed_expression() {
    init_tracing();

    let header = DataQuantity::from_bytes(20);
    let payload = DataQuantity::from_unit(1.2, "kB").unwrap();
    let packets = 10;

    let total = (header + payload) * packets;
    assert_eq!(total.describe_as("kB"), "12.2 kB");

    let per_packet = (total / packets).unwrap();
    assert_eq!(per_packet, header + payload);
}
