use data_quantity::prelude::*;

use crate::common::init_tracing;

#[test]
fn test_documented_scenarios() {
    init_tracing();

    assert_eq!(bits_to_bytes(1000).unwrap(), 125.0);
    assert_eq!(convert_from_bit(10_u64.pow(15), "Pbit").unwrap(), 1.0);
    assert_eq!(convert_bit_to_byte(1000, "GB").unwrap(), 1.25e-7);
}

#[test]
fn test_every_unit_converts_zero_to_zero() {
    init_tracing();

    for unit in BitUnit::ALL {
        assert_eq!(convert_from_bit(0, unit.symbol()), Ok(0.0));
        assert_eq!(convert_to_bit(0, unit.symbol()), Ok(0.0));
    }
    for unit in ByteUnit::ALL {
        assert_eq!(convert_bit_to_byte(0, unit.symbol()), Ok(0.0));
        assert_eq!(convert_byte_to_bit(0, unit.symbol()), Ok(0.0));
    }
}

#[test]
fn test_byte_units_scale_by_powers_of_ten() {
    init_tracing();

    let mut expected = 8.0;
    for unit in ByteUnit::ALL {
        assert_eq!(convert_byte_to_bit(1, unit.symbol()).unwrap(), expected);
        expected *= 1000.0;
    }
}

#[test]
fn test_bit_and_byte_functions_reject_each_others_units() {
    init_tracing();

    assert!(convert_from_bit(8, "B").is_err());
    assert!(convert_to_bit(8, "MB").is_err());
    assert!(convert_bit_to_byte(8, "bit").is_err());
    assert!(convert_byte_to_bit(8, "Gbit").is_err());
}

#[test]
fn test_bytes_and_byte_unit_agree() {
    init_tracing();

    for bits in [1.0, 8.0, 1000.0, 4096.0] {
        assert_eq!(bits_to_bytes(bits).unwrap(), convert_bit_to_byte(bits, "B").unwrap());
        assert_eq!(bytes_to_bits(bits).unwrap(), convert_byte_to_bit(bits, "B").unwrap());
    }
}
