use payfetch_core::{parse_ids_str, PaymentId};

#[test]
fn parses_one_id_per_line() {
    let ids = parse_ids_str("111\n222\n333\n");
    assert_eq!(
        ids,
        vec![
            PaymentId::new("111"),
            PaymentId::new("222"),
            PaymentId::new("333")
        ]
    );
}

#[test]
fn skips_blank_lines_and_comments() {
    let input = "# batch from 2024-03-01\n111\n\n   \n# trailing note\n222\n";
    let ids = parse_ids_str(input);
    assert_eq!(ids, vec![PaymentId::new("111"), PaymentId::new("222")]);
}

#[test]
fn trims_surrounding_whitespace() {
    let ids = parse_ids_str("  111  \n\t222\n");
    assert_eq!(ids, vec![PaymentId::new("111"), PaymentId::new("222")]);
}

#[test]
fn preserves_order_and_duplicates() {
    let ids = parse_ids_str("222\n111\n222\n");
    assert_eq!(
        ids,
        vec![
            PaymentId::new("222"),
            PaymentId::new("111"),
            PaymentId::new("222")
        ]
    );
}

#[test]
fn empty_input_yields_no_ids() {
    assert!(parse_ids_str("").is_empty());
    assert!(parse_ids_str("\n# only comments\n\n").is_empty());
}
